//! daoforge-logging crate
//!
//! This crate handles the logging functionality for the daoforge project.
//! It provides an AsyncLogger that buffers entries through an mpsc channel
//! into a background flush task, keeps a capped in-memory tail for the UI
//! activity feed and broadcasts entries to live subscribers.

pub mod logger;
