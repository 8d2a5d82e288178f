//! daoforge-config crate
//!
//! This crate handles the config functionality for the daoforge project.

pub mod error;
pub mod settings;
