//! daoforge-analytics crate
//!
//! Fire-and-forget product telemetry. Events are pushed onto a bounded
//! channel and delivered by a background worker; nothing in the wizard
//! ever blocks on delivery.

pub mod tracker;
