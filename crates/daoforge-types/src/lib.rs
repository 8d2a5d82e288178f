//! daoforge-types crate
//!
//! Shared types for the daoforge wizard: the cross-step DAO draft, the
//! review checklist, the notification channel DTOs and telemetry records.

pub mod channel;
pub mod checklist;
pub mod draft;
pub mod telemetry;
