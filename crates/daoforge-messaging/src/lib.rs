//! daoforge-messaging crate
//!
//! Client for the off-chain messaging backend. The publish flow uses it to
//! provision a notification channel for a freshly created DAO: a
//! signer-authenticated session handshake followed by a channel-create
//! call. Everything here is best effort; failures are logged by the caller
//! and never reach the user.

pub mod error;
pub mod gateway;
pub mod image;
pub mod provision;
