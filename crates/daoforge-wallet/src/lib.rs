//! daoforge-wallet crate
//!
//! Starknet wallet glue for the daoforge wizard: BIP-39 keypair handling,
//! the JSON-RPC provider/account pair and the snapshot adapter the publish
//! flow reads at decision time.

pub mod adapter;
pub mod crypto;
pub mod error;
pub mod provider;
pub mod signer;
