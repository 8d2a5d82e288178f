use thiserror::Error;

/// Errors raised while creating or using a local wallet.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid mnemonic phrase: {0}")]
    Mnemonic(String),

    #[error("invalid rpc url: {0}")]
    InvalidRpcUrl(String),

    #[error("unknown account class: {0}")]
    UnknownAccountClass(&'static str),

    #[error("signing failed: {0}")]
    Signing(String),
}
