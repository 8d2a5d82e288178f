use thiserror::Error;

/// Failure modes of notification channel provisioning. None of these are
/// ever surfaced to the user; the detached provisioning task logs them and
/// the publish flow proceeds regardless.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("messaging session could not be established")]
    Session,

    #[error("channel creation returned an empty response")]
    EmptyCreation,

    #[error("gateway request failed: {0}")]
    Gateway(#[from] reqwest::Error),
}
