/// Interrupt modals the publish flow can raise instead of proceeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    Wallet,
    Network,
}

/// What a publish request resolved to. Informational; every branch leaves
/// the orchestrator in a consistent state on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Wallet disconnected or without a signer; the wallet modal was opened.
    WalletModalOpened,
    /// Wallet on the wrong network; the network modal was opened.
    NetworkModalOpened,
    /// Preconditions passed; the dialog is open and provisioning launched.
    DialogOpened,
    /// A publish cycle is already running; the request was ignored.
    InFlight,
}
