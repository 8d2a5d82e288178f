use crate::crypto::keypair::KeyPair;
use crate::error::WalletError;
use crate::provider::StarknetProvider;
use crate::signer::SignerHandle;
use starknet::core::types::Felt;
use starknet::signers::{LocalWallet, SigningKey};
use std::sync::Arc;

/// Wallet state as observed at a single decision point. The publish flow
/// reads one of these at the instant of the publish action and never
/// caches it across an await.
#[derive(Clone, Debug)]
pub struct WalletSnapshot {
    pub connected: bool,
    pub wrong_network: bool,
    pub signer: Option<Arc<SignerHandle>>,
    /// Identity of the RPC endpoint backing the session, for telemetry.
    pub provider_identity: String,
}

/// Owns the wallet session for the wizard and renders it into snapshots.
/// The wizard expects the chain from the draft's blockchain selection; the
/// wallet session may be on another chain, which flags the snapshot.
pub struct WalletAdapter {
    expected_chain_id: Felt,
    rpc_url: String,
    provider: Option<Arc<StarknetProvider>>,
    signer: Option<Arc<SignerHandle>>,
}

impl WalletAdapter {
    pub fn new(expected_chain_id: Felt, rpc_url: String) -> Self {
        Self {
            expected_chain_id,
            rpc_url,
            provider: None,
            signer: None,
        }
    }

    /// Opens a wallet session from a keypair. `active_chain_id` is the
    /// chain the session is on, which need not match the expected chain.
    pub fn connect(
        &mut self,
        keypair: &KeyPair,
        active_chain_id: Felt,
    ) -> Result<(), WalletError> {
        let wallet = LocalWallet::from(SigningKey::from_secret_scalar(
            *keypair.stark_private_key(),
        ));
        let provider = StarknetProvider::new(
            &wallet,
            self.rpc_url.clone(),
            keypair.address(),
            active_chain_id,
        )?;

        self.provider = Some(Arc::new(provider));
        self.signer = Some(Arc::new(SignerHandle::new(
            wallet,
            keypair.address(),
            active_chain_id,
        )));
        Ok(())
    }

    pub fn disconnect(&mut self) {
        self.provider = None;
        self.signer = None;
    }

    pub fn is_connected(&self) -> bool {
        self.signer.is_some()
    }

    pub fn provider(&self) -> Option<&Arc<StarknetProvider>> {
        self.provider.as_ref()
    }

    /// Reads the current wallet state. Cheap, taken fresh per decision.
    pub fn snapshot(&self) -> WalletSnapshot {
        let wrong_network = self
            .signer
            .as_ref()
            .map(|signer| signer.chain_id != self.expected_chain_id)
            .unwrap_or(false);

        WalletSnapshot {
            connected: self.signer.is_some(),
            wrong_network,
            signer: self.signer.clone(),
            provider_identity: self.rpc_url.clone(),
        }
    }
}
