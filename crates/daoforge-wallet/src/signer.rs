use crate::crypto::keypair::KeyPair;
use crate::error::WalletError;
use starknet::core::crypto::Signature;
use starknet::core::types::Felt;
use starknet::core::utils::starknet_keccak;
use starknet::signers::{LocalWallet, Signer, SigningKey};

/// Signing capability handed to collaborators that need to authenticate as
/// the wallet without holding the whole provider, e.g. the messaging
/// gateway handshake.
#[derive(Clone)]
pub struct SignerHandle {
    wallet: LocalWallet,
    pub address: Felt,
    /// Chain the wallet session is currently on.
    pub chain_id: Felt,
}

impl SignerHandle {
    pub fn new(wallet: LocalWallet, address: Felt, chain_id: Felt) -> Self {
        Self {
            wallet,
            address,
            chain_id,
        }
    }

    pub fn from_keypair(keypair: &KeyPair, chain_id: Felt) -> Self {
        let wallet = LocalWallet::from(SigningKey::from_secret_scalar(
            *keypair.stark_private_key(),
        ));
        Self::new(wallet, keypair.address(), chain_id)
    }

    /// Signs the keccak hash of an arbitrary payload.
    pub async fn sign_message(&self, payload: &[u8]) -> Result<Signature, WalletError> {
        let hash = starknet_keccak(payload);
        self.wallet
            .sign_hash(&hash)
            .await
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}

impl std::fmt::Debug for SignerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerHandle")
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starknet::core::utils::cairo_short_string_to_felt;

    #[tokio::test]
    async fn test_signatures_are_deterministic_per_payload() {
        let keypair = KeyPair::generate();
        let chain_id = cairo_short_string_to_felt("SN_SEPOLIA").unwrap();
        let signer = SignerHandle::from_keypair(&keypair, chain_id);

        let first = signer.sign_message(b"daoforge:session").await.unwrap();
        let second = signer.sign_message(b"daoforge:session").await.unwrap();

        assert_eq!(first.r, second.r);
        assert_eq!(first.s, second.s);
    }
}
