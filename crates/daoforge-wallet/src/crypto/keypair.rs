use crate::error::WalletError;
use bip39::{Language, Mnemonic, Seed};
use lazy_static::lazy_static;
use starknet::core::types::Felt;
use starknet::core::utils::{get_contract_address, starknet_keccak};
use starknet_crypto::get_public_key;
use std::collections::HashMap;

// Well known account class hashes from OpenZeppelin. New wallets deploy
// against one of these classes.
lazy_static! {
    pub static ref ACCOUNT_CLASS_HASHES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Hash for OZ 0.6.1 compiled with Cairo 0.10.3
        m.insert(
            "OZ_0.6.1",
            "0x508fc648f7dc864be1242384cc819f0d23bfeea97b5216923ab769e103c9775"
        );
        // Hash for OZ accounts from Nile (Cairo 0.10.1)
        m.insert(
            "OZ_0.5.0",
            "0x058d97f7d76e78f44905cc30cb65b91ea49a4b908a76703c54197bca90f81773"
        );
        m
    };
}

const DEFAULT_ACCOUNT_CLASS: &str = "OZ_0.6.1";

/// STARK keypair backing a local wallet, together with the mnemonic it was
/// derived from and the counterfactual account address.
#[derive(Clone, Debug)]
pub struct KeyPair {
    stark_private_key: Felt,
    stark_public_key: Felt,
    address: Felt,
    mnemonic: Option<Mnemonic>,
}

impl KeyPair {
    /// Generates a new KeyPair from fresh random entropy.
    pub fn generate() -> Self {
        let mut entropy = [0u8; 32];
        getrandom::getrandom(&mut entropy).expect("entropy source available");

        let mnemonic = Mnemonic::from_entropy(&entropy, Language::English)
            .expect("32 bytes of entropy form a valid mnemonic");

        Self::from_parsed_mnemonic(mnemonic)
    }

    /// Creates a KeyPair from an existing BIP-39 mnemonic phrase.
    pub fn from_mnemonic(mnemonic: &str) -> Result<Self, WalletError> {
        let mnemonic = Mnemonic::from_phrase(mnemonic, Language::English)
            .map_err(|e| WalletError::Mnemonic(e.to_string()))?;
        Ok(Self::from_parsed_mnemonic(mnemonic))
    }

    fn from_parsed_mnemonic(mnemonic: Mnemonic) -> Self {
        // Password based seeds are currently not supported
        let seed = Seed::new(&mnemonic, "");
        let seed_bytes = seed.as_bytes();

        let mut stark_key_bytes = [0u8; 32];
        stark_key_bytes.copy_from_slice(&seed_bytes[..32]);
        let stark_private_key = Felt::from_bytes_be(&stark_key_bytes);
        let stark_public_key = get_public_key(&stark_private_key);

        let address = Self::derive_account_address(&stark_public_key, DEFAULT_ACCOUNT_CLASS)
            .unwrap_or(Felt::ZERO);

        Self {
            stark_private_key,
            stark_public_key,
            address,
            mnemonic: Some(mnemonic),
        }
    }

    /// Returns a reference to the mnemonic used to create the wallet.
    pub fn mnemonic(&self) -> Option<&Mnemonic> {
        self.mnemonic.as_ref()
    }

    /// Returns a reference to the STARK private key.
    pub fn stark_private_key(&self) -> &Felt {
        &self.stark_private_key
    }

    /// Returns a reference to the STARK public key.
    pub fn stark_public_key(&self) -> &Felt {
        &self.stark_public_key
    }

    /// The counterfactual account address for this keypair.
    pub fn address(&self) -> Felt {
        self.address
    }

    /// Derives the counterfactual account address for a public key and
    /// account class version.
    pub fn derive_account_address(
        public_key: &Felt,
        version: &str,
    ) -> Result<Felt, WalletError> {
        let salt = Self::derive_salt(public_key, 0);
        let class_hash = Self::get_class_hash(version)?;
        let constructor_calldata = vec![*public_key];
        let deployer_address = Felt::ZERO;

        Ok(get_contract_address(
            salt,
            class_hash,
            &constructor_calldata,
            deployer_address,
        ))
    }

    /// Derives a salt value from a public key and key index.
    fn derive_salt(public_key: &Felt, index: u64) -> Felt {
        let mut data = Vec::new();
        data.extend_from_slice(&public_key.to_bytes_be());
        data.extend_from_slice(&index.to_be_bytes());
        starknet_keccak(&data)
    }

    /// Retrieves the class hash for an account class version.
    fn get_class_hash(version: &str) -> Result<Felt, WalletError> {
        let hash_str = ACCOUNT_CLASS_HASHES
            .get(version)
            .or_else(|| ACCOUNT_CLASS_HASHES.get(DEFAULT_ACCOUNT_CLASS))
            .ok_or(WalletError::UnknownAccountClass("no known account class"))?;

        Felt::from_hex(hash_str)
            .map_err(|_| WalletError::UnknownAccountClass("invalid class hash format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_reproduces_the_wallet() {
        let generated = KeyPair::generate();
        let phrase = generated.mnemonic().unwrap().phrase().to_string();

        let restored = KeyPair::from_mnemonic(&phrase).unwrap();

        assert_eq!(generated.stark_private_key(), restored.stark_private_key());
        assert_eq!(generated.stark_public_key(), restored.stark_public_key());
        assert_eq!(generated.address(), restored.address());
    }

    #[test]
    fn test_invalid_mnemonic_is_rejected() {
        let result = KeyPair::from_mnemonic("definitely not a seed phrase");
        assert!(matches!(result, Err(WalletError::Mnemonic(_))));
    }

    #[test]
    fn test_address_is_nonzero() {
        let keypair = KeyPair::generate();
        assert_ne!(keypair.address(), Felt::ZERO);
    }
}
