use crate::error::WalletError;
use starknet::accounts::ConnectedAccount;
use starknet::providers::jsonrpc::HttpTransport;
use starknet::providers::JsonRpcClient;
use starknet::providers::Url;
use starknet::{
    accounts::{ExecutionEncoding, SingleOwnerAccount},
    core::types::Felt,
    signers::LocalWallet,
};

/// A starknet provider encompassing a signer (starknet::LocalWallet) and
/// account (starknet::SingleOwnerAccount). The confirmation dialog drives
/// deployment through this pair once the publish flow opens it.
pub struct StarknetProvider {
    pub signer: LocalWallet,
    pub account: SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>,
}

impl StarknetProvider {
    /// Create an instance of the starknet provider.
    pub fn new(
        wallet: &LocalWallet,
        rpc: String,
        address: Felt,
        chain_id: Felt,
    ) -> Result<Self, WalletError> {
        let url = Url::parse(&rpc).map_err(|_| WalletError::InvalidRpcUrl(rpc.clone()))?;
        let client = JsonRpcClient::new(HttpTransport::new(url));

        let account = SingleOwnerAccount::new(
            client,
            wallet.clone(),
            address,
            chain_id,
            ExecutionEncoding::New,
        );

        Ok(Self {
            signer: wallet.clone(),
            account,
        })
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &JsonRpcClient<HttpTransport> {
        self.account.provider()
    }
}
