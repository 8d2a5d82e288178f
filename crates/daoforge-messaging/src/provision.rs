use crate::error::ProvisionError;
use crate::gateway::PushGateway;
use crate::image::encode_inline_image;
use async_trait::async_trait;
use daoforge_types::channel::{ChannelHandle, ChannelRequest};
use daoforge_types::draft::DraftDao;
use daoforge_wallet::signer::SignerHandle;
use std::sync::Arc;

/// Creates the off-chain notification channel for a DAO. Implementations
/// run inside a detached task; the publish flow never awaits them.
#[async_trait]
pub trait ChannelProvisioner: Send + Sync {
    async fn provision(
        &self,
        signer: Arc<SignerHandle>,
        request: ChannelRequest,
    ) -> Result<ChannelHandle, ProvisionError>;
}

/// Builds the one-shot channel request from a draft snapshot.
pub fn channel_request_for(draft: &DraftDao) -> ChannelRequest {
    ChannelRequest::new(
        draft.name.clone(),
        draft.summary.clone(),
        encode_inline_image(draft.logo.as_deref()),
    )
}

/// Provisioner backed by the push messaging gateway: session handshake,
/// then channel create. No retries on either step.
pub struct PushProvisioner {
    gateway: PushGateway,
}

impl PushProvisioner {
    pub fn new(gateway: PushGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ChannelProvisioner for PushProvisioner {
    async fn provision(
        &self,
        signer: Arc<SignerHandle>,
        request: ChannelRequest,
    ) -> Result<ChannelHandle, ProvisionError> {
        let session = self.gateway.initialize(signer.as_ref()).await?;
        self.gateway.create_channel(&session, &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daoforge_types::draft::NetworkKind;

    #[test]
    fn test_request_carries_name_summary_and_empty_image() {
        let mut draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        draft.name = "Acme DAO".to_string();
        draft.summary = "A test DAO".to_string();

        let request = channel_request_for(&draft);
        assert_eq!(request.title, "Acme DAO");
        assert_eq!(request.description, "A test DAO");
        assert_eq!(request.image, "");
        assert!(!request.private);
    }

    #[test]
    fn test_request_inlines_the_logo() {
        let mut draft = DraftDao::new(NetworkKind::Sepolia, "SN_SEPOLIA".to_string());
        draft.logo = Some(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A]);

        let request = channel_request_for(&draft);
        assert!(request.image.starts_with("data:image/png;base64,"));
    }
}
