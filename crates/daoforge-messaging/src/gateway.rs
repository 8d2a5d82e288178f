use crate::error::ProvisionError;
use daoforge_types::channel::{ChannelHandle, ChannelRequest};
use daoforge_wallet::signer::SignerHandle;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Environment tier of the messaging backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEnv {
    Production,
    Staging,
}

impl GatewayEnv {
    /// Maps a configuration tier string; anything unrecognized is staging.
    pub fn from_tier(tier: &str) -> Self {
        match tier {
            "production" => GatewayEnv::Production,
            _ => GatewayEnv::Staging,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            GatewayEnv::Production => "prod",
            GatewayEnv::Staging => "staging",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SessionResponse {
    ok: bool,
    session: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CreateChannelResponse {
    ok: bool,
    chat_id: Option<String>,
    error: Option<String>,
}

/// An authenticated messaging session, valid for the channel-create call
/// that follows the handshake.
pub struct PushSession {
    token: String,
}

/// HTTP client for the messaging backend.
pub struct PushGateway {
    http: reqwest::Client,
    base_url: String,
    env: GatewayEnv,
}

impl PushGateway {
    pub fn new(base_url: String, env: GatewayEnv) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            env,
        })
    }

    /// Establishes an authenticated session by signing a handshake payload
    /// with the wallet. An unusable response classifies as a session
    /// failure.
    pub async fn initialize(&self, signer: &SignerHandle) -> Result<PushSession, ProvisionError> {
        let message = format!("daoforge:session:{:#x}", signer.address);
        let signature = signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|_| ProvisionError::Session)?;

        let response = self
            .http
            .post(format!("{}/v1/sessions", self.base_url))
            .json(&json!({
                "address": format!("{:#x}", signer.address),
                "chainId": format!("{:#x}", signer.chain_id),
                "signature": {
                    "r": format!("{:#x}", signature.r),
                    "s": format!("{:#x}", signature.s),
                },
                "env": self.env.as_str(),
            }))
            .send()
            .await?;

        let body: SessionResponse = response.json().await?;
        session_token(body)
            .map(|token| PushSession { token })
            .ok_or(ProvisionError::Session)
    }

    /// Creates the notification channel. An unusable response classifies
    /// as a creation failure.
    pub async fn create_channel(
        &self,
        session: &PushSession,
        request: &ChannelRequest,
    ) -> Result<ChannelHandle, ProvisionError> {
        let response = self
            .http
            .post(format!("{}/v1/chat/groups", self.base_url))
            .bearer_auth(&session.token)
            .json(&json!({
                "title": request.title,
                "description": request.description,
                "image": request.image,
                "private": request.private,
            }))
            .send()
            .await?;

        let body: CreateChannelResponse = response.json().await?;
        channel_handle(body).ok_or(ProvisionError::EmptyCreation)
    }
}

fn session_token(response: SessionResponse) -> Option<String> {
    if !response.ok {
        log::debug!(
            "session handshake rejected: {}",
            response.error.unwrap_or_default()
        );
        return None;
    }
    response.session.filter(|token| !token.is_empty())
}

fn channel_handle(response: CreateChannelResponse) -> Option<ChannelHandle> {
    if !response.ok {
        log::debug!(
            "channel create rejected: {}",
            response.error.unwrap_or_default()
        );
        return None;
    }
    response
        .chat_id
        .filter(|id| !id.is_empty())
        .map(ChannelHandle::new)
}
