//! reqwest adapter for the verification backend

use super::protocol::{VERIFY_PATH, VerifyRequest, VerifyResponse};
use async_trait::async_trait;
use tracing::{debug, trace};
use veribot_application::{GatewayError, VerificationGateway};

const USER_AGENT: &str = concat!("veribot/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of [`VerificationGateway`]
///
/// POSTs `{ "text": ... }` to `<base_url>/api/veribot`. One request per
/// call; no retry and no timeout.
pub struct HttpVerificationGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpVerificationGateway {
    /// Create a gateway for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a gateway reusing an existing client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), VERIFY_PATH),
        }
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl VerificationGateway for HttpVerificationGateway {
    async fn verify(&self, text: &str) -> Result<String, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&VerifyRequest { text })
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        trace!("Response body: {}", body);

        VerifyResponse::reply_text(body)
    }
}
