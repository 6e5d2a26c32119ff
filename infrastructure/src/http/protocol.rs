//! Wire types for the `/api/veribot` endpoint

use serde::{Deserialize, Serialize};
use veribot_application::GatewayError;

/// Path of the verification endpoint, relative to the backend URL
pub const VERIFY_PATH: &str = "/api/veribot";

/// `type` value of a successful reply
pub const MESSAGE_TYPE: &str = "message";

/// Request body: `{ "text": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest<'a> {
    pub text: &'a str,
}

/// Response body: `{ "type": "message", "text": "..." }`
///
/// Both fields are optional here so that shape problems surface as
/// [`GatewayError::InvalidResponse`] instead of a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<String>,
}

impl VerifyResponse {
    /// Validate an already decoded JSON body and extract the reply text
    pub fn reply_text(body: serde_json::Value) -> Result<String, GatewayError> {
        let response: VerifyResponse =
            serde_json::from_value(body).map_err(|_| GatewayError::InvalidResponse)?;

        match (response.kind.as_deref(), response.text) {
            (Some(MESSAGE_TYPE), Some(text)) if !text.is_empty() => Ok(text),
            _ => Err(GatewayError::InvalidResponse),
        }
    }
}
