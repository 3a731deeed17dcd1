//! Vision model port: the external generative capability.

use async_trait::async_trait;
use thiserror::Error;

use crate::media::ImageContent;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The request never produced a usable response (network, TLS, timeout).
    #[error("model transport failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status (quota, auth, bad request).
    #[error("model API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered but carried no candidate text.
    #[error("model response contained no content")]
    EmptyResponse,
}

/// Hosted multimodal model accepting an image, a natural-language
/// instruction, and a JSON schema the response must conform to.
///
/// Implementations return the raw response text; parsing and validation
/// against the report shape happen in the caller.
#[async_trait]
pub trait VisionModelPort: Send + Sync {
    async fn generate(
        &self,
        image: &ImageContent,
        instruction: &str,
        response_schema: &serde_json::Value,
    ) -> Result<String, ModelError>;
}
