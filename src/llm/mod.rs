//! Model client abstraction and the Anthropic Messages API implementation.

mod anthropic;
mod types;

pub use anthropic::AnthropicClient;
pub use types::{
    ContentBlock, Message, MessageContent, ModelRequest, ModelResponse, Role, StopReason,
    ToolChoice,
};

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single model call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// A backend that can answer one request at a time.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a request and wait for the full response.
    async fn send(&self, request: &ModelRequest) -> Result<ModelResponse, LlmError>;
}
