//! Failures of a `generate` call and their user-facing wording.

use thiserror::Error;

use crate::llm::LlmError;

/// Prefix of every answer produced from a model-call failure.
pub const PROCESSING_ERROR_PREFIX: &str = "I encountered an error while processing your request";

/// Prefix of every answer produced from a tool failure.
pub const TOOL_ERROR_PREFIX: &str = "I encountered an error while using the search tools";

/// Which side of the conversation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The model call (transport, quota, malformed response)
    Processing,
    /// A tool executor call
    Tool,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Model(#[source] LlmError),

    #[error("unable to provide a final response: {0}")]
    FinalResponse(#[source] LlmError),

    #[error("the model returned no text")]
    EmptyResponse,

    #[error("tool '{name}' failed: {source}")]
    Tool {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Tool { .. } => ErrorKind::Tool,
            GenerateError::Model(_)
            | GenerateError::FinalResponse(_)
            | GenerateError::EmptyResponse => ErrorKind::Processing,
        }
    }

    /// The apology returned to the user in place of an answer.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Tool { source, .. } => format!("{}: {}", TOOL_ERROR_PREFIX, source),
            other => format!("{}: {}", PROCESSING_ERROR_PREFIX, other),
        }
    }
}
