//! Agent module - the bounded tool-calling conversation loop.
//!
//! A question is answered in rounds:
//! 1. Build the system prompt, optionally with prior conversation
//! 2. Call the model with the transcript and available tools
//! 3. If the model requests tools, execute them in order and fold the results back
//! 4. Repeat until the model answers or the round budget forces a final answer

mod dispatch;
mod error;
mod generator;
mod prompt;
mod state;


pub use error::{ErrorKind, GenerateError, PROCESSING_ERROR_PREFIX, TOOL_ERROR_PREFIX};
pub use generator::{Generator, FINAL_ROUND_INSTRUCTION};
pub use prompt::{build_system_prompt, SYSTEM_PROMPT};
pub use state::{BaseParams, ConversationState};
