//! Tool dispatch and folding of results into the transcript.

use crate::llm::{ContentBlock, Message, ModelResponse};
use crate::tools::ToolExecutor;

use super::error::GenerateError;

/// Run every tool invocation of `response`, in order, one at a time.
///
/// Returns one `tool_result` block per invocation, carrying the request id
/// unchanged. The first failing tool aborts the whole round and nothing
/// gathered so far is returned.
pub async fn dispatch(
    executor: &dyn ToolExecutor,
    response: &ModelResponse,
) -> Result<Vec<ContentBlock>, GenerateError> {
    let mut results = Vec::new();

    for (id, name, input) in response.tool_uses() {
        tracing::debug!("Calling tool {} ({}) with args: {:?}", name, id, input);

        let output = executor
            .execute(name, input)
            .await
            .map_err(|source| GenerateError::Tool {
                name: name.to_string(),
                source,
            })?;

        tracing::debug!("Tool {} returned {} bytes", name, output.len());
        results.push(ContentBlock::tool_result(id, output));
    }

    Ok(results)
}

/// Append the assistant's raw turn, then all of its results as one user turn.
pub fn fold(messages: &mut Vec<Message>, assistant: Vec<ContentBlock>, results: Vec<ContentBlock>) {
    messages.push(Message::assistant_blocks(assistant));
    if !results.is_empty() {
        messages.push(Message::user_blocks(results));
    }
}
