//! Message and request types for the Messages API.
//!
//! Only the subset the conversation loop depends on is modelled. Content
//! blocks are a closed set: anything else in a response fails to decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tools::ToolDefinition;

/// Message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single content block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text { text: String },

    /// A request from the model to run a tool
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: Map<String, Value>,
    },

    /// The output of a tool, correlated by `tool_use_id`
    ToolResult { tool_use_id: String, content: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<String>) -> Self {
        ContentBlock::ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
        }
    }
}

/// Message content: a bare string or a list of blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

impl Message {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Blocks(blocks),
        }
    }

    pub fn assistant_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Blocks(blocks),
        }
    }
}

/// How the model may pick tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolChoice {
    Auto,
}

/// A full model call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelRequest {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

/// Why the model stopped producing output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    ToolUse,
    MaxTokens,
    StopSequence,
    #[serde(other)]
    Other,
}

/// A decoded model response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
}

impl ModelResponse {
    /// Whether the model is asking for tools to be run.
    pub fn wants_tools(&self) -> bool {
        self.stop_reason == Some(StopReason::ToolUse)
    }

    /// Concatenated text blocks, or `None` if the response carries no text.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }

    /// Tool invocations in the order the model emitted them.
    pub fn tool_uses(&self) -> impl Iterator<Item = (&str, &str, &Map<String, Value>)> {
        self.content.iter().filter_map(|block| match block {
            ContentBlock::ToolUse { id, name, input } => {
                Some((id.as_str(), name.as_str(), input))
            }
            _ => None,
        })
    }

    pub fn has_tool_uses(&self) -> bool {
        self.tool_uses().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_tool_use_response() {
        let response: ModelResponse = serde_json::from_value(json!({
            "id": "msg_1",
            "type": "message",
            "content": [
                {"type": "text", "text": "Let me look that up."},
                {"type": "tool_use", "id": "toolu_1", "name": "search_course_content",
                 "input": {"query": "transformers", "lesson_number": 2}}
            ],
            "stop_reason": "tool_use"
        }))
        .unwrap();

        assert!(response.wants_tools());
        assert_eq!(response.text().as_deref(), Some("Let me look that up."));
        let uses: Vec<_> = response.tool_uses().collect();
        assert_eq!(uses.len(), 1);
        assert_eq!(uses[0].0, "toolu_1");
        assert_eq!(uses[0].1, "search_course_content");
        assert_eq!(uses[0].2["lesson_number"], json!(2));
    }

    #[test]
    fn unknown_stop_reason_decodes_as_other() {
        let response: ModelResponse = serde_json::from_value(json!({
            "content": [{"type": "text", "text": "hi"}],
            "stop_reason": "pause_turn"
        }))
        .unwrap();
        assert_eq!(response.stop_reason, Some(StopReason::Other));
        assert!(!response.wants_tools());
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let result: Result<ModelResponse, _> = serde_json::from_value(json!({
            "content": [{"type": "hologram", "data": "?"}],
            "stop_reason": "end_turn"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn text_is_none_without_text_blocks() {
        let response = ModelResponse {
            content: vec![ContentBlock::ToolUse {
                id: "a".into(),
                name: "t".into(),
                input: Map::new(),
            }],
            stop_reason: Some(StopReason::ToolUse),
        };
        assert_eq!(response.text(), None);
    }

    #[test]
    fn request_omits_absent_tools() {
        let request = ModelRequest {
            model: "m".into(),
            temperature: 0.0,
            max_tokens: 800,
            system: "sys".into(),
            messages: vec![Message::user_text("hi")],
            tools: None,
            tool_choice: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
        assert!(value.get("tool_choice").is_none());
        assert_eq!(value["messages"][0], json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn tool_result_turn_serializes_as_blocks() {
        let message = Message::user_blocks(vec![ContentBlock::tool_result("toolu_1", "R")]);
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [{"type": "tool_result", "tool_use_id": "toolu_1", "content": "R"}]
            })
        );
        assert_eq!(
            serde_json::to_value(ToolChoice::Auto).unwrap(),
            json!({"type": "auto"})
        );
    }
}
