//! Per-call conversation state.

use crate::config::GenerationConfig;
use crate::llm::{ContentBlock, Message, ModelRequest, ToolChoice};
use crate::tools::ToolDefinition;

/// Parameters shared by every model call of one `generate` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system: String,
}

impl BaseParams {
    pub fn new(config: &GenerationConfig, system: String) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system,
        }
    }

    /// A request over `messages`; `tools` also switches tool choice to auto.
    pub fn request(&self, messages: Vec<Message>, tools: Option<&[ToolDefinition]>) -> ModelRequest {
        ModelRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            system: self.system.clone(),
            messages,
            tools: tools.map(<[ToolDefinition]>::to_vec),
            tool_choice: tools.map(|_| ToolChoice::Auto),
        }
    }
}

/// The transcript and round counter threaded through the tool loop.
///
/// Created fresh for each `generate` call and dropped when it returns. The
/// message log only ever grows.
#[derive(Debug, Clone)]
pub struct ConversationState {
    messages: Vec<Message>,
    round: usize,
    base: BaseParams,
}

impl ConversationState {
    pub fn new(query: &str, base: BaseParams) -> Self {
        Self {
            messages: vec![Message::user_text(query)],
            round: 1,
            base,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system_prompt(&self) -> &str {
        &self.base.system
    }

    pub fn base(&self) -> &BaseParams {
        &self.base
    }

    /// 1-indexed number of the round about to call the model.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
    }

    /// Request for the current transcript.
    pub fn request(&self, tools: Option<&[ToolDefinition]>) -> ModelRequest {
        self.base.request(self.messages.clone(), tools)
    }

    /// Append the assistant's tool-use turn followed by its results.
    pub fn fold(&mut self, assistant: Vec<ContentBlock>, results: Vec<ContentBlock>) {
        super::dispatch::fold(&mut self.messages, assistant, results);
    }

    /// Append the assistant's turn and a plain user instruction.
    pub fn push_instruction(&mut self, assistant: Vec<ContentBlock>, instruction: &str) {
        self.messages.push(Message::assistant_blocks(assistant));
        self.messages.push(Message::user_text(instruction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{MessageContent, Role};
    use serde_json::json;

    fn base() -> BaseParams {
        BaseParams::new(&GenerationConfig::new("claude-test"), "system".to_string())
    }

    #[test]
    fn starts_with_single_user_turn_in_round_one() {
        let state = ConversationState::new("What is AI?", base());
        assert_eq!(state.round(), 1);
        assert_eq!(state.messages(), &[Message::user_text("What is AI?")]);
        assert_eq!(state.system_prompt(), "system");
    }

    #[test]
    fn empty_query_is_kept() {
        let state = ConversationState::new("", base());
        assert_eq!(state.messages()[0].content, MessageContent::Text(String::new()));
    }

    #[test]
    fn request_without_tools_has_no_tool_choice() {
        let state = ConversationState::new("q", base());
        let request = state.request(None);
        assert_eq!(request.model, "claude-test");
        assert_eq!(request.max_tokens, 800);
        assert_eq!(request.temperature, 0.0);
        assert!(request.tools.is_none());
        assert!(request.tool_choice.is_none());
    }

    #[test]
    fn request_with_tools_uses_auto_choice() {
        let state = ConversationState::new("q", base());
        let tools = vec![ToolDefinition {
            name: "search_course_content".into(),
            description: "Search".into(),
            input_schema: json!({"type": "object"}),
        }];
        let request = state.request(Some(&tools));
        assert_eq!(request.tools.as_deref(), Some(tools.as_slice()));
        assert_eq!(request.tool_choice, Some(ToolChoice::Auto));
    }

    #[test]
    fn fold_appends_assistant_then_results() {
        let mut state = ConversationState::new("q", base());
        state.fold(
            vec![ContentBlock::ToolUse {
                id: "t1".into(),
                name: "search".into(),
                input: Default::default(),
            }],
            vec![ContentBlock::tool_result("t1", "R")],
        );
        state.advance_round();

        assert_eq!(state.round(), 2);
        assert_eq!(state.messages().len(), 3);
        assert_eq!(state.messages()[1].role, Role::Assistant);
        assert_eq!(state.messages()[2].role, Role::User);
    }
}
