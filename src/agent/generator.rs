//! Bounded tool-calling conversation loop.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::GenerationConfig;
use crate::llm::{ModelClient, ModelRequest, ModelResponse};
use crate::tools::{ToolDefinition, ToolExecutor};

use super::dispatch::{dispatch, fold};
use super::error::GenerateError;
use super::prompt::build_system_prompt;
use super::state::{BaseParams, ConversationState};

/// Sent once the round budget is spent and the model still wants tools.
pub const FINAL_ROUND_INSTRUCTION: &str =
    "Please provide your final response based on the information available. No more tools can be used.";

/// Answers questions by driving the model through at most
/// `max_rounds` tool-requesting calls plus one forced final call.
///
/// # Algorithm
/// 1. Call the model with the transcript and the tool set
/// 2. If it is done, return its text
/// 3. If this was the last round, strip the tools and ask for a final answer
/// 4. Otherwise run the requested tools, fold the results back, repeat
///
/// The generator holds no per-call state, so one instance can serve
/// concurrent requests.
pub struct Generator {
    client: Arc<dyn ModelClient>,
    config: GenerationConfig,
}

impl Generator {
    pub fn new(client: Arc<dyn ModelClient>, config: GenerationConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Answer `query`, always producing a string.
    ///
    /// Failures are turned into an apology that starts with
    /// [`PROCESSING_ERROR_PREFIX`](super::PROCESSING_ERROR_PREFIX) for model
    /// failures or [`TOOL_ERROR_PREFIX`](super::TOOL_ERROR_PREFIX) for tool
    /// failures. Use [`Generator::try_generate`] to get the error itself.
    pub async fn generate(
        &self,
        query: &str,
        history: Option<&str>,
        tools: Option<&[ToolDefinition]>,
        executor: Option<&dyn ToolExecutor>,
    ) -> String {
        match self.try_generate(query, history, tools, executor).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Generation failed ({:?}): {}", e.kind(), e);
                e.user_message()
            }
        }
    }

    /// Answer `query`, reporting failures as a typed error.
    ///
    /// Runs the bounded loop when both a non-empty tool set and an executor
    /// are given, and the single-call path otherwise.
    pub async fn try_generate(
        &self,
        query: &str,
        history: Option<&str>,
        tools: Option<&[ToolDefinition]>,
        executor: Option<&dyn ToolExecutor>,
    ) -> Result<String, GenerateError> {
        let system = build_system_prompt(history);
        let state = ConversationState::new(query, BaseParams::new(&self.config, system));
        let tools = tools.filter(|t| !t.is_empty());

        match (tools, executor) {
            (Some(tools), Some(executor)) => self.run_loop(state, tools, executor).await,
            (tools, executor) => self.run_single(&state, tools, executor).await,
        }
    }

    async fn run_loop(
        &self,
        mut state: ConversationState,
        tools: &[ToolDefinition],
        executor: &dyn ToolExecutor,
    ) -> Result<String, GenerateError> {
        let max_rounds = self.config.max_rounds();

        loop {
            debug!("Round {}/{}", state.round(), max_rounds);

            let response = self.call(state.request(Some(tools))).await?;

            if !response.wants_tools() {
                return final_text(&response);
            }

            if state.round() >= max_rounds {
                info!(
                    "Round budget of {} exhausted, forcing a final answer",
                    max_rounds
                );
                return self.force_final(state, response).await;
            }

            // Nothing to fold, another round would replay the same transcript
            if !response.has_tool_uses() {
                return final_text(&response);
            }

            let results = dispatch(executor, &response).await?;
            state.fold(response.content, results);
            state.advance_round();
        }
    }

    async fn force_final(
        &self,
        mut state: ConversationState,
        response: ModelResponse,
    ) -> Result<String, GenerateError> {
        state.push_instruction(response.content, FINAL_ROUND_INSTRUCTION);

        let final_response = self
            .client
            .send(&state.request(None))
            .await
            .map_err(GenerateError::FinalResponse)?;

        final_text(&final_response)
    }

    /// One call, with at most one tool pass and one follow-up call.
    ///
    /// Works on its own copy of the transcript; no round budget applies.
    async fn run_single(
        &self,
        state: &ConversationState,
        tools: Option<&[ToolDefinition]>,
        executor: Option<&dyn ToolExecutor>,
    ) -> Result<String, GenerateError> {
        let mut messages = state.messages().to_vec();

        let response = self.call(state.base().request(messages.clone(), tools)).await?;

        let executor = match executor {
            Some(executor) if response.wants_tools() && response.has_tool_uses() => executor,
            _ => return final_text(&response),
        };

        let results = dispatch(executor, &response).await?;
        fold(&mut messages, response.content, results);

        let follow_up = self.call(state.base().request(messages, None)).await?;
        final_text(&follow_up)
    }

    async fn call(&self, request: ModelRequest) -> Result<ModelResponse, GenerateError> {
        self.client.send(&request).await.map_err(GenerateError::Model)
    }
}

fn final_text(response: &ModelResponse) -> Result<String, GenerateError> {
    response.text().ok_or(GenerateError::EmptyResponse)
}
