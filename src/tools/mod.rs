//! Tools the model can call.
//!
//! A [`Tool`] describes itself with a JSON schema and turns JSON arguments
//! into a text result. The conversation loop never sees tools directly; it
//! talks to a [`ToolExecutor`], which [`ToolRegistry`] implements.

mod course;
mod registry;

pub use course::{
    CourseOutline, CourseOutlineTool, CourseSearchTool, CourseStore, LessonSummary, SearchHit,
    SearchResults,
};
pub use registry::ToolRegistry;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declarative tool advertisement sent with a model request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// A citation produced by a tool, surfaced to the caller next to the answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub text: String,
    pub url: Option<String>,
}

/// A single tool.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema of the arguments (`type`, `properties`, `required`).
    fn parameters_schema(&self) -> Value;

    async fn execute(&self, args: Value) -> anyhow::Result<String>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.parameters_schema(),
        }
    }

    /// Sources recorded by the most recent `execute`.
    async fn last_sources(&self) -> Vec<Source> {
        Vec::new()
    }

    async fn reset_sources(&self) {}
}

/// Executes tool calls by name on behalf of the conversation loop.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Run `name` with the model-supplied arguments.
    ///
    /// The returned string is sent back to the model as-is. An `Err` aborts
    /// the current round.
    async fn execute(&self, name: &str, arguments: &Map<String, Value>) -> anyhow::Result<String>;
}
