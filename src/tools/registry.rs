use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Source, Tool, ToolDefinition, ToolExecutor};

/// Registry of available tools, looked up by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Definitions of every tool, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.definition())
            .collect()
    }

    /// Sources from the first tool that recorded any.
    pub async fn last_sources(&self) -> Vec<Source> {
        for name in &self.order {
            if let Some(tool) = self.tools.get(name) {
                let sources = tool.last_sources().await;
                if !sources.is_empty() {
                    return sources;
                }
            }
        }
        Vec::new()
    }

    pub async fn reset_sources(&self) {
        for tool in self.tools.values() {
            tool.reset_sources().await;
        }
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    async fn execute(&self, name: &str, arguments: &Map<String, Value>) -> anyhow::Result<String> {
        let Some(tool) = self.tools.get(name) else {
            tracing::warn!("Model requested unknown tool: {}", name);
            return Ok(format!("Tool '{}' not found", name));
        };

        tracing::debug!("Executing tool {}", name);
        tool.execute(Value::Object(arguments.clone())).await
    }
}
