//! # Course Assistant
//!
//! Answers questions about course materials with a language model that can
//! call search tools.
//!
//! This library provides:
//! - A bounded tool-calling conversation loop ([`agent::Generator`])
//! - An Anthropic Messages API client ([`llm::AnthropicClient`])
//! - Course search and outline tools over a pluggable course store
//!
//! ## Architecture
//!
//! Each question runs in rounds:
//! 1. Call the model with the question, the system prompt and available tools
//! 2. If the model asks for tools, execute them in order and feed results back
//! 3. Stop when the model answers, or force a tool-free final answer once the
//!    round budget is spent
//!
//! Every failure becomes the returned answer text; `generate` never errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use course_assistant::{agent::Generator, config::Config, llm::AnthropicClient};
//!
//! let config = Config::from_env()?;
//! let client = Arc::new(AnthropicClient::from_config(&config)?);
//! let generator = Generator::new(client, config.generation.clone());
//! let answer = generator.generate("What is MCP?", None, None, None).await;
//! ```
//!
//! Without tools that is a single model call. The bounded loop runs only when
//! the caller supplies tools and an executor. The crate ships no course store,
//! so callers implement [`tools::CourseStore`] over their own index and
//! register the course tools:
//!
//! ```rust,ignore
//! use course_assistant::tools::{CourseOutlineTool, CourseSearchTool, ToolRegistry};
//!
//! let store: Arc<dyn CourseStore> = Arc::new(MyVectorStore::open(path)?);
//! let mut registry = ToolRegistry::new();
//! registry.register(Arc::new(CourseSearchTool::new(store.clone())));
//! registry.register(Arc::new(CourseOutlineTool::new(store)));
//!
//! let definitions = registry.definitions();
//! let answer = generator
//!     .generate("What is MCP?", None, Some(definitions.as_slice()), Some(&registry))
//!     .await;
//! let sources = registry.last_sources().await;
//! ```

pub mod agent;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
