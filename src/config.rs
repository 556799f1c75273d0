//! Configuration management for the course assistant.
//!
//! Configuration can be set via environment variables:
//! - `ANTHROPIC_API_KEY` - Required. Your Anthropic API key.
//! - `ANTHROPIC_MODEL` - Optional. Model identifier. Defaults to `claude-sonnet-4-20250514`.
//! - `ANTHROPIC_BASE_URL` - Optional. API base URL. Defaults to `https://api.anthropic.com`.
//! - `MAX_ROUNDS` - Optional. Tool rounds per question before a forced answer. Defaults to `2`.
//! - `MAX_TOKENS` - Optional. Output token cap per model call. Defaults to `800`.
//! - `TEMPERATURE` - Optional. Sampling temperature. Defaults to `0`.
//! - `REQUEST_TIMEOUT_SECS` - Optional. Per-call HTTP timeout. Defaults to `60`.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MAX_ROUNDS: usize = 2;
pub const DEFAULT_MAX_TOKENS: u32 = 800;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Parameters shared by every model call of a generator.
///
/// Built once and never mutated; two generators with different budgets can
/// live side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Output token cap per call
    pub max_tokens: u32,

    /// Model calls allowed to request tools before the answer is forced.
    /// Always at least 1; set through `with_max_rounds`.
    max_rounds: usize,
}

impl GenerationConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the round budget. Values below 1 are clamped to 1.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Anthropic API key
    pub api_key: String,

    /// Base URL of the Messages API
    pub base_url: String,

    /// HTTP timeout for a single model call
    pub request_timeout: Duration,

    /// Model call parameters
    pub generation: GenerationConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `ANTHROPIC_API_KEY` is not set,
    /// and `ConfigError::InvalidValue` for any value that fails to parse or
    /// is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()))?;

        let model = lookup("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("ANTHROPIC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let max_rounds: usize = parse_var(&lookup, "MAX_ROUNDS", DEFAULT_MAX_ROUNDS)?;
        if max_rounds == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_ROUNDS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let max_tokens: u32 = parse_var(&lookup, "MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        if max_tokens == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_TOKENS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let temperature: f32 = parse_var(&lookup, "TEMPERATURE", 0.0)?;
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ConfigError::InvalidValue(
                "TEMPERATURE".to_string(),
                format!("{} is outside 0.0..=1.0", temperature),
            ));
        }

        let timeout_secs: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 60)?;

        Ok(Self {
            api_key,
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            generation: GenerationConfig {
                model,
                temperature,
                max_tokens,
                max_rounds,
            },
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            generation: GenerationConfig::new(model),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidValue(key.to_string(), format!("{}", e))),
        None => Ok(default),
    }
}
