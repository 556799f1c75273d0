//! Course Assistant - command line entry point
//!
//! Usage: `course-assistant [--history <text>] <question...>`

use std::sync::Arc;

use anyhow::Context;
use course_assistant::{agent::Generator, config::Config, llm::AnthropicClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_assistant=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (history, question) = parse_args(std::env::args().skip(1))?;

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: model={}, max_rounds={}",
        config.generation.model,
        config.generation.max_rounds()
    );

    let client = AnthropicClient::from_config(&config).context("Failed to build HTTP client")?;
    let generator = Generator::new(Arc::new(client), config.generation.clone());

    let answer = generator
        .generate(&question, history.as_deref(), None, None)
        .await;
    println!("{}", answer);

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<(Option<String>, String)> {
    let mut args = args.peekable();
    let mut history = None;

    if args.peek().map(String::as_str) == Some("--history") {
        args.next();
        history = Some(args.next().context("--history needs a value")?);
    }

    let question = args.collect::<Vec<_>>().join(" ");
    if question.trim().is_empty() {
        anyhow::bail!("usage: course-assistant [--history <text>] <question...>");
    }

    Ok((history, question))
}
