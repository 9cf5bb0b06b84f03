//! Publish a new version of the hosted agent from a prompt file.
//!
//! Usage: update-agent [prompt-file]
//!
//! Connection details come from the same environment variables as the
//! server (AGENT_ENDPOINT, AGENT_API_KEY, plus optional AGENT_NAME,
//! AGENT_API_VERSION and AGENT_MODEL). The active version's tools are
//! preserved; only model and instructions change.

use std::time::Duration;

use anyhow::Context;

use orbita_agent::AgentServiceClient;

const DEFAULT_PROMPT_FILE: &str = "prompts/system.md";
const DEFAULT_AGENT_NAME: &str = "Agente-Aeroespacial";
const DEFAULT_API_VERSION: &str = "2025-05-01";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let prompt_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PROMPT_FILE.to_string());

    let endpoint =
        std::env::var("AGENT_ENDPOINT").context("AGENT_ENDPOINT environment variable is required")?;
    let api_key =
        std::env::var("AGENT_API_KEY").context("AGENT_API_KEY environment variable is required")?;
    let agent_name =
        std::env::var("AGENT_NAME").unwrap_or_else(|_| DEFAULT_AGENT_NAME.to_string());
    let api_version =
        std::env::var("AGENT_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
    let model = std::env::var("AGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let instructions = std::fs::read_to_string(&prompt_file)
        .with_context(|| format!("Failed to read prompt file {}", prompt_file))?;

    let client = AgentServiceClient::builder()
        .endpoint(endpoint)
        .api_key(api_key)
        .api_version(api_version)
        .agent_name(&agent_name)
        .timeout(Duration::from_secs(60))
        .build()?;

    let current = client.resolve_agent().await?;
    println!(
        "Current agent: {} (version {})",
        current.name,
        current.version.as_deref().unwrap_or("?")
    );

    let updated = client.create_version(&model, &instructions).await?;
    println!(
        "Published version {} of {} with instructions from {}",
        updated.version.as_deref().unwrap_or("?"),
        updated.name,
        prompt_file
    );

    Ok(())
}
