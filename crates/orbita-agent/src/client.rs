// Hosted agent service client (HTTP direct, no SDK)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::{AgentError, Result};
use crate::invoker::AgentInvoker;
use crate::response::AgentReply;
use crate::types::Turn;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for a hosted agent service
///
/// The service exposes agent resources under `/agents/{name}` and a
/// responses endpoint under `/openai/responses`:
/// - Auth header: api-key (not Authorization: Bearer)
/// - Every URL carries an api-version query parameter
/// - Replies reference a named agent rather than a model deployment
#[derive(Debug)]
pub struct AgentServiceClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_version: String,
    agent_name: String,
}

/// Agent resource as returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct AgentInfo {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub definition: Option<AgentDefinition>,
}

/// Definition attached to an agent version
///
/// Tools stay opaque JSON so new versions can carry them over untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentDefinition {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub tools: Vec<Value>,
}

impl AgentServiceClient {
    /// Create new agent service client with builder pattern
    pub fn builder() -> AgentServiceClientBuilder {
        AgentServiceClientBuilder::default()
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}?api-version={}", self.endpoint, path, self.api_version)
    }

    /// Resolve the configured agent by name
    ///
    /// Called once per invocation rather than cached, so the service always
    /// routes to whatever version is currently active under the name.
    pub async fn resolve_agent(&self) -> Result<AgentInfo> {
        let url = self.build_url(&format!("agents/{}", self.agent_name));

        let response = self.http_client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AgentError::AgentNotFound(self.agent_name.clone()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api { status, body });
        }

        Ok(response.json().await?)
    }

    /// Publish a new version of the configured agent
    ///
    /// The active version's tools are fetched first and carried over as-is;
    /// only the model and instructions change.
    pub async fn create_version(&self, model: &str, instructions: &str) -> Result<AgentInfo> {
        let agent = self.resolve_agent().await?;
        let tools = agent.definition.map(|d| d.tools).unwrap_or_default();

        tracing::info!(
            "Creating new version of agent {} (preserving {} tools)",
            agent.name,
            tools.len()
        );

        let payload = json!({
            "definition": {
                "kind": "prompt_agent",
                "model": model,
                "instructions": instructions,
                "tools": tools,
            }
        });

        let url = self.build_url(&format!("agents/{}/versions", self.agent_name));

        let response = self.http_client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AgentInvoker for AgentServiceClient {
    async fn invoke(&self, turns: &[Turn]) -> Result<String> {
        let agent = self.resolve_agent().await?;

        tracing::debug!(
            "Invoking agent {} (version {:?}) with {} turns",
            agent.name,
            agent.version,
            turns.len()
        );

        let payload = json!({
            "input": turns,
            "agent": {
                "name": agent.name,
                "type": "agent_reference",
            },
        });

        let url = self.build_url("openai/responses");

        let response = self.http_client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api { status, body });
        }

        let body = response.text().await?;
        match serde_json::from_str::<AgentReply>(&body) {
            Ok(reply) => Ok(reply.text()),
            Err(e) => {
                // An unreadable reply degrades to empty text instead of
                // failing the whole turn.
                tracing::warn!("Unrecognized reply shape, returning empty text: {}", e);
                Ok(String::new())
            }
        }
    }
}

/// Builder for AgentServiceClient
#[derive(Default)]
pub struct AgentServiceClientBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
    api_version: Option<String>,
    agent_name: Option<String>,
    timeout: Option<Duration>,
}

impl AgentServiceClientBuilder {
    /// Set the agent service endpoint (base URL)
    /// Example: "https://my-project.services.ai.azure.com/api/projects/my-project"
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<AgentServiceClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| AgentError::Config("Endpoint is required".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| AgentError::Config("API key is required".to_string()))?;
        let api_version = self
            .api_version
            .ok_or_else(|| AgentError::Config("API version is required".to_string()))?;
        let agent_name = self
            .agent_name
            .ok_or_else(|| AgentError::Config("Agent name is required".to_string()))?;

        // Remove trailing slash from endpoint
        let endpoint = endpoint.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "api-key",
            HeaderValue::from_str(&api_key)
                .map_err(|_| AgentError::Config("Invalid API key format".to_string()))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
            .build()?;

        Ok(AgentServiceClient {
            http_client,
            endpoint,
            api_version,
            agent_name,
        })
    }
}
