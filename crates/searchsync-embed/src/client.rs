use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};

pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";
pub const DEPLOYMENT_VAR: &str = "AZURE_OPENAI_EMBEDDING_DEPLOYMENT";

/// Where and how to reach the embeddings deployment.
///
/// All four values are required; there are no defaults.
#[derive(Clone, PartialEq, Eq)]
pub struct EmbeddingConfig {
    pub api_key: String,
    /// Base URL, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub api_version: String,
    /// Deployment (model) identifier.
    pub deployment: String,
}

impl fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .finish()
    }
}

impl EmbeddingConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> EmbedResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, failing on the first
    /// missing or blank variable.
    pub fn from_lookup<F>(lookup: F) -> EmbedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |env_var: &str| {
            lookup(env_var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| EmbedError::MissingSetting {
                    env_var: env_var.to_string(),
                })
        };

        Ok(Self {
            api_key: require(API_KEY_VAR)?,
            endpoint: require(ENDPOINT_VAR)?,
            api_version: require(API_VERSION_VAR)?,
            deployment: require(DEPLOYMENT_VAR)?,
        })
    }

    /// Full URL of the embeddings operation, without the query string.
    pub fn embeddings_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Embeddings API client.
#[derive(Debug, Clone)]
pub struct EmbeddingClient {
    http: Client,
    config: EmbeddingConfig,
}

impl EmbeddingClient {
    /// Create a new embeddings client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: EmbeddingConfig) -> EmbedResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("searchsync/0.1.0 (https://github.com/oxur/searchsync)")
            .build()?;

        Ok(Self { http, config })
    }

    /// Embed `text` and return the first result's vector.
    ///
    /// # Errors
    /// Returns an error if `text` is blank, the request fails, the endpoint
    /// answers with a non-success status, or the body carries no embedding.
    pub async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(EmbedError::EmptyInput);
        }

        let url = self.config.embeddings_url();
        log::debug!("Requesting embedding from {}", url);

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .json(&EmbeddingRequest {
                input: text,
                model: &self.config.deployment,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbedError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: EmbeddingResponse = response.json().await.map_err(|e| EmbedError::Parse {
            message: e.to_string(),
        })?;

        let first = body
            .data
            .into_iter()
            .next()
            .ok_or(EmbedError::EmptyResponse)?;

        log::debug!("Received embedding of dimension {}", first.embedding.len());
        Ok(first.embedding)
    }
}

/// Embed `text` using configuration from the environment.
///
/// Fails before any network traffic if a required variable is missing.
pub async fn embed_text(text: &str) -> EmbedResult<Vec<f32>> {
    let config = EmbeddingConfig::from_env()?;
    EmbeddingClient::new(config)?.embed(text).await
}
