use netplan_trainer_common::config::ServiceConfig;
use reqwest::Client;
use tracing::debug;

use super::ReasoningError;
use super::wire::{GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Thin client for the `generateContent` endpoint.
///
/// One call, one request: there is no retry, no timeout and no caching.
#[derive(Debug, Clone)]
pub struct ReasoningClient {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl ReasoningClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ReasoningError> {
        let http_client = Client::builder()
            .user_agent(concat!("netplan-trainer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http_client, config))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_client(http_client: Client, config: &ServiceConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Sends `request` and returns the text of the first candidate.
    ///
    /// `Ok(None)` means the service answered successfully but said nothing.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<String>, ReasoningError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ReasoningError::MissingCredential)?;

        debug!("POST {} (model {})", self.endpoint(), self.model);
        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ReasoningError::Status { status, body });
        }
        if body.trim().is_empty() {
            return Ok(None);
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&body)?;
        Ok(decoded.text())
    }
}
