use async_trait::async_trait;
use netplan_trainer_common::config::ServiceConfig;
use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::oracle::{ConceptExplainer, ValidationOracle};
use netplan_trainer_common::task::TaskConfig;
use netplan_trainer_common::verdict::ValidationVerdict;

use super::{ReasoningClient, ReasoningError, prompt};

/// Implements both outbound ports on top of the reasoning service.
#[derive(Debug, Clone)]
pub struct ReasoningOracle {
    client: ReasoningClient,
}

impl ReasoningOracle {
    pub fn new(client: ReasoningClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, ReasoningError> {
        Ok(Self::new(ReasoningClient::new(config)?))
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl ValidationOracle for ReasoningOracle {
    async fn judge(
        &self,
        document: &ConfigurationDocument,
        task: &TaskConfig,
    ) -> anyhow::Result<ValidationVerdict> {
        let request = prompt::validation_request(document, task);
        let text = self
            .client
            .generate(&request)
            .await?
            .ok_or(ReasoningError::EmptyResponse)?;

        let verdict: ValidationVerdict =
            serde_json::from_str(&text).map_err(ReasoningError::Decode)?;
        Ok(verdict)
    }
}

#[async_trait]
impl ConceptExplainer for ReasoningOracle {
    async fn describe(&self, topic: &str) -> anyhow::Result<Option<String>> {
        let request = prompt::explanation_request(topic);
        Ok(self.client.generate(&request).await?)
    }
}
