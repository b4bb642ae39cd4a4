use std::sync::Arc;

use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::oracle::ValidationOracle;
use netplan_trainer_common::task::TaskConfig;
use netplan_trainer_common::verdict::{Assessment, ValidationVerdict};
use tracing::error;

#[derive(Clone)]
pub struct ValidationService {
    oracle: Arc<dyn ValidationOracle>,
}

impl ValidationService {
    pub fn new(oracle: Arc<dyn ValidationOracle>) -> Self {
        Self { oracle }
    }

    /// Asks the oracle once, keeping infrastructure failures distinguishable.
    pub async fn assess(&self, document: &ConfigurationDocument, task: &TaskConfig) -> Assessment {
        match self.oracle.judge(document, task).await {
            Ok(verdict) => Assessment::Judged(verdict),
            Err(e) => {
                error!("Validation error: {e:#}");
                Assessment::Unavailable {
                    reason: format!("{e:#}"),
                }
            }
        }
    }

    /// Asks the oracle once. Failures come back as [`ValidationVerdict::fallback`].
    pub async fn validate(
        &self,
        document: &ConfigurationDocument,
        task: &TaskConfig,
    ) -> ValidationVerdict {
        self.assess(document, task).await.into_verdict()
    }
}
