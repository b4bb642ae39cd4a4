use std::sync::Arc;

use netplan_trainer_common::oracle::ConceptExplainer;
use tracing::warn;

/// Shown when the service answers with an empty body.
pub const EMPTY_EXPLANATION: &str = "no data available";
/// Shown when the service call fails.
pub const UNAVAILABLE_EXPLANATION: &str = "information unavailable";

/// The two concepts offered as shortcuts next to the editor.
pub const SHORTCUT_TOPICS: [&str; 2] = ["ethernets", "dhcp4"];

#[derive(Clone)]
pub struct ExplainerService {
    explainer: Arc<dyn ConceptExplainer>,
}

impl ExplainerService {
    pub fn new(explainer: Arc<dyn ConceptExplainer>) -> Self {
        Self { explainer }
    }

    /// Returns the service text verbatim, or a fixed placeholder. Never empty.
    pub async fn explain(&self, topic: &str) -> String {
        match self.explainer.describe(topic).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => EMPTY_EXPLANATION.to_string(),
            Err(e) => {
                warn!("Could not explain '{topic}': {e:#}");
                UNAVAILABLE_EXPLANATION.to_string()
            }
        }
    }
}
