//! # Outbound Ports
//!
//! Contracts for the external reasoning service.
//!
//! Implementations report failures through `anyhow::Result`; the client
//! functions in `netplan_trainer_core` turn every failure into a fixed
//! fallback so callers never see an error. Test doubles implement these
//! traits directly.

use async_trait::async_trait;

use crate::document::ConfigurationDocument;
use crate::task::TaskConfig;
use crate::verdict::ValidationVerdict;

/// Judges whether a configuration document satisfies a task.
#[async_trait]
pub trait ValidationOracle: Send + Sync {
    async fn judge(
        &self,
        document: &ConfigurationDocument,
        task: &TaskConfig,
    ) -> anyhow::Result<ValidationVerdict>;
}

/// Produces a short prose explanation of a configuration concept.
///
/// `Ok(None)` means the service answered with an empty body.
#[async_trait]
pub trait ConceptExplainer: Send + Sync {
    async fn describe(&self, topic: &str) -> anyhow::Result<Option<String>>;
}
