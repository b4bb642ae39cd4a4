//! # Validation Verdict
//!
//! The structured judgment the reasoning service returns for a configuration.
//!
//! A verdict is trusted as decoded: `connection_successful == true` alongside a
//! non-empty `errors` list is possible and is not rejected.

use serde::{Deserialize, Serialize};

pub const FALLBACK_ERROR: &str = "connection error with the validation service";
pub const FALLBACK_EXPLANATION: &str =
    "could not validate configuration — check network or credentials";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    /// The document is well-formed YAML.
    pub is_valid_yaml: bool,
    /// The document uses the right Netplan keys and structure.
    pub syntax_correct: bool,
    /// The configured address lets the probe client reach the server.
    pub connection_successful: bool,
    pub errors: Vec<String>,
    pub explanation: String,
    /// Suggested fix. Never requested from the service and never displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_yaml: Option<String>,
}

impl ValidationVerdict {
    /// The verdict substituted for every failure to obtain a real one.
    pub fn fallback() -> Self {
        Self {
            is_valid_yaml: false,
            syntax_correct: false,
            connection_successful: false,
            errors: vec![FALLBACK_ERROR.to_string()],
            explanation: FALLBACK_EXPLANATION.to_string(),
            corrected_yaml: None,
        }
    }
}

/// Outcome of asking the oracle, keeping "could not check" apart from "wrong".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment {
    /// The service produced a verdict, positive or negative.
    Judged(ValidationVerdict),
    /// The service could not be reached or its answer could not be decoded.
    Unavailable { reason: String },
}

impl Assessment {
    /// Flattens the outcome into the verdict the panels display.
    pub fn into_verdict(self) -> ValidationVerdict {
        match self {
            Assessment::Judged(verdict) => verdict,
            Assessment::Unavailable { .. } => ValidationVerdict::fallback(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Assessment::Unavailable { .. })
    }
}
