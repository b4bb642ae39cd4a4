//! # Simulation State Machine
//!
//! Owns the whole session state: task parameters, configuration document,
//! status, latest verdict and the explainer panel.
//!
//! ```text
//!  idle ──check──▶ checking ──resolve──▶ success | error
//!   ▲                                         │
//!   └──────────────────reset──────────────────┘ (from any state)
//! ```
//!
//! A check is split into [`Simulation::begin_check`] and
//! [`Simulation::resolve_check`] so the network call can run elsewhere. Every
//! check and every reset advance a generation counter; a resolution carrying an
//! older generation is dropped instead of overwriting newer state.
//!
//! The machine does not refuse a second check while one is in flight. Callers
//! guard that with [`Simulation::is_busy`].

use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::status::SimulationStatus;
use netplan_trainer_common::task::{TaskConfig, TaskField};
use netplan_trainer_common::verdict::{Assessment, ValidationVerdict};
use tracing::debug;

use crate::services::{ExplainerService, ValidationService};

/// Snapshot of the inputs of one check, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTicket {
    pub generation: u64,
    pub document: ConfigurationDocument,
    pub task: TaskConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The verdict was stored and the machine moved to this status.
    Applied(SimulationStatus),
    /// A reset or a newer check happened meanwhile; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplainerPanel {
    pub open: bool,
    pub loading: bool,
    pub topic: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Simulation {
    task: TaskConfig,
    document: ConfigurationDocument,
    status: SimulationStatus,
    verdict: Option<ValidationVerdict>,
    unavailable: Option<String>,
    generation: u64,
    explainer: ExplainerPanel,
}

impl Simulation {
    pub fn new(task: TaskConfig) -> Self {
        Self {
            task,
            ..Self::default()
        }
    }

    pub fn task(&self) -> &TaskConfig {
        &self.task
    }

    pub fn document(&self) -> &ConfigurationDocument {
        &self.document
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn verdict(&self) -> Option<&ValidationVerdict> {
        self.verdict.as_ref()
    }

    /// Why the latest verdict is a fallback, if it is one.
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.unavailable.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn explainer(&self) -> &ExplainerPanel {
        &self.explainer
    }

    pub fn is_busy(&self) -> bool {
        self.status == SimulationStatus::Checking
    }

    pub fn set_task_field(&mut self, field: TaskField, value: impl Into<String>) {
        self.task = self.task.with_field(field, value);
    }

    pub fn edit_document(&mut self, document: impl Into<ConfigurationDocument>) {
        self.document = document.into();
    }

    /// Enters `checking` and drops the previous verdict before anything is sent.
    pub fn begin_check(&mut self) -> CheckTicket {
        self.generation += 1;
        self.status = SimulationStatus::Checking;
        self.verdict = None;
        self.unavailable = None;
        debug!("check #{} started", self.generation);

        CheckTicket {
            generation: self.generation,
            document: self.document.clone(),
            task: self.task.clone(),
        }
    }

    /// Applies the outcome of `ticket` unless the machine moved on since.
    pub fn resolve_check(&mut self, ticket: &CheckTicket, assessment: Assessment) -> Resolution {
        if ticket.generation != self.generation {
            debug!(
                "dropping stale check #{} (current #{})",
                ticket.generation, self.generation
            );
            return Resolution::Stale;
        }

        self.unavailable = match &assessment {
            Assessment::Unavailable { reason } => Some(reason.clone()),
            Assessment::Judged(_) => None,
        };
        let verdict = assessment.into_verdict();
        self.status = if verdict.connection_successful {
            SimulationStatus::Success
        } else {
            SimulationStatus::Error
        };
        self.verdict = Some(verdict);

        Resolution::Applied(self.status)
    }

    /// Runs a whole check in place: begin, ask the oracle, resolve.
    pub async fn run_check(&mut self, service: &ValidationService) -> Resolution {
        let ticket = self.begin_check();
        let assessment = service.assess(&ticket.document, &ticket.task).await;
        self.resolve_check(&ticket, assessment)
    }

    /// Back to `idle` with the canonical document. Task parameters are kept.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.document = ConfigurationDocument::canonical();
        self.status = SimulationStatus::Idle;
        self.verdict = None;
        self.unavailable = None;
    }

    pub fn begin_explain(&mut self, topic: impl Into<String>) {
        self.explainer = ExplainerPanel {
            open: true,
            loading: true,
            topic: topic.into(),
            text: String::new(),
        };
    }

    pub fn finish_explain(&mut self, text: String) {
        self.explainer.text = text;
        self.explainer.loading = false;
    }

    pub async fn run_explain(&mut self, service: &ExplainerService, topic: &str) {
        self.begin_explain(topic);
        let text = service.explain(topic).await;
        self.finish_explain(text);
    }

    pub fn dismiss_explainer(&mut self) {
        self.explainer.open = false;
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
