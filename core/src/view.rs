//! # Panel Views
//!
//! Read-only projections of a [`Simulation`] for the presentation layer.
//! Nothing here holds state of its own.

use netplan_trainer_common::document::{ConfigurationDocument, DOCUMENT_PATH};
use netplan_trainer_common::status::SimulationStatus;
use netplan_trainer_common::task::TaskConfig;
use netplan_trainer_common::verdict::ValidationVerdict;

use crate::reasoning::prompt::{LAN_INTERFACE, WAN_INTERFACE};
use crate::simulation::Simulation;

pub const CLIENT_NAME: &str = "Client 01";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine {
    pub label: &'static str,
    pub ok: bool,
}

impl LogLine {
    pub fn tag(&self) -> &'static str {
        if self.ok { "OK" } else { "FAIL" }
    }
}

/// The three system-log lines, in display order.
pub fn log_lines(verdict: &ValidationVerdict) -> [LogLine; 3] {
    [
        LogLine {
            label: "YAML syntax",
            ok: verdict.is_valid_yaml,
        },
        LogLine {
            label: "Netplan keys",
            ok: verdict.syntax_correct,
        },
        LogLine {
            label: "IP address assigned correctly",
            ok: verdict.connection_successful,
        },
    ]
}

pub fn headline(status: SimulationStatus) -> &'static str {
    match status {
        SimulationStatus::Idle => "Waiting for input...",
        SimulationStatus::Checking => "Checking configuration...",
        SimulationStatus::Success => "Configuration applied",
        SimulationStatus::Error => "Configuration error",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub status: SimulationStatus,
    pub headline: &'static str,
    /// Empty until a verdict is present.
    pub log: Vec<LogLine>,
    pub errors: Vec<String>,
    pub explanation: Option<String>,
    /// Set when the verdict is a stand-in for an unreachable service.
    pub unavailable: Option<String>,
}

impl FeedbackView {
    pub fn new(
        status: SimulationStatus,
        verdict: Option<&ValidationVerdict>,
        unavailable: Option<&str>,
    ) -> Self {
        Self {
            status,
            headline: headline(status),
            log: verdict.map(|v| log_lines(v).to_vec()).unwrap_or_default(),
            errors: verdict.map(|v| v.errors.clone()).unwrap_or_default(),
            explanation: verdict.map(|v| v.explanation.clone()),
            unavailable: unavailable.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyView {
    pub connected: bool,
    pub wan_ip: String,
    pub server_lan_ip: String,
    pub client_range: String,
    pub client_ip: String,
    pub wan_interface: &'static str,
    pub lan_interface: &'static str,
}

impl TopologyView {
    pub fn new(connected: bool, task: &TaskConfig) -> Self {
        Self {
            connected,
            wan_ip: task.wan_ip.clone(),
            server_lan_ip: task.server_lan_ip.clone(),
            client_range: task.client_range.clone(),
            client_ip: task.client_ip.clone(),
            wan_interface: WAN_INTERFACE,
            lan_interface: LAN_INTERFACE,
        }
    }

    pub fn client_state(&self) -> &'static str {
        if self.connected { "ONLINE" } else { "NO SIGNAL" }
    }

    /// What the client's monitor shows.
    pub fn screen(&self) -> Option<(&'static str, &str)> {
        self.connected
            .then_some(("CONNECTED", self.server_lan_ip.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub path: &'static str,
    /// Numbered rows; rows past the end of the text are empty.
    pub rows: Vec<(usize, String)>,
    pub read_only: bool,
}

impl EditorView {
    pub fn new(document: &ConfigurationDocument, read_only: bool) -> Self {
        let mut lines = document.text().split('\n');
        let rows = (1..=document.editor_rows())
            .map(|number| (number, lines.next().unwrap_or_default().to_string()))
            .collect();

        Self {
            path: DOCUMENT_PATH,
            rows,
            read_only,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationView {
    pub feedback: FeedbackView,
    pub topology: TopologyView,
    pub editor: EditorView,
}

impl From<&Simulation> for SimulationView {
    fn from(sim: &Simulation) -> Self {
        Self {
            feedback: FeedbackView::new(sim.status(), sim.verdict(), sim.unavailable_reason()),
            topology: TopologyView::new(sim.status().is_connected(), sim.task()),
            editor: EditorView::new(sim.document(), sim.is_busy()),
        }
    }
}
