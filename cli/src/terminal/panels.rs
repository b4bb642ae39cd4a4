//! Terminal renderings of the simulation panels.
//!
//! Each `*_lines` function builds the panel as plain lines so it can be
//! inspected; the matching `print_*` function writes it out.

use colored::*;
use netplan_trainer_common::status::SimulationStatus;
use netplan_trainer_common::task::{TaskConfig, TaskField};
use netplan_trainer_core::simulation::{ExplainerPanel, Simulation};
use netplan_trainer_core::view::{EditorView, FeedbackView, SimulationView, TopologyView};

use crate::terminal::{colors, print};

const DIAGRAM_WIDTH: usize = 40;

pub fn print_task(task: &TaskConfig, locked: bool, q_level: u8) {
    print::header("task", q_level);
    let key_width = TaskField::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0);
    for field in TaskField::ALL {
        let value: ColoredString = match field {
            TaskField::ServerLanIp | TaskField::ClientIp => {
                task.get(field).color(colors::IPV4_ADDR)
            }
            TaskField::ClientRange => task.get(field).color(colors::RANGE),
            TaskField::WanIp => task.get(field).color(colors::ACCENT),
        };
        print::aligned_line(field.label(), key_width, value);
    }
    if locked {
        print::print_status(
            "inputs are locked while the configuration is checked"
                .italic()
                .to_string(),
        );
    }
}

pub fn editor_lines(view: &EditorView) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 1);
    let lock = if view.read_only { " (read-only)" } else { "" };
    lines.push(format!("{}{}", view.path.color(colors::MUTED), lock.italic()));

    let number_width = view.rows.len().to_string().len();
    for (number, text) in &view.rows {
        let gutter = format!("{:>width$} │", number, width = number_width).color(colors::MUTED);
        lines.push(format!("{} {}", gutter, text));
    }
    lines
}

pub fn print_editor(view: &EditorView, q_level: u8) {
    print::header("editor", q_level);
    for line in editor_lines(view) {
        print::print(&line);
    }
}

fn centered(text: &str) -> String {
    let width = console::measure_text_width(text);
    let pad = DIAGRAM_WIDTH.saturating_sub(width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

pub fn topology_lines(view: &TopologyView) -> Vec<String> {
    let link_color = if view.connected { colors::LINK_UP } else { colors::LINK_DOWN };
    let lan_badge = if view.connected {
        view.lan_interface.color(colors::LINK_UP).bold()
    } else {
        view.lan_interface.color(colors::LINK_DOWN)
    };
    let cable = if view.connected { "║" } else { "┆" };

    let mut lines = vec![
        centered(&"( Internet (WAN) )".color(colors::ACCENT).to_string()),
        centered(&view.wan_ip.color(colors::MUTED).to_string()),
        centered(&"│".color(colors::ACCENT).to_string()),
        centered("┌──────────────────┐"),
        centered(&format!("│      {}      │", "SERVER".bold())),
        centered(&format!(
            "│  {}  {}  │",
            view.wan_interface.color(colors::ACCENT),
            lan_badge
        )),
        centered("└──────────────────┘"),
        centered(&cable.color(link_color).to_string()),
        centered(&cable.color(link_color).to_string()),
    ];

    lines.push(centered("┌──────────────┐"));
    match view.screen() {
        Some((banner, address)) => {
            lines.push(centered(&format!("│ {:^12} │", banner).green().to_string()));
            lines.push(centered(&format!("│ {:^12} │", address).green().to_string()));
        }
        None => {
            lines.push(centered(&format!("│ {:^12} │", "╲")));
            lines.push(centered(&format!("│ {:^12} │", "")));
        }
    }
    lines.push(centered("└──────────────┘"));

    let client_state = if view.connected {
        view.client_state().color(colors::OK).bold()
    } else {
        view.client_state().color(colors::FAIL)
    };
    lines.push(centered(&netplan_trainer_core::view::CLIENT_NAME.bold().to_string()));
    lines.push(centered(&view.client_ip.color(colors::MUTED).to_string()));
    lines.push(centered(&client_state.to_string()));
    lines
}

pub fn print_topology(view: &TopologyView, q_level: u8) {
    print::header("topology", q_level);
    for line in topology_lines(view) {
        print::print(&line);
    }
}

pub fn feedback_lines(view: &FeedbackView) -> Vec<String> {
    let headline: ColoredString = match view.status {
        SimulationStatus::Idle => view.headline.color(colors::MUTED),
        SimulationStatus::Checking => view.headline.color(colors::ACCENT),
        SimulationStatus::Success => format!("✔ {}", view.headline).color(colors::OK).bold(),
        SimulationStatus::Error => format!("✘ {}", view.headline).color(colors::FAIL).bold(),
    };
    let mut lines = vec![headline.to_string()];

    if view.log.is_empty() {
        return lines;
    }

    lines.push(String::new());
    lines.push("System log:".bold().to_string());
    for entry in &view.log {
        let color = if entry.ok { colors::OK } else { colors::FAIL };
        lines.push(format!("[{}] {}", entry.tag(), entry.label).color(color).to_string());
    }

    if !view.errors.is_empty() {
        lines.push(String::new());
        lines.push("Detected problems:".color(colors::FAIL).bold().to_string());
        for error in &view.errors {
            lines.push(format!("  • {}", error).color(colors::FAIL).to_string());
        }
    }

    if let Some(explanation) = &view.explanation {
        lines.push(String::new());
        lines.push("Analysis:".color(colors::ACCENT).bold().to_string());
        lines.push(explanation.clone());
    }

    if let Some(reason) = &view.unavailable {
        lines.push(String::new());
        lines.push(format!("(service unavailable: {reason})").color(colors::MUTED).to_string());
    }

    lines
}

pub fn print_feedback(view: &FeedbackView, q_level: u8) {
    print::header("feedback", q_level);
    for line in feedback_lines(view) {
        print::print(&line);
    }
}

pub fn explainer_lines(panel: &ExplainerPanel) -> Vec<String> {
    let mut lines = vec![format!("📖 {}", panel.topic.bold())];
    if panel.loading {
        lines.push("asking the model...".italic().to_string());
    } else {
        lines.push(panel.text.clone());
    }
    lines
}

pub fn print_explainer(panel: &ExplainerPanel, q_level: u8) {
    if !panel.open {
        return;
    }
    print::header("concept", q_level);
    for line in explainer_lines(panel) {
        print::print(&line);
    }
}

/// Diagram and feedback, the two panels that change after a check.
pub fn print_outcome(sim: &Simulation, q_level: u8) {
    let view = SimulationView::from(sim);
    if q_level < 2 {
        print_topology(&view.topology, q_level);
    }
    print_feedback(&view.feedback, q_level);
}

pub fn print_all(sim: &Simulation, q_level: u8) {
    let view = SimulationView::from(sim);
    print_task(sim.task(), sim.is_busy(), q_level);
    print_editor(&view.editor, q_level);
    print_topology(&view.topology, q_level);
    print_feedback(&view.feedback, q_level);
    print_explainer(sim.explainer(), q_level);
}
