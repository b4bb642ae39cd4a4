use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use netplan_trainer_common::config::Config;
use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::task::TaskConfig;
use netplan_trainer_common::success;
use netplan_trainer_core::reasoning::ReasoningOracle;
use netplan_trainer_core::services::ValidationService;
use netplan_trainer_core::simulation::{Resolution, Simulation};
use netplan_trainer_core::view::{CLIENT_NAME, EditorView};
use tracing::{info, warn};

use crate::terminal::{panels, print, spinner};

/// Reads a document from `path`, or from stdin when the path is `-`.
pub async fn read_document(path: &Path) -> anyhow::Result<ConfigurationDocument> {
    if path == Path::new("-") {
        let text = tokio::task::spawn_blocking(|| {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map(|_| text)
        })
        .await
        .context("stdin reader panicked")?
        .context("could not read the configuration from stdin")?;
        return Ok(ConfigurationDocument::new(text));
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;
    Ok(ConfigurationDocument::new(text))
}

/// Runs one check and prints the outcome. Returns whether the client connected.
pub async fn check(file: Option<PathBuf>, task: TaskConfig, cfg: &Config) -> anyhow::Result<bool> {
    let oracle = ReasoningOracle::from_config(&cfg.service)
        .context("could not set up the reasoning client")?;
    let service = ValidationService::new(Arc::new(oracle));

    let mut sim = Simulation::new(task);
    match &file {
        Some(path) => sim.edit_document(read_document(path).await?),
        None => info!("No file given, checking the starting template"),
    }

    if cfg.quiet == 0 {
        panels::print_task(sim.task(), false, cfg.quiet);
        panels::print_editor(&EditorView::new(sim.document(), false), cfg.quiet);
    }

    let spinner = spinner::start("Applying configuration...", spinner::CHECK_TIPS);
    spinner.send_to_queue(format!("Waiting for the verdict from {}...", cfg.service.model));
    let resolution = sim.run_check(&service).await;
    spinner.finish_and_clear();

    panels::print_outcome(&sim, cfg.quiet);

    let connected = matches!(resolution, Resolution::Applied(status) if status.is_connected());
    if connected {
        success!("{CLIENT_NAME} reached the server");
    } else if sim.unavailable_reason().is_some() {
        warn!("The validation service could not be reached");
    }

    print::end_of_program(cfg.quiet);
    Ok(connected)
}
