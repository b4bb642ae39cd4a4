use std::sync::Arc;

use anyhow::Context;
use netplan_trainer_common::config::Config;
use netplan_trainer_core::reasoning::ReasoningOracle;
use netplan_trainer_core::services::ExplainerService;
use netplan_trainer_core::simulation::Simulation;

use crate::terminal::{panels, spinner};

pub async fn explain(topic: &str, cfg: &Config) -> anyhow::Result<()> {
    let oracle = ReasoningOracle::from_config(&cfg.service)
        .context("could not set up the reasoning client")?;
    let service = ExplainerService::new(Arc::new(oracle));

    let mut sim = Simulation::default();
    let spinner = spinner::start(&format!("Looking up '{topic}'..."), spinner::EXPLAIN_TIPS);
    sim.run_explain(&service, topic).await;
    spinner.finish_and_clear();

    panels::print_explainer(sim.explainer(), cfg.quiet);
    Ok(())
}
