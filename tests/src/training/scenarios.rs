#![cfg(test)]
use std::sync::Arc;

use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::status::SimulationStatus;
use netplan_trainer_common::task::{TaskConfig, TaskField};
use netplan_trainer_common::verdict::{
    Assessment, FALLBACK_ERROR, FALLBACK_EXPLANATION, ValidationVerdict,
};
use netplan_trainer_core::services::ValidationService;
use netplan_trainer_core::simulation::{Resolution, Simulation};
use netplan_trainer_core::view::SimulationView;

use super::utils::{
    DHCP_LAN, GatedOracle, STATIC_LAN, ScriptedOracle, UnreachableOracle, failing, passing,
};

/*************************************************************
                  Checks with a reachable oracle
**************************************************************/

#[tokio::test]
async fn static_address_brings_the_client_online() {
    let oracle = Arc::new(ScriptedOracle::new(passing()));
    let service = ValidationService::new(oracle.clone());

    let mut sim = Simulation::default();
    sim.edit_document(STATIC_LAN);
    let resolution = sim.run_check(&service).await;

    assert_eq!(resolution, Resolution::Applied(SimulationStatus::Success));
    assert_eq!(oracle.calls(), 1);

    let view = SimulationView::from(&sim);
    assert_eq!(view.topology.client_state(), "ONLINE");
    assert_eq!(view.topology.screen(), Some(("CONNECTED", "192.168.10.1/24")));
    assert!(view.feedback.log.iter().all(|line| line.ok));
    assert!(!view.editor.read_only);
}

#[tokio::test]
async fn untouched_template_fails_the_address_check() {
    let oracle = Arc::new(ScriptedOracle::new(failing()));
    let service = ValidationService::new(oracle.clone());

    let mut sim = Simulation::default();
    let resolution = sim.run_check(&service).await;

    assert_eq!(resolution, Resolution::Applied(SimulationStatus::Error));
    assert_eq!(oracle.seen.lock().unwrap()[0].0, ConfigurationDocument::canonical().text());
    let view = SimulationView::from(&sim);
    assert!(!view.feedback.log[2].ok);
    assert_eq!(view.feedback.log[2].label, "IP address assigned correctly");
    assert!(!view.feedback.errors.is_empty());
    assert_eq!(view.topology.client_state(), "NO SIGNAL");
}

#[tokio::test]
async fn dhcp_on_lan_is_reported_as_error() {
    let service = ValidationService::new(Arc::new(ScriptedOracle::new(failing())));

    let mut sim = Simulation::default();
    sim.edit_document(DHCP_LAN);
    sim.run_check(&service).await;

    assert_eq!(sim.status(), SimulationStatus::Error);
    let view = SimulationView::from(&sim);
    assert_eq!(view.topology.client_state(), "NO SIGNAL");
    assert_eq!(
        view.feedback.log.iter().map(|l| l.tag()).collect::<Vec<_>>(),
        ["OK", "OK", "FAIL"]
    );
    assert_eq!(view.feedback.errors, failing().errors);
    assert_eq!(view.feedback.explanation, Some(failing().explanation));
    assert_eq!(sim.document().text(), DHCP_LAN);
}

#[tokio::test]
async fn oracle_sees_the_document_and_task_of_the_check() {
    let oracle = Arc::new(ScriptedOracle::new(passing()));
    let service = ValidationService::new(oracle.clone());

    let task = TaskConfig::default().with_field(TaskField::ServerLanIp, "10.0.0.1/24");
    let mut sim = Simulation::new(task);
    sim.edit_document(STATIC_LAN);
    sim.run_check(&service).await;

    let seen = oracle.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, STATIC_LAN);
    assert_eq!(seen[0].1.server_lan_ip, "10.0.0.1/24");
    assert_eq!(seen[0].1.client_ip, "192.168.10.5");
}

/*************************************************************
                  Checks with an unreachable oracle
**************************************************************/

#[tokio::test]
async fn network_failure_yields_the_fallback_verdict() {
    let service = ValidationService::new(Arc::new(UnreachableOracle));

    let verdict = service
        .validate(&ConfigurationDocument::canonical(), &TaskConfig::default())
        .await;

    assert_eq!(
        verdict,
        ValidationVerdict {
            is_valid_yaml: false,
            syntax_correct: false,
            connection_successful: false,
            errors: vec![FALLBACK_ERROR.to_string()],
            explanation: FALLBACK_EXPLANATION.to_string(),
            corrected_yaml: None,
        }
    );
}

#[tokio::test]
async fn network_failure_puts_the_simulation_in_error() {
    let service = ValidationService::new(Arc::new(UnreachableOracle));
    let mut sim = Simulation::default();
    sim.run_check(&service).await;

    assert_eq!(sim.status(), SimulationStatus::Error);
    assert_eq!(sim.verdict(), Some(&ValidationVerdict::fallback()));
    let reason = sim.unavailable_reason().unwrap_or_default();
    assert!(reason.contains("dns error"), "unexpected reason: {reason}");
    assert!(
        SimulationView::from(&sim)
            .feedback
            .log
            .iter()
            .all(|line| !line.ok)
    );
}

/*************************************************************
                  Reset and ordering of effects
**************************************************************/

#[tokio::test]
async fn verdict_is_cleared_before_the_oracle_answers() {
    let oracle = Arc::new(GatedOracle::new(passing()));
    let service = ValidationService::new(oracle.clone());

    let mut sim = Simulation::default();
    let ticket = sim.begin_check();
    sim.resolve_check(&ticket, Assessment::Judged(failing()));
    assert!(sim.verdict().is_some());

    let ticket = sim.begin_check();
    let pending = {
        let service = service.clone();
        let ticket = ticket.clone();
        tokio::spawn(async move { service.assess(&ticket.document, &ticket.task).await })
    };
    oracle.entered.notified().await;

    assert_eq!(sim.status(), SimulationStatus::Checking);
    assert_eq!(sim.verdict(), None);
    assert!(SimulationView::from(&sim).editor.read_only);

    oracle.release();
    let assessment = pending.await.unwrap();
    assert_eq!(
        sim.resolve_check(&ticket, assessment),
        Resolution::Applied(SimulationStatus::Success)
    );
}

#[tokio::test]
async fn reset_during_check_discards_the_late_verdict() {
    let oracle = Arc::new(GatedOracle::new(passing()));
    let service = ValidationService::new(oracle.clone());

    let mut sim = Simulation::default();
    sim.edit_document(STATIC_LAN);
    let ticket = sim.begin_check();
    let pending = {
        let service = service.clone();
        let ticket = ticket.clone();
        tokio::spawn(async move { service.assess(&ticket.document, &ticket.task).await })
    };
    oracle.entered.notified().await;

    sim.reset();
    assert_eq!(sim.status(), SimulationStatus::Idle);

    oracle.release();
    let assessment = pending.await.unwrap();
    assert_eq!(sim.resolve_check(&ticket, assessment), Resolution::Stale);

    assert_eq!(sim.status(), SimulationStatus::Idle);
    assert!(sim.document().is_canonical());
    assert_eq!(sim.verdict(), None);
    assert_eq!(SimulationView::from(&sim).topology.client_state(), "NO SIGNAL");
}

#[tokio::test]
async fn reset_after_success_disconnects_and_keeps_the_task() {
    let service = ValidationService::new(Arc::new(ScriptedOracle::new(passing())));
    let task = TaskConfig::default().with_field(TaskField::ClientIp, "192.168.10.77");

    let mut sim = Simulation::new(task.clone());
    sim.edit_document(STATIC_LAN);
    sim.run_check(&service).await;
    assert!(sim.status().is_connected());

    sim.reset();
    let view = SimulationView::from(&sim);
    assert!(!view.topology.connected);
    assert_eq!(view.feedback.headline, "Waiting for input...");
    assert!(sim.document().is_canonical());
    assert_eq!(sim.task(), &task);
}
