#![cfg(test)]
use std::sync::Arc;

use netplan_trainer_common::config::ServiceConfig;
use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::task::TaskConfig;
use netplan_trainer_common::verdict::{Assessment, ValidationVerdict};
use netplan_trainer_core::reasoning::ReasoningOracle;
use netplan_trainer_core::services::explainer::{EMPTY_EXPLANATION, UNAVAILABLE_EXPLANATION};
use netplan_trainer_core::services::{ExplainerService, ValidationService};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::utils::{STATIC_LAN, passing};

const MODEL_PATH: &str = "/models/test-model:generateContent";

async fn setup(api_key: Option<&str>) -> (MockServer, Arc<ReasoningOracle>) {
    let server = MockServer::start().await;
    let config = ServiceConfig::new(api_key.map(str::to_string))
        .with_base_url(server.uri())
        .with_model("test-model");
    let oracle = ReasoningOracle::from_config(&config).expect("client builds");
    (server, Arc::new(oracle))
}

fn answer(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

fn verdict_json(verdict: &ValidationVerdict) -> String {
    serde_json::to_string(verdict).unwrap()
}

/*************************************************************
                        Validation
**************************************************************/

#[tokio::test]
async fn structured_answer_becomes_a_verdict() {
    let (server, oracle) = setup(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .and(body_string_contains("192.168.10.1/24"))
        .and(body_string_contains("addresses: [192.168.10.1/24]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(&verdict_json(&passing()))))
        .expect(1)
        .mount(&server)
        .await;

    let service = ValidationService::new(oracle);
    let assessment = service
        .assess(&ConfigurationDocument::new(STATIC_LAN), &TaskConfig::default())
        .await;

    assert_eq!(assessment, Assessment::Judged(passing()));
}

#[tokio::test]
async fn server_error_falls_back() {
    let (server, oracle) = setup(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let service = ValidationService::new(oracle);
    let document = ConfigurationDocument::canonical();
    let task = TaskConfig::default();

    let assessment = service.assess(&document, &task).await;
    assert!(assessment.is_unavailable());
    assert_eq!(assessment.into_verdict(), ValidationVerdict::fallback());
}

#[tokio::test]
async fn missing_key_falls_back_without_a_request() {
    let (server, oracle) = setup(None).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(&verdict_json(&passing()))))
        .expect(0)
        .mount(&server)
        .await;

    let verdict = ValidationService::new(oracle)
        .validate(&ConfigurationDocument::canonical(), &TaskConfig::default())
        .await;
    assert_eq!(verdict, ValidationVerdict::fallback());
}

#[tokio::test]
async fn prose_instead_of_json_falls_back() {
    let (server, oracle) = setup(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("Looks fine to me!")))
        .mount(&server)
        .await;

    let assessment = ValidationService::new(oracle)
        .assess(&ConfigurationDocument::canonical(), &TaskConfig::default())
        .await;
    assert!(assessment.is_unavailable());
}

#[tokio::test]
async fn empty_answer_falls_back() {
    let (server, oracle) = setup(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let verdict = ValidationService::new(oracle)
        .validate(&ConfigurationDocument::canonical(), &TaskConfig::default())
        .await;
    assert_eq!(verdict, ValidationVerdict::fallback());
}

/*************************************************************
                        Explanations
**************************************************************/

#[tokio::test]
async fn explanation_is_returned_verbatim() {
    let (server, oracle) = setup(Some("test-key")).await;
    let text = "`dhcp4` turns DHCP for IPv4 on or off.\nSet it to `no` for static addresses.";

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_string_contains("dhcp4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(text)))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(ExplainerService::new(oracle).explain("dhcp4").await, text);
}

#[tokio::test]
async fn silent_explainer_shows_placeholder() {
    let (server, oracle) = setup(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("")))
        .mount(&server)
        .await;

    assert_eq!(
        ExplainerService::new(oracle).explain("ethernets").await,
        EMPTY_EXPLANATION
    );
}

#[tokio::test]
async fn failing_explainer_shows_placeholder() {
    let (server, oracle) = setup(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert_eq!(
        ExplainerService::new(oracle).explain("ethernets").await,
        UNAVAILABLE_EXPLANATION
    );
}
