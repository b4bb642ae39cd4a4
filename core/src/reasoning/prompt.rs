use netplan_trainer_common::document::ConfigurationDocument;
use netplan_trainer_common::task::TaskConfig;
use serde_json::{Value, json};

use super::wire::GenerateContentRequest;

pub const WAN_INTERFACE: &str = "enp3s0";
pub const LAN_INTERFACE: &str = "enp4s0";

pub fn validation_prompt(document: &ConfigurationDocument, task: &TaskConfig) -> String {
    format!(
        "You are a validator of Netplan configurations for Ubuntu.

TASK:
The user must configure a static IP address on the server's LAN interface so that it matches the assignment.

ASSIGNMENT PARAMETERS:
- Target server IP (LAN): {server}
- Client trying to connect: {client} (must be in the same subnet as the server)
- WAN interface (for reference): {wan}
- LAN interface to configure: {lan} (or eth1, or any second interface)

YOUR GOAL:
1. Check the YAML syntax.
2. Check whether the interface is assigned the correct IP address ({server}).
3. If the IP is configured correctly, assume the client ({client}) can connect (connectionSuccessful = true).

INPUT YAML:
{yaml}
",
        server = task.server_lan_ip,
        client = task.client_ip,
        wan = WAN_INTERFACE,
        lan = LAN_INTERFACE,
        yaml = document.text(),
    )
}

pub fn explanation_prompt(topic: &str) -> String {
    format!(
        "Briefly and clearly explain the Netplan concept \"{topic}\" to a beginner. \
         Use no more than 3 sentences."
    )
}

/// Output schema of a verdict. `correctedYaml` is deliberately absent.
pub fn verdict_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isValidYaml": {
                "type": "BOOLEAN",
                "description": "Is the YAML syntax valid?"
            },
            "syntaxCorrect": {
                "type": "BOOLEAN",
                "description": "Are netplan keys correct?"
            },
            "connectionSuccessful": {
                "type": "BOOLEAN",
                "description": "Is the correct IP assigned to allow the client to connect?"
            },
            "errors": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of specific errors found"
            },
            "explanation": {
                "type": "STRING",
                "description": "Brief educational explanation of what is wrong or right"
            }
        },
        "required": [
            "isValidYaml",
            "syntaxCorrect",
            "connectionSuccessful",
            "errors",
            "explanation"
        ]
    })
}

pub fn validation_request(
    document: &ConfigurationDocument,
    task: &TaskConfig,
) -> GenerateContentRequest {
    GenerateContentRequest::from_prompt(validation_prompt(document, task))
        .with_schema(verdict_schema())
}

pub fn explanation_request(topic: &str) -> GenerateContentRequest {
    GenerateContentRequest::from_prompt(explanation_prompt(topic))
}
