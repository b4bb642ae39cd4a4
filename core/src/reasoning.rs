//! # Reasoning Service
//!
//! HTTP access to the external model that judges configurations.
//!
//! * [`client`]: transport, authentication and response unwrapping.
//! * [`wire`]: request/response bodies of the `generateContent` endpoint.
//! * [`prompt`]: the instructions and the output schema sent with each call.
//! * [`oracle`]: adapters implementing the outbound ports on top of the client.

pub mod client;
pub mod oracle;
pub mod prompt;
pub mod wire;

use reqwest::StatusCode;
use thiserror::Error;

pub use client::ReasoningClient;
pub use oracle::ReasoningOracle;

#[derive(Error, Debug)]
pub enum ReasoningError {
    #[error("no API key configured for the reasoning service")]
    MissingCredential,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("reasoning service answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("reasoning service returned an empty response")]
    EmptyResponse,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
