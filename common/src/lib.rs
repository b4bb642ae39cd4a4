//! # Netplan Trainer Common
//!
//! Domain models and outbound contracts shared by every crate of the workspace.
//!
//! * **[`task`]**: the exercise parameters a configuration is judged against.
//! * **[`document`]**: the configuration text the user edits.
//! * **[`verdict`]**: the structured judgment returned by the reasoning service.
//! * **[`status`]**: the simulation status shown by every panel.
//! * **[`oracle`]**: traits the reasoning-service adapters implement.

pub mod config;
pub mod document;
pub mod macros;
pub mod oracle;
pub mod status;
pub mod task;
pub mod verdict;

#[doc(hidden)]
pub use tracing;
