//! # Netplan Trainer Core
//!
//! Everything between the terminal and the reasoning service.
//!
//! * **[`reasoning`]**: HTTP client and port adapters for the external model.
//! * **[`services`]**: total wrappers that never fail towards the caller.
//! * **[`simulation`]**: the idle / checking / success / error state machine.
//! * **[`view`]**: projections of the simulation for the panels.
//!
//! High-level code should depend on the ports in `netplan_trainer_common::oracle`
//! rather than on [`reasoning`] directly, so tests can swap in a stub oracle.

pub mod reasoning;
pub mod services;
pub mod simulation;
pub mod view;
