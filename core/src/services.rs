//! # Application Services
//!
//! Total wrappers around the outbound ports: whatever happens on the wire,
//! callers get a value back.
//!
//! * [`validation::ValidationService`]: turns a document and a task into a verdict.
//! * [`explainer::ExplainerService`]: turns a topic into a short explanation.

pub mod explainer;
pub mod validation;

pub use explainer::ExplainerService;
pub use validation::ValidationService;
