//! GitHub Actions harness for the checklist.
//!
//! Reads the action inputs and the triggering event, wires the GitHub REST
//! client into the rule engine, then publishes the report as log output,
//! workflow annotations, and step outputs.

pub mod app;
pub mod error;
pub mod event;
pub mod github;
pub mod inputs;
pub mod outputs;

pub use error::ActionError;
pub use event::ActionContext;
pub use inputs::ActionInputs;
