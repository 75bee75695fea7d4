//! Error types for the `genesis-agents` crate.
//!
//! Only construction can fail. Sensing, acting and updating are total;
//! a refused action is reported through a `bool`, not an error.

use genesis_physics::PhysicsError;

/// Errors that can occur when building an agent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgentError {
    /// A configuration value is outside its valid range.
    #[error("invalid agent config: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// The body could not be created.
    #[error("invalid body: {0}")]
    Body(#[from] PhysicsError),
}
