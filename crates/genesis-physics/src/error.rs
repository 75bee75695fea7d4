//! Error types for the `genesis-physics` crate.
//!
//! The integrator itself is total; only building an engine from a
//! configuration can fail.

/// Errors that can occur when constructing the physics engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// A configuration value is outside its valid range.
    #[error("invalid physics config: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}
