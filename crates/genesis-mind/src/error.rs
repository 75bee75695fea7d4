//! Error types for the `genesis-mind` crate.

/// Errors that can occur when building a mind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MindError {
    /// A configuration value is outside its valid range.
    #[error("invalid mind config: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}
