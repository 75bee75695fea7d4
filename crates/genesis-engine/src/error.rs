//! Error types for the engine binary.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: genesis_core::ConfigError,
    },

    /// The simulation could not be built.
    #[error("setup error: {source}")]
    Setup {
        /// The underlying construction error.
        #[from]
        source: genesis_core::TickError,
    },

    /// Simulation runner failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: genesis_core::RunnerError,
    },

    /// The final report could not be written.
    #[error("report error: {source}")]
    Report {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// The log filter in the config file is not a valid directive.
    #[error("invalid log level `{level}`: {reason}")]
    LogFilter {
        /// The configured level.
        level: String,
        /// Why it was rejected.
        reason: String,
    },
}
