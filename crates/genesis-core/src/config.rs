//! Configuration loading and typed config structures for the Genesis
//! simulation.
//!
//! The canonical configuration lives in `genesis-config.yaml` at the
//! project root. Each component crate owns the struct for its own section;
//! this module aggregates them, adds the loop and logging sections, and
//! loads the file. Every field has a default, so an empty file is valid.

use std::path::{Path, PathBuf};

use genesis_agents::AgentConfig;
use genesis_mind::MindConfig;
use genesis_physics::PhysicsConfig;
use serde::Deserialize;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "GENESIS_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "genesis-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A section parsed but holds an out-of-range value.
    #[error("invalid `{section}` config: {reason}")]
    Invalid {
        /// The offending section.
        section: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `genesis-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Run name and the optional master seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Forces, geometry and the day cycle.
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// Body, senses and action kinematics.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Memory sizes and decision policy.
    #[serde(default)]
    pub mind: MindConfig,

    /// Frame timing and run bounds.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the config file: `$GENESIS_CONFIG` if set, else
    /// `genesis-config.yaml` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate().map_err(|e| ConfigError::Invalid {
            section: "physics",
            reason: e.to_string(),
        })?;
        self.agent.validate().map_err(|e| ConfigError::Invalid {
            section: "agent",
            reason: e.to_string(),
        })?;
        self.mind.validate().map_err(|e| ConfigError::Invalid {
            section: "mind",
            reason: e.to_string(),
        })?;
        self.simulation.validate()
    }

    /// Physics section with the master seed applied.
    pub fn resolved_physics(&self) -> PhysicsConfig {
        let mut physics = self.physics.clone();
        if let Some(seed) = self.world.seed {
            physics.decoration_seed = seed;
        }
        physics
    }

    /// Mind section with the master seed applied.
    pub fn resolved_mind(&self) -> MindConfig {
        let mut mind = self.mind.clone();
        if self.world.seed.is_some() {
            mind.seed = self.world.seed;
        }
        mind
    }
}

/// Run identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable run name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Master seed. When set it replaces both the decoration seed and the
    /// mind's policy seed, making a run with a fixed frame step fully
    /// reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: None,
        }
    }
}

/// Frame timing and run bounds.
///
/// A value of 0 for either `max_ticks` or `max_real_time_seconds` means
/// unlimited.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of ticks before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,

    /// Maximum wall-clock seconds before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_real_time_seconds: u64,

    /// Real-time milliseconds between frames.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Largest frame time, in seconds, fed to the simulation before the
    /// speed multiplier.
    #[serde(default = "default_max_frame_dt")]
    pub max_frame_dt: f64,

    /// Fixed frame time in seconds. When set, wall-clock frame times are
    /// ignored and every frame advances by exactly this much.
    #[serde(default)]
    pub fixed_dt: Option<f64>,

    /// Speed multiplier at start: 1, 2 or 4.
    #[serde(default = "default_speed")]
    pub speed: u32,

    /// Thoughts included in each snapshot.
    #[serde(default = "default_snapshot_thoughts")]
    pub snapshot_thoughts: usize,

    /// Log a progress line every N ticks (0 = never).
    #[serde(default = "default_report_interval_ticks")]
    pub report_interval_ticks: u64,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_ticks: 0,
            max_real_time_seconds: 0,
            frame_interval_ms: default_frame_interval_ms(),
            max_frame_dt: default_max_frame_dt(),
            fixed_dt: None,
            speed: default_speed(),
            snapshot_thoughts: default_snapshot_thoughts(),
            report_interval_ticks: default_report_interval_ticks(),
        }
    }
}

impl SimulationBoundsConfig {
    /// Check timing values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid {
                section: "simulation",
                reason: format!("max_frame_dt must be positive, got {}", self.max_frame_dt),
            });
        }
        if let Some(dt) = self.fixed_dt
            && !(dt.is_finite() && dt > 0.0)
        {
            return Err(ConfigError::Invalid {
                section: "simulation",
                reason: format!("fixed_dt must be positive, got {dt}"),
            });
        }
        if !crate::operator::SPEEDS.contains(&self.speed) {
            return Err(ConfigError::Invalid {
                section: "simulation",
                reason: format!("speed must be 1, 2 or 4, got {}", self.speed),
            });
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Genesis".to_owned()
}

const fn default_frame_interval_ms() -> u64 {
    16
}

const fn default_max_frame_dt() -> f64 {
    0.05
}

const fn default_speed() -> u32 {
    1
}

const fn default_snapshot_thoughts() -> usize {
    10
}

const fn default_report_interval_ticks() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_owned()
}
