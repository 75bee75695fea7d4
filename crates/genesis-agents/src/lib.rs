//! The embodied agent for the Genesis simulation.
//!
//! This crate owns the body and everything it can do on its own: sense the
//! world through the physics engine, attempt actions with energy costs and
//! cooldowns, and recover or suffer between ticks. It never decides what to
//! do; that is the mind's job, reached through
//! [`Embodiment`](genesis_types::Embodiment).
//!
//! # Modules
//!
//! - [`agent`] -- The [`Agent`] struct and its accessors
//! - [`actions`] -- Action preconditions and effects
//! - [`costs`] -- Fixed energy cost per action
//! - [`sensing`] -- Percept assembly and qualitative labels
//! - [`history`] -- Bounded sensor history with typed accessors
//! - [`vitals`] -- Per-tick cooldown, energy, pain and comfort upkeep
//! - [`config`] -- Tunable body and kinematics parameters
//! - [`error`] -- Construction errors

pub mod actions;
pub mod agent;
pub mod config;
pub mod costs;
pub mod error;
pub mod history;
pub mod sensing;
pub mod vitals;

pub use agent::Agent;
pub use config::AgentConfig;
pub use costs::energy_cost;
pub use error::AgentError;
pub use history::SensorHistory;
