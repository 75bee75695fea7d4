//! Frame clock, tick cycle and orchestration for the Genesis simulation.
//!
//! This crate wires the physics engine, the agent and the mind into the
//! per-frame cycle and wraps it in an async loop a host can pause, speed
//! up, reset and stop.
//!
//! # Modules
//!
//! - [`clock`] -- Tick counter and frame-time clamping.
//! - [`config`] -- Configuration loading from `genesis-config.yaml` into
//!   strongly-typed structs.
//! - [`operator`] -- Shared pause, speed, reset and stop controls.
//! - [`tick`] -- [`SimulationState`] and the ordered single-tick cycle.
//! - [`snapshot`] -- Display snapshots of the running simulation.
//! - [`runner`] -- The bounded async frame loop.
//!
//! [`SimulationState`]: tick::SimulationState

pub mod clock;
pub mod config;
pub mod operator;
pub mod runner;
pub mod snapshot;
pub mod tick;

pub use clock::{ClockError, FrameClock};
pub use config::{ConfigError, SimulationConfig};
pub use operator::{OperatorState, SimulationEndReason};
pub use runner::{
    NoOpCallback, RunnerError, SimulationResult, TickCallback, log_simulation_end, run_simulation,
};
pub use tick::{SimulationState, TickError, TickSummary, run_tick};
