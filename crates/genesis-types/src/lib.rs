//! Shared type definitions for the Genesis simulation.
//!
//! This crate is the single source of truth for the values that cross crate
//! boundaries: what the body senses, what the mind concludes, and what a
//! display harness draws. Host-facing types flow downstream to `TypeScript`
//! via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for simulation sessions
//! - [`enums`] -- Closed vocabularies (actions, feelings, law kinds, beliefs)
//! - [`percept`] -- The per-tick sensory snapshot
//! - [`structs`] -- Laws, thoughts, mind summaries and snapshots
//! - [`embodiment`] -- Read-only body view consulted by the mind

pub mod embodiment;
pub mod enums;
pub mod ids;
pub mod percept;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use embodiment::Embodiment;
pub use enums::{
    Action, BeliefFlag, DayPeriod, ExperimentPhase, HorizontalDirection, LawKind, ObjectKind,
    ParseActionError, RelativeHeight, TemperatureFeeling, ThoughtKind, WindFeeling,
};
pub use ids::SimulationId;
pub use percept::{
    BodySense, Percept, SkyColor, SunPosition, TemperatureSense, TimePerception, TouchSense,
    Vec2, VisibleObject, VisionSense, WindSense,
};
pub use structs::{
    BodyState, EnvironmentState, ExperienceCounts, ForceBreakdown, Law, MindState, SensorReading,
    SimulationSnapshot, Thought, Vitals,
};
