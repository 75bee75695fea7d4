//! Record types shared between the simulation crates and the display
//! harness: laws, thoughts, mind summaries, per-step force diagnostics and
//! the full simulation snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Action, ExperimentPhase, LawKind, ThoughtKind};
use crate::ids::SimulationId;
use crate::percept::{SkyColor, SunPosition, Vec2};

// ---------------------------------------------------------------------------
// Mind records
// ---------------------------------------------------------------------------

/// A statistically confirmed regularity.
///
/// Laws are append-only: once recorded, neither confidence nor evidence
/// ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Law {
    /// Unique key of the law.
    pub name: LawKind,
    /// What the mind believes.
    pub description: String,
    /// Informal statement of the relationship.
    pub formula: String,
    /// Confidence at first detection, in `[0, 1]`.
    pub confidence: f64,
    /// Number of samples backing the detection.
    pub evidence: usize,
}

/// One entry in the thought stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Thought {
    /// Simulated time (seconds) at which the thought occurred.
    pub sim_time: f64,
    /// Wall-clock time the thought was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The thought itself.
    pub text: String,
    /// Category of the thought.
    pub kind: ThoughtKind,
}

/// Running tallies of what the body has been through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ExperienceCounts {
    /// Jumps the mind has decided on.
    pub jumps: u32,
    /// Times the body left the ground.
    pub falls: u32,
    /// Impacts above the notable threshold.
    pub impacts: u32,
    /// Forced moves to the left during the motion experiment.
    pub moves_left: u32,
    /// Forced moves to the right during the motion experiment.
    pub moves_right: u32,
    /// Ticks spent airborne.
    pub ticks_in_air: u64,
    /// Ticks spent grounded.
    pub ticks_on_ground: u64,
}

/// Summary of the mind's motivational state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MindState {
    /// Drive to explore, capped at 100.
    pub curiosity: f64,
    /// Accumulated puzzlement.
    pub confusion: f64,
    /// Reward from discoveries, uncapped.
    pub satisfaction: f64,
    /// Curriculum stage of the latest decision.
    pub phase: ExperimentPhase,
    /// Number of confirmed laws.
    pub laws_discovered: usize,
    /// Number of archived percepts.
    pub total_experiences: usize,
    /// Experience tallies.
    pub experience: ExperienceCounts,
}

// ---------------------------------------------------------------------------
// Physics diagnostics
// ---------------------------------------------------------------------------

/// Per-step force breakdown returned by the integrator.
///
/// Informational only: the mind works from percepts, never from this.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ForceBreakdown {
    /// Gravitational acceleration constant.
    pub gravity: f64,
    /// Drag force magnitude, 0 when the body was at rest.
    pub air_resistance: f64,
    /// Current wind speed.
    pub wind_force: f64,
    /// Ground friction coefficient when grounded, else 0.
    pub friction: f64,
    /// Whether the body ended the step grounded.
    pub on_ground: bool,
    /// Impact force pending on the body.
    pub impact_force: f64,
}

/// A timestamped value pulled from a sensor history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SensorReading {
    /// World time of the reading.
    pub time: f64,
    /// The sensed value.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Physical state of the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BodyState {
    /// Centre of the body.
    pub position: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
    /// Collision radius.
    pub radius: f64,
    /// Mass in kilograms.
    pub mass: f64,
    /// Whether the body is supported.
    pub on_ground: bool,
}

/// Internal condition of the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vitals {
    /// Remaining energy.
    pub energy: f64,
    /// Energy ceiling.
    pub max_energy: f64,
    /// Current pain (0--100).
    pub pain: f64,
    /// Current comfort (0--100).
    pub comfort: f64,
    /// Last action that was accepted.
    pub current_action: Option<Action>,
    /// Seconds until another action may take effect.
    pub action_cooldown: f64,
}

/// World-level environmental readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EnvironmentState {
    /// World time in seconds.
    pub time: f64,
    /// Fraction of the current day elapsed.
    pub day_progress: f64,
    /// Global light intensity before shade.
    pub light_intensity: f64,
    /// Global temperature before local adjustments.
    pub temperature: f64,
    /// Wind speed.
    pub wind_speed: f64,
    /// Wind direction offset.
    pub wind_direction: f64,
}

/// Everything a display harness needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationSnapshot {
    /// Session this snapshot belongs to.
    pub session_id: SimulationId,
    /// Ticks executed in this session.
    pub tick: u64,
    /// Whether the operator has paused the loop.
    pub paused: bool,
    /// Current speed multiplier.
    pub speed: u32,
    /// Physical body state.
    pub body: BodyState,
    /// Internal body condition.
    pub vitals: Vitals,
    /// Environmental readings.
    pub environment: EnvironmentState,
    /// Sky colour.
    pub sky: SkyColor,
    /// Sun position.
    pub sun: SunPosition,
    /// Live decorative particles.
    pub particle_count: usize,
    /// Decorative leaves.
    pub leaf_count: usize,
    /// Confirmed laws in discovery order.
    pub laws: Vec<Law>,
    /// Most recent thoughts, oldest first.
    pub recent_thoughts: Vec<Thought>,
    /// Mind summary.
    pub mind: MindState,
}
