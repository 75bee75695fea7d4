//! Enumeration types for the Genesis simulation.
//!
//! Every closed vocabulary in the simulation lives here: the action set the
//! body understands, the qualitative labels the senses attach to raw
//! readings, and the keys the mind uses for laws, one-shot beliefs and
//! curriculum phases. String forms are `snake_case` on the wire.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A discrete action the body can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Action {
    /// Upward impulse, only while grounded.
    Jump,
    /// Horizontal push to the left.
    MoveLeft,
    /// Horizontal push to the right.
    MoveRight,
    /// Halve horizontal velocity.
    Stop,
    /// Energy-only placeholder with no kinematic effect.
    Crouch,
    /// Rest and recover a little energy.
    Wait,
    /// Energy-only placeholder with no kinematic effect.
    LookAround,
}

impl Action {
    /// Every action in vocabulary order.
    pub const ALL: [Self; 7] = [
        Self::Jump,
        Self::MoveLeft,
        Self::MoveRight,
        Self::Stop,
        Self::Crouch,
        Self::Wait,
        Self::LookAround,
    ];

    /// The wire name of this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::Stop => "stop",
            Self::Crouch => "crouch",
            Self::Wait => "wait",
            Self::LookAround => "look_around",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no action in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {name:?}")]
pub struct ParseActionError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseActionError { name: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// World objects
// ---------------------------------------------------------------------------

/// The kind of a static world object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ObjectKind {
    /// A boulder resting on the floor.
    Rock,
    /// A tree whose canopy casts shade.
    Tree,
}

/// Which side of the observer something lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum HorizontalDirection {
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

/// Whether an object's reference point is above or below the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RelativeHeight {
    /// Higher on screen (smaller y).
    Above,
    /// Level or lower on screen.
    Below,
}

// ---------------------------------------------------------------------------
// Qualitative feelings
// ---------------------------------------------------------------------------

/// How the body labels the ambient temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TemperatureFeeling {
    /// Below 5 degrees.
    VeryCold,
    /// 5 to 15 degrees.
    Cold,
    /// 15 to 22 degrees.
    Pleasant,
    /// 22 to 30 degrees.
    Warm,
    /// 30 degrees and above.
    Hot,
}

impl TemperatureFeeling {
    /// Human-readable label used in thoughts.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryCold => "very cold",
            Self::Cold => "cold",
            Self::Pleasant => "pleasant",
            Self::Warm => "warm",
            Self::Hot => "hot",
        }
    }
}

/// How the body labels the wind on its skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum WindFeeling {
    /// Below 1.
    Calm,
    /// 1 to 3.
    LightBreeze,
    /// 3 to 6.
    ModerateBreeze,
    /// 6 to 10.
    StrongWind,
    /// 10 and above.
    Gale,
}

/// Named stretch of the day derived from day progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum DayPeriod {
    /// Before 0.2 or from 0.85 on.
    Night,
    /// 0.2 to 0.3.
    Dawn,
    /// 0.3 to 0.5.
    Morning,
    /// 0.5 to 0.65.
    Midday,
    /// 0.65 to 0.75.
    Afternoon,
    /// 0.75 to 0.85.
    Dusk,
}

// ---------------------------------------------------------------------------
// Mind vocabulary
// ---------------------------------------------------------------------------

/// Category of an entry in the thought stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ThoughtKind {
    /// Uncategorised musing.
    Neutral,
    /// Something sensed.
    Perception,
    /// A tentative explanation.
    Hypothesis,
    /// A confirmed law.
    Discovery,
    /// Puzzlement about what is happening.
    Confusion,
    /// An intention about to be acted on.
    Action,
}

/// The physical regularities the mind can confirm.
///
/// Each kind is a unique key: a law is recorded at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LawKind {
    /// Constant downward acceleration while unsupported.
    Gravity,
    /// Impact force grows with speed before impact.
    Inertia,
    /// Moving air pushes the body.
    WindPush,
    /// Brightness rises and falls periodically.
    DayNightCycle,
    /// Temperature follows brightness.
    LightTemperature,
    /// Horizontal motion decays on its own.
    Friction,
}

impl LawKind {
    /// Every law kind in detector order.
    pub const ALL: [Self; 6] = [
        Self::Gravity,
        Self::Inertia,
        Self::WindPush,
        Self::DayNightCycle,
        Self::LightTemperature,
        Self::Friction,
    ];

    /// The unique key of this law.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gravity => "gravity",
            Self::Inertia => "inertia",
            Self::WindPush => "wind_push",
            Self::DayNightCycle => "day_night_cycle",
            Self::LightTemperature => "light_temperature",
            Self::Friction => "friction",
        }
    }
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One-shot markers recording that an observation has been verbalised.
///
/// Independent of the law set: a flag means "I said this once", a law
/// means "I confirmed this statistically".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BeliefFlag {
    /// First fast downward motion noticed.
    GravityNoticed,
    /// Link between falling speed and pain suspected.
    ImpactCorrelation,
    /// First strong wind felt.
    WindFelt,
    /// A dark stretch has been experienced.
    DarknessExperienced,
    /// An extreme temperature with this feeling has been felt.
    Temperature(TemperatureFeeling),
    /// Repeated jumps reflected upon.
    JumpReflection,
}

/// Which curriculum stage produced the latest decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ExperimentPhase {
    /// Passive observation of the first percepts.
    #[default]
    InitialObservation,
    /// Deliberate jumps to produce falling data.
    GravityExperiment,
    /// Forced sideways moves to produce deceleration data.
    MotionExperiment,
    /// Free, chance-driven exploration once enough laws are known.
    Exploration,
    /// Idle observation when nothing else applies.
    Contemplation,
}
