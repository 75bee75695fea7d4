//! The percept: one tick's complete sensory snapshot.
//!
//! The percept is the **only** information the mind receives about the
//! world. It is built fresh by the body every tick, handed to the mind,
//! and archived by value in both the body's short ring buffer and the
//! mind's longer memory. Archiving is a plain `Clone`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    DayPeriod, HorizontalDirection, ObjectKind, RelativeHeight, TemperatureFeeling, WindFeeling,
};

/// A 2D vector in world units (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component, positive downward.
    pub y: f64,
}

impl Vec2 {
    /// Construct a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Sky colour as floating RGB channels in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkyColor {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

/// Where the sun sits on its arc and whether it is above the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SunPosition {
    /// Horizontal position in world units.
    pub x: f64,
    /// Vertical position in world units.
    pub y: f64,
    /// Whether the sun is up.
    pub visible: bool,
}

/// The complete percept for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Percept {
    /// World time in seconds when the percept was taken.
    pub timestamp: f64,
    /// Proprioception.
    pub body: BodySense,
    /// Contact senses.
    pub touch: TouchSense,
    /// Sight.
    pub vision: VisionSense,
    /// Thermal sense.
    pub temperature: TemperatureSense,
    /// Wind sense.
    pub wind: WindSense,
    /// Internal sense of the time of day.
    pub time_perception: TimePerception,
}

/// The body's sense of its own state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BodySense {
    /// Centre of the body.
    pub position: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
    /// Magnitude of the velocity.
    pub speed: f64,
    /// Whether the body is supported.
    pub on_ground: bool,
    /// Remaining energy.
    pub energy: f64,
    /// Current pain (0--100).
    pub pain: f64,
}

/// Contact senses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TouchSense {
    /// Whether anything is underfoot.
    pub ground_contact: bool,
    /// Pressure from supporting the body's weight.
    pub pressure: f64,
    /// Impact force felt this tick; reported once, then cleared.
    pub impact_force: f64,
    /// Wind felt on the skin.
    pub wind_on_skin: f64,
}

/// Sight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VisionSense {
    /// Local brightness after shade.
    pub brightness: f64,
    /// Objects within vision range.
    pub nearby_objects: Vec<VisibleObject>,
    /// Gap between the bottom of the body and the floor.
    pub distance_to_ground: f64,
    /// Whether the sun is above the horizon.
    pub can_see_sun: bool,
    /// Current sky colour.
    pub sky_color: SkyColor,
}

/// A static object as seen from the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VisibleObject {
    /// What the object is.
    pub kind: ObjectKind,
    /// Distance to the object's reference corner.
    pub distance: f64,
    /// Side the object lies on.
    pub direction: HorizontalDirection,
    /// Whether the object is above or below eye level.
    pub relative_height: RelativeHeight,
    /// Apparent size (footprint area).
    pub size: f64,
}

/// Thermal sense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TemperatureSense {
    /// Local temperature in degrees Celsius.
    pub ambient: f64,
    /// Qualitative reading.
    pub feeling: TemperatureFeeling,
}

/// Wind sense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WindSense {
    /// Wind speed.
    pub speed: f64,
    /// Side the wind blows toward.
    pub direction: HorizontalDirection,
    /// Qualitative reading.
    pub feeling: WindFeeling,
}

/// Internal sense of the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimePerception {
    /// Fraction of the current day elapsed, in `[0, 1)`.
    pub day_progress: f64,
    /// Whether it is bright enough to count as day.
    pub is_day: bool,
    /// Named period of the day.
    pub period: DayPeriod,
}
