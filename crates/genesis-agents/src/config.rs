//! Configuration for the agent's body, senses and action kinematics.
//!
//! These values correspond to the `agent` key of `genesis-config.yaml`.
//! Energy costs are fixed per action and live in [`costs`](crate::costs);
//! everything else about how the body moves and recovers is tunable here.

use serde::Deserialize;

use crate::error::AgentError;

/// Configuration for an [`Agent`](crate::Agent).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Spawn x position (default: 400).
    pub start_x: f64,

    /// Spawn y position; the body starts airborne (default: 200).
    pub start_y: f64,

    /// Body radius (default: 20).
    pub radius: f64,

    /// Body mass in kilograms (default: 70).
    pub mass: f64,

    /// Energy ceiling (default: 100).
    pub max_energy: f64,

    /// Energy at spawn (default: 100).
    pub initial_energy: f64,

    /// Comfort at spawn (default: 50).
    pub initial_comfort: f64,

    /// Percepts kept in the short-term sensor history (default: 100).
    pub sensor_history: usize,

    /// Distance within which objects are seen (default: 400).
    pub vision_radius: f64,

    /// Upward speed given by a jump (default: 350).
    pub jump_speed: f64,

    /// Cooldown after a jump in seconds (default: 0.3).
    pub jump_cooldown: f64,

    /// Horizontal speed added by a move (default: 50).
    pub move_impulse: f64,

    /// Horizontal speed a move cannot exceed (default: 200).
    pub max_move_speed: f64,

    /// Cooldown after a move in seconds (default: 0.05).
    pub move_cooldown: f64,

    /// Energy restored by each accepted `wait` (default: 0.1).
    pub wait_regen: f64,

    /// Energy per second restored while grounded and waiting (default: 2).
    pub rest_regen_rate: f64,

    /// Pain removed per second (default: 5).
    pub pain_decay_rate: f64,

    /// Impact force above which a landing hurts (default: 100).
    pub pain_impact_threshold: f64,

    /// Pain per unit of impact force above the threshold (default: 0.1).
    pub pain_per_impact: f64,

    /// Fraction of wind speed felt on the skin (default: 0.3).
    pub wind_on_skin: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            start_x: 400.0,
            start_y: 200.0,
            radius: 20.0,
            mass: 70.0,
            max_energy: 100.0,
            initial_energy: 100.0,
            initial_comfort: 50.0,
            sensor_history: 100,
            vision_radius: 400.0,
            jump_speed: 350.0,
            jump_cooldown: 0.3,
            move_impulse: 50.0,
            max_move_speed: 200.0,
            move_cooldown: 0.05,
            wait_regen: 0.1,
            rest_regen_rate: 2.0,
            pain_decay_rate: 5.0,
            pain_impact_threshold: 100.0,
            pain_per_impact: 0.1,
            wind_on_skin: 0.3,
        }
    }
}

impl AgentConfig {
    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), AgentError> {
        if !(self.max_energy.is_finite() && self.max_energy > 0.0) {
            return Err(AgentError::InvalidConfig {
                field: "max_energy",
                value: self.max_energy,
                reason: "must be finite and positive",
            });
        }
        if !(0.0..=self.max_energy).contains(&self.initial_energy) {
            return Err(AgentError::InvalidConfig {
                field: "initial_energy",
                value: self.initial_energy,
                reason: "must lie within [0, max_energy]",
            });
        }

        let non_negative = [
            ("vision_radius", self.vision_radius),
            ("jump_speed", self.jump_speed),
            ("jump_cooldown", self.jump_cooldown),
            ("move_impulse", self.move_impulse),
            ("max_move_speed", self.max_move_speed),
            ("move_cooldown", self.move_cooldown),
            ("wait_regen", self.wait_regen),
            ("rest_regen_rate", self.rest_regen_rate),
            ("pain_decay_rate", self.pain_decay_rate),
            ("pain_impact_threshold", self.pain_impact_threshold),
            ("pain_per_impact", self.pain_per_impact),
            ("wind_on_skin", self.wind_on_skin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AgentError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }

        Ok(())
    }
}
