//! Tunable constants for the physics engine.
//!
//! These values correspond to the `physics` key of `genesis-config.yaml`;
//! `world.seed`, when set, replaces `decoration_seed`. Every field defaults
//! to the calibrated value, so a partial YAML section only overrides what
//! it names.

use serde::Deserialize;

use crate::error::PhysicsError;

/// Configuration for world geometry, forces and the day cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravitational acceleration in m/s² (default: 9.81).
    pub gravity: f64,

    /// World units per metre, applied to gravity (default: 50).
    pub pixel_scale: f64,

    /// Air density in kg/m³ (default: 1.225).
    pub air_density: f64,

    /// Drag coefficient of a sphere (default: 0.47).
    pub drag_coefficient: f64,

    /// Factor turning the radius into a cross-section length (default: 0.01).
    pub cross_section_factor: f64,

    /// Multiplier on drag deceleration per step (default: 10).
    pub drag_scale: f64,

    /// Ground friction coefficient (default: 0.6).
    pub ground_friction: f64,

    /// Multiplier on ground friction decay per step (default: 5).
    pub friction_scale: f64,

    /// Velocity retained after a bounce (default: 0.3).
    pub restitution: f64,

    /// Velocity retained after hitting a world edge (default: 0.5).
    pub edge_restitution: f64,

    /// How strongly wind accelerates an airborne body (default: 0.5).
    pub wind_coupling: f64,

    /// Width of the world in units (default: 800).
    pub world_width: f64,

    /// Vertical position of the floor (default: 450).
    pub floor_y: f64,

    /// Downward speed above which landing counts as an impact (default: 50).
    pub impact_threshold: f64,

    /// Impact force per unit of speed and mass (default: 0.01).
    pub impact_factor: f64,

    /// Vertical speed at or below which a landing settles (default: 10).
    pub settle_threshold: f64,

    /// Length of one day in simulated seconds (default: 120).
    pub day_length: f64,

    /// Number of decorative leaves (default: 20).
    pub leaf_count: usize,

    /// Seed for the decorative particle generator (default: 42).
    pub decoration_seed: u64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            pixel_scale: 50.0,
            air_density: 1.225,
            drag_coefficient: 0.47,
            cross_section_factor: 0.01,
            drag_scale: 10.0,
            ground_friction: 0.6,
            friction_scale: 5.0,
            restitution: 0.3,
            edge_restitution: 0.5,
            wind_coupling: 0.5,
            world_width: 800.0,
            floor_y: 450.0,
            impact_threshold: 50.0,
            impact_factor: 0.01,
            settle_threshold: 10.0,
            day_length: 120.0,
            leaf_count: 20,
            decoration_seed: 42,
        }
    }
}

impl PhysicsConfig {
    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = [
            ("day_length", self.day_length),
            ("world_width", self.world_width),
            ("floor_y", self.floor_y),
            ("pixel_scale", self.pixel_scale),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PhysicsError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("drag_coefficient", self.drag_coefficient),
            ("cross_section_factor", self.cross_section_factor),
            ("drag_scale", self.drag_scale),
            ("ground_friction", self.ground_friction),
            ("friction_scale", self.friction_scale),
            ("restitution", self.restitution),
            ("edge_restitution", self.edge_restitution),
            ("wind_coupling", self.wind_coupling),
            ("impact_threshold", self.impact_threshold),
            ("impact_factor", self.impact_factor),
            ("settle_threshold", self.settle_threshold),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PhysicsError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }

        Ok(())
    }
}
