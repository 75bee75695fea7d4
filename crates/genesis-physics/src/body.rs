//! The dynamic body the integrator moves.
//!
//! A [`Body`] is owned by the agent and lent mutably to
//! [`PhysicsEngine::apply_physics`](crate::PhysicsEngine::apply_physics)
//! once per tick. No other code path mutates its kinematics during
//! integration.

use genesis_types::{BodyState, Vec2};

use crate::error::PhysicsError;

/// A circular rigid body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Centre of the body.
    pub position: Vec2,
    /// Velocity in units per second, y positive downward.
    pub velocity: Vec2,
    /// Collision radius.
    pub radius: f64,
    /// Mass in kilograms.
    pub mass: f64,
    /// Whether the body is supported by the floor or an object top.
    pub on_ground: bool,
    /// Impact force from the latest hard landing, cleared once sensed.
    pub impact_force: f64,
}

impl Body {
    /// Create an airborne body at rest.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if the radius or mass is not
    /// finite and positive.
    pub fn new(position: Vec2, radius: f64, mass: f64) -> Result<Self, PhysicsError> {
        for (field, value) in [("radius", radius), ("mass", mass)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PhysicsError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and positive",
                });
            }
        }
        Ok(Self {
            position,
            velocity: Vec2::default(),
            radius,
            mass,
            on_ground: false,
            impact_force: 0.0,
        })
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Read the impact force and clear it, so each landing is felt once.
    pub const fn take_impact(&mut self) -> f64 {
        let force = self.impact_force;
        self.impact_force = 0.0;
        force
    }

    /// Snapshot of the physical state.
    pub const fn state(&self) -> BodyState {
        BodyState {
            position: self.position,
            velocity: self.velocity,
            radius: self.radius,
            mass: self.mass,
            on_ground: self.on_ground,
        }
    }
}
