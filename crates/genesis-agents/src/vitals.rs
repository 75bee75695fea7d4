//! Per-tick upkeep of the agent's internal state.
//!
//! # Order of operations
//!
//! 1. Run down the action cooldown
//! 2. Regenerate energy while grounded and waiting
//! 3. Decay pain
//! 4. Add pain from a hard landing still pending on the body
//! 5. Recompute comfort
//!
//! Step 2 stacks with the small regeneration each accepted `wait` already
//! grants, so resting on the ground recovers through both paths.

use genesis_types::Action;

use crate::agent::Agent;

/// Pain never exceeds this.
const MAX_PAIN: f64 = 100.0;

/// Comfort with no modifiers applied.
const BASE_COMFORT: f64 = 50.0;

/// Comfort bonus for being supported.
const GROUNDED_COMFORT: f64 = 10.0;

/// Comfort lost per point of pain.
const PAIN_DISCOMFORT: f64 = 0.5;

/// Energy below which the body feels drained.
const LOW_ENERGY: f64 = 20.0;

/// Comfort lost while drained.
const LOW_ENERGY_DISCOMFORT: f64 = 20.0;

impl Agent {
    /// Advance the agent's internal state by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        let c = &self.config;

        if self.action_cooldown > 0.0 {
            self.action_cooldown = (self.action_cooldown - dt).max(0.0);
        }

        if self.body.on_ground && self.current_action == Some(Action::Wait) {
            self.energy = dt.mul_add(c.rest_regen_rate, self.energy).min(c.max_energy);
        }

        self.pain = dt.mul_add(-c.pain_decay_rate, self.pain).max(0.0);

        if self.body.impact_force > c.pain_impact_threshold {
            self.pain = self
                .body
                .impact_force
                .mul_add(c.pain_per_impact, self.pain)
                .min(MAX_PAIN);
        }

        self.comfort = comfort(self.body.on_ground, self.pain, self.energy);
    }
}

/// Comfort for a body in the given condition, clamped to `[0, 100]`.
pub fn comfort(on_ground: bool, pain: f64, energy: f64) -> f64 {
    let mut comfort = BASE_COMFORT;
    if on_ground {
        comfort += GROUNDED_COMFORT;
    }
    comfort -= pain * PAIN_DISCOMFORT;
    if energy < LOW_ENERGY {
        comfort -= LOW_ENERGY_DISCOMFORT;
    }
    comfort.clamp(0.0, 100.0)
}
