//! The agent: a body plus the state that rides on it.
//!
//! Sensing lives in [`sensing`](crate::sensing), acting in
//! [`actions`](crate::actions) and per-tick upkeep in
//! [`vitals`](crate::vitals); each adds methods to [`Agent`].

use genesis_physics::Body;
use genesis_types::{Action, Embodiment, Vec2, Vitals};
use tracing::debug;

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::history::SensorHistory;

/// An embodied agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub(crate) config: AgentConfig,
    pub(crate) body: Body,
    pub(crate) energy: f64,
    pub(crate) pain: f64,
    pub(crate) comfort: f64,
    pub(crate) current_action: Option<Action>,
    pub(crate) action_cooldown: f64,
    pub(crate) history: SensorHistory,
}

impl Agent {
    /// Spawn an agent at the configured start position, airborne and at
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] if the configuration or body is invalid.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        config.validate()?;
        let body = Body::new(
            Vec2::new(config.start_x, config.start_y),
            config.radius,
            config.mass,
        )?;
        debug!(
            x = config.start_x,
            y = config.start_y,
            energy = config.initial_energy,
            "agent spawned"
        );
        Ok(Self {
            energy: config.initial_energy,
            pain: 0.0,
            comfort: config.initial_comfort,
            current_action: None,
            action_cooldown: 0.0,
            history: SensorHistory::new(config.sensor_history),
            body,
            config,
        })
    }

    /// The configuration this agent was built from.
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The physical body.
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the body, for the integrator.
    pub const fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Remaining energy.
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// Current pain (0--100).
    pub const fn pain(&self) -> f64 {
        self.pain
    }

    /// Current comfort (0--100).
    pub const fn comfort(&self) -> f64 {
        self.comfort
    }

    /// Last accepted action.
    pub const fn current_action(&self) -> Option<Action> {
        self.current_action
    }

    /// Seconds until another action may take effect.
    pub const fn action_cooldown(&self) -> f64 {
        self.action_cooldown
    }

    /// Short-term sensor history.
    pub const fn history(&self) -> &SensorHistory {
        &self.history
    }

    /// Snapshot of the agent's internal condition.
    pub const fn vitals(&self) -> Vitals {
        Vitals {
            energy: self.energy,
            max_energy: self.config.max_energy,
            pain: self.pain,
            comfort: self.comfort,
            current_action: self.current_action,
            action_cooldown: self.action_cooldown,
        }
    }
}

impl Embodiment for Agent {
    fn energy(&self) -> f64 {
        self.energy
    }

    fn is_grounded(&self) -> bool {
        self.body.on_ground
    }
}
