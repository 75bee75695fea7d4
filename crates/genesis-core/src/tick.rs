//! Tick cycle: one frame of the Genesis simulation.
//!
//! Each tick runs these stages strictly in order, all with the same `dt`:
//!
//! 1. **Clock** -- advance the tick counter.
//! 2. **World** -- advance environment time, wind and decorations.
//! 3. **Integrate** -- apply forces and collisions to the body.
//! 4. **Upkeep** -- run down cooldowns, regenerate energy, decay pain.
//! 5. **Sense** -- assemble this tick's [`Percept`].
//! 6. **Think** -- let the mind learn from the percept and choose an action.
//! 7. **Act** -- hand the action to the body, which may refuse it.
//!
//! The mind is never told whether its action was accepted. Given the same
//! configuration, seed and sequence of `dt` values, the cycle is
//! deterministic.
//!
//! [`Percept`]: genesis_types::Percept

use genesis_agents::{Agent, AgentError};
use genesis_mind::{Mind, MindError};
use genesis_physics::{PhysicsEngine, PhysicsError};
use genesis_types::{Action, ForceBreakdown, LawKind, SimulationId};
use tracing::{debug, info};

use crate::clock::{ClockError, FrameClock};
use crate::config::SimulationConfig;

/// Errors that can occur while building or ticking the simulation.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The physics engine could not be built.
    #[error("physics error: {source}")]
    Physics {
        /// The underlying physics error.
        #[from]
        source: PhysicsError,
    },

    /// The agent could not be built.
    #[error("agent error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },

    /// The mind could not be built.
    #[error("mind error: {source}")]
    Mind {
        /// The underlying mind error.
        #[from]
        source: MindError,
    },
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// The tick number that was executed.
    pub tick: u64,
    /// World time after the tick, in seconds.
    pub sim_time: f64,
    /// Frame time used by every stage.
    pub dt: f64,
    /// What the mind decided.
    pub action: Action,
    /// Whether the body carried the action out.
    pub action_accepted: bool,
    /// Forces the integrator applied this tick.
    pub forces: ForceBreakdown,
    /// Laws confirmed during this tick, in discovery order.
    pub new_laws: Vec<LawKind>,
}

/// The mutable simulation state passed through the tick cycle.
///
/// Physics owns the world, the agent owns the body and the mind owns its
/// buffers. Nothing here is shared across threads.
#[derive(Debug)]
pub struct SimulationState {
    /// Identity of the current session; replaced on reset.
    pub session_id: SimulationId,
    /// The frame clock.
    pub clock: FrameClock,
    /// World, environment and decorations.
    pub physics: PhysicsEngine,
    /// The embodied agent.
    pub agent: Agent,
    /// The learning mind.
    pub mind: Mind,
    /// Configuration the components were built from.
    pub config: SimulationConfig,
}

impl SimulationState {
    /// Build a fresh simulation from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if any component rejects its section.
    pub fn new(config: &SimulationConfig) -> Result<Self, TickError> {
        let state = Self {
            session_id: SimulationId::new(),
            clock: FrameClock::new(config.simulation.max_frame_dt)?,
            physics: PhysicsEngine::new(config.resolved_physics())?,
            agent: Agent::new(config.agent.clone())?,
            mind: Mind::new(config.resolved_mind())?,
            config: config.clone(),
        };
        info!(
            session_id = %state.session_id.into_inner(),
            world = %config.world.name,
            seed = ?config.world.seed,
            "Simulation created"
        );
        Ok(state)
    }

    /// Discard the world, the body and everything the mind has learned and
    /// start over from the stored configuration under a new session id.
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if a component can no longer be built. The
    /// current state is left untouched in that case.
    pub fn reset(&mut self) -> Result<(), TickError> {
        let previous = self.session_id;
        *self = Self::new(&self.config)?;
        info!(
            previous = %previous.into_inner(),
            session_id = %self.session_id.into_inner(),
            "Simulation reset"
        );
        Ok(())
    }
}

/// Execute one complete tick of the simulation with frame time `dt`.
///
/// Negative or non-finite frame times are treated as 0.
///
/// # Errors
///
/// Returns [`TickError::Clock`] if the tick counter overflows.
pub fn run_tick(state: &mut SimulationState, dt: f64) -> Result<TickSummary, TickError> {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    // --- Clock ---
    let tick = state.clock.advance()?;

    // --- World ---
    state.physics.update(dt);

    // --- Integrate ---
    let forces = state.physics.apply_physics(state.agent.body_mut(), dt);

    // --- Upkeep ---
    state.agent.update(dt);

    // --- Sense ---
    let percept = state.agent.sense(&state.physics);

    // --- Think ---
    let known_laws = state.mind.laws().len();
    let action = state.mind.process(&percept, &state.agent);
    let new_laws: Vec<LawKind> = state
        .mind
        .laws()
        .iter()
        .skip(known_laws)
        .map(|law| law.name)
        .collect();

    // --- Act ---
    let action_accepted = state.agent.execute_action(action);
    if !action_accepted {
        debug!(tick, %action, "decision refused by the body");
    }

    debug!(
        tick,
        time = percept.timestamp,
        dt,
        %action,
        action_accepted,
        on_ground = percept.body.on_ground,
        "Tick complete"
    );

    Ok(TickSummary {
        tick,
        sim_time: percept.timestamp,
        dt,
        action,
        action_accepted,
        forces,
        new_laws,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn state() -> SimulationState {
        SimulationState::new(&SimulationConfig::default()).unwrap()
    }

    #[test]
    fn first_tick_is_numbered_one() {
        let mut state = state();
        let summary = run_tick(&mut state, 0.016).unwrap();
        assert_eq!(summary.tick, 1);
        assert!((summary.sim_time - 0.016).abs() < 1e-12);
        assert_eq!(state.clock.tick(), 1);
    }

    #[test]
    fn young_mind_only_waits_but_learns_from_the_spawn_drop() {
        let mut state = state();
        let mut found = Vec::new();
        for _ in 0..19 {
            let summary = run_tick(&mut state, 0.016).unwrap();
            assert_eq!(summary.action, Action::Wait);
            found.extend(summary.new_laws);
        }
        assert_eq!(found, vec![LawKind::Gravity]);
        assert!(state.mind.has_law(LawKind::Gravity));
        assert_eq!(state.mind.memory_count(), 19);
    }

    #[test]
    fn body_falls_from_spawn() {
        let mut state = state();
        let start = state.agent.body().position.y;
        for _ in 0..10 {
            run_tick(&mut state, 0.016).unwrap();
        }
        assert!(state.agent.body().position.y > start);
        assert!(state.agent.body().velocity.y > 0.0);
    }

    #[test]
    fn bad_frame_time_freezes_the_world() {
        let mut state = state();
        let summary = run_tick(&mut state, f64::NAN).unwrap();
        assert!(summary.dt.abs() < f64::EPSILON);
        assert!(summary.sim_time.abs() < f64::EPSILON);
        let summary = run_tick(&mut state, -1.0).unwrap();
        assert!(summary.dt.abs() < f64::EPSILON);
    }

    #[test]
    fn clock_overflow_is_an_error() {
        let mut state = state();
        state.clock = FrameClock::from_parts(u64::MAX, 0.05).unwrap();
        assert!(matches!(
            run_tick(&mut state, 0.016),
            Err(TickError::Clock { .. })
        ));
    }

    #[test]
    fn reset_starts_a_new_session() {
        let mut state = state();
        for _ in 0..30 {
            run_tick(&mut state, 0.016).unwrap();
        }
        let old = state.session_id;
        state.reset().unwrap();
        assert_ne!(state.session_id, old);
        assert_eq!(state.clock.tick(), 0);
        assert_eq!(state.mind.memory_count(), 0);
        assert!(state.physics.time().abs() < f64::EPSILON);
        assert!(!state.agent.body().on_ground);
    }

    #[test]
    fn invalid_section_fails_construction() {
        let mut config = SimulationConfig::default();
        config.physics.day_length = 0.0;
        assert!(matches!(
            SimulationState::new(&config),
            Err(TickError::Physics { .. })
        ));
    }
}
