//! Read-only views of the simulation for a display harness.

use genesis_types::SimulationSnapshot;

use crate::tick::SimulationState;

impl SimulationState {
    /// Capture everything needed to draw the current frame.
    ///
    /// `paused` and `speed` come from the operator, which the state does
    /// not own.
    pub fn snapshot(&self, paused: bool, speed: u32) -> SimulationSnapshot {
        SimulationSnapshot {
            session_id: self.session_id,
            tick: self.clock.tick(),
            paused,
            speed,
            body: self.agent.body().state(),
            vitals: self.agent.vitals(),
            environment: self.physics.environment_state(),
            sky: self.physics.sky_color(),
            sun: self.physics.sun_position(),
            particle_count: self.physics.particles().len(),
            leaf_count: self.physics.leaves().len(),
            laws: self.mind.laws().to_vec(),
            recent_thoughts: self
                .mind
                .recent_thoughts(self.config.simulation.snapshot_thoughts),
            mind: self.mind.state(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use crate::config::SimulationConfig;
    use crate::tick::{SimulationState, run_tick};

    #[test]
    fn fresh_snapshot_shows_the_awakening() {
        let state = SimulationState::new(&SimulationConfig::default()).unwrap();
        let snapshot = state.snapshot(false, 1);
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.session_id, state.session_id);
        assert!(snapshot.laws.is_empty());
        assert_eq!(snapshot.recent_thoughts.len(), 1);
        assert_eq!(snapshot.leaf_count, 20);
        assert!(!snapshot.body.on_ground);
    }

    #[test]
    fn snapshot_tracks_operator_and_thought_limit() {
        let mut config = SimulationConfig::default();
        config.simulation.snapshot_thoughts = 2;
        let mut state = SimulationState::new(&config).unwrap();
        for _ in 0..200 {
            run_tick(&mut state, 0.016).unwrap();
        }
        let snapshot = state.snapshot(true, 4);
        assert!(snapshot.paused);
        assert_eq!(snapshot.speed, 4);
        assert_eq!(snapshot.tick, 200);
        assert_eq!(snapshot.recent_thoughts.len(), 2);
        assert_eq!(snapshot.mind.total_experiences, 200);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let state = SimulationState::new(&SimulationConfig::default()).unwrap();
        let json = serde_json::to_value(state.snapshot(false, 2)).unwrap();
        assert_eq!(json["speed"], 2);
        assert!(json["mind"]["curiosity"].is_number());
    }
}
