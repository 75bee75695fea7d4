//! The experiment curriculum that picks each action.
//!
//! Stages are tried in priority order and the first that applies wins:
//!
//! 1. **Initial observation**: too few memories, so only watch.
//! 2. **Gravity experiment**: jump a few times to produce falling data.
//! 3. **Motion experiment**: push right, then left, to produce
//!    deceleration data.
//! 4. **Exploration**: with enough laws known, rest when tired and
//!    otherwise move or jump by chance.
//! 5. **Contemplation**: wait, occasionally thinking about it.
//!
//! Stages 2 and 3 count their attempts when they decide, not when the body
//! accepts, so a refused action still uses up an attempt.

use genesis_types::{Action, Embodiment, ExperimentPhase, LawKind, Percept, ThoughtKind};
use rand::Rng;

use crate::mind::Mind;

impl Mind {
    pub(crate) fn decide(&mut self, percept: &Percept, body: &impl Embodiment) -> Action {
        let now = percept.timestamp;
        let c = &self.config;

        if self.memories.len() < c.observation_memories {
            self.phase = ExperimentPhase::InitialObservation;
            self.thoughts
                .think(now, "Observing... taking in information.", ThoughtKind::Action);
            return Action::Wait;
        }

        if !self.has_law(LawKind::Gravity)
            && self.experience.jumps < c.gravity_jump_attempts
            && body.is_grounded()
            && body.energy() > c.rest_energy
        {
            self.phase = ExperimentPhase::GravityExperiment;
            self.experience.jumps = self.experience.jumps.saturating_add(1);
            self.thoughts.think(
                now,
                "I'll try pushing myself upward. What will happen?",
                ThoughtKind::Action,
            );
            return Action::Jump;
        }

        if !self.has_law(LawKind::Friction) && percept.body.on_ground {
            let moves = self.config.motion_moves;
            let e = &mut self.experience;
            if e.moves_right < moves {
                self.phase = ExperimentPhase::MotionExperiment;
                e.moves_right = e.moves_right.saturating_add(1);
                if e.moves_right == 1 {
                    self.thoughts
                        .think(now, "I'll try moving to one side.", ThoughtKind::Action);
                }
                return Action::MoveRight;
            }
            if e.moves_left < moves {
                self.phase = ExperimentPhase::MotionExperiment;
                e.moves_left = e.moves_left.saturating_add(1);
                return Action::MoveLeft;
            }
        }

        if self.laws.len() >= self.config.exploration_min_laws
            && let Some(action) = self.explore(percept)
        {
            self.phase = ExperimentPhase::Exploration;
            return action;
        }

        self.phase = ExperimentPhase::Contemplation;
        if self.rng.random::<f64>() < self.config.contemplate_probability {
            self.thoughts
                .think(now, "Contemplating the world...", ThoughtKind::Perception);
        }
        Action::Wait
    }

    /// Stage 4. `None` falls through to contemplation.
    fn explore(&mut self, percept: &Percept) -> Option<Action> {
        let now = percept.timestamp;

        if percept.body.energy < self.config.rest_energy {
            self.thoughts
                .think(now, "Low energy. I should rest.", ThoughtKind::Action);
            return Some(Action::Wait);
        }

        if self.rng.random::<f64>() < self.config.explore_move_probability {
            let action = if self.rng.random::<f64>() > 0.5 {
                Action::MoveRight
            } else {
                Action::MoveLeft
            };
            self.thoughts
                .think(now, "Exploring more of the space...", ThoughtKind::Action);
            return Some(action);
        }

        if self.rng.random::<f64>() < self.config.explore_jump_probability && percept.body.on_ground
        {
            self.thoughts
                .think(now, "Testing the limits of my height.", ThoughtKind::Action);
            return Some(Action::Jump);
        }

        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MindConfig;
    use crate::detectors::Detection;
    use crate::testing::{grounded, percept};

    struct Body {
        energy: f64,
        grounded: bool,
    }

    impl Embodiment for Body {
        fn energy(&self) -> f64 {
            self.energy
        }

        fn is_grounded(&self) -> bool {
            self.grounded
        }
    }

    const RESTED: Body = Body {
        energy: 100.0,
        grounded: true,
    };

    fn mind_with_memories(n: u32, seed: u64) -> Mind {
        let mut mind = Mind::new(MindConfig {
            seed: Some(seed),
            ..MindConfig::default()
        })
        .unwrap();
        for i in 0..n {
            mind.memories.push(percept(f64::from(i) * 0.016));
        }
        mind
    }

    fn learn(mind: &mut Mind, kinds: &[LawKind]) {
        for &kind in kinds {
            mind.add_law(
                Detection {
                    kind,
                    confidence: 0.8,
                    evidence: 10,
                },
                1.0,
            );
        }
    }

    #[test]
    fn young_mind_only_watches() {
        let mut mind = mind_with_memories(19, 1);
        assert_eq!(mind.decide(&grounded(0.3), &RESTED), Action::Wait);
        assert_eq!(mind.phase, ExperimentPhase::InitialObservation);
    }

    #[test]
    fn gravity_experiment_jumps_five_times() {
        let mut mind = mind_with_memories(25, 1);
        for _ in 0..5 {
            assert_eq!(mind.decide(&grounded(0.5), &RESTED), Action::Jump);
        }
        assert_eq!(mind.experience.jumps, 5);
        assert_eq!(mind.phase, ExperimentPhase::GravityExperiment);
        assert_eq!(mind.decide(&grounded(0.5), &RESTED), Action::MoveRight);
    }

    #[test]
    fn tired_body_skips_the_jump() {
        let mut mind = mind_with_memories(25, 1);
        let tired = Body {
            energy: 30.0,
            grounded: true,
        };
        assert_eq!(mind.decide(&grounded(0.5), &tired), Action::MoveRight);
        assert_eq!(mind.experience.jumps, 0);
    }

    #[test]
    fn motion_experiment_goes_right_then_left() {
        let mut mind = mind_with_memories(25, 1);
        learn(&mut mind, &[LawKind::Gravity]);
        let mut actions = Vec::new();
        for _ in 0..20 {
            actions.push(mind.decide(&grounded(0.5), &RESTED));
        }
        assert!(actions.iter().take(10).all(|a| *a == Action::MoveRight));
        assert!(actions.iter().skip(10).all(|a| *a == Action::MoveLeft));
        let side = mind
            .thoughts
            .iter()
            .filter(|t| t.text == "I'll try moving to one side.")
            .count();
        assert_eq!(side, 1);
        assert_eq!(mind.phase, ExperimentPhase::MotionExperiment);
    }

    #[test]
    fn airborne_without_laws_contemplates() {
        let mut mind = mind_with_memories(25, 1);
        let airborne = Body {
            energy: 100.0,
            grounded: false,
        };
        assert_eq!(mind.decide(&percept(0.5), &airborne), Action::Wait);
        assert_eq!(mind.phase, ExperimentPhase::Contemplation);
    }

    #[test]
    fn explorer_rests_when_tired() {
        let mut mind = mind_with_memories(25, 1);
        learn(
            &mut mind,
            &[LawKind::Gravity, LawKind::Friction, LawKind::DayNightCycle],
        );
        let mut weary = grounded(0.5);
        weary.body.energy = 20.0;
        assert_eq!(mind.decide(&weary, &RESTED), Action::Wait);
        assert_eq!(mind.phase, ExperimentPhase::Exploration);
    }

    #[test]
    fn explorer_wanders_by_chance() {
        let mut mind = mind_with_memories(25, 11);
        learn(
            &mut mind,
            &[LawKind::Gravity, LawKind::Friction, LawKind::DayNightCycle],
        );
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(mind.decide(&grounded(0.5), &RESTED));
        }
        for action in [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Wait] {
            assert!(seen.contains(&action), "{action} never chosen");
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let run = |seed| {
            let mut mind = mind_with_memories(25, seed);
            learn(
                &mut mind,
                &[LawKind::Gravity, LawKind::Friction, LawKind::DayNightCycle],
            );
            (0..50)
                .map(|_| mind.decide(&grounded(0.5), &RESTED))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
