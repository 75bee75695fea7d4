//! Action execution.
//!
//! The mind chooses; the body only checks preconditions and applies the
//! effect. A refused action changes nothing and reports `false`.
//!
//! # Preconditions (checked in order)
//!
//! 1. No cooldown pending
//! 2. Enough energy for the action's cost
//! 3. Jumps additionally need ground underfoot

use genesis_types::Action;
use tracing::debug;

use crate::agent::Agent;
use crate::costs::energy_cost;

impl Agent {
    /// Attempt `action`, returning whether it took effect.
    pub fn execute_action(&mut self, action: Action) -> bool {
        if self.action_cooldown > 0.0 {
            debug!(%action, cooldown = self.action_cooldown, "action refused: cooling down");
            return false;
        }

        let cost = energy_cost(action);
        if self.energy < cost {
            debug!(%action, energy = self.energy, cost, "action refused: not enough energy");
            return false;
        }

        if action == Action::Jump && !self.body.on_ground {
            debug!(%action, "action refused: airborne");
            return false;
        }

        self.energy -= cost;
        self.current_action = Some(action);

        let c = &self.config;
        let velocity = &mut self.body.velocity;
        match action {
            Action::Jump => {
                velocity.y = -c.jump_speed;
                self.body.on_ground = false;
                self.action_cooldown = c.jump_cooldown;
            }
            Action::MoveLeft => {
                velocity.x = (velocity.x - c.move_impulse).max(-c.max_move_speed);
                self.action_cooldown = c.move_cooldown;
            }
            Action::MoveRight => {
                velocity.x = (velocity.x + c.move_impulse).min(c.max_move_speed);
                self.action_cooldown = c.move_cooldown;
            }
            Action::Stop => velocity.x *= 0.5,
            Action::Wait => {
                self.energy = (self.energy + c.wait_regen).min(c.max_energy);
            }
            // Accepted, not refused: the cost is paid and `current_action`
            // is set, so these must report `true` like any other success.
            Action::Crouch | Action::LookAround => {}
        }
        true
    }

    /// Attempt an action given by name. Unknown names are refused without
    /// touching any state.
    pub fn execute_named_action(&mut self, name: &str) -> bool {
        match name.parse::<Action>() {
            Ok(action) => self.execute_action(action),
            Err(err) => {
                debug!(%err, "action refused");
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;

    fn grounded_agent() -> Agent {
        let mut agent = Agent::new(AgentConfig::default()).unwrap();
        agent.body.on_ground = true;
        agent.body.position.y = 430.0;
        agent
    }

    fn unchanged(before: &Agent, after: &Agent) -> bool {
        before.energy.to_bits() == after.energy.to_bits()
            && before.body.velocity == after.body.velocity
            && before.current_action == after.current_action
    }

    #[test]
    fn jump_from_ground_launches_upward() {
        let mut agent = grounded_agent();
        assert!(agent.execute_action(Action::Jump));
        assert!((agent.body.velocity.y + 350.0).abs() < f64::EPSILON);
        assert!(!agent.body.on_ground);
        assert!((agent.energy - 90.0).abs() < f64::EPSILON);
        assert!((agent.action_cooldown - 0.3).abs() < f64::EPSILON);
        assert_eq!(agent.current_action, Some(Action::Jump));
    }

    #[test]
    fn airborne_jump_is_refused_without_cost() {
        let mut agent = Agent::new(AgentConfig::default()).unwrap();
        let before = agent.clone();
        assert!(!agent.execute_action(Action::Jump));
        assert!(unchanged(&before, &agent));
    }

    #[test]
    fn every_action_is_refused_during_cooldown() {
        for action in Action::ALL {
            let mut agent = grounded_agent();
            agent.action_cooldown = 0.1;
            let before = agent.clone();
            assert!(!agent.execute_action(action), "{action} should be refused");
            assert!(unchanged(&before, &agent));
        }
    }

    #[test]
    fn costly_actions_are_refused_when_exhausted() {
        for action in Action::ALL {
            let mut agent = grounded_agent();
            agent.energy = 0.5;
            let before = agent.clone();
            let accepted = agent.execute_action(action);
            if energy_cost(action) > 0.5 {
                assert!(!accepted, "{action} should be refused");
                assert!(unchanged(&before, &agent));
            } else {
                assert!(accepted, "{action} should be free");
            }
        }
    }

    #[test]
    fn moves_are_clamped_to_max_speed() {
        let mut agent = grounded_agent();
        for _ in 0..10 {
            agent.action_cooldown = 0.0;
            assert!(agent.execute_action(Action::MoveRight));
        }
        assert!((agent.body.velocity.x - 200.0).abs() < f64::EPSILON);

        for _ in 0..10 {
            agent.action_cooldown = 0.0;
            assert!(agent.execute_action(Action::MoveLeft));
        }
        assert!((agent.body.velocity.x + 200.0).abs() < f64::EPSILON);
        assert!((agent.action_cooldown - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn stop_halves_horizontal_speed_without_cooldown() {
        let mut agent = grounded_agent();
        agent.body.velocity.x = 120.0;
        assert!(agent.execute_action(Action::Stop));
        assert!((agent.body.velocity.x - 60.0).abs() < f64::EPSILON);
        assert!(agent.action_cooldown.abs() < f64::EPSILON);
    }

    #[test]
    fn wait_restores_a_little_energy() {
        let mut agent = grounded_agent();
        agent.energy = 50.0;
        assert!(agent.execute_action(Action::Wait));
        assert!((agent.energy - 50.1).abs() < 1e-9);

        agent.energy = 100.0;
        assert!(agent.execute_action(Action::Wait));
        assert!((agent.energy - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn placeholder_actions_only_cost_energy() {
        for action in [Action::Crouch, Action::LookAround] {
            let mut agent = grounded_agent();
            let velocity = agent.body.velocity;
            assert!(agent.execute_action(action));
            assert!((agent.energy - 99.0).abs() < f64::EPSILON);
            assert_eq!(agent.body.velocity, velocity);
            assert_eq!(agent.current_action, Some(action));
        }
    }

    #[test]
    fn unknown_names_are_refused() {
        let mut agent = grounded_agent();
        let before = agent.clone();
        assert!(!agent.execute_named_action("fly"));
        assert!(unchanged(&before, &agent));
        assert!(agent.execute_named_action("move_left"));
    }
}
