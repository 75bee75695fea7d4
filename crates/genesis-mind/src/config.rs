//! Configuration for memory sizes, the experiment curriculum and the
//! exploratory policy.
//!
//! These values correspond to the `mind` key of `genesis-config.yaml`.
//! Detector thresholds are not tunable; they define what counts as a law
//! and live beside the detectors in [`detectors`](crate::detectors).

use serde::Deserialize;

use crate::error::MindError;

/// Configuration for a [`Mind`](crate::Mind).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MindConfig {
    /// Percepts archived before the archive is trimmed (default: 200).
    pub memory_capacity: usize,

    /// Percepts kept after a trim (default: 150).
    pub memory_retain: usize,

    /// Entries kept per pattern buffer (default: 100).
    pub pattern_capacity: usize,

    /// Thoughts kept in the stream (default: 50).
    pub thought_capacity: usize,

    /// Memories below which the mind only observes (default: 20).
    pub observation_memories: usize,

    /// Memories below which reflection is limited to first impressions
    /// (default: 10).
    pub early_reflection_memories: usize,

    /// Jumps attempted while looking for gravity (default: 5).
    pub gravity_jump_attempts: u32,

    /// Forced moves to each side while looking for friction (default: 10).
    pub motion_moves: u32,

    /// Laws needed before free exploration starts (default: 3).
    pub exploration_min_laws: usize,

    /// Energy a jump experiment must exceed, and below which exploration
    /// rests (default: 30).
    pub rest_energy: f64,

    /// Chance per decision of an exploratory move (default: 0.3).
    pub explore_move_probability: f64,

    /// Chance per decision of an exploratory jump (default: 0.2).
    pub explore_jump_probability: f64,

    /// Chance per idle decision of a contemplating thought (default: 0.1).
    pub contemplate_probability: f64,

    /// Curiosity at birth (default: 100).
    pub initial_curiosity: f64,

    /// Satisfaction gained per law (default: 20).
    pub discovery_satisfaction: f64,

    /// Curiosity gained per law, capped at 100 (default: 10).
    pub discovery_curiosity: f64,

    /// Seed for the exploratory policy. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MindConfig {
    fn default() -> Self {
        Self {
            memory_capacity: 200,
            memory_retain: 150,
            pattern_capacity: 100,
            thought_capacity: 50,
            observation_memories: 20,
            early_reflection_memories: 10,
            gravity_jump_attempts: 5,
            motion_moves: 10,
            exploration_min_laws: 3,
            rest_energy: 30.0,
            explore_move_probability: 0.3,
            explore_jump_probability: 0.2,
            contemplate_probability: 0.1,
            initial_curiosity: 100.0,
            discovery_satisfaction: 20.0,
            discovery_curiosity: 10.0,
            seed: None,
        }
    }
}

impl MindConfig {
    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`MindError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), MindError> {
        let capacities = [
            ("memory_capacity", self.memory_capacity),
            ("memory_retain", self.memory_retain),
            ("pattern_capacity", self.pattern_capacity),
            ("thought_capacity", self.thought_capacity),
        ];
        for (field, value) in capacities {
            if value == 0 {
                return Err(MindError::InvalidConfig {
                    field,
                    value: 0.0,
                    reason: "must be at least 1",
                });
            }
        }
        if self.memory_retain > self.memory_capacity {
            return Err(MindError::InvalidConfig {
                field: "memory_retain",
                value: self.memory_retain as f64,
                reason: "must not exceed memory_capacity",
            });
        }

        let probabilities = [
            ("explore_move_probability", self.explore_move_probability),
            ("explore_jump_probability", self.explore_jump_probability),
            ("contemplate_probability", self.contemplate_probability),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(MindError::InvalidConfig {
                    field,
                    value,
                    reason: "must lie within [0, 1]",
                });
            }
        }

        let non_negative = [
            ("rest_energy", self.rest_energy),
            ("initial_curiosity", self.initial_curiosity),
            ("discovery_satisfaction", self.discovery_satisfaction),
            ("discovery_curiosity", self.discovery_curiosity),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MindError::InvalidConfig {
                    field,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MindConfig::default().validate().is_ok());
    }

    #[test]
    fn retain_above_capacity_is_rejected() {
        let config = MindConfig {
            memory_retain: 300,
            ..MindConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MindError::InvalidConfig { field: "memory_retain", .. })
        ));
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        let config = MindConfig {
            explore_jump_probability: 1.5,
            ..MindConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_thought_stream_is_rejected() {
        let config = MindConfig {
            thought_capacity: 0,
            ..MindConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
