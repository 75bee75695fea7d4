//! The mind: archive, pattern buffers, beliefs, laws and thoughts.
//!
//! # Order of operations in [`Mind::process`]
//!
//! 1. Release awakening thoughts that have come due
//! 2. Archive the percept
//! 3. Split it into pattern samples
//! 4. Update experience tallies
//! 5. Reflect ([`reflection`](crate::reflection))
//! 6. Run the law detectors not yet confirmed
//! 7. Decide the next action ([`policy`](crate::policy))

use std::collections::BTreeSet;

use genesis_types::{
    Action, BeliefFlag, Embodiment, ExperienceCounts, ExperimentPhase, Law, LawKind, MindState,
    Percept, Thought, ThoughtKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::MindConfig;
use crate::detectors::{Detection, detect, law_text};
use crate::error::MindError;
use crate::patterns::PatternBuffers;
use crate::thoughts::ThoughtStream;

/// Curiosity never rises above this.
const MAX_CURIOSITY: f64 = 100.0;

/// Impact force that counts as a notable landing.
const NOTABLE_IMPACT: f64 = 50.0;

/// A mind learning the laws of its world from percepts alone.
#[derive(Debug, Clone)]
pub struct Mind {
    pub(crate) config: MindConfig,
    pub(crate) memories: Vec<Percept>,
    pub(crate) patterns: PatternBuffers,
    pub(crate) experience: ExperienceCounts,
    pub(crate) beliefs: BTreeSet<BeliefFlag>,
    pub(crate) laws: Vec<Law>,
    pub(crate) thoughts: ThoughtStream,
    pub(crate) curiosity: f64,
    pub(crate) confusion: f64,
    pub(crate) satisfaction: f64,
    pub(crate) phase: ExperimentPhase,
    pub(crate) was_grounded: bool,
    pub(crate) rng: StdRng,
}

impl Mind {
    /// Wake a new mind. It immediately wonders where it is and schedules
    /// two more awakening thoughts.
    ///
    /// # Errors
    ///
    /// Returns [`MindError`] if the configuration is invalid.
    pub fn new(config: MindConfig) -> Result<Self, MindError> {
        config.validate()?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut thoughts = ThoughtStream::new(config.thought_capacity);
        thoughts.think(0.0, "Where... am I?", ThoughtKind::Confusion);
        thoughts.schedule(
            1.0,
            "I feel... something. There are sensations.",
            ThoughtKind::Perception,
        );
        thoughts.schedule(
            2.5,
            "I must explore. I need to understand.",
            ThoughtKind::Hypothesis,
        );

        debug!(seed = ?config.seed, "mind awakened");
        Ok(Self {
            memories: Vec::with_capacity(config.memory_capacity),
            patterns: PatternBuffers::new(config.pattern_capacity),
            experience: ExperienceCounts::default(),
            beliefs: BTreeSet::new(),
            laws: Vec::new(),
            thoughts,
            curiosity: config.initial_curiosity,
            confusion: 0.0,
            satisfaction: 0.0,
            phase: ExperimentPhase::default(),
            was_grounded: false,
            rng,
            config,
        })
    }

    /// Take in one percept and choose the next action.
    pub fn process(&mut self, percept: &Percept, body: &impl Embodiment) -> Action {
        self.thoughts.release_due(percept.timestamp);
        self.remember(percept);
        self.patterns.record(percept);
        self.update_experience(percept);
        self.reflect(percept);
        self.analyze_patterns(percept.timestamp);
        self.decide(percept, body)
    }

    fn remember(&mut self, percept: &Percept) {
        self.memories.push(percept.clone());
        if self.memories.len() > self.config.memory_capacity {
            let excess = self.memories.len().saturating_sub(self.config.memory_retain);
            self.memories.drain(..excess);
        }
    }

    fn update_experience(&mut self, percept: &Percept) {
        let e = &mut self.experience;
        let grounded = percept.body.on_ground;
        if grounded {
            e.ticks_on_ground = e.ticks_on_ground.saturating_add(1);
        } else {
            e.ticks_in_air = e.ticks_in_air.saturating_add(1);
            if self.was_grounded {
                e.falls = e.falls.saturating_add(1);
            }
        }
        if percept.touch.impact_force > NOTABLE_IMPACT {
            e.impacts = e.impacts.saturating_add(1);
        }
        self.was_grounded = grounded;
    }

    fn analyze_patterns(&mut self, now: f64) {
        for kind in LawKind::ALL {
            if self.has_law(kind) {
                continue;
            }
            if let Some(detection) = detect(kind, &self.patterns) {
                self.add_law(detection, now);
            }
        }
    }

    /// Record a confirmed law. A law already known is left untouched.
    pub(crate) fn add_law(&mut self, detection: Detection, now: f64) {
        if self.has_law(detection.kind) {
            return;
        }
        for line in law_text(detection.kind).realisations {
            self.thoughts.think(now, line, ThoughtKind::Discovery);
        }
        info!(
            law = %detection.kind,
            confidence = detection.confidence,
            evidence = detection.evidence,
            sim_time = now,
            "law discovered"
        );
        self.laws.push(detection.into_law());
        self.satisfaction += self.config.discovery_satisfaction;
        self.curiosity = (self.curiosity + self.config.discovery_curiosity).min(MAX_CURIOSITY);
    }

    /// Whether `kind` has been confirmed.
    pub fn has_law(&self, kind: LawKind) -> bool {
        self.laws.iter().any(|law| law.name == kind)
    }

    /// Confirmed laws in order of discovery.
    pub fn laws(&self) -> &[Law] {
        &self.laws
    }

    /// The thought stream.
    pub const fn thoughts(&self) -> &ThoughtStream {
        &self.thoughts
    }

    /// Copies of the `n` newest thoughts, oldest first.
    pub fn recent_thoughts(&self, n: usize) -> Vec<Thought> {
        self.thoughts.recent(n)
    }

    /// Motivational summary.
    pub fn state(&self) -> MindState {
        MindState {
            curiosity: self.curiosity,
            confusion: self.confusion,
            satisfaction: self.satisfaction,
            phase: self.phase,
            laws_discovered: self.laws.len(),
            total_experiences: self.memories.len(),
            experience: self.experience,
        }
    }

    /// Narrative observations already made.
    pub const fn beliefs(&self) -> &BTreeSet<BeliefFlag> {
        &self.beliefs
    }

    /// Pattern buffers the detectors read.
    pub const fn patterns(&self) -> &PatternBuffers {
        &self.patterns
    }

    /// Number of archived percepts.
    pub fn memory_count(&self) -> usize {
        self.memories.len()
    }

    /// The configuration this mind was built from.
    pub const fn config(&self) -> &MindConfig {
        &self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
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

    const AIRBORNE: Body = Body {
        energy: 100.0,
        grounded: false,
    };

    fn mind() -> Mind {
        Mind::new(MindConfig {
            seed: Some(7),
            ..MindConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn wakes_up_confused() {
        let mind = mind();
        let first = mind.thoughts().latest().unwrap();
        assert_eq!(first.text, "Where... am I?");
        assert_eq!(first.kind, ThoughtKind::Confusion);
        assert_eq!(mind.thoughts().pending(), 2);
        assert_eq!(mind.state().phase, ExperimentPhase::InitialObservation);
        assert!((mind.state().curiosity - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn awakening_thoughts_follow_simulated_time() {
        let mut mind = mind();
        mind.process(&percept(0.5), &AIRBORNE);
        assert_eq!(mind.thoughts().pending(), 2);
        mind.process(&percept(1.0), &AIRBORNE);
        assert_eq!(mind.thoughts().pending(), 1);
        mind.process(&percept(2.6), &AIRBORNE);
        assert_eq!(mind.thoughts().pending(), 0);
        assert!(
            mind.thoughts()
                .iter()
                .any(|t| t.text == "I must explore. I need to understand.")
        );
    }

    #[test]
    fn archive_trims_to_the_latest() {
        let mut mind = mind();
        for i in 0..201 {
            mind.process(&percept(f64::from(i) * 0.016), &AIRBORNE);
        }
        assert_eq!(mind.memory_count(), 150);
        assert_eq!(mind.state().total_experiences, 150);
        mind.process(&percept(3.3), &AIRBORNE);
        assert_eq!(mind.memory_count(), 151);
    }

    #[test]
    fn leaving_the_ground_counts_as_a_fall() {
        let mut mind = mind();
        mind.process(&percept(0.0), &AIRBORNE);
        assert_eq!(mind.state().experience.falls, 0);
        mind.process(&grounded(0.016), &AIRBORNE);
        mind.process(&percept(0.032), &AIRBORNE);
        mind.process(&percept(0.048), &AIRBORNE);
        let e = mind.state().experience;
        assert_eq!(e.falls, 1);
        assert_eq!(e.ticks_in_air, 3);
        assert_eq!(e.ticks_on_ground, 1);
    }

    #[test]
    fn only_notable_impacts_are_counted() {
        let mut mind = mind();
        let mut soft = grounded(0.0);
        soft.touch.impact_force = 40.0;
        let mut hard = grounded(0.016);
        hard.touch.impact_force = 220.0;
        mind.process(&soft, &AIRBORNE);
        mind.process(&hard, &AIRBORNE);
        assert_eq!(mind.state().experience.impacts, 1);
        assert_eq!(mind.patterns().impacts.len(), 2);
    }

    #[test]
    fn discovery_rewards_once() {
        let mut mind = mind();
        let detection = Detection {
            kind: LawKind::Gravity,
            confidence: 0.8,
            evidence: 6,
        };
        mind.add_law(detection, 4.0);
        assert!(mind.has_law(LawKind::Gravity));
        assert!((mind.state().satisfaction - 20.0).abs() < f64::EPSILON);
        assert!((mind.state().curiosity - 100.0).abs() < f64::EPSILON);
        let discoveries = mind
            .thoughts()
            .iter()
            .filter(|t| t.kind == ThoughtKind::Discovery)
            .count();
        assert_eq!(discoveries, 2);

        mind.add_law(
            Detection {
                confidence: 0.1,
                ..detection
            },
            5.0,
        );
        assert_eq!(mind.laws().len(), 1);
        assert!((mind.laws()[0].confidence - 0.8).abs() < f64::EPSILON);
        assert!((mind.state().satisfaction - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn curiosity_is_capped() {
        let mut mind = Mind::new(MindConfig {
            initial_curiosity: 85.0,
            seed: Some(1),
            ..MindConfig::default()
        })
        .unwrap();
        for kind in [LawKind::Gravity, LawKind::Friction] {
            mind.add_law(
                Detection {
                    kind,
                    confidence: 0.75,
                    evidence: 10,
                },
                1.0,
            );
        }
        assert!((mind.state().curiosity - 100.0).abs() < f64::EPSILON);
        assert!((mind.state().satisfaction - 40.0).abs() < f64::EPSILON);
        assert_eq!(mind.state().laws_discovered, 2);
    }
}
