//! One-shot narrative observations.
//!
//! Reflection never changes what the mind believes about laws. It only
//! puts first impressions into words, each gated by a [`BeliefFlag`] so it
//! is said once. Pain is the exception and is voiced on every hard landing.

use genesis_types::{BeliefFlag, Percept, ThoughtKind};

use crate::mind::Mind;

/// Downward speed at which falling is noticed.
const FALL_NOTICED: f64 = 100.0;

/// Impact force that hurts.
const PAINFUL_IMPACT: f64 = 100.0;

/// Notable impacts after which the mind links speed and pain.
const IMPACTS_BEFORE_CORRELATION: u32 = 3;

/// Wind speed that is felt as a push.
const WIND_FELT: f64 = 5.0;

/// Light samples needed before darkness is judged.
const DARKNESS_MIN_SAMPLES: usize = 30;

/// Light samples averaged to judge darkness.
const DARKNESS_WINDOW: usize = 10;

/// Average brightness below which it is dark.
const DARKNESS: f64 = 0.3;

/// Temperature felt as neutral.
const NEUTRAL_TEMPERATURE: f64 = 20.0;

/// Departure from neutral that is remarked upon.
const TEMPERATURE_SHOCK: f64 = 10.0;

/// Jumps after which the mind reflects on them.
const JUMPS_BEFORE_REFLECTION: u32 = 2;

/// Brightness at which the mind first notices it can see.
const FIRST_LIGHT: f64 = 0.5;

impl Mind {
    pub(crate) fn reflect(&mut self, percept: &Percept) {
        let now = percept.timestamp;
        let body = &percept.body;

        if self.memories.len() < self.config.early_reflection_memories {
            if body.on_ground {
                self.thoughts.think(
                    now,
                    "I feel pressure beneath me. Something holds me up.",
                    ThoughtKind::Perception,
                );
            }
            if percept.vision.brightness > FIRST_LIGHT {
                self.thoughts
                    .think(now, "There is brightness. Can I... see?", ThoughtKind::Perception);
            }
            return;
        }

        if !body.on_ground && body.velocity.y > FALL_NOTICED {
            self.observe_once(
                BeliefFlag::GravityNoticed,
                now,
                "I'm moving downward! Why? I did nothing...",
                ThoughtKind::Confusion,
            );
        }

        if percept.touch.impact_force > PAINFUL_IMPACT {
            self.thoughts.think(
                now,
                "Pain! A hard impact. Something stopped me abruptly.",
                ThoughtKind::Perception,
            );
            if self.experience.impacts > IMPACTS_BEFORE_CORRELATION {
                self.observe_once(
                    BeliefFlag::ImpactCorrelation,
                    now,
                    "I notice that falling fast hurts more when I stop...",
                    ThoughtKind::Hypothesis,
                );
            }
        }

        if percept.wind.speed > WIND_FELT {
            self.observe_once(
                BeliefFlag::WindFelt,
                now,
                "Something is pushing me. It is invisible but real.",
                ThoughtKind::Perception,
            );
        }

        if self.patterns.light.len() > DARKNESS_MIN_SAMPLES {
            let recent: f64 = self
                .patterns
                .light
                .tail(DARKNESS_WINDOW)
                .map(|s| s.brightness)
                .sum();
            if recent / (DARKNESS_WINDOW as f64) < DARKNESS {
                self.observe_once(
                    BeliefFlag::DarknessExperienced,
                    now,
                    "The brightness has faded. Is the world switching off?",
                    ThoughtKind::Confusion,
                );
            }
        }

        let ambient = &percept.temperature;
        if (ambient.ambient - NEUTRAL_TEMPERATURE).abs() > TEMPERATURE_SHOCK
            && self.beliefs.insert(BeliefFlag::Temperature(ambient.feeling))
        {
            self.thoughts.think(
                now,
                format!("My body feels {}. A new sensation.", ambient.feeling.label()),
                ThoughtKind::Perception,
            );
        }

        if self.experience.jumps > JUMPS_BEFORE_REFLECTION {
            self.observe_once(
                BeliefFlag::JumpReflection,
                now,
                "When I push upward I rise... but I always come back down.",
                ThoughtKind::Hypothesis,
            );
        }
    }

    /// Say `text` unless `flag` was already raised.
    fn observe_once(&mut self, flag: BeliefFlag, now: f64, text: &str, kind: ThoughtKind) {
        if self.beliefs.insert(flag) {
            self.thoughts.think(now, text, kind);
        }
    }
}
