//! The six law detectors.
//!
//! Each detector is a pure function of the pattern buffers. It returns a
//! [`Detection`] when its statistic crosses the confirming threshold and
//! `None` otherwise, including when there is not yet enough data. Whether a
//! law is already known is the caller's concern; a detector will happily
//! confirm the same law twice.
//!
//! | law | buffer | statistic | confirms when |
//! |-----|--------|-----------|---------------|
//! | gravity | falling | mean and variance of `dv/dt` | mean > 100, variance < 100 |
//! | inertia | impacts | Pearson r of `|v_before|` vs force | r > 0.6 |
//! | wind push | wind | share of windy ticks where `vx` grew over 5 ticks | share > 0.6 |
//! | day/night | light | rises, falls and range | rises > 10, falls > 10, range > 0.5 |
//! | light/temperature | temperature | Pearson r of temperature vs light | r > 0.5 |
//! | friction | velocity | horizontal decelerations above 50 | 10+ events, mean > 1 |

use genesis_types::{Law, LawKind};

use crate::patterns::{
    Bounded, FallingSample, ImpactSample, LightSample, PatternBuffers, TemperatureSample,
    VelocitySample, WindSample,
};
use crate::stats::{mean, pearson, variance};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Falling samples needed before gravity is considered.
const MIN_FALLING_SAMPLES: usize = 5;

/// Consecutive falling samples further apart than this are not differenced.
const MAX_SAMPLE_GAP: f64 = 0.1;

/// Acceleration estimates needed to judge gravity.
const MIN_ACCELERATION_SAMPLES: usize = 3;

/// Mean downward acceleration that counts as a pull.
const MIN_MEAN_ACCELERATION: f64 = 100.0;

/// Acceleration variance below which the pull counts as constant.
const MAX_ACCELERATION_VARIANCE: f64 = 100.0;

/// Impacts needed before inertia is considered.
const MIN_IMPACTS: usize = 3;

/// Correlation between speed and impact force that confirms inertia.
const INERTIA_CORRELATION: f64 = 0.6;

/// Wind samples needed before wind push is considered.
const MIN_WIND_SAMPLES: usize = 20;

/// Ticks between the two velocities compared for wind push.
const WIND_LAG: usize = 5;

/// Wind speed above which a sample counts.
const WINDY: f64 = 3.0;

/// Windy samples needed to judge wind push.
const MIN_WINDY_SAMPLES: usize = 5;

/// Share of windy samples with growing velocity that confirms wind push.
const WIND_SUCCESS_RATIO: f64 = 0.6;

/// Light samples needed before the day cycle is considered.
const MIN_LIGHT_SAMPLES: usize = 50;

/// Brightness range that counts as a real change.
const MIN_LIGHT_RANGE: f64 = 0.5;

/// Rises and falls each needed to call it a cycle.
const MIN_LIGHT_TRANSITIONS: usize = 10;

/// Temperature samples needed before the light link is considered.
const MIN_TEMPERATURE_SAMPLES: usize = 30;

/// Correlation between light and temperature that confirms the link.
const LIGHT_TEMPERATURE_CORRELATION: f64 = 0.5;

/// Horizontal speed above which slowing down counts.
const FRICTION_MIN_SPEED: f64 = 50.0;

/// Deceleration events needed to judge friction.
const MIN_DECELERATIONS: usize = 10;

/// Mean deceleration per tick that confirms friction.
const MIN_MEAN_DECELERATION: f64 = 1.0;

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// A law that crossed its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Which law.
    pub kind: LawKind,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Samples backing the confirmation.
    pub evidence: usize,
}

impl Detection {
    /// Freeze the detection into a [`Law`].
    pub fn into_law(self) -> Law {
        let text = law_text(self.kind);
        Law {
            name: self.kind,
            description: text.description.to_owned(),
            formula: text.formula.to_owned(),
            confidence: self.confidence,
            evidence: self.evidence,
        }
    }
}

/// Fixed wording attached to a law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawText {
    /// What the mind believes.
    pub description: &'static str,
    /// Informal statement of the relationship.
    pub formula: &'static str,
    /// The two thoughts that announce the discovery.
    pub realisations: [&'static str; 2],
}

/// Wording for each law.
pub const fn law_text(kind: LawKind) -> LawText {
    match kind {
        LawKind::Gravity => LawText {
            description: "A constant force pulls everything downward",
            formula: "While falling, speed grows steadily (~9.8 units per moment)",
            realisations: [
                "DISCOVERY! When nothing holds me up, my downward speed keeps INCREASING.",
                "There seems to be an invisible force pulling me down with constant acceleration.",
            ],
        },
        LawKind::Inertia => LawText {
            description: "Moving things resist changing their state",
            formula: "Impact force ∝ velocity",
            realisations: [
                "DISCOVERY! The force of an impact depends on how fast I was going.",
                "The faster I move, the harder I hit. As if motion 'stores' something.",
            ],
        },
        LawKind::WindPush => LawText {
            description: "Moving air exerts force on objects",
            formula: "Wind pushes objects along its direction",
            realisations: [
                "DISCOVERY! That invisible force I feel... it pushes me in one direction.",
                "It is as if the air itself can push on me.",
            ],
        },
        LawKind::DayNightCycle => LawText {
            description: "Light follows a regular cycle of rising and falling",
            formula: "Light = f(time), where f is periodic",
            realisations: [
                "DISCOVERY! Light is not constant. It rises and falls in a pattern.",
                "There are periods of bright light and periods of darkness. A cycle repeats.",
            ],
        },
        LawKind::LightTemperature => LawText {
            description: "Light intensity is correlated with temperature",
            formula: "Temperature rises when light rises",
            realisations: [
                "DISCOVERY! When there is more light, I feel warmer.",
                "Light and temperature are linked. Does light bring heat?",
            ],
        },
        LawKind::Friction => LawText {
            description: "Motion is gradually reduced by resistance",
            formula: "Speed decreases over time while moving",
            realisations: [
                "DISCOVERY! When I move, something slows me down gradually.",
                "Motion does not keep itself going. A resistance wears it down.",
            ],
        },
    }
}

/// Run the detector for `kind`.
pub fn detect(kind: LawKind, buffers: &PatternBuffers) -> Option<Detection> {
    match kind {
        LawKind::Gravity => gravity(&buffers.falling),
        LawKind::Inertia => inertia(&buffers.impacts),
        LawKind::WindPush => wind_push(&buffers.wind),
        LawKind::DayNightCycle => day_night_cycle(&buffers.light),
        LawKind::LightTemperature => light_temperature(&buffers.temperature),
        LawKind::Friction => friction(&buffers.velocity),
    }
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

/// Constant downward acceleration while unsupported.
pub fn gravity(falling: &Bounded<FallingSample>) -> Option<Detection> {
    if falling.len() < MIN_FALLING_SAMPLES {
        return None;
    }

    let accelerations: Vec<f64> = falling
        .iter()
        .zip(falling.iter().skip(1))
        .filter_map(|(prev, next)| {
            let dt = next.t - prev.t;
            (dt > 0.0 && dt < MAX_SAMPLE_GAP).then(|| (next.vy - prev.vy) / dt)
        })
        .collect();
    if accelerations.len() < MIN_ACCELERATION_SAMPLES {
        return None;
    }

    let avg = mean(&accelerations)?;
    let spread = variance(&accelerations)?;
    (spread < MAX_ACCELERATION_VARIANCE && avg > MIN_MEAN_ACCELERATION).then(|| Detection {
        kind: LawKind::Gravity,
        confidence: (accelerations.len() as f64).mul_add(0.05, 0.5).min(0.95),
        evidence: accelerations.len(),
    })
}

/// Harder impacts after faster falls.
pub fn inertia(impacts: &Bounded<ImpactSample>) -> Option<Detection> {
    if impacts.len() < MIN_IMPACTS {
        return None;
    }

    let (speeds, forces): (Vec<f64>, Vec<f64>) = impacts
        .iter()
        .filter_map(|i| i.velocity_before.map(|v| (v.abs(), i.force)))
        .unzip();
    if speeds.len() < MIN_IMPACTS {
        return None;
    }

    let r = pearson(&speeds, &forces);
    (r > INERTIA_CORRELATION).then(|| Detection {
        kind: LawKind::Inertia,
        confidence: r.min(0.9),
        evidence: speeds.len(),
    })
}

/// Horizontal velocity growing while the wind blows.
pub fn wind_push(wind: &Bounded<WindSample>) -> Option<Detection> {
    if wind.len() < MIN_WIND_SAMPLES {
        return None;
    }

    let (pushed, windy) = wind
        .iter()
        .skip(WIND_LAG)
        .zip(wind.iter())
        .filter(|(now, _)| now.speed > WINDY)
        .fold((0_usize, 0_usize), |(pushed, windy), (now, before)| {
            (
                pushed.saturating_add(usize::from(now.body_vx > before.body_vx)),
                windy.saturating_add(1),
            )
        });
    if windy < MIN_WINDY_SAMPLES {
        return None;
    }

    let ratio = pushed as f64 / windy as f64;
    (ratio > WIND_SUCCESS_RATIO).then_some(Detection {
        kind: LawKind::WindPush,
        confidence: ratio,
        evidence: windy,
    })
}

/// Brightness that both rises and falls over a wide range.
pub fn day_night_cycle(light: &Bounded<LightSample>) -> Option<Detection> {
    if light.len() < MIN_LIGHT_SAMPLES {
        return None;
    }

    let mut rises = 0_usize;
    let mut falls = 0_usize;
    for (prev, next) in light.iter().zip(light.iter().skip(1)) {
        if next.brightness > prev.brightness {
            rises = rises.saturating_add(1);
        } else if next.brightness < prev.brightness {
            falls = falls.saturating_add(1);
        }
    }
    let (lo, hi) = light
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.brightness), hi.max(s.brightness))
        });

    (hi - lo > MIN_LIGHT_RANGE && rises > MIN_LIGHT_TRANSITIONS && falls > MIN_LIGHT_TRANSITIONS)
        .then(|| Detection {
            kind: LawKind::DayNightCycle,
            confidence: 0.85,
            evidence: light.len(),
        })
}

/// Warmer when brighter.
pub fn light_temperature(samples: &Bounded<TemperatureSample>) -> Option<Detection> {
    if samples.len() < MIN_TEMPERATURE_SAMPLES {
        return None;
    }

    let (temperatures, lights): (Vec<f64>, Vec<f64>) =
        samples.iter().map(|s| (s.temperature, s.light)).unzip();
    let r = pearson(&temperatures, &lights);
    (r > LIGHT_TEMPERATURE_CORRELATION).then(|| Detection {
        kind: LawKind::LightTemperature,
        confidence: r,
        evidence: samples.len(),
    })
}

/// Sideways motion that keeps losing speed.
pub fn friction(velocity: &Bounded<VelocitySample>) -> Option<Detection> {
    let decelerations: Vec<f64> = velocity
        .iter()
        .zip(velocity.iter().skip(1))
        .filter_map(|(prev, next)| {
            let before = prev.vx.abs();
            let drop = before - next.vx.abs();
            (before > FRICTION_MIN_SPEED && drop > 0.0).then_some(drop)
        })
        .collect();
    if decelerations.len() < MIN_DECELERATIONS {
        return None;
    }

    let avg = mean(&decelerations)?;
    (avg > MIN_MEAN_DECELERATION).then(|| Detection {
        kind: LawKind::Friction,
        confidence: 0.75,
        evidence: decelerations.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn falling(samples: &[(f64, f64)]) -> Bounded<FallingSample> {
        let mut buffer = Bounded::new(100);
        for &(t, vy) in samples {
            buffer.push(FallingSample { t, vy, y: 0.0 });
        }
        buffer
    }

    fn steady_fall(n: u32) -> Bounded<FallingSample> {
        let samples: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let t = f64::from(i) * 0.016;
                (t, 490.5 * t)
            })
            .collect();
        falling(&samples)
    }

    #[test]
    fn gravity_needs_five_falling_samples() {
        assert!(gravity(&steady_fall(4)).is_none());
        assert!(gravity(&steady_fall(5)).is_some());
    }

    #[test]
    fn gravity_needs_three_acceleration_samples() {
        // Five samples but only two usable gaps.
        let buffer = falling(&[
            (0.0, 0.0),
            (0.016, 7.848),
            (0.032, 15.696),
            (0.5, 250.0),
            (1.0, 500.0),
        ]);
        assert!(gravity(&buffer).is_none());
    }

    #[test]
    fn steady_fall_confirms_gravity() {
        let detection = gravity(&steady_fall(12)).unwrap();
        assert_eq!(detection.kind, LawKind::Gravity);
        assert_eq!(detection.evidence, 11);
        assert!((detection.confidence - 0.95).abs() < 1e-12);

        let short = gravity(&steady_fall(5)).unwrap();
        assert!((short.confidence - 0.7).abs() < 1e-12);
    }

    #[test]
    fn erratic_fall_is_not_gravity() {
        let buffer = falling(&[
            (0.0, 0.0),
            (0.016, 10.0),
            (0.032, 0.0),
            (0.048, 12.0),
            (0.064, 2.0),
        ]);
        assert!(gravity(&buffer).is_none());
    }

    #[test]
    fn weak_pull_is_not_gravity() {
        let buffer = falling(&[
            (0.0, 0.0),
            (0.016, 0.8),
            (0.032, 1.6),
            (0.048, 2.4),
            (0.064, 3.2),
        ]);
        assert!(gravity(&buffer).is_none());
    }

    fn impacts(samples: &[(f64, Option<f64>)]) -> Bounded<ImpactSample> {
        let mut buffer = Bounded::new(100);
        for &(force, velocity_before) in samples {
            buffer.push(ImpactSample {
                t: 0.0,
                force,
                velocity_before,
            });
        }
        buffer
    }

    #[test]
    fn faster_falls_hitting_harder_is_inertia() {
        let buffer = impacts(&[
            (300.0, Some(430.0)),
            (90.0, Some(-130.0)),
            (60.0, Some(85.0)),
            (10.0, None),
        ]);
        let detection = inertia(&buffer).unwrap();
        assert_eq!(detection.evidence, 3);
        assert!(detection.confidence <= 0.9);
    }

    #[test]
    fn impacts_without_prior_velocity_are_ignored() {
        let buffer = impacts(&[(300.0, None), (90.0, Some(130.0)), (60.0, Some(85.0))]);
        assert!(inertia(&buffer).is_none());
    }

    fn wind(samples: impl IntoIterator<Item = (f64, f64)>) -> Bounded<WindSample> {
        let mut buffer = Bounded::new(100);
        for (speed, body_vx) in samples {
            buffer.push(WindSample {
                t: 0.0,
                speed,
                body_vx,
            });
        }
        buffer
    }

    #[test]
    fn steady_drift_in_wind_is_wind_push() {
        let buffer = wind((0..25).map(|i| (6.0, f64::from(i))));
        let detection = wind_push(&buffer).unwrap();
        assert_eq!(detection.evidence, 20);
        assert!((detection.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn calm_air_proves_nothing() {
        let buffer = wind((0..25).map(|i| (1.0, f64::from(i))));
        assert!(wind_push(&buffer).is_none());
        assert!(wind_push(&wind((0..19).map(|i| (6.0, f64::from(i))))).is_none());
    }

    fn light(values: impl IntoIterator<Item = f64>) -> Bounded<LightSample> {
        let mut buffer = Bounded::new(100);
        for brightness in values {
            buffer.push(LightSample {
                t: 0.0,
                brightness,
                day_progress: 0.0,
            });
        }
        buffer
    }

    #[test]
    fn rise_and_fall_is_a_cycle() {
        let up = (0..30).map(|i| 0.1 + f64::from(i) * 0.03);
        let down = (0..30).map(|i| 1.0 - f64::from(i) * 0.03);
        let detection = day_night_cycle(&light(up.chain(down))).unwrap();
        assert_eq!(detection.evidence, 60);
        assert!((detection.confidence - 0.85).abs() < f64::EPSILON);
    }

    /// `samples` readings that climb by `range` in `rises` strict steps,
    /// come back down in `falls` strict steps, then hold steady.
    fn cycle(rises: u32, falls: u32, range: f64, samples: usize) -> Bounded<LightSample> {
        let low = 0.2;
        let high = low + range;
        let mut values = vec![low];
        values.extend((1..=rises).map(|i| range.mul_add(f64::from(i) / f64::from(rises), low)));
        values.extend((1..=falls).map(|i| range.mul_add(-f64::from(i) / f64::from(falls), high)));
        let last = *values.last().unwrap();
        values.resize(samples, last);
        light(values)
    }

    #[test]
    fn cycle_at_the_thresholds_is_detected() {
        let detection = day_night_cycle(&cycle(11, 11, 0.55, 50)).unwrap();
        assert_eq!(detection.kind, LawKind::DayNightCycle);
        assert_eq!(detection.evidence, 50);
        assert!((detection.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn cycle_just_under_any_threshold_is_not_detected() {
        assert!(day_night_cycle(&cycle(11, 11, 0.55, 49)).is_none(), "samples");
        assert!(day_night_cycle(&cycle(10, 11, 0.55, 50)).is_none(), "rises");
        assert!(day_night_cycle(&cycle(11, 10, 0.55, 50)).is_none(), "falls");
        assert!(day_night_cycle(&cycle(11, 11, 0.49, 50)).is_none(), "range");
    }

    #[test]
    fn flat_steps_are_neither_rise_nor_fall() {
        // 60 samples, wide range, but only 5 rises.
        let values = (0..60).map(|i| if i < 55 { 0.1 } else { 0.1 + f64::from(i - 54) * 0.2 });
        assert!(day_night_cycle(&light(values)).is_none());
    }

    #[test]
    fn narrow_range_is_not_a_cycle() {
        let values = (0..60).map(|i| if i % 2 == 0 { 0.4 } else { 0.5 });
        assert!(day_night_cycle(&light(values)).is_none());
    }

    #[test]
    fn warmth_tracking_light_is_a_link() {
        let mut buffer = Bounded::new(100);
        for i in 0..40 {
            let light = f64::from(i) / 40.0;
            buffer.push(TemperatureSample {
                t: 0.0,
                temperature: 20.0f64.mul_add(light, 10.0),
                light,
            });
        }
        let detection = light_temperature(&buffer).unwrap();
        assert!((detection.confidence - 1.0).abs() < 1e-9);
        assert_eq!(detection.evidence, 40);
    }

    fn velocity(values: impl IntoIterator<Item = f64>) -> Bounded<VelocitySample> {
        let mut buffer = Bounded::new(100);
        for vx in values {
            buffer.push(VelocitySample { t: 0.0, vx, vy: 0.0 });
        }
        buffer
    }

    #[test]
    fn sliding_to_a_stop_is_friction() {
        let values = (0..20).map(|i| 190.0 * 0.95f64.powi(i));
        let detection = friction(&velocity(values)).unwrap();
        assert!(detection.evidence >= 10);
        assert!((detection.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn slow_drift_is_not_friction() {
        let values = (0..20).map(|i| 40.0 - f64::from(i));
        assert!(friction(&velocity(values)).is_none());
    }

    #[test]
    fn detection_becomes_a_law() {
        let law = Detection {
            kind: LawKind::Friction,
            confidence: 0.75,
            evidence: 12,
        }
        .into_law();
        assert_eq!(law.name, LawKind::Friction);
        assert_eq!(law.evidence, 12);
        assert_eq!(law.description, law_text(LawKind::Friction).description);
    }
}
