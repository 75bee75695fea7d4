//! Bounded per-category observation buffers.
//!
//! Every percept is split into the handful of samples the law detectors
//! need. Each category keeps only its most recent entries; the oldest is
//! dropped when a buffer is full.

use std::collections::VecDeque;

use genesis_types::Percept;

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

/// Where the body was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// How the body was moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Horizontal velocity.
    pub vx: f64,
    /// Vertical velocity, positive downward.
    pub vy: f64,
}

/// Vertical motion while airborne.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingSample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Vertical velocity.
    pub vy: f64,
    /// Vertical position.
    pub y: f64,
}

/// A landing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Reported impact force.
    pub force: f64,
    /// Vertical velocity one tick before the landing was reported, if the
    /// mind had seen that tick.
    pub velocity_before: Option<f64>,
}

/// Wind against the body's horizontal motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Wind speed.
    pub speed: f64,
    /// Horizontal velocity of the body.
    pub body_vx: f64,
}

/// Brightness over the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Perceived brightness.
    pub brightness: f64,
    /// Fraction of the day elapsed.
    pub day_progress: f64,
}

/// Temperature against brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSample {
    /// Simulated time of the observation.
    pub t: f64,
    /// Ambient temperature.
    pub temperature: f64,
    /// Perceived brightness.
    pub light: f64,
}

// ---------------------------------------------------------------------------
// Bounded buffer
// ---------------------------------------------------------------------------

/// A FIFO that forgets its oldest entry once full.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounded<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Bounded<T> {
    /// An empty buffer holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append, evicting the oldest entry if full.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// The newest entry.
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// The `n` newest entries, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &T> {
        self.items.iter().skip(self.items.len().saturating_sub(n))
    }
}

// ---------------------------------------------------------------------------
// Pattern buffers
// ---------------------------------------------------------------------------

/// All observation buffers the detectors read from.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternBuffers {
    /// Every position.
    pub position: Bounded<PositionSample>,
    /// Every velocity.
    pub velocity: Bounded<VelocitySample>,
    /// Vertical motion, only while airborne.
    pub falling: Bounded<FallingSample>,
    /// Landings, only when an impact was reported.
    pub impacts: Bounded<ImpactSample>,
    /// Wind and horizontal velocity.
    pub wind: Bounded<WindSample>,
    /// Brightness over the day.
    pub light: Bounded<LightSample>,
    /// Temperature and brightness.
    pub temperature: Bounded<TemperatureSample>,
}

impl PatternBuffers {
    /// Empty buffers of equal capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            position: Bounded::new(capacity),
            velocity: Bounded::new(capacity),
            falling: Bounded::new(capacity),
            impacts: Bounded::new(capacity),
            wind: Bounded::new(capacity),
            light: Bounded::new(capacity),
            temperature: Bounded::new(capacity),
        }
    }

    /// Split one percept into its samples.
    pub fn record(&mut self, percept: &Percept) {
        let t = percept.timestamp;
        let body = &percept.body;

        self.position.push(PositionSample {
            t,
            x: body.position.x,
            y: body.position.y,
        });
        self.velocity.push(VelocitySample {
            t,
            vx: body.velocity.x,
            vy: body.velocity.y,
        });

        if !body.on_ground {
            self.falling.push(FallingSample {
                t,
                vy: body.velocity.y,
                y: body.position.y,
            });
        }

        if percept.touch.impact_force > 0.0 {
            let velocity_before = self.velocity.iter().rev().nth(1).map(|v| v.vy);
            self.impacts.push(ImpactSample {
                t,
                force: percept.touch.impact_force,
                velocity_before,
            });
        }

        self.wind.push(WindSample {
            t,
            speed: percept.wind.speed,
            body_vx: body.velocity.x,
        });
        self.light.push(LightSample {
            t,
            brightness: percept.vision.brightness,
            day_progress: percept.time_perception.day_progress,
        });
        self.temperature.push(TemperatureSample {
            t,
            temperature: percept.temperature.ambient,
            light: percept.vision.brightness,
        });
    }
}
