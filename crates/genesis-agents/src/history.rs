//! Short-term sensor history.
//!
//! The body keeps its own bounded ring of recent percepts, separate from
//! whatever the mind chooses to remember. Readings are pulled out through
//! typed accessors rather than free-form paths.

use std::collections::VecDeque;

use genesis_types::{Percept, SensorReading};

/// A bounded ring buffer of percepts, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorHistory {
    percepts: VecDeque<Percept>,
    capacity: usize,
}

impl SensorHistory {
    /// An empty history holding at most `capacity` percepts.
    pub fn new(capacity: usize) -> Self {
        Self {
            percepts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a percept, dropping the oldest once full.
    pub fn push(&mut self, percept: Percept) {
        if self.capacity == 0 {
            return;
        }
        if self.percepts.len() >= self.capacity {
            self.percepts.pop_front();
        }
        self.percepts.push_back(percept);
    }

    /// Number of stored percepts.
    pub fn len(&self) -> usize {
        self.percepts.len()
    }

    /// Whether nothing has been sensed yet.
    pub fn is_empty(&self) -> bool {
        self.percepts.is_empty()
    }

    /// Maximum number of stored percepts.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent percept.
    pub fn latest(&self) -> Option<&Percept> {
        self.percepts.back()
    }

    /// Stored percepts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Percept> {
        self.percepts.iter()
    }

    /// The last `count` readings of `sensor`, oldest first.
    pub fn recent_readings(&self, count: usize, sensor: impl Fn(&Percept) -> f64) -> Vec<SensorReading> {
        let skip = self.percepts.len().saturating_sub(count);
        self.percepts
            .iter()
            .skip(skip)
            .map(|p| SensorReading {
                time: p.timestamp,
                value: sensor(p),
            })
            .collect()
    }

    /// Recent local brightness.
    pub fn recent_brightness(&self, count: usize) -> Vec<SensorReading> {
        self.recent_readings(count, |p| p.vision.brightness)
    }

    /// Recent ambient temperatures.
    pub fn recent_temperatures(&self, count: usize) -> Vec<SensorReading> {
        self.recent_readings(count, |p| p.temperature.ambient)
    }

    /// Recent body speeds.
    pub fn recent_speeds(&self, count: usize) -> Vec<SensorReading> {
        self.recent_readings(count, |p| p.body.speed)
    }

    /// Recent wind speeds.
    pub fn recent_wind_speeds(&self, count: usize) -> Vec<SensorReading> {
        self.recent_readings(count, |p| p.wind.speed)
    }
}
