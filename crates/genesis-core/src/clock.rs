//! Frame clock for the Genesis simulation.
//!
//! The clock turns raw frame times into the `dt` every stage of a tick
//! shares, and counts ticks.
//!
//! # Design Principles
//!
//! - A frame time is clamped before the speed multiplier is applied, so a
//!   stalled host (a backgrounded window, a debugger pause) cannot inject
//!   one huge step.
//! - Non-finite or negative frame times become a zero step.
//! - The tick counter uses checked arithmetic (no silent overflow).
//! - World time lives in the physics engine, not here.

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid clock configuration.
    #[error("invalid clock configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Tick counter and frame-time clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    /// Ticks executed so far.
    tick: u64,

    /// Largest frame time accepted before scaling.
    max_frame_dt: f64,
}

impl FrameClock {
    /// Create a clock at tick 0.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `max_frame_dt` is not a
    /// positive finite number.
    pub fn new(max_frame_dt: f64) -> Result<Self, ClockError> {
        if !(max_frame_dt.is_finite() && max_frame_dt > 0.0) {
            return Err(ClockError::InvalidConfig {
                reason: format!("max_frame_dt must be positive, got {max_frame_dt}"),
            });
        }
        Ok(Self {
            tick: 0,
            max_frame_dt,
        })
    }

    /// The step for a frame that took `elapsed` seconds at `speed`.
    pub fn frame_dt(&self, elapsed: f64, speed: u32) -> f64 {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return 0.0;
        }
        elapsed.min(self.max_frame_dt) * f64::from(speed)
    }

    /// Advance by one tick. Returns the new tick number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if the counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.tick)
    }

    /// Ticks executed so far.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Largest frame time accepted before scaling.
    pub const fn max_frame_dt(&self) -> f64 {
        self.max_frame_dt
    }

    /// Create a clock at an explicit tick (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `max_frame_dt` is invalid.
    pub fn from_parts(tick: u64, max_frame_dt: f64) -> Result<Self, ClockError> {
        let mut clock = Self::new(max_frame_dt)?;
        clock.tick = tick;
        Ok(clock)
    }
}
