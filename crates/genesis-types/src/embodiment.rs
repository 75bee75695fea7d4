//! The seam between a mind and the body it steers.
//!
//! The mind reads the percept for almost everything, but a few policy
//! gates consult the live body directly. Keeping that access behind a
//! trait lets the mind stay independent of the body's crate.

/// Read-only view of a body's condition at decision time.
pub trait Embodiment {
    /// Remaining energy.
    fn energy(&self) -> f64;

    /// Whether the body is currently supported.
    fn is_grounded(&self) -> bool;
}
