//! Physics for the Genesis world.
//!
//! This crate owns everything the body does not: world time, the day cycle,
//! wind, static scenery, decorative particles, and the integrator that moves
//! a [`Body`] each tick. It never decides anything; the agent and the mind
//! sit downstream.
//!
//! # Design Principles
//!
//! - The numeric core is total: updates and integration never fail or panic
//! - Environmental values are pure functions of world time
//! - The only randomness (particle spawns) comes from a seeded generator
//!
//! # Modules
//!
//! - [`config`] -- Tunable constants with calibrated defaults
//! - [`body`] -- The dynamic circular body
//! - [`environment`] -- Day cycle, wind, sky and sun as functions of time
//! - [`objects`] -- Static collidable boxes
//! - [`particles`] -- Decorative dust and leaves
//! - [`engine`] -- The [`PhysicsEngine`] tying it together
//! - [`error`] -- Configuration errors

pub mod body;
pub mod config;
pub mod engine;
pub mod environment;
pub mod error;
pub mod objects;
pub mod particles;

pub use body::Body;
pub use config::PhysicsConfig;
pub use engine::{PhysicsEngine, SensoryData};
pub use environment::Environment;
pub use error::PhysicsError;
pub use objects::WorldObject;
pub use particles::{Decorations, Leaf, Particle};
