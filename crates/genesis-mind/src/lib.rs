//! The mind for the Genesis simulation.
//!
//! A [`Mind`] never sees the physics engine. It receives one
//! [`Percept`](genesis_types::Percept) per tick and from that stream alone
//! confirms physical laws, narrates what it notices and chooses the next
//! action. Laws are confirmed once and never revised.
//!
//! # Modules
//!
//! - [`mind`] -- The [`Mind`] struct, archive, experience and discovery
//! - [`patterns`] -- Bounded per-category observation buffers
//! - [`detectors`] -- The six law detectors and their wording
//! - [`stats`] -- Mean, variance and Pearson correlation
//! - [`reflection`] -- One-shot narrative observations
//! - [`policy`] -- The experiment curriculum
//! - [`thoughts`] -- Bounded thought stream with scheduled thoughts
//! - [`config`] -- Memory sizes and policy probabilities
//! - [`error`] -- Construction errors

pub mod config;
pub mod detectors;
pub mod error;
pub mod mind;
pub mod patterns;
pub mod policy;
pub mod reflection;
pub mod stats;
pub mod thoughts;

#[cfg(test)]
pub(crate) mod testing;

pub use config::MindConfig;
pub use detectors::{Detection, detect};
pub use error::MindError;
pub use mind::Mind;
pub use patterns::PatternBuffers;
pub use thoughts::ThoughtStream;
