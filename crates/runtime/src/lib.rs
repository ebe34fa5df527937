//! Runtime orchestration for exploration play.
//!
//! This crate wires the rules crate and the content crate into a
//! playable session: it maps raw input keys onto movement, runs the
//! encounter check after grass steps, and hands scene transitions to
//! whatever presentation layer implements [`SceneSink`].
//!
//! Modules are organized by responsibility:
//! - [`input`] names the raw keys a frontend feeds in
//! - [`session`] hosts the exploration state machine
//! - [`scene`] is the seam toward the presentation layer
//! - [`rng`] adapts `rand` generators to the rules crate's RNG seam

pub mod input;
pub mod rng;
pub mod scene;
pub mod session;

pub use input::InputKey;
pub use rng::RandSource;
pub use scene::SceneSink;
pub use session::{ExplorationSession, SessionError};
