//! Shared primitives for the stepviz algorithm crates.
//!
//! Provides the grid position type ([`Pos`]), the error taxonomy shared by
//! every structure ([`Error`]), and the step-trace container and playback
//! cursor ([`Trace`], [`Playback`]) that the algorithm crates use to expose
//! deterministic, replayable computations.

pub mod error;
pub mod pos;
pub mod trace;

pub use error::{Error, Result};
pub use pos::Pos;
pub use trace::{Playback, Trace};
