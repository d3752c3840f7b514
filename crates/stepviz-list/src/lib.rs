//! Singly-linked chain with traced Floyd cycle detection.
//!
//! Nodes live in a backing arena and link by index, so a deliberate cycle
//! is just a back-pointing index rather than an ownership edge. The
//! detection engine is the classic tortoise-and-hare race, with a traced
//! variant that records every individual pointer move for replay.

pub mod chain;
pub mod floyd;

pub use chain::{Chain, ChainNode};
pub use floyd::{CycleResult, CycleStep, CycleStepKind};
