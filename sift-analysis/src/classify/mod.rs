//! Two-stage label decision engine.

pub mod cues;
pub mod engine;
pub mod gate;

pub use cues::{CueSets, ListySignal};
pub use engine::{classify, decide, replay};
