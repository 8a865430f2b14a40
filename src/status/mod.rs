//! Damaged-system status reporting.
//!
//! This module handles:
//! - Random selection of a damaged system
//! - The shared memory of the last selection
//! - Pluggable random sources for deterministic tests

pub mod picker;
pub mod random;
pub mod state;

pub use picker::{DamagedStatus, StatusPicker};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use state::LastDamagedSystem;
