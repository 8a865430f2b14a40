//! Saturated liquid/vapor specific volume lookup.
//!
//! This module handles:
//! - Pressure validation
//! - The fixed low-pressure and critical anchors
//! - Interpolation, clamping and sanity checks

pub mod estimator;
pub mod types;

pub use estimator::{estimate_volumes, PhaseVolumeEstimator, ROUND_DECIMALS};
pub use types::{PhaseAnchors, PhaseVolumes, Pressure};
