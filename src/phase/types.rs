//! Phase-change lookup types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PhaseError;

/// A validated, strictly positive pressure in MPa.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pressure(f64);

impl Pressure {
    /// Validate a raw pressure. `NaN` and values `<= 0` are rejected.
    pub fn new(mpa: f64) -> Result<Self, PhaseError> {
        if mpa > 0.0 {
            Ok(Self(mpa))
        } else {
            Err(PhaseError::NonPositivePressure { pressure: mpa })
        }
    }

    /// Pressure in MPa.
    pub fn mpa(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Pressure {
    type Error = PhaseError;

    fn try_from(mpa: f64) -> Result<Self, Self::Error> {
        Self::new(mpa)
    }
}

/// Saturated liquid and vapor specific volumes in m³/kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhaseVolumes {
    /// Saturated liquid specific volume.
    pub specific_volume_liquid: f64,
    /// Saturated vapor specific volume.
    pub specific_volume_vapor: f64,
}

/// Two-point saturation line.
///
/// Below `critical_pressure` each phase follows the straight line from its
/// low-pressure anchor to `critical_volume`. At or above it both phases are
/// `critical_volume`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseAnchors {
    /// Low anchor pressure, MPa.
    pub low_pressure: f64,
    /// Liquid volume at the low anchor.
    pub low_liquid_volume: f64,
    /// Vapor volume at the low anchor.
    pub low_vapor_volume: f64,
    /// Critical pressure, MPa.
    pub critical_pressure: f64,
    /// Shared volume of both phases at the critical point.
    pub critical_volume: f64,
}

impl PhaseAnchors {
    /// Low anchor pressure (MPa).
    pub const P_MIN: f64 = 0.05;
    /// Liquid volume at [`Self::P_MIN`] (m³/kg).
    pub const VL_MIN: f64 = 0.00105;
    /// Vapor volume at [`Self::P_MIN`] (m³/kg).
    pub const VV_MIN: f64 = 30.00;
    /// Critical pressure (MPa).
    pub const P_CRIT: f64 = 10.0;
    /// Critical specific volume (m³/kg).
    pub const V_CRIT: f64 = 0.0035;
}

impl Default for PhaseAnchors {
    fn default() -> Self {
        Self {
            low_pressure: Self::P_MIN,
            low_liquid_volume: Self::VL_MIN,
            low_vapor_volume: Self::VV_MIN,
            critical_pressure: Self::P_CRIT,
            critical_volume: Self::V_CRIT,
        }
    }
}
