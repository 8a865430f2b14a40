//! Saturated specific volume estimation along a two-point saturation line.

use tracing::{debug, instrument, warn};

use crate::error::PhaseError;

use super::types::{PhaseAnchors, PhaseVolumes, Pressure};

/// Number of decimal places kept in estimates.
pub const ROUND_DECIMALS: i32 = 6;

/// Estimate volumes with the built-in anchors.
pub fn estimate_volumes(pressure: Pressure) -> Result<PhaseVolumes, PhaseError> {
    PhaseVolumeEstimator::default().estimate(pressure)
}

/// Interpolating estimator over a pair of [`PhaseAnchors`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseVolumeEstimator {
    anchors: PhaseAnchors,
}

impl PhaseVolumeEstimator {
    /// Create an estimator over custom anchors.
    pub fn new(anchors: PhaseAnchors) -> Self {
        Self { anchors }
    }

    /// Anchors in use.
    pub fn anchors(&self) -> &PhaseAnchors {
        &self.anchors
    }

    /// Estimate liquid and vapor volumes at `pressure`.
    ///
    /// Pressures at or above the critical pressure clamp to the critical
    /// volume. Below it each phase is linearly interpolated, or extrapolated
    /// under the low anchor. Results are rounded to [`ROUND_DECIMALS`] places
    /// and rejected if either is negative.
    #[instrument(skip_all, fields(pressure = pressure.mpa()))]
    pub fn estimate(&self, pressure: Pressure) -> Result<PhaseVolumes, PhaseError> {
        let a = &self.anchors;
        let p = pressure.mpa();

        if p >= a.critical_pressure {
            debug!("At or above critical pressure, clamping");
            return Ok(PhaseVolumes {
                specific_volume_liquid: a.critical_volume,
                specific_volume_vapor: a.critical_volume,
            });
        }

        let liquid = round_to(
            linear(
                (a.low_pressure, a.low_liquid_volume),
                (a.critical_pressure, a.critical_volume),
                p,
            ),
            ROUND_DECIMALS,
        );
        let vapor = round_to(
            linear(
                (a.low_pressure, a.low_vapor_volume),
                (a.critical_pressure, a.critical_volume),
                p,
            ),
            ROUND_DECIMALS,
        );

        if liquid < 0.0 || vapor < 0.0 {
            warn!(liquid, vapor, "Negative specific volume");
            return Err(PhaseError::NegativeVolume { pressure: p });
        }

        Ok(PhaseVolumes {
            specific_volume_liquid: liquid,
            specific_volume_vapor: vapor,
        })
    }
}

/// Value at `x` on the line through `(x0, y0)` and `(x1, y1)`.
fn linear((x0, y0): (f64, f64), (x1, y1): (f64, f64), x: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
