//! Satellite position
use crate::prelude::{Epoch, Vector3, SV};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [SatellitePosition] resolved at a given [Epoch], in the ECEF frame.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatellitePosition {
    /// [SV]
    pub sv: SV,
    /// [Epoch] of resolution
    pub epoch: Epoch,
    /// ECEF x coordinate (m)
    pub x_m: f64,
    /// ECEF y coordinate (m)
    pub y_m: f64,
    /// ECEF z coordinate (m)
    pub z_m: f64,
    /// Onboard clock offset to system time (s), including the
    /// relativistic (eccentricity) effect
    pub clock_correction_s: f64,
}

impl SatellitePosition {
    /// Returns ECEF coordinates (m)
    pub fn ecef_m(&self) -> Vector3<f64> {
        Vector3::new(self.x_m, self.y_m, self.z_m)
    }

    /// Returns distance to Earth center (m)
    pub fn radius_m(&self) -> f64 {
        self.ecef_m().norm()
    }

    /// Returns (time, x, y, z) tuple, for tabular exports
    pub fn to_row(&self) -> (Epoch, f64, f64, f64) {
        (self.epoch, self.x_m, self.y_m, self.z_m)
    }
}

impl std::fmt::Display for SatellitePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}({}) x={:.3}m y={:.3}m z={:.3}m",
            self.epoch, self.sv, self.x_m, self.y_m, self.z_m
        )
    }
}
