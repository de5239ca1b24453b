#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Constellation;

/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Duration of one week, in seconds
pub const WEEK_SECONDS: f64 = 604_800.0;

/// Half a week, in seconds
pub const HALF_WEEK_SECONDS: f64 = WEEK_SECONDS / 2.0;

/// Tilt of the BeiDou GEO reference plane (5°), in radians
pub(crate) const BDS_GEO_TILT_RAD: f64 = 5.0 * std::f64::consts::PI / 180.0;

/// Physical [Constants] used by the position computer.
/// Each constellation defines its own set in its ICD, select one with
/// [Constants::from_constellation] or define your own.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constants {
    /// Earth gravitational constant (m^3 s-2)
    pub gm_m3_s2: f64,
    /// Earth angular velocity (rad/s)
    pub earth_rotation_rad_s: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self::GPS
    }
}

impl Constants {
    /// IS-GPS-200 (also used by QZSS and IRNSS)
    pub const GPS: Self = Self {
        gm_m3_s2: 3.986005E14,
        earth_rotation_rad_s: 7.2921151467E-5,
    };

    /// Galileo OS-SIS-ICD
    pub const GALILEO: Self = Self {
        gm_m3_s2: 3.986004418E14,
        earth_rotation_rad_s: 7.2921151467E-5,
    };

    /// BDS-SIS-ICD (CGCS2000)
    pub const BEIDOU: Self = Self {
        gm_m3_s2: 3.986004418E14,
        earth_rotation_rad_s: 7.292115E-5,
    };

    /// Returns the [Constants] set defined for this [Constellation].
    pub fn from_constellation(constellation: Constellation) -> Self {
        match constellation {
            Constellation::Galileo => Self::GALILEO,
            Constellation::BeiDou => Self::BEIDOU,
            _ => Self::GPS,
        }
    }

    /// Relativistic clock correction constant F = -2 sqrt(μ) / c² (s.m^-1/2)
    pub fn relativistic_f(&self) -> f64 {
        -2.0 * self.gm_m3_s2.sqrt() / SPEED_OF_LIGHT_M_S.powi(2)
    }
}
