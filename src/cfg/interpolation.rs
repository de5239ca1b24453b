use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy used to resolve the [OrbitalParameters] at each sample epoch.
///
/// [OrbitalParameters]: crate::prelude::OrbitalParameters
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interpolation {
    /// Broadcast parameters are used as-is, from the record
    /// closest in time. This is the standard GNSS practice:
    /// the model already encodes its own time dependence.
    #[default]
    Nearest,

    /// Keplerian shape and harmonic terms come from the nearest record.
    /// When two applicable records straddle the epoch, the slowly varying
    /// terms (clock polynomial, IDOT and Omega dot rates) are linearly
    /// interpolated in time.
    Smoothed,

    /// Every parameter is linearly interpolated between the two records that
    /// straddle the epoch, after re-referencing the furthest record to the
    /// time of ephemeris of the nearest one.
    /// :warning: mixing two ephemerides for the Keplerian core does not
    /// describe a physical orbit and is not recommended. It is only
    /// provided to reproduce legacy processing chains.
    Linear,
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(fmt, "nearest"),
            Self::Smoothed => write!(fmt, "smoothed"),
            Self::Linear => write!(fmt, "linear"),
        }
    }
}

impl std::str::FromStr for Interpolation {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "smoothed" => Ok(Self::Smoothed),
            "linear" => Ok(Self::Linear),
            _ => Err(Error::UnknownInterpolation(s.to_string())),
        }
    }
}
