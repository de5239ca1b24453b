use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with a sample epoch whose ephemeris cannot be resolved.
/// Numerical failures (Kepler solver, invalid parameters) always abort.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingEpochPolicy {
    /// Epoch is omitted from the output and the failure is reported.
    Skip,
    /// First failure halts the run.
    #[default]
    Abort,
}

impl std::fmt::Display for MissingEpochPolicy {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Skip => write!(fmt, "skip"),
            Self::Abort => write!(fmt, "abort"),
        }
    }
}

impl std::str::FromStr for MissingEpochPolicy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(Error::UnknownMissingEpochPolicy(s.to_string())),
        }
    }
}
