use thiserror::Error;

use crate::prelude::{Duration, Epoch, SV};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No (healthy) navigation record exists for this [SV].
    #[error("no ephemeris available for {0}")]
    NoEphemerisAvailable(SV),

    /// The closest navigation record is too far from the requested [Epoch].
    /// The [Duration] is the distance to the closest record's time of ephemeris.
    #[error("{1}({0}) - closest ephemeris is {2} away (exceeds validity bound)")]
    EphemerisValidityError(SV, Epoch, Duration),

    /// Observation data does not contain this [SV].
    #[error("no observations for {0}")]
    NoObservationsForSatellite(SV),

    /// Sampling step must be strictly positive.
    #[error("invalid sampling step: {0}")]
    InvalidStep(Duration),

    /// Window start is posterior to window end.
    #[error("invalid time window: {0} is posterior to {1}")]
    InvalidWindow(Epoch, Epoch),

    /// Kepler's equation did not converge within the iteration budget.
    /// The eccentric anomaly is never approximated.
    #[error("{1}({0}) - kepler solver did not converge after {2} iterations")]
    KeplerConvergenceFailure(SV, Epoch, usize),

    /// Navigation parameters that lead to a numerical non sense
    /// (negative square root, infinite or `nan` value..).
    #[error("{0} - invalid orbital parameters: {1}")]
    InvalidOrbitalParameters(SV, &'static str),

    /// Sample sequence is longer than the configured epoch budget.
    #[error("{0} epochs exceed the epoch budget ({1})")]
    EpochBudgetExceeded(usize, usize),

    #[error("unknown interpolation mode \"{0}\"")]
    UnknownInterpolation(String),

    #[error("unknown missing epoch policy \"{0}\"")]
    UnknownMissingEpochPolicy(String),
}

impl Error {
    /// Returns true if this [Error] only concerns the ephemeris resolution
    /// of a single epoch, and may be absorbed by [MissingEpochPolicy::Skip].
    ///
    /// [MissingEpochPolicy::Skip]: crate::prelude::MissingEpochPolicy::Skip
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoEphemerisAvailable(_) | Self::EphemerisValidityError(..)
        )
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::prelude::{Constellation, Duration, Epoch, SV};

    #[test]
    fn recoverable_errors() {
        let sv = SV::new(Constellation::GPS, 1);
        let t = Epoch::default();

        assert!(Error::NoEphemerisAvailable(sv).is_recoverable());
        assert!(Error::EphemerisValidityError(sv, t, Duration::from_hours(3.0)).is_recoverable());

        assert!(!Error::KeplerConvergenceFailure(sv, t, 30).is_recoverable());
        assert!(!Error::InvalidOrbitalParameters(sv, "negative semi major axis").is_recoverable());
        assert!(!Error::NoObservationsForSatellite(sv).is_recoverable());
        assert!(!Error::InvalidStep(Duration::ZERO).is_recoverable());
    }
}
