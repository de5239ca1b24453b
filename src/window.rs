//! Observation time window
use itertools::{Itertools, MinMaxResult};
use log::debug;

use crate::{
    error::Error,
    prelude::{Duration, Ephemeris, Epoch, SV},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One [SV] observed at one [Epoch], as reported by the observation parser.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// [Epoch] of observation
    pub epoch: Epoch,
    /// Observed [SV]
    pub sv: SV,
}

impl Observation {
    pub fn new(epoch: Epoch, sv: SV) -> Self {
        Self { epoch, sv }
    }
}

/// Closed [ObservationWindow], to be sampled: start <= end.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationWindow {
    start: Epoch,
    end: Epoch,
}

impl ObservationWindow {
    /// Builds a new [ObservationWindow]
    /// ## Errors
    /// - [Error::InvalidWindow] if `start` is posterior to `end`
    pub fn new(start: Epoch, end: Epoch) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidWindow(start, end));
        }
        Ok(Self { start, end })
    }

    /// Returns the time span this [SV] was observed in.
    /// ## Errors
    /// - [Error::NoObservationsForSatellite] if this [SV] was never observed
    pub fn from_observations(observations: &[Observation], sv: SV) -> Result<Self, Error> {
        let epochs = observations
            .iter()
            .filter(|obs| obs.sv == sv)
            .map(|obs| obs.epoch);

        let (start, end) = match epochs.minmax() {
            MinMaxResult::NoElements => return Err(Error::NoObservationsForSatellite(sv)),
            MinMaxResult::OneElement(t) => (t, t),
            MinMaxResult::MinMax(start, end) => (start, end),
        };

        debug!("{} - observed from {} to {}", sv, start, end);
        Ok(Self { start, end })
    }

    /// Returns the window starting at this [Ephemeris] time of issue, spanning `span`.
    /// Negative spans are not allowed.
    pub fn from_ephemeris(eph: &Ephemeris, span: Duration) -> Result<Self, Error> {
        Self::new(eph.toe, eph.toe + span)
    }

    /// Window start
    pub fn start(&self) -> Epoch {
        self.start
    }

    /// Window end
    pub fn end(&self) -> Epoch {
        self.end
    }

    /// Window duration
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns true if `t` lies within this window (both ends included)
    pub fn contains(&self, t: Epoch) -> bool {
        t >= self.start && t <= self.end
    }
}
