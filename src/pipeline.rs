//! Orbital positions of one satellite over its observation time span
use log::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    cfg::{Config, MissingEpochPolicy},
    constants::Constants,
    ephemeris::Ephemeris,
    error::Error,
    interp,
    position::SatellitePosition,
    prelude::{Epoch, SV},
    sampling::TimeSequence,
    window::{Observation, ObservationWindow},
};

/// One sample [Epoch] that could not be resolved and was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochFailure {
    /// [Epoch] that was skipped
    pub epoch: Epoch,
    /// Reason
    pub error: Error,
}

/// [Report] of one [Pipeline] run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// [SV] this report concerns
    pub sv: SV,
    /// Resolved positions, in chronological order
    pub positions: Vec<SatellitePosition>,
    /// Skipped epochs, in chronological order.
    /// Always empty with [MissingEpochPolicy::Abort]
    pub failures: Vec<EpochFailure>,
}

impl Report {
    /// Number of epochs that were resolved
    pub fn succeeded(&self) -> usize {
        self.positions.len()
    }

    /// Number of epochs that were skipped
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// ECEF (x, y, z) triplets (m), ready to be plotted
    pub fn coordinates(&self) -> Vec<(f64, f64, f64)> {
        self.positions
            .iter()
            .map(|pos| (pos.x_m, pos.y_m, pos.z_m))
            .collect()
    }

    /// (t, x, y, z) rows, ready to be exported
    pub fn rows(&self) -> Vec<(Epoch, f64, f64, f64)> {
        self.positions.iter().map(|pos| pos.to_row()).collect()
    }
}

/// [Pipeline] resolves satellite positions from a set of broadcast [Ephemeris].
/// Each sample epoch is processed independently, so the run
/// may be distributed over several threads (see the `parallel` feature)
/// without affecting the results.
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    records: &'a [Ephemeris],
    cfg: Config,
}

impl<'a> Pipeline<'a> {
    /// Builds a new [Pipeline] from a set of navigation `records`.
    pub fn new(records: &'a [Ephemeris], cfg: Config) -> Self {
        Self { records, cfg }
    }

    /// [Config] of this [Pipeline]
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    /// Resolves the [SatellitePosition] of this [SV] at a single [Epoch].
    /// ## Errors
    /// - ephemeris resolution errors ([Error::NoEphemerisAvailable], [Error::EphemerisValidityError])
    /// - numerical errors ([Error::KeplerConvergenceFailure], [Error::InvalidOrbitalParameters])
    pub fn resolve(&self, sv: SV, t: Epoch) -> Result<SatellitePosition, Error> {
        let constants = self.cfg.constants(sv);
        self.resolve_with(sv, t, &constants)
    }

    fn resolve_with(
        &self,
        sv: SV,
        t: Epoch,
        constants: &Constants,
    ) -> Result<SatellitePosition, Error> {
        let params = interp::resolve(self.records, sv, t, &self.cfg)?;
        params.resolve_position(t, constants, &self.cfg.kepler)
    }

    /// Resolves the positions of this [SV] over the time span it was observed in,
    /// sampled at [Config::step].
    /// ## Errors
    /// - [Error::NoObservationsForSatellite] if this [SV] was never observed
    /// - see [Self::run_window]
    pub fn run(&self, observations: &[Observation], sv: SV) -> Result<Report, Error> {
        let window = ObservationWindow::from_observations(observations, sv)?;
        self.run_window(window, sv)
    }

    /// Resolves the positions of this [SV] within `window`, sampled at [Config::step].
    /// ## Errors
    /// - [Error::InvalidStep] if the sampling step is not strictly positive
    /// - [Error::EpochBudgetExceeded] when the sample sequence is longer than [Config::max_epochs]
    /// - any per-epoch error, unless it only concerns the ephemeris resolution
    ///   and [MissingEpochPolicy::Skip] is selected
    pub fn run_window(&self, window: ObservationWindow, sv: SV) -> Result<Report, Error> {
        let sequence = TimeSequence::new(window, self.cfg.step)?;

        if let Some(max_epochs) = self.cfg.max_epochs {
            if sequence.len() > max_epochs {
                return Err(Error::EpochBudgetExceeded(sequence.len(), max_epochs));
            }
        }

        debug!(
            "{} - {} epochs from {} to {} ({} interpolation)",
            sv,
            sequence.len(),
            window.start(),
            window.end(),
            self.cfg.interpolation
        );

        let constants = self.cfg.constants(sv);

        #[cfg(feature = "parallel")]
        let results = {
            let epochs = sequence.to_vec();
            epochs
                .par_iter()
                .map(|t| (*t, self.resolve_with(sv, *t, &constants)))
                .collect::<Vec<_>>()
        };

        #[cfg(not(feature = "parallel"))]
        let results = sequence
            .iter()
            .map(|t| (t, self.resolve_with(sv, t, &constants)));

        let report = self.gather(sv, results)?;

        info!(
            "{} - {} epochs resolved, {} skipped",
            sv,
            report.succeeded(),
            report.failed()
        );

        Ok(report)
    }

    /// Gathers per-epoch results in chronological order, applying the [MissingEpochPolicy].
    fn gather<I>(&self, sv: SV, results: I) -> Result<Report, Error>
    where
        I: IntoIterator<Item = (Epoch, Result<SatellitePosition, Error>)>,
    {
        let mut report = Report {
            sv,
            positions: Vec::new(),
            failures: Vec::new(),
        };

        for (epoch, result) in results {
            match result {
                Ok(position) => report.positions.push(position),
                Err(error)
                    if error.is_recoverable()
                        && self.cfg.on_missing_epoch == MissingEpochPolicy::Skip =>
                {
                    warn!("{}({}) - skipped: {}", epoch, sv, error);
                    report.failures.push(EpochFailure { epoch, error });
                },
                Err(error) => return Err(error),
            }
        }

        Ok(report)
    }
}

/// Resolves the positions of this [SV] over the time span it was observed in.
/// Shortcut to [Pipeline::run].
pub fn process_prn(
    records: &[Ephemeris],
    observations: &[Observation],
    sv: SV,
    cfg: &Config,
) -> Result<Report, Error> {
    Pipeline::new(records, *cfg).run(observations, sv)
}
