#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod ephemeris;
mod error;
mod interp;
mod kepler;
mod orbit;
mod pipeline;
mod position;
mod sampling;
mod time;
mod window;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Interpolation, KeplerOpts, MissingEpochPolicy};
    pub use crate::constants::{Constants, HALF_WEEK_SECONDS, SPEED_OF_LIGHT_M_S, WEEK_SECONDS};
    pub use crate::ephemeris::{select, select_pair, validity_bound, Ephemeris};
    pub use crate::error::Error;
    pub use crate::interp::resolve;
    pub use crate::orbit::{Keplerian, OrbitalParameters, Perturbations};
    pub use crate::pipeline::{process_prn, EpochFailure, Pipeline, Report};
    pub use crate::position::SatellitePosition;
    pub use crate::sampling::{generate, TimeSequence, TimeSequenceIter};
    pub use crate::window::{Observation, ObservationWindow};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
