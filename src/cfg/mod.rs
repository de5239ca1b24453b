#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::Constants,
    ephemeris::validity_bound,
    prelude::{Duration, SV},
};

mod interpolation;
mod policy;

pub use interpolation::Interpolation;
pub use policy::MissingEpochPolicy;

fn default_step() -> Duration {
    Duration::from_seconds(30.0)
}

fn default_kepler_tolerance() -> f64 {
    1.0E-12
}

fn default_kepler_iterations() -> usize {
    30
}

/// Kepler equation solver options
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerOpts {
    /// Convergence criteria on the eccentric anomaly (rad)
    #[cfg_attr(feature = "serde", serde(default = "default_kepler_tolerance"))]
    pub tolerance_rad: f64,
    /// Iteration budget. The solver fails rather than approximating.
    #[cfg_attr(feature = "serde", serde(default = "default_kepler_iterations"))]
    pub max_iterations: usize,
}

impl Default for KeplerOpts {
    fn default() -> Self {
        Self {
            tolerance_rad: default_kepler_tolerance(),
            max_iterations: default_kepler_iterations(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// [Interpolation] strategy. [Interpolation::Nearest] is the default
    /// and recommended value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interpolation: Interpolation,
    /// Sampling step, 30s by default.
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step: Duration,
    /// Maximal distance to the time of ephemeris for a record to be used.
    /// When undefined, each constellation uses its own bound
    /// (see [crate::prelude::validity_bound]).
    #[cfg_attr(feature = "serde", serde(default))]
    pub validity_bound: Option<Duration>,
    /// [MissingEpochPolicy], [MissingEpochPolicy::Abort] by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_missing_epoch: MissingEpochPolicy,
    /// Kepler solver customization
    #[cfg_attr(feature = "serde", serde(default))]
    pub kepler: KeplerOpts,
    /// Physical [Constants] to use. When undefined,
    /// the set is picked from the [SV] constellation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constants: Option<Constants>,
    /// Maximal number of epochs one run may process.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_epochs: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::default(),
            step: default_step(),
            validity_bound: None,
            on_missing_epoch: MissingEpochPolicy::default(),
            kepler: KeplerOpts::default(),
            constants: None,
            max_epochs: None,
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated [Interpolation]
    pub fn with_interpolation(&self, interpolation: Interpolation) -> Self {
        let mut s = *self;
        s.interpolation = interpolation;
        s
    }

    /// Copies and returns [Config] with updated sampling step
    pub fn with_step(&self, step: Duration) -> Self {
        let mut s = *self;
        s.step = step;
        s
    }

    /// Copies and returns [Config] with a fixed validity bound
    pub fn with_validity_bound(&self, bound: Duration) -> Self {
        let mut s = *self;
        s.validity_bound = Some(bound);
        s
    }

    /// Copies and returns [Config] with updated [MissingEpochPolicy]
    pub fn with_missing_epoch_policy(&self, policy: MissingEpochPolicy) -> Self {
        let mut s = *self;
        s.on_missing_epoch = policy;
        s
    }

    /// Copies and returns [Config] with updated [KeplerOpts]
    pub fn with_kepler_opts(&self, opts: KeplerOpts) -> Self {
        let mut s = *self;
        s.kepler = opts;
        s
    }

    /// Copies and returns [Config] with fixed physical [Constants]
    pub fn with_constants(&self, constants: Constants) -> Self {
        let mut s = *self;
        s.constants = Some(constants);
        s
    }

    /// Copies and returns [Config] with an epoch budget
    pub fn with_max_epochs(&self, max_epochs: usize) -> Self {
        let mut s = *self;
        s.max_epochs = Some(max_epochs);
        s
    }

    /// Validity bound that applies to this [SV]
    pub fn validity_bound(&self, sv: SV) -> Duration {
        self.validity_bound
            .unwrap_or_else(|| validity_bound(sv.constellation))
    }

    /// Physical [Constants] that apply to this [SV]
    pub fn constants(&self, sv: SV) -> Constants {
        self.constants
            .unwrap_or_else(|| Constants::from_constellation(sv.constellation))
    }
}
