use crate::{
    error::Error,
    prelude::{Constellation, Ephemeris, Epoch, TimeScale, SV},
    time::week_wrapped_seconds,
};

mod position;

/// Keplerian parameters
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Keplerian {
    /// Square root of the semi-major axis (m^1/2)
    pub sqrt_a: f64,
    /// Eccentricity (n.a)
    pub e: f64,
    /// Mean anomaly at reference time (rad)
    pub m0: f64,
    /// Inclination angle at reference time (rad)
    pub i0: f64,
    /// Longitude of ascending node at weekly epoch (rad)
    pub omega0: f64,
    /// Argument of perigee (rad)
    pub omega: f64,
}

/// Keplerian perturbations
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Perturbations {
    /// Mean motion difference from computed value (rad.s-1)
    pub dn: f64,
    /// Inclination rate of change (rad.s-1)
    pub i_dot: f64,
    /// Right ascension rate of change (rad.s-1)
    pub omega_dot: f64,
    /// Amplitude of sine harmonic correction term of the argument of latitude (rad)
    pub cus: f64,
    /// Amplitude of cosine harmonic correction term of the argument of latitude (rad)
    pub cuc: f64,
    /// Amplitude of sine harmonic correction term of the angle of inclination (rad)
    pub cis: f64,
    /// Amplitude of cosine harmonic correction term of the angle of inclination (rad)
    pub cic: f64,
    /// Amplitude of sine harmonic correction term of the orbit radius (m)
    pub crs: f64,
    /// Amplitude of cosine harmonic correction term of the orbit radius (m)
    pub crc: f64,
}

/// [OrbitalParameters] resolved for one epoch, either copied
/// from a single [Ephemeris] or interpolated between two of them.
/// They are consumed right away by [OrbitalParameters::resolve_position].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitalParameters {
    /// [SV]
    pub sv: SV,
    /// Reference epoch of the Keplerian model
    pub toe: Epoch,
    /// Reference epoch of the clock model
    pub toc: Epoch,
    /// Clock bias (s), drift (s.s⁻¹) and drift rate (s.s⁻²)
    pub clock_polynomials: (f64, f64, f64),
    /// [Keplerian] parameters
    pub keplerian: Keplerian,
    /// [Perturbations]
    pub perturbations: Perturbations,
}

impl From<&Ephemeris> for OrbitalParameters {
    fn from(eph: &Ephemeris) -> Self {
        Self {
            sv: eph.sv,
            toe: eph.toe,
            toc: eph.toc,
            clock_polynomials: eph.clock_polynomials,
            keplerian: Keplerian {
                sqrt_a: eph.sqrt_a,
                e: eph.eccentricity,
                m0: eph.m0_rad,
                i0: eph.i0_rad,
                omega0: eph.omega0_rad,
                omega: eph.omega_rad,
            },
            perturbations: Perturbations {
                dn: eph.dn_rad_s,
                i_dot: eph.idot_rad_s,
                omega_dot: eph.omega_dot_rad_s,
                cus: eph.cus_cuc_rad.0,
                cuc: eph.cus_cuc_rad.1,
                cis: eph.cis_cic_rad.0,
                cic: eph.cis_cic_rad.1,
                crs: eph.crs_crc_m.0,
                crc: eph.crs_crc_m.1,
            },
        }
    }
}

/// Returns true for BeiDou geostationary vehicles.
pub(crate) fn is_beidou_geo(sv: SV) -> bool {
    sv.constellation == Constellation::BeiDou && (sv.prn <= 5 || sv.prn >= 59)
}

impl OrbitalParameters {
    /// [TimeScale] of the reference epochs
    pub fn timescale(&self) -> TimeScale {
        self.sv.constellation.timescale().unwrap_or(TimeScale::GPST)
    }

    /// Returns the onboard clock offset to system time at `t` (in seconds),
    /// from the broadcast polynomial only.
    pub fn clock_polynomial_correction_s(&self, t: Epoch) -> f64 {
        let (a0, a1, a2) = self.clock_polynomials;
        let dt = week_wrapped_seconds(t, self.toc, self.timescale());
        a0 + a1 * dt + a2 * dt.powi(2)
    }

    /// Verifies these parameters describe a bound (elliptical) orbit
    /// and that the Kepler solver will not run into `nan` values.
    pub(crate) fn sanity_check(&self) -> Result<(), Error> {
        let (kep, pert) = (&self.keplerian, &self.perturbations);

        let (a0, a1, a2) = self.clock_polynomials;

        let terms = [
            a0,
            a1,
            a2,
            kep.sqrt_a,
            kep.e,
            kep.m0,
            kep.i0,
            kep.omega0,
            kep.omega,
            pert.dn,
            pert.i_dot,
            pert.omega_dot,
            pert.cus,
            pert.cuc,
            pert.cis,
            pert.cic,
            pert.crs,
            pert.crc,
        ];

        if terms.iter().any(|term| !term.is_finite()) {
            return Err(Error::InvalidOrbitalParameters(self.sv, "non finite term"));
        }
        if kep.sqrt_a <= 0.0 {
            return Err(Error::InvalidOrbitalParameters(
                self.sv,
                "null or negative square root of semi-major axis",
            ));
        }
        if !(0.0..1.0).contains(&kep.e) {
            return Err(Error::InvalidOrbitalParameters(
                self.sv,
                "eccentricity outside [0, 1[",
            ));
        }
        Ok(())
    }
}
