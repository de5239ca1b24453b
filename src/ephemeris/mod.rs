use crate::{
    orbit::is_beidou_geo,
    prelude::{Duration, Epoch, TimeScale, SV},
    time::seconds_of_week,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod selector;

pub use selector::{select, select_pair, validity_bound};

/// Broadcast [Ephemeris] frame (one navigation record), as published
/// by the satellite at its time of ephemeris.
/// [Ephemeris] are created by your navigation parser and never modified
/// by this library.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ephemeris {
    /// [SV]
    pub sv: SV,

    /// Time of Issue of [Ephemeris]
    pub toe: Epoch,

    /// Time of Clock
    pub toc: Epoch,

    /// Clock bias (s), drift (s.s⁻¹) and drift rate (s.s⁻²)
    pub clock_polynomials: (f64, f64, f64),

    /// Square root of the semi-major axis (in m^1/2)
    pub sqrt_a: f64,

    /// Eccentricity
    pub eccentricity: f64,

    /// m0 (in radians)
    pub m0_rad: f64,

    /// (in radians)
    pub i0_rad: f64,

    /// (in radians/s)
    pub idot_rad_s: f64,

    /// Mean motion difference (in radians/s)
    pub dn_rad_s: f64,

    /// Longitude of ascending node at weekly epoch (in radians)
    pub omega0_rad: f64,

    /// Argument of perigee (in radians)
    pub omega_rad: f64,

    /// (in radians/s)
    pub omega_dot_rad_s: f64,

    /// Sine / Cosine (in radians)
    pub cus_cuc_rad: (f64, f64),

    /// Sine / Cosine (in radians)
    pub cis_cic_rad: (f64, f64),

    /// Sine / Cosine (in meters)
    pub crs_crc_m: (f64, f64),

    /// True when the satellite declared itself healthy.
    pub healthy: bool,

    /// Issue of data, when known
    pub iode: Option<u16>,

    /// Total group delay, when known
    pub tgd: Option<Duration>,
}

impl Ephemeris {
    /// Returns a healthy [Ephemeris] with all orbital terms set to zero.
    /// Use the struct fields directly to describe the actual orbit.
    pub fn new(sv: SV, toe: Epoch) -> Self {
        Self {
            sv,
            toe,
            toc: toe,
            clock_polynomials: (0.0, 0.0, 0.0),
            sqrt_a: 0.0,
            eccentricity: 0.0,
            m0_rad: 0.0,
            i0_rad: 0.0,
            idot_rad_s: 0.0,
            dn_rad_s: 0.0,
            omega0_rad: 0.0,
            omega_rad: 0.0,
            omega_dot_rad_s: 0.0,
            cus_cuc_rad: (0.0, 0.0),
            cis_cic_rad: (0.0, 0.0),
            crs_crc_m: (0.0, 0.0),
            healthy: true,
            iode: None,
            tgd: None,
        }
    }

    /// Returns semi-major axis (in meters)
    pub fn semi_major_axis_m(&self) -> f64 {
        self.sqrt_a.powi(2)
    }

    /// Returns the [TimeScale] this [Ephemeris] is expressed in.
    /// Falls back to GPST for constellations that do not define their own.
    pub fn timescale(&self) -> TimeScale {
        self.sv.constellation.timescale().unwrap_or(TimeScale::GPST)
    }

    /// Returns True if this [Ephemeris] frame may be used at `now`.
    /// The bound is inclusive.
    pub fn is_valid(&self, now: Epoch, max_dtoe: Duration) -> bool {
        self.healthy && (now - self.toe).abs() <= max_dtoe
    }

    /// Returns ToE in seconds of week
    pub fn weekly_toe_seconds(&self) -> f64 {
        seconds_of_week(self.toe, self.timescale())
    }

    /// Returns ToC in seconds of week
    pub fn weekly_toc_seconds(&self) -> f64 {
        seconds_of_week(self.toc, self.timescale())
    }

    /// Returns true for BeiDou geostationary vehicles,
    /// which use a dedicated ECEF transform.
    pub fn is_beidou_geo(&self) -> bool {
        is_beidou_geo(self.sv)
    }
}

#[cfg(test)]
mod test {
    use super::Ephemeris;
    use crate::prelude::{Constellation, Duration, Epoch, TimeScale, SV};

    fn gps_ephemeris() -> Ephemeris {
        let sv = SV::new(Constellation::GPS, 6);
        let toe = Epoch::from_time_of_week(1025, 409_904_000_000_000, TimeScale::GPST);
        let mut eph = Ephemeris::new(sv, toe);
        eph.sqrt_a = 5153.65489006;
        eph.eccentricity = 6.26740418375E-3;
        eph
    }

    #[test]
    fn validity() {
        let eph = gps_ephemeris();
        let two_hours = Duration::from_hours(2.0);

        assert!(eph.is_valid(eph.toe, two_hours));
        assert!(eph.is_valid(eph.toe + two_hours, two_hours));
        assert!(eph.is_valid(eph.toe - two_hours, two_hours));
        assert!(!eph.is_valid(eph.toe + two_hours + Duration::from_seconds(1.0), two_hours));

        let mut unhealthy = eph;
        unhealthy.healthy = false;
        assert!(!unhealthy.is_valid(eph.toe, two_hours));
    }

    #[test]
    fn weekly_toe() {
        let eph = gps_ephemeris();
        assert_eq!(eph.weekly_toe_seconds(), 409904.0);
        assert_eq!(eph.weekly_toc_seconds(), 409904.0);
        assert!((eph.semi_major_axis_m() - 26560158.726).abs() < 1.0E-3);
    }

    #[test]
    fn beidou_geo() {
        let t = Epoch::default();
        for (prn, geo) in [(1, true), (5, true), (6, false), (30, false), (59, true), (62, true)] {
            let eph = Ephemeris::new(SV::new(Constellation::BeiDou, prn), t);
            assert_eq!(eph.is_beidou_geo(), geo, "C{:02}", prn);
        }
        let eph = Ephemeris::new(SV::new(Constellation::GPS, 1), t);
        assert!(!eph.is_beidou_geo());
    }
}
