//! Reference navigation data
use crate::prelude::{Constellation, Duration, Ephemeris, Epoch, TimeScale, SV};

/// G06 record, broadcast on 1999-09-02 17:51:44 GPST (week 1025, 409904s).
pub fn g06_ephemeris() -> Ephemeris {
    let sv = SV::new(Constellation::GPS, 6);
    let toe = Epoch::from_time_of_week(1025, 409_904_000_000_000, TimeScale::GPST);

    let mut eph = Ephemeris::new(sv, toe);

    eph.clock_polynomials = (-8.39701388031E-4, -1.65982783074E-11, 0.0);
    eph.iode = Some(91);
    eph.crs_crc_m = (93.40625, 326.59375);
    eph.dn_rad_s = 1.16040547840E-9;
    eph.m0_rad = 1.62092304801E-1;
    eph.cus_cuc_rad = (6.52112066746E-6, 4.84101474285E-6);
    eph.eccentricity = 6.26740418375E-3;
    eph.sqrt_a = 5153.65489006;
    eph.cis_cic_rad = (-5.96046447754E-8, 2.42143869400E-8);
    eph.omega0_rad = 3.29237003460E-1;
    eph.i0_rad = 1.11541663136;
    eph.omega_rad = 2.06958726335;
    eph.omega_dot_rad_s = -6.38312302555E-9;
    eph.idot_rad_s = 3.07155651409E-10;
    eph.tgd = Some(Duration::from_seconds(-4.65661287308E-9));
    eph
}

/// Expected G06 states, as (t - toe (s), x (m), y (m), z (m), relativistic clock effect (s)).
pub const G06_STATES: [(f64, f64, f64, f64, f64); 4] = [
    (
        0.0,
        -4237540.7472,
        -18156232.3769,
        18685002.1877,
        -2.3303107665E-9,
    ),
    (
        1200.0,
        -3768605.9870,
        -20795865.6210,
        15825754.6924,
        -4.7748882232E-9,
    ),
    (
        -3600.0,
        -8041596.6617,
        -8934690.6847,
        23509422.7547,
        5.1254113486E-9,
    ),
    (
        7200.0,
        -4548255.3768,
        -25859780.6174,
        -3604763.4000,
        -1.3467159318E-8,
    ),
];

/// Returns the expected G06 state at toe + `dt_s`
pub fn g06_state(dt_s: f64) -> Option<(f64, f64, f64, f64)> {
    G06_STATES
        .iter()
        .find(|state| state.0 == dt_s)
        .map(|state| (state.1, state.2, state.3, state.4))
}
