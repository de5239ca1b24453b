//! Orbital parameters resolution
use log::trace;

use crate::{
    cfg::{Config, Interpolation},
    ephemeris::{select, select_pair, Ephemeris},
    error::Error,
    kepler::wrap_pi,
    orbit::OrbitalParameters,
    prelude::{Epoch, SV},
    time::week_wrapped_seconds,
};

fn lerp(before: f64, after: f64, w: f64) -> f64 {
    before + (after - before) * w
}

/// Returns `angle` shifted by a multiple of 2π, to lie within π of `reference`
fn unwrap_angle(angle: f64, reference: f64) -> f64 {
    reference + wrap_pi(angle - reference)
}

/// Re-expresses the clock polynomial of `params` relatively to `toc`.
fn clock_referenced_to(params: &OrbitalParameters, toc: Epoch) -> (f64, f64, f64) {
    let (a0, a1, a2) = params.clock_polynomials;
    let dt = week_wrapped_seconds(toc, params.toc, params.timescale());
    (a0 + a1 * dt + a2 * dt.powi(2), a1 + 2.0 * a2 * dt, a2)
}

/// Propagates the reference epoch of `params` to `toe`, so both parameter sets
/// describe the orbit at the same instant and may be compared term by term.
fn referenced_to(
    params: &OrbitalParameters,
    toe: Epoch,
    toc: Epoch,
    gm_m3_s2: f64,
) -> OrbitalParameters {
    let dt = week_wrapped_seconds(toe, params.toe, params.timescale());

    let mut s = *params;
    let (kep, pert) = (&mut s.keplerian, &s.perturbations);

    let a = kep.sqrt_a.powi(2);
    let n = (gm_m3_s2 / a.powi(3)).sqrt() + pert.dn;

    kep.m0 += n * dt;
    kep.i0 += pert.i_dot * dt;
    kep.omega0 += pert.omega_dot * dt;

    s.clock_polynomials = clock_referenced_to(params, toc);
    s.toe = toe;
    s.toc = toc;
    s
}

/// Resolves the [OrbitalParameters] of this [SV] at `t`, from the
/// navigation `records`, following the [Interpolation] strategy.
/// ## Errors
/// Same as [select]: [Error::NoEphemerisAvailable] and [Error::EphemerisValidityError].
pub fn resolve(
    records: &[Ephemeris],
    sv: SV,
    t: Epoch,
    cfg: &Config,
) -> Result<OrbitalParameters, Error> {
    let max_dtoe = cfg.validity_bound(sv);
    let nearest = select(records, sv, t, max_dtoe)?;
    let params = OrbitalParameters::from(nearest);

    if cfg.interpolation == Interpolation::Nearest {
        return Ok(params);
    }

    let (before, after) = match select_pair(records, sv, t, max_dtoe) {
        Some(pair) => pair,
        None => {
            trace!("{}({}) - no straddling records", t, sv);
            return Ok(params);
        },
    };

    let span_s = (after.toe - before.toe).to_seconds();
    let w = (t - before.toe).to_seconds() / span_s;

    let gm = cfg.constants(sv).gm_m3_s2;

    let (before, after) = if nearest.toe == before.toe {
        let after = OrbitalParameters::from(after);
        let after = referenced_to(&after, params.toe, params.toc, gm);
        (params, after)
    } else {
        let before = OrbitalParameters::from(before);
        let before = referenced_to(&before, params.toe, params.toc, gm);
        (before, params)
    };

    let mut s = params;

    let (c0, c1) = (before.clock_polynomials, after.clock_polynomials);
    s.clock_polynomials = (lerp(c0.0, c1.0, w), lerp(c0.1, c1.1, w), lerp(c0.2, c1.2, w));

    let (p0, p1) = (&before.perturbations, &after.perturbations);
    s.perturbations.i_dot = lerp(p0.i_dot, p1.i_dot, w);
    s.perturbations.omega_dot = lerp(p0.omega_dot, p1.omega_dot, w);

    if cfg.interpolation == Interpolation::Linear {
        let (k0, k1) = (&before.keplerian, &after.keplerian);

        s.keplerian.sqrt_a = lerp(k0.sqrt_a, k1.sqrt_a, w);
        s.keplerian.e = lerp(k0.e, k1.e, w);
        s.keplerian.i0 = lerp(k0.i0, k1.i0, w);
        s.keplerian.m0 = lerp(k0.m0, unwrap_angle(k1.m0, k0.m0), w);
        s.keplerian.omega0 = lerp(k0.omega0, unwrap_angle(k1.omega0, k0.omega0), w);
        s.keplerian.omega = lerp(k0.omega, unwrap_angle(k1.omega, k0.omega), w);

        s.perturbations.dn = lerp(p0.dn, p1.dn, w);
        s.perturbations.cus = lerp(p0.cus, p1.cus, w);
        s.perturbations.cuc = lerp(p0.cuc, p1.cuc, w);
        s.perturbations.cis = lerp(p0.cis, p1.cis, w);
        s.perturbations.cic = lerp(p0.cic, p1.cic, w);
        s.perturbations.crs = lerp(p0.crs, p1.crs, w);
        s.perturbations.crc = lerp(p0.crc, p1.crc, w);
    }

    trace!(
        "{}({}) - {} interpolation between toe={} and toe={} (w={:.3})",
        t,
        sv,
        cfg.interpolation,
        before.toe,
        after.toe,
        w
    );

    Ok(s)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::{Constants, Constellation, Duration, TimeScale, Unit};

    fn t0() -> Epoch {
        Epoch::from_time_of_week(2200, 7200 * 1_000_000_000, TimeScale::GPST)
    }

    fn g01() -> SV {
        SV::new(Constellation::GPS, 1)
    }

    fn record(toe: Epoch, a0: f64) -> Ephemeris {
        let mut eph = Ephemeris::new(g01(), toe);
        eph.sqrt_a = 5153.7;
        eph.eccentricity = 0.01;
        eph.m0_rad = 3.0;
        eph.i0_rad = 0.96;
        eph.omega0_rad = -3.1;
        eph.omega_rad = 1.2;
        eph.idot_rad_s = 1.0E-10;
        eph.omega_dot_rad_s = -8.0E-9;
        eph.dn_rad_s = 4.5E-9;
        eph.clock_polynomials = (a0, 0.0, 0.0);
        eph
    }

    /// Record of the same orbit, published `dt_s` later
    fn propagated(eph: &Ephemeris, dt_s: f64) -> Ephemeris {
        let mut next = *eph;
        let a = eph.semi_major_axis_m();
        let n = (Constants::GPS.gm_m3_s2 / a.powi(3)).sqrt() + eph.dn_rad_s;

        next.toe = eph.toe + Duration::from_seconds(dt_s);
        next.toc = next.toe;
        next.m0_rad = wrap_pi(eph.m0_rad + n * dt_s);
        next.i0_rad = eph.i0_rad + eph.idot_rad_s * dt_s;
        next.omega0_rad = wrap_pi(eph.omega0_rad + eph.omega_dot_rad_s * dt_s);
        next
    }

    #[test]
    fn nearest_copies_record() {
        let records = vec![
            record(t0(), 1.0E-4),
            record(t0() + Duration::from_hours(2.0), 2.0E-4),
        ];

        let cfg = Config::default();
        let t = t0() + 50.0 * Unit::Minute;
        let params = resolve(&records, g01(), t, &cfg).unwrap();
        assert_eq!(params, OrbitalParameters::from(&records[0]));

        let t = t0() + 70.0 * Unit::Minute;
        let params = resolve(&records, g01(), t, &cfg).unwrap();
        assert_eq!(params, OrbitalParameters::from(&records[1]));
    }

    #[test]
    fn smoothed_clock_terms() {
        let records = vec![
            record(t0(), 1.0E-4),
            record(t0() + Duration::from_hours(2.0), 2.0E-4),
        ];

        let cfg = Config::default().with_interpolation(Interpolation::Smoothed);

        let t = t0() + 30.0 * Unit::Minute;
        let params = resolve(&records, g01(), t, &cfg).unwrap();
        assert!((params.clock_polynomials.0 - 1.25E-4).abs() < 1.0E-15);

        // Keplerian core is never mixed
        let nearest = OrbitalParameters::from(&records[0]);
        assert_eq!(params.keplerian, nearest.keplerian);
        assert_eq!(params.toe, nearest.toe);

        let t = t0() + 90.0 * Unit::Minute;
        let params = resolve(&records, g01(), t, &cfg).unwrap();
        assert!((params.clock_polynomials.0 - 1.75E-4).abs() < 1.0E-15);
        assert_eq!(params.toe, records[1].toe);

        // single record: nearest is used as is
        let t = t0() - 30.0 * Unit::Minute;
        let params = resolve(&records, g01(), t, &cfg).unwrap();
        assert_eq!(params, OrbitalParameters::from(&records[0]));
    }

    #[test]
    fn smoothed_clock_reference() {
        let mut first = record(t0(), 1.0E-4);
        first.clock_polynomials = (1.0E-4, 1.0E-11, 0.0);
        let mut second = record(t0() + Duration::from_hours(2.0), 0.0);
        second.clock_polynomials = (1.0E-4 + 1.0E-11 * 7200.0, 1.0E-11, 0.0);

        // continuous clock: smoothing does not alter it
        let cfg = Config::default().with_interpolation(Interpolation::Smoothed);
        let t = t0() + 40.0 * Unit::Minute;

        let params = resolve(&[first, second], g01(), t, &cfg).unwrap();
        let expected = 1.0E-4 + 1.0E-11 * 2400.0;
        assert!((params.clock_polynomial_correction_s(t) - expected).abs() < 1.0E-15);
    }

    #[test]
    fn linear_consistent_orbit() {
        let first = record(t0(), 1.0E-4);
        let second = propagated(&first, 7200.0);
        let records = vec![first, second];

        let cfg = Config::default().with_interpolation(Interpolation::Linear);

        for minutes in [10.0, 60.0, 100.0] {
            let t = t0() + minutes * Unit::Minute;
            let params = resolve(&records, g01(), t, &cfg).unwrap();

            let nearest_toe = if minutes <= 60.0 { first.toe } else { second.toe };
            let nearest = if minutes <= 60.0 { &first } else { &second };
            let nearest = OrbitalParameters::from(nearest);

            assert_eq!(params.toe, nearest_toe);
            let (k, k_ref) = (&params.keplerian, &nearest.keplerian);
            assert!((k.sqrt_a - k_ref.sqrt_a).abs() < 1.0E-9);
            assert!(wrap_pi(k.m0 - k_ref.m0).abs() < 1.0E-9, "m0 at +{}'", minutes);
            assert!(wrap_pi(k.omega0 - k_ref.omega0).abs() < 1.0E-9);
            assert!((k.i0 - k_ref.i0).abs() < 1.0E-12);
        }
    }

    #[test]
    fn linear_parameters() {
        let first = record(t0(), 1.0E-4);
        let mut second = propagated(&first, 7200.0);
        second.sqrt_a = 5153.9;
        second.crs_crc_m = (100.0, 200.0);

        let cfg = Config::default().with_interpolation(Interpolation::Linear);
        let t = t0() + 30.0 * Unit::Minute;
        let params = resolve(&[first, second], g01(), t, &cfg).unwrap();

        assert!((params.keplerian.sqrt_a - 5153.75).abs() < 1.0E-9);
        assert!((params.perturbations.crs - 25.0).abs() < 1.0E-9);
        assert!((params.perturbations.crc - 50.0).abs() < 1.0E-9);
    }

    #[test]
    fn resolution_errors() {
        let records = vec![record(t0(), 0.0)];
        let g02 = SV::new(Constellation::GPS, 2);

        for interpolation in [
            Interpolation::Nearest,
            Interpolation::Smoothed,
            Interpolation::Linear,
        ] {
            let cfg = Config::default().with_interpolation(interpolation);
            assert_eq!(
                resolve(&records, g02, t0(), &cfg),
                Err(Error::NoEphemerisAvailable(g02))
            );

            let t = t0() + Duration::from_hours(3.0);
            assert_eq!(
                resolve(&records, g01(), t, &cfg),
                Err(Error::EphemerisValidityError(g01(), t, Duration::from_hours(3.0)))
            );
        }
    }
}
