//! Ephemeris selection
use log::trace;

use crate::{
    ephemeris::Ephemeris,
    error::Error,
    prelude::{Constellation, Duration, Epoch, SV},
};

/// Returns the [Ephemeris] validity bound (max |t - toe|)
/// defined for this [Constellation].
pub fn validity_bound(constellation: Constellation) -> Duration {
    match constellation {
        Constellation::Galileo => Duration::from_seconds(10800.0),
        Constellation::BeiDou => Duration::from_seconds(21600.0),
        Constellation::Glonass => Duration::from_seconds(1800.0),
        c if c.is_sbas() => Duration::from_seconds(360.0),
        _ => Duration::from_seconds(7200.0),
    }
}

/// Selects the [Ephemeris] published for this [SV] that is the closest to `t`.
/// Equidistant records resolve to the earliest one.
/// Unhealthy records are never selected.
/// ## Errors
/// - [Error::NoEphemerisAvailable] when no healthy record exists for this [SV]
/// - [Error::EphemerisValidityError] when the closest record is further than `max_dtoe`
pub fn select(
    records: &[Ephemeris],
    sv: SV,
    t: Epoch,
    max_dtoe: Duration,
) -> Result<&Ephemeris, Error> {
    let mut closest: Option<(&Ephemeris, Duration)> = None;

    for eph in records.iter().filter(|eph| eph.sv == sv && eph.healthy) {
        let dt = (t - eph.toe).abs();
        closest = match closest {
            Some((best, best_dt)) => {
                if dt < best_dt || (dt == best_dt && eph.toe < best.toe) {
                    Some((eph, dt))
                } else {
                    Some((best, best_dt))
                }
            },
            None => Some((eph, dt)),
        };
    }

    let (eph, dt) = closest.ok_or(Error::NoEphemerisAvailable(sv))?;

    if dt > max_dtoe {
        return Err(Error::EphemerisValidityError(sv, t, dt));
    }

    trace!("{}({}) - selected toe={} (dt={})", t, sv, eph.toe, dt);
    Ok(eph)
}

/// Returns the two consecutive healthy records of this [SV]
/// that straddle `t` (`before.toe <= t <= after.toe`), when both of them
/// are applicable at `t`.
pub fn select_pair(
    records: &[Ephemeris],
    sv: SV,
    t: Epoch,
    max_dtoe: Duration,
) -> Option<(&Ephemeris, &Ephemeris)> {
    let applicable = records
        .iter()
        .filter(|eph| eph.sv == sv && eph.is_valid(t, max_dtoe));

    let mut before: Option<&Ephemeris> = None;
    let mut after: Option<&Ephemeris> = None;

    for eph in applicable {
        if eph.toe <= t {
            if before.map_or(true, |b| eph.toe > b.toe) {
                before = Some(eph);
            }
        } else if after.map_or(true, |a| eph.toe < a.toe) {
            after = Some(eph);
        }
    }

    match (before, after) {
        (Some(before), Some(after)) => Some((before, after)),
        _ => None,
    }
}
