use crate::{
    constants::{HALF_WEEK_SECONDS, WEEK_SECONDS},
    prelude::{Epoch, TimeScale},
};

/// Wraps a time difference (in seconds) into [-302400, 302400],
/// to account for the beginning or end of week crossovers.
pub fn wrap_half_week(dt_s: f64) -> f64 {
    if dt_s > HALF_WEEK_SECONDS {
        dt_s - WEEK_SECONDS
    } else if dt_s < -HALF_WEEK_SECONDS {
        dt_s + WEEK_SECONDS
    } else {
        dt_s
    }
}

/// Returns elapsed seconds within the week of this [Epoch],
/// expressed in desired [TimeScale].
pub fn seconds_of_week(t: Epoch, timescale: TimeScale) -> f64 {
    let (_, nanos) = t.to_time_scale(timescale).to_time_of_week();
    nanos as f64 / 1.0E9
}

/// Returns `t - t_ref` in seconds, both expressed in desired [TimeScale],
/// wrapped into a half week.
pub fn week_wrapped_seconds(t: Epoch, t_ref: Epoch, timescale: TimeScale) -> f64 {
    let dt = t.to_time_scale(timescale) - t_ref.to_time_scale(timescale);
    wrap_half_week(dt.to_seconds())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::Duration;
    use rstest::*;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(302400.0, 302400.0)]
    #[case(-302400.0, -302400.0)]
    #[case(302401.0, -302399.0)]
    #[case(-302401.0, 302399.0)]
    #[case(604000.0, -800.0)]
    #[case(-604000.0, 800.0)]
    fn half_week_wrapping(#[case] dt_s: f64, #[case] expected: f64) {
        assert_eq!(wrap_half_week(dt_s), expected);
    }

    #[test]
    fn gpst_seconds_of_week() {
        let t = Epoch::from_time_of_week(1025, 409_904_000_000_000, TimeScale::GPST);
        assert_eq!(seconds_of_week(t, TimeScale::GPST), 409904.0);

        let t = t + Duration::from_seconds(1200.5);
        assert_eq!(seconds_of_week(t, TimeScale::GPST), 411104.5);
    }

    #[test]
    fn week_crossover() {
        let t_ref = Epoch::from_time_of_week(2100, 604_000_000_000_000, TimeScale::GPST);
        let t = Epoch::from_time_of_week(2101, 1_000_000_000_000, TimeScale::GPST);

        let dt_s = week_wrapped_seconds(t, t_ref, TimeScale::GPST);
        assert_eq!(dt_s, 1800.0);

        let dt_s = week_wrapped_seconds(t_ref, t, TimeScale::GPST);
        assert_eq!(dt_s, -1800.0);
    }
}
