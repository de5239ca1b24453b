//! Kepler's equation solver
use std::f64::consts::PI;

/// Wraps an angle into [-π, π[
pub(crate) fn wrap_pi(angle_rad: f64) -> f64 {
    (angle_rad + PI).rem_euclid(2.0 * PI) - PI
}

/// Solves Kepler's equation `M = E - e sin(E)` for the eccentric anomaly E,
/// by Newton iterations.
/// Returns (E, number of iterations) on convergence, where E is expressed
/// in the same revolution as the wrapped mean anomaly.
/// Returns None when `max_iterations` is reached without convergence,
/// or when a non finite value appears.
pub(crate) fn solve(
    m_rad: f64,
    e: f64,
    tolerance_rad: f64,
    max_iterations: usize,
) -> Option<(f64, usize)> {
    let m = wrap_pi(m_rad);

    let mut e_k = if m < 0.0 { m - e } else { m + e };

    for i in 1..=max_iterations {
        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let delta = (e_k - e * sin_e_k - m) / (1.0 - e * cos_e_k);

        if !delta.is_finite() {
            return None;
        }

        e_k -= delta;

        if delta.abs() < tolerance_rad && residual(m, e, e_k).abs() < tolerance_rad {
            return Some((e_k, i));
        }
    }

    None
}

/// Kepler's equation residual `M - (E - e sin(E))`
pub(crate) fn residual(m_rad: f64, e: f64, e_k: f64) -> f64 {
    m_rad - (e_k - e * e_k.sin())
}
