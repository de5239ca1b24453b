use log::{debug, error};
use nalgebra::{Rotation3, Vector3};

use crate::{
    cfg::KeplerOpts,
    constants::{Constants, BDS_GEO_TILT_RAD},
    error::Error,
    kepler,
    orbit::{is_beidou_geo, OrbitalParameters},
    position::SatellitePosition,
    prelude::Epoch,
    time::{seconds_of_week, week_wrapped_seconds},
};

impl OrbitalParameters {
    /// Resolves Kepler equations and returns the ECEF [SatellitePosition] at `t`.
    /// ## Inputs
    /// - t: [Epoch] of the position
    /// - constants: physical [Constants] to use
    /// - opts: Kepler solver [KeplerOpts]
    /// ## Errors
    /// - [Error::InvalidOrbitalParameters] for parameters that would lead to a non sense
    /// - [Error::KeplerConvergenceFailure] if the eccentric anomaly did not converge
    pub fn resolve_position(
        &self,
        t: Epoch,
        constants: &Constants,
        opts: &KeplerOpts,
    ) -> Result<SatellitePosition, Error> {
        self.sanity_check()?;

        let (kep, pert) = (&self.keplerian, &self.perturbations);
        let omega_e = constants.earth_rotation_rad_s;

        let e = kep.e;
        let a = kep.sqrt_a.powi(2);

        let t_k = week_wrapped_seconds(t, self.toe, self.timescale());

        let gm = constants.gm_m3_s2;
        if gm.is_nan() || gm <= 0.0 || !omega_e.is_finite() {
            return Err(Error::InvalidOrbitalParameters(
                self.sv,
                "invalid physical constants",
            ));
        }

        let n0 = (gm / a.powi(3)).sqrt();
        let n = n0 + pert.dn;

        if !n.is_finite() {
            return Err(Error::InvalidOrbitalParameters(self.sv, "non finite mean motion"));
        }
        let m_k = kep.m0 + n * t_k;

        let (e_k, iterations) = kepler::solve(m_k, e, opts.tolerance_rad, opts.max_iterations)
            .ok_or_else(|| {
                error!("{}({}) - kepler solver in failure", t, self.sv);
                Error::KeplerConvergenceFailure(self.sv, t, opts.max_iterations)
            })?;

        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - e.powi(2)).sqrt() * sin_e_k).atan2(cos_e_k - e);

        let phi_k = v_k + kep.omega;
        let (sin_2phi, cos_2phi) = (2.0 * phi_k).sin_cos();

        let u_k = phi_k + pert.cus * sin_2phi + pert.cuc * cos_2phi;
        let r_k = a * (1.0 - e * cos_e_k) + pert.crs * sin_2phi + pert.crc * cos_2phi;
        let i_k = kep.i0 + pert.i_dot * t_k + pert.cis * sin_2phi + pert.cic * cos_2phi;

        // in plane position
        let (sin_u_k, cos_u_k) = u_k.sin_cos();
        let xyz_orbit = Vector3::new(r_k * cos_u_k, r_k * sin_u_k, 0.0);

        let toe_s = seconds_of_week(self.toe, self.timescale());

        let ecef = if is_beidou_geo(self.sv) {
            // node angle in the inertial frame, then BDS GEO rotation
            let omega_k = kep.omega0 + pert.omega_dot * t_k - omega_e * toe_s;

            let rot_x = Rotation3::from_axis_angle(&Vector3::x_axis(), i_k);
            let rot_z = Rotation3::from_axis_angle(&Vector3::z_axis(), omega_k);
            let xyz_gk = rot_z * rot_x * xyz_orbit;

            let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), BDS_GEO_TILT_RAD);
            let earth_rot = Rotation3::from_axis_angle(&Vector3::z_axis(), -omega_e * t_k);
            earth_rot * tilt * xyz_gk
        } else {
            let omega_k = kep.omega0 + (pert.omega_dot - omega_e) * t_k - omega_e * toe_s;

            let rot_x = Rotation3::from_axis_angle(&Vector3::x_axis(), i_k);
            let rot_z = Rotation3::from_axis_angle(&Vector3::z_axis(), omega_k);
            rot_z * rot_x * xyz_orbit
        };

        if ecef.iter().any(|coord| !coord.is_finite()) {
            return Err(Error::InvalidOrbitalParameters(
                self.sv,
                "non finite position",
            ));
        }

        let clock_correction_s = self.clock_polynomial_correction_s(t)
            + constants.relativistic_f() * e * kep.sqrt_a * sin_e_k;

        if !clock_correction_s.is_finite() {
            return Err(Error::InvalidOrbitalParameters(
                self.sv,
                "non finite clock correction",
            ));
        }

        debug!(
            "{}({}) - kepler solving x={:.3}m y={:.3}m z={:.3}m t_k={}s ({} iter)",
            t, self.sv, ecef[0], ecef[1], ecef[2], t_k, iterations
        );

        Ok(SatellitePosition {
            sv: self.sv,
            epoch: t,
            x_m: ecef[0],
            y_m: ecef[1],
            z_m: ecef[2],
            clock_correction_s,
        })
    }
}
