//! Broadcast Keplerian ephemeris (IS-GPS-200 subframes 2/3): orbit
//! evaluation, relativistic clock correction, and randomized generation.

use rand::Rng;

use crate::gps::constants::{
    HALF_WEEK_SECONDS, RELATIVISTIC_F, SECONDS_PER_WEEK, WGS84_EARTH_RATE, WGS84_EQUATORIAL_RADIUS,
    WGS84_J2, WGS84_MU,
};

#[cfg(feature = "nav")]
use nalgebra::Vector3;

/// Maximum number of Newton-Raphson iterations spent solving Kepler's
/// equation before giving up. IS-GPS-200 receivers converge in 2-3
/// iterations in practice; this bounds pathological inputs.
pub const KEPLER_MAX_ITERATIONS: u32 = 30;

/// Convergence threshold on `|delta E|`, radians.
pub const KEPLER_TOLERANCE: f64 = 1.0e-15;

/// Broadcast Keplerian orbital elements, in physical units.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Ephemeris {
    pub m_0: f64,
    pub del_n: f64,
    pub e: f64,
    pub sqrt_a: f64,
    pub omega_0: f64,
    pub i_0: f64,
    pub omega: f64,
    pub omega_dot: f64,
    pub idot: f64,

    pub c_uc: f64,
    pub c_us: f64,
    pub c_rc: f64,
    pub c_rs: f64,
    pub c_ic: f64,
    pub c_is: f64,

    pub t_oe: f64,
    pub iode: u8,
}

impl Ephemeris {
    pub fn with_orbit(mut self, m_0: f64, del_n: f64, e: f64, sqrt_a: f64) -> Self {
        self.m_0 = m_0;
        self.del_n = del_n;
        self.e = e;
        self.sqrt_a = sqrt_a;
        self
    }

    pub fn with_angles(mut self, omega_0: f64, i_0: f64, omega: f64, omega_dot: f64, idot: f64) -> Self {
        self.omega_0 = omega_0;
        self.i_0 = i_0;
        self.omega = omega;
        self.omega_dot = omega_dot;
        self.idot = idot;
        self
    }

    pub fn with_harmonic_corrections(
        mut self,
        c_uc: f64,
        c_us: f64,
        c_rc: f64,
        c_rs: f64,
        c_ic: f64,
        c_is: f64,
    ) -> Self {
        self.c_uc = c_uc;
        self.c_us = c_us;
        self.c_rc = c_rc;
        self.c_rs = c_rs;
        self.c_ic = c_ic;
        self.c_is = c_is;
        self
    }

    pub fn with_t_oe(mut self, t_oe: f64) -> Self {
        self.t_oe = t_oe;
        self
    }

    pub fn with_iode(mut self, iode: u8) -> Self {
        self.iode = iode;
        self
    }

    /// Semi-major axis (m).
    fn semi_major_axis(&self) -> f64 {
        self.sqrt_a * self.sqrt_a
    }

    /// Computed mean motion (rad/s), uncorrected.
    fn n_0(&self) -> f64 {
        (WGS84_MU / self.semi_major_axis().powi(3)).sqrt()
    }

    /// Corrected mean motion (rad/s).
    fn n(&self) -> f64 {
        self.n_0() + self.del_n
    }

    /// Time from ephemeris reference epoch, with GPS week rollover applied.
    fn t_k(&self, gps_time: f64) -> f64 {
        let mut t_k = gps_time - self.t_oe;
        if t_k > HALF_WEEK_SECONDS {
            t_k -= SECONDS_PER_WEEK;
        } else if t_k < -HALF_WEEK_SECONDS {
            t_k += SECONDS_PER_WEEK;
        }
        t_k
    }

    /// Solves Kepler's equation `M = E - e sin(E)` for the eccentric
    /// anomaly by Newton-Raphson iteration, starting at `E_0 = M_k`.
    ///
    /// Exits once `|delta E|` falls under [`KEPLER_TOLERANCE`], or after
    /// [`KEPLER_MAX_ITERATIONS`] iterations, whichever comes first.
    fn eccentric_anomaly_from_mean(&self, m_k: f64) -> f64 {
        let mut e_k = m_k;
        for _ in 0..KEPLER_MAX_ITERATIONS {
            let del_e = (m_k - e_k + self.e * e_k.sin()) / (1.0 - self.e * e_k.cos());
            e_k += del_e;
            if del_e.abs() < KEPLER_TOLERANCE {
                break;
            }
        }
        e_k
    }

    /// Eccentric anomaly at `gps_time` (s of week).
    fn eccentric_anomaly_from_time(&self, gps_time: f64) -> f64 {
        let m_k = self.m_0 + self.n() * self.t_k(gps_time);
        self.eccentric_anomaly_from_mean(m_k)
    }

    /// ECEF position only.
    #[cfg(feature = "nav")]
    pub fn position(&self, gps_time: f64) -> Vector3<f64> {
        self.position_velocity_acceleration(gps_time, false, false).0
    }

    /// ECEF position and velocity.
    #[cfg(feature = "nav")]
    pub fn position_velocity(&self, gps_time: f64) -> (Vector3<f64>, Vector3<f64>) {
        let (p, v, _) = self.position_velocity_acceleration(gps_time, true, false);
        (p, v)
    }

    /// ECEF position, velocity and acceleration.
    #[cfg(feature = "nav")]
    pub fn position_velocity_acceleration(
        &self,
        gps_time: f64,
        calc_vel: bool,
        calc_accel: bool,
    ) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        let a = self.semi_major_axis();
        let t_k = self.t_k(gps_time);
        let n = self.n();

        let m_k = self.m_0 + n * t_k;
        let e_k = self.eccentric_anomaly_from_mean(m_k);

        let cv_k = (e_k.cos() - self.e) / (1.0 - self.e * e_k.cos());
        let sv_k = ((1.0 - self.e * self.e).sqrt() * e_k.sin()) / (1.0 - self.e * e_k.cos());
        let v_k = sv_k.atan2(cv_k);

        let phi_k = v_k + self.omega;
        let phi2 = 2.0 * phi_k;

        let du_k = self.c_us * phi2.sin() + self.c_uc * phi2.cos();
        let dr_k = self.c_rs * phi2.sin() + self.c_rc * phi2.cos();
        let di_k = self.c_is * phi2.sin() + self.c_ic * phi2.cos();

        let u_k = phi_k + du_k;
        let r_k = a * (1.0 - self.e * e_k.cos()) + dr_k;
        let i_k = self.i_0 + di_k + self.idot * t_k;

        let x_orb = r_k * u_k.cos();
        let y_orb = r_k * u_k.sin();

        let omega_k = self.omega_0 + (self.omega_dot - WGS84_EARTH_RATE) * t_k
            - WGS84_EARTH_RATE * self.t_oe;

        let pos = Vector3::new(
            x_orb * omega_k.cos() - y_orb * i_k.cos() * omega_k.sin(),
            x_orb * omega_k.sin() + y_orb * i_k.cos() * omega_k.cos(),
            y_orb * i_k.sin(),
        );

        let mut vel = Vector3::zeros();
        if calc_vel || calc_accel {
            let ed_k = n / (1.0 - self.e * e_k.cos());
            let vd_k = ed_k * (1.0 - self.e * self.e).sqrt() / (1.0 - self.e * e_k.cos());
            let id_k = self.idot + 2.0 * vd_k * (self.c_is * phi2.cos() - self.c_ic * phi2.sin());
            let ud_k = vd_k + 2.0 * vd_k * (self.c_us * phi2.cos() - self.c_uc * phi2.sin());
            let rd_k = self.e * a * ed_k * e_k.sin()
                + 2.0 * vd_k * (self.c_rs * phi2.cos() - self.c_rc * phi2.sin());
            let omega_dot_k = self.omega_dot - WGS84_EARTH_RATE;

            let xd_orb = rd_k * u_k.cos() - r_k * ud_k * u_k.sin();
            let yd_orb = rd_k * u_k.sin() + r_k * ud_k * u_k.cos();

            vel = Vector3::new(
                -x_orb * omega_dot_k * omega_k.sin() + xd_orb * omega_k.cos()
                    - yd_orb * omega_k.sin() * i_k.cos()
                    - y_orb
                        * (omega_dot_k * omega_k.cos() * i_k.cos()
                            - id_k * omega_k.sin() * i_k.sin()),
                x_orb * omega_dot_k * omega_k.cos()
                    + xd_orb * omega_k.sin()
                    + yd_orb * omega_k.cos() * i_k.cos()
                    - y_orb
                        * (omega_dot_k * omega_k.sin() * i_k.cos()
                            + id_k * omega_k.cos() * i_k.sin()),
                yd_orb * i_k.sin() + y_orb * id_k * i_k.cos(),
            );
        }

        let mut accel = Vector3::zeros();
        if calc_accel {
            let r2 = r_k * r_k;
            let r3 = r2 * r_k;
            let f = -1.5 * WGS84_J2 * (WGS84_MU / r2) * (WGS84_EQUATORIAL_RADIUS / r_k).powi(2);
            let f_term = f * (1.0 - 5.0 * (pos.z / r_k).powi(2));
            let omega_e2 = WGS84_EARTH_RATE.powi(2);

            accel = Vector3::new(
                -WGS84_MU * pos.x / r3 + f_term * pos.x / r_k + 2.0 * vel.y * WGS84_EARTH_RATE
                    + pos.x * omega_e2,
                -WGS84_MU * pos.y / r3 + f_term * pos.y / r_k - 2.0 * vel.x * WGS84_EARTH_RATE
                    + pos.y * omega_e2,
                -WGS84_MU * pos.z / r3 + f * (3.0 - 5.0 * (pos.z / r_k).powi(2)) * pos.z / r_k,
            );
        }

        (pos, vel, accel)
    }

    /// Relativistic clock correction at `gps_time` (s).
    pub fn relativistic_time_correction(&self, gps_time: f64) -> f64 {
        RELATIVISTIC_F * self.e * self.sqrt_a * self.eccentric_anomaly_from_time(gps_time).sin()
    }

    /// Time derivative of [`Ephemeris::relativistic_time_correction`].
    pub fn relativistic_time_correction_rate(&self, gps_time: f64) -> f64 {
        let n = self.n();
        let e_cos_e = self.e * self.eccentric_anomaly_from_time(gps_time).cos();
        (n * RELATIVISTIC_F * self.sqrt_a * e_cos_e) / (1.0 - e_cos_e)
    }

    /// Second time derivative of [`Ephemeris::relativistic_time_correction`].
    pub fn relativistic_time_correction_rate_rate(&self, gps_time: f64) -> f64 {
        let n = self.n();
        let e_k = self.eccentric_anomaly_from_time(gps_time);
        (n * n * RELATIVISTIC_F * self.e * self.sqrt_a * e_k.sin())
            / (1.0 - self.e * e_k.cos()).powi(2)
    }

    /// Draws a physically plausible, uniformly-random orbit within
    /// IS-GPS-200's representable parameter ranges. `iode` defaults to
    /// the value the original reference generator always used (241), but
    /// is caller-overridable via [`Ephemeris::with_iode`].
    pub fn randomize(rng: &mut impl Rng) -> Self {
        let uniform = |rng: &mut dyn rand::RngCore, lo: f64, hi: f64| rng.gen::<f64>() * (hi - lo) + lo;
        let sym = |rng: &mut dyn rand::RngCore, limit: f64| uniform(rng, -limit, limit);

        let lim31 = (2.0_f64.powi(31) - 1.0) * 2.0_f64.powi(-31);
        let lim13_43 = (2.0_f64.powi(13) - 1.0) * 2.0_f64.powi(-43);
        let lim15_29 = (2.0_f64.powi(15) - 1.0) * 2.0_f64.powi(-29);
        let lim15_5 = (2.0_f64.powi(15) - 1.0) * 2.0_f64.powi(-5);

        Self {
            m_0: sym(rng, lim31),
            del_n: sym(rng, (2.0_f64.powi(15) - 1.0) * 2.0_f64.powi(-43)),
            e: uniform(rng, 0.0, 0.03),
            sqrt_a: uniform(rng, 2530.0, 8192.0),
            omega_0: sym(rng, lim31),
            i_0: sym(rng, lim31),
            omega: sym(rng, lim31),
            omega_dot: uniform(rng, -6.33e-7, 0.0),
            idot: sym(rng, lim13_43),
            c_uc: sym(rng, lim15_29),
            c_us: sym(rng, lim15_29),
            c_rc: sym(rng, lim15_5),
            c_rs: sym(rng, lim15_5),
            c_ic: sym(rng, lim15_29),
            c_is: sym(rng, lim15_29),
            t_oe: uniform(rng, 0.0, 604_784.0),
            iode: 241,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gps::rng;

    fn gps_200_validation_ephemeris() -> Ephemeris {
        // Representative mid-eccentricity orbit, not tied to a specific
        // published almanac; used to exercise the Kepler solver and PVA
        // evaluation for self-consistency, not bit-exact validation.
        Ephemeris::default()
            .with_orbit(0.5, 0.0, 0.01, 5153.6)
            .with_angles(1.0, 0.95, 0.3, -8.0e-9, -1.0e-10)
            .with_harmonic_corrections(1.0e-6, 1.0e-6, 100.0, -80.0, 1.0e-7, -1.0e-7)
            .with_t_oe(302_400.0)
    }

    #[test]
    fn kepler_solver_converges_within_cap() {
        let eph = gps_200_validation_ephemeris();
        let e_k = eph.eccentric_anomaly_from_time(eph.t_oe);
        // Residual of Kepler's equation should be tiny at convergence.
        let m_k = eph.m_0;
        let residual = (m_k - (e_k - eph.e * e_k.sin())).abs();
        assert!(residual < 1.0e-9, "residual={residual}");
    }

    #[test]
    fn half_week_rollover_is_applied() {
        let eph = gps_200_validation_ephemeris().with_t_oe(0.0);
        // gps_time far beyond +half week should wrap t_k back near zero,
        // not diverge.
        let t_k = eph.t_k(SECONDS_PER_WEEK - 1.0);
        assert!(t_k < 0.0 && t_k > -HALF_WEEK_SECONDS);
    }

    #[cfg(feature = "nav")]
    #[test]
    fn position_is_finite_and_on_a_plausible_orbit_radius() {
        let eph = gps_200_validation_ephemeris();
        let pos = eph.position(eph.t_oe + 60.0);
        assert!(pos.iter().all(|c| c.is_finite()));
        let r = pos.norm();
        // GPS orbit radius is roughly 26,000 km.
        assert!(r > 20_000_000.0 && r < 30_000_000.0, "r={r}");
    }

    #[cfg(feature = "nav")]
    #[test]
    fn velocity_is_nonzero_for_a_moving_satellite() {
        let eph = gps_200_validation_ephemeris();
        let (_, vel) = eph.position_velocity(eph.t_oe + 60.0);
        assert!(vel.norm() > 1000.0);
    }

    #[test]
    fn randomize_keeps_eccentricity_small() {
        let mut rng = rng::seeded(11);
        for _ in 0..50 {
            let eph = Ephemeris::randomize(&mut rng);
            assert!(eph.e >= 0.0 && eph.e <= 0.03);
            assert_eq!(eph.iode, 241);
        }
    }
}
