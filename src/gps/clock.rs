//! Broadcast clock correction parameters (IS-GPS-200 subframe 1).

use rand::Rng;

/// SV clock correction parameters, in physical units.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ClockData {
    /// Group delay differential (s).
    pub t_gd: f64,

    /// Clock data reference time (s of week).
    pub t_oc: f64,

    /// Clock bias (s).
    pub a_f0: f64,

    /// Clock drift (s/s).
    pub a_f1: f64,

    /// Clock drift rate (s/s^2).
    pub a_f2: f64,

    /// Issue of data, clock.
    pub iodc: u16,
}

impl ClockData {
    pub fn with_t_gd(mut self, t_gd: f64) -> Self {
        self.t_gd = t_gd;
        self
    }

    pub fn with_t_oc(mut self, t_oc: f64) -> Self {
        self.t_oc = t_oc;
        self
    }

    pub fn with_clock_bias(mut self, a_f0: f64, a_f1: f64, a_f2: f64) -> Self {
        self.a_f0 = a_f0;
        self.a_f1 = a_f1;
        self.a_f2 = a_f2;
        self
    }

    pub fn with_iodc(mut self, iodc: u16) -> Self {
        self.iodc = iodc;
        self
    }

    /// SV clock offset at `gps_time` (s of week), before relativistic correction.
    pub fn offset(&self, gps_time: f64) -> f64 {
        let dt = gps_time - self.t_oc;
        self.a_f0 + self.a_f1 * dt + self.a_f2 * dt * dt
    }

    /// Time derivative of [`ClockData::offset`].
    pub fn offset_rate(&self, gps_time: f64) -> f64 {
        self.a_f1 + 2.0 * (gps_time - self.t_oc) * self.a_f2
    }

    /// Second time derivative of [`ClockData::offset`] (constant).
    pub fn offset_rate_rate(&self) -> f64 {
        2.0 * self.a_f2
    }

    /// Draws a physically plausible, uniformly-random clock data set
    /// within IS-GPS-200's representable parameter ranges.
    pub fn randomize(rng: &mut impl Rng) -> Self {
        let uniform = |rng: &mut dyn rand::RngCore, lo: f64, hi: f64| {
            rng.gen::<f64>() * (hi - lo) + lo
        };

        let t_gd_limit = 127.0 * 2.0_f64.powi(-31);
        let a_f0_limit = (2.0_f64.powi(21) - 1.0) * 2.0_f64.powi(-31);
        let a_f1_limit = (2.0_f64.powi(15) - 1.0) * 2.0_f64.powi(-43);
        let a_f2_limit = 127.0 * 2.0_f64.powi(-55);

        Self {
            t_gd: uniform(rng, -t_gd_limit, t_gd_limit),
            t_oc: uniform(rng, 0.0, 604_784.0),
            a_f0: uniform(rng, -a_f0_limit, a_f0_limit),
            a_f1: uniform(rng, -a_f1_limit, a_f1_limit),
            a_f2: uniform(rng, -a_f2_limit, a_f2_limit),
            iodc: 0,
        }
    }
}
