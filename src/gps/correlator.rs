//! Closed-form correlator output model: the complex response a receiver's
//! early/prompt/late correlators would report for a given code, frequency
//! and phase error.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::gps::constants::{PI, TWO_PI};

/// A complex correlator output.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Noise-free correlator response for chip error `tau` (chips), frequency
/// error `freq_error_hz`, phase error `phase_error_cycles`, coherent
/// integration period `integration_s`, and carrier-to-noise density
/// `cn0_linear` (linear, not dB-Hz).
///
/// `|tau| >= 1` (no code overlap) returns zero.
pub fn scalar(
    tau: f64,
    freq_error_hz: f64,
    phase_error_cycles: f64,
    integration_s: f64,
    cn0_linear: f64,
) -> Complex {
    if tau.abs() >= 1.0 {
        return Complex::default();
    }

    let envelope = (1.0 - tau.abs()) * 2.0 * (cn0_linear * integration_s).sqrt();
    let freq_factor = sinc(PI * integration_s * freq_error_hz);
    let phase = TWO_PI * phase_error_cycles;

    Complex::new(envelope * freq_factor * phase.cos(), envelope * freq_factor * phase.sin())
}

/// [`scalar`], with independent `N(0,1)` noise added to each component.
pub fn noisy(
    tau: f64,
    freq_error_hz: f64,
    phase_error_cycles: f64,
    integration_s: f64,
    cn0_linear: f64,
    rng: &mut impl Rng,
) -> Complex {
    let clean = scalar(tau, freq_error_hz, phase_error_cycles, integration_s, cn0_linear);
    let noise_re: f64 = StandardNormal.sample(rng);
    let noise_im: f64 = StandardNormal.sample(rng);
    Complex::new(clean.re + noise_re, clean.im + noise_im)
}

/// Container form: averages each error vector over equal-length
/// sub-integration segments, then applies the scalar form once to the
/// averaged errors.
pub fn container(
    tau: &[f64],
    freq_error_hz: &[f64],
    phase_error_cycles: &[f64],
    integration_s: f64,
    cn0_linear: f64,
) -> Complex {
    debug_assert_eq!(tau.len(), freq_error_hz.len(), "mismatched error vector lengths");
    debug_assert_eq!(tau.len(), phase_error_cycles.len(), "mismatched error vector lengths");
    debug_assert!(!tau.is_empty(), "empty error vector");

    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;

    scalar(
        mean(tau),
        mean(freq_error_hz),
        mean(phase_error_cycles),
        integration_s,
        cn0_linear,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn boundary_tau_equal_one_is_zero() {
        let r = scalar(1.0, 0.0, 0.0, 0.001, 31623.0);
        assert_eq!(r, Complex::default());
        let r = scalar(-1.0, 0.0, 0.0, 0.001, 31623.0);
        assert_eq!(r, Complex::default());
    }

    #[test]
    fn zero_frequency_error_gives_unity_sinc_factor_no_nan() {
        let r = scalar(0.0, 0.0, 0.0, 0.001, 31623.0);
        assert!(r.re.is_finite() && r.im.is_finite());
    }

    #[test]
    fn matches_published_magnitude_at_zero_error() {
        let r = scalar(0.0, 0.0, 0.0, 0.001, 31623.0);
        assert!((r.re - 11.25).abs() < 0.01, "re={}", r.re);
        assert_eq!(r.im, 0.0);
    }

    #[test]
    fn container_averages_before_scalar() {
        let tau = [0.1, 0.1, 0.1];
        let freq = [0.0, 0.0, 0.0];
        let phase = [0.0, 0.0, 0.0];
        let combined = container(&tau, &freq, &phase, 0.001, 31623.0);
        let direct = scalar(0.1, 0.0, 0.0, 0.001, 31623.0);
        assert_eq!(combined, direct);
    }

    #[test]
    fn noisy_output_deviates_from_clean_scalar() {
        let mut rng = crate::gps::rng::seeded(42);
        let clean = scalar(0.0, 0.0, 0.0, 0.001, 31623.0);
        let with_noise = noisy(0.0, 0.0, 0.0, 0.001, 31623.0, &mut rng);
        assert_ne!(clean, with_noise);
    }
}
