//! Sample-accurate L1 C/A signal synthesis: a BPSK-modulated carrier (or,
//! in the baseband variant, just the code/data product) driven by a
//! numerically-controlled code and carrier phase.

use crate::gps::constants::{CA_CODE_LENGTH, TWO_PI};
use crate::gps::satellite::SatelliteInfo;

/// One complex sample, in-phase and quadrature components.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct IqSample {
    pub i: f32,
    pub q: f32,
}

impl IqSample {
    pub fn new(i: f32, q: f32) -> Self {
        Self { i, q }
    }
}

impl std::ops::AddAssign for IqSample {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.q += rhs.q;
    }
}

/// Persistent, sample-accurate state of one synthesized signal: code phase,
/// nav-bit position and carrier phase. Carried across buffer boundaries so
/// splitting one call of length `N` into two of `N1 + N2 = N` reproduces the
/// exact same trailing state and samples (the buffer-split law).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SignalState {
    /// Current 0-indexed subframe (0..5).
    pub subframe: u8,
    /// Current nav bit within the subframe (0..300).
    pub bit: u16,
    /// Number of C/A code periods elapsed within the current nav bit (0..20).
    pub code_cycle: u8,
    /// Fractional chip position within the current C/A code period.
    pub chip_state: f64,
    /// C/A code chipping rate (chips/s), nominally [`crate::gps::constants::CA_CHIP_RATE_HZ`].
    pub code_freq_hz: f64,
    /// Carrier frequency (rad/s), `2π · f_carrier`.
    pub carrier_freq_rad: f64,
    /// Carrier phase (rad), wrapped to `[0, 2π)`.
    pub carrier_phase: f64,
}

impl Default for SignalState {
    fn default() -> Self {
        Self {
            subframe: 0,
            bit: 0,
            code_cycle: 0,
            chip_state: 0.0,
            code_freq_hz: crate::gps::constants::CA_CHIP_RATE_HZ,
            carrier_freq_rad: TWO_PI * crate::gps::constants::L1_FREQUENCY_HZ,
            carrier_phase: 0.0,
        }
    }
}

/// Synthesizes `out.len()` samples of a single satellite's L1 C/A signal
/// into `out`, starting from `state` and advancing it in place.
///
/// `carryover` is the `new_carryover` this or a chained-preceding call
/// returned: when true, the first sample of this buffer is forced to be
/// detected as a chip wrap (the previous buffer's last sample wrapped, but
/// the wrap's downstream effects — code-cycle/bit/subframe advance — belong
/// to *this* buffer's first sample).
///
/// Returns the new `carryover` flag for the next call.
pub fn gen_signal_with_data(
    state: &mut SignalState,
    sat: &mut SatelliteInfo,
    out: &mut [IqSample],
    sample_rate_hz: f64,
    amplitude: f32,
    carryover: bool,
) -> bool {
    generate(state, sat, out, sample_rate_hz, amplitude, carryover, true)
}

/// Baseband variant of [`gen_signal_with_data`]: omits the carrier factor
/// (REDESIGN FLAG: the multi-satellite baseband synthesizer's intended
/// contract), used by [`gen_multi_signal`].
pub fn gen_baseband_signal_with_data(
    state: &mut SignalState,
    sat: &mut SatelliteInfo,
    out: &mut [IqSample],
    sample_rate_hz: f64,
    amplitude: f32,
    carryover: bool,
) -> bool {
    generate(state, sat, out, sample_rate_hz, amplitude, carryover, false)
}

fn generate(
    state: &mut SignalState,
    sat: &mut SatelliteInfo,
    out: &mut [IqSample],
    sample_rate_hz: f64,
    amplitude: f32,
    carryover: bool,
    with_carrier: bool,
) -> bool {
    let n = out.len();
    let chip_len = CA_CODE_LENGTH as f64;

    let mut prev_chip = if carryover { 1024.0 } else { -1.0 };
    let mut nav_bit = sat.nav_bit(state.subframe, state.bit);

    for (i, sample) in out.iter_mut().enumerate() {
        let dt = i as f64 / sample_rate_hz;
        let chip_now = (dt * state.code_freq_hz + state.chip_state).rem_euclid(chip_len);

        if chip_now < prev_chip {
            state.code_cycle += 1;
            if state.code_cycle >= 20 {
                state.code_cycle = 0;
                state.bit += 1;
                if state.bit >= 300 {
                    state.bit = 0;
                    state.subframe += 1;
                    if state.subframe >= 5 {
                        state.subframe = 0;
                    }
                }
                nav_bit = sat.nav_bit(state.subframe, state.bit);
            }
        }

        let chip_bit = sat.ca_code()[chip_now as usize];
        let sign = if chip_bit ^ nav_bit { 1.0 } else { -1.0 };

        *sample = if with_carrier {
            let phase = state.carrier_freq_rad * dt + state.carrier_phase;
            IqSample::new(
                (amplitude as f64 * sign * phase.cos()) as f32,
                (amplitude as f64 * sign * phase.sin()) as f32,
            )
        } else {
            IqSample::new((amplitude as f64 * sign) as f32, 0.0)
        };

        prev_chip = chip_now;
    }

    let n = n as f64;
    let new_chip_state = (n * state.code_freq_hz / sample_rate_hz + state.chip_state).rem_euclid(chip_len);
    let new_carryover = new_chip_state < prev_chip;

    state.chip_state = new_chip_state;
    state.carrier_phase =
        (state.carrier_freq_rad * n / sample_rate_hz + state.carrier_phase).rem_euclid(TWO_PI);

    new_carryover
}

/// Runs [`gen_baseband_signal_with_data`] in lock-step across `states`,
/// summing each satellite's complex contribution into `out`.
pub fn gen_multi_signal(
    states: &mut [(SignalState, &mut SatelliteInfo)],
    out: &mut [IqSample],
    sample_rate_hz: f64,
    amplitude: f32,
    carryover: &mut [bool],
) {
    debug_assert_eq!(states.len(), carryover.len(), "mismatched carryover vector");

    out.fill(IqSample::default());
    let mut scratch = vec![IqSample::default(); out.len()];

    for ((state, sat), carry) in states.iter_mut().zip(carryover.iter_mut()) {
        *carry = gen_baseband_signal_with_data(state, sat, &mut scratch, sample_rate_hz, amplitude, *carry);
        for (acc, sample) in out.iter_mut().zip(scratch.iter()) {
            *acc += *sample;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gps::rng;

    fn primed_satellite(prn: u8) -> SatelliteInfo {
        let mut rng = rng::seeded(7);
        let mut sat = SatelliteInfo::new(prn).unwrap();
        sat.frame_mut().randomize_params(&mut rng);
        sat.frame_mut().set_subframes();
        sat.initialize(0);
        sat
    }

    #[test]
    fn no_drift_over_whole_millisecond_chunks() {
        let mut sat = primed_satellite(1);
        let mut state = SignalState::default();
        let sample_rate_hz = 4.092e6; // 4 samples/chip
        let samples_per_ms = (sample_rate_hz * 1.0e-3).round() as usize;

        let mut out = vec![IqSample::default(); samples_per_ms];
        let mut carryover = false;
        for _ in 0..50 {
            carryover = gen_signal_with_data(
                &mut state,
                &mut sat,
                &mut out,
                sample_rate_hz,
                1.0,
                carryover,
            );
        }

        assert!(state.chip_state < 1.0e-6 || (CA_CODE_LENGTH as f64 - state.chip_state) < 1.0e-6);
    }

    #[test]
    fn buffer_split_law_matches_single_call() {
        let sample_rate_hz = 4.092e6;
        let n = 4000;

        let mut whole_state = SignalState::default();
        let mut whole_sat = primed_satellite(5);
        let mut whole_out = vec![IqSample::default(); n];
        gen_signal_with_data(&mut whole_state, &mut whole_sat, &mut whole_out, sample_rate_hz, 1.0, false);

        let mut split_state = SignalState::default();
        let mut split_sat = primed_satellite(5);
        let mut first = vec![IqSample::default(); 1500];
        let mut second = vec![IqSample::default(); n - 1500];
        let carry = gen_signal_with_data(&mut split_state, &mut split_sat, &mut first, sample_rate_hz, 1.0, false);
        gen_signal_with_data(&mut split_state, &mut split_sat, &mut second, sample_rate_hz, 1.0, carry);

        assert!((whole_state.chip_state - split_state.chip_state).abs() < 1.0e-9);
        assert!((whole_state.carrier_phase - split_state.carrier_phase).abs() < 1.0e-9);
        assert_eq!(whole_state.subframe, split_state.subframe);
        assert_eq!(whole_state.bit, split_state.bit);
        assert_eq!(whole_state.code_cycle, split_state.code_cycle);

        for (a, b) in first.iter().chain(second.iter()).zip(whole_out.iter()) {
            assert!((a.i - b.i).abs() < 1.0e-4);
            assert!((a.q - b.q).abs() < 1.0e-4);
        }
    }

    #[test]
    fn buffer_split_law_matches_single_call_across_code_period_wrap() {
        // 4 samples/chip, so one 1023-chip code period is exactly 4092
        // samples; splitting at that boundary forces the wrap to land on
        // the very last sample of one call and the very first of the next.
        let sample_rate_hz = 4.092e6;
        let n = 2 * 4092;

        let mut whole_state = SignalState::default();
        let mut whole_sat = primed_satellite(5);
        let mut whole_out = vec![IqSample::default(); n];
        gen_signal_with_data(&mut whole_state, &mut whole_sat, &mut whole_out, sample_rate_hz, 1.0, false);

        assert_eq!(whole_state.code_cycle, 1, "one full code period must register one cycle");

        let mut split_state = SignalState::default();
        let mut split_sat = primed_satellite(5);
        let mut first = vec![IqSample::default(); 4092];
        let mut second = vec![IqSample::default(); n - 4092];
        let carry = gen_signal_with_data(&mut split_state, &mut split_sat, &mut first, sample_rate_hz, 1.0, false);
        assert!(carry, "a call spanning exactly one code period must carry the wrap over");
        gen_signal_with_data(&mut split_state, &mut split_sat, &mut second, sample_rate_hz, 1.0, carry);

        assert_eq!(split_state.code_cycle, whole_state.code_cycle);
        assert_eq!(split_state.bit, whole_state.bit);
        assert_eq!(split_state.subframe, whole_state.subframe);
        assert!((whole_state.chip_state - split_state.chip_state).abs() < 1.0e-9);
        assert!((whole_state.carrier_phase - split_state.carrier_phase).abs() < 1.0e-9);

        for (a, b) in first.iter().chain(second.iter()).zip(whole_out.iter()) {
            assert!((a.i - b.i).abs() < 1.0e-4);
            assert!((a.q - b.q).abs() < 1.0e-4);
        }
    }

    #[test]
    fn baseband_variant_has_no_quadrature_component() {
        let mut sat = primed_satellite(3);
        let mut state = SignalState::default();
        let mut out = vec![IqSample::default(); 100];
        gen_baseband_signal_with_data(&mut state, &mut sat, &mut out, 4.092e6, 1.0, false);
        assert!(out.iter().all(|s| s.q == 0.0));
    }

    #[test]
    fn multi_satellite_sums_contributions() {
        let mut sat_a = primed_satellite(1);
        let mut sat_b = primed_satellite(2);
        let sample_rate_hz = 4.092e6;
        let n = 100;

        let mut solo_a = vec![IqSample::default(); n];
        let mut state_a = SignalState::default();
        gen_baseband_signal_with_data(&mut state_a, &mut sat_a, &mut solo_a, sample_rate_hz, 1.0, false);

        let mut solo_b = vec![IqSample::default(); n];
        let mut state_b = SignalState::default();
        gen_baseband_signal_with_data(&mut state_b, &mut sat_b, &mut solo_b, sample_rate_hz, 1.0, false);

        let mut combined = vec![IqSample::default(); n];
        let mut states = [
            (SignalState::default(), &mut sat_a),
            (SignalState::default(), &mut sat_b),
        ];
        let mut carryover = [false, false];
        gen_multi_signal(&mut states, &mut combined, sample_rate_hz, 1.0, &mut carryover);

        for ((c, a), b) in combined.iter().zip(solo_a.iter()).zip(solo_b.iter()) {
            assert!((c.i - (a.i + b.i)).abs() < 1.0e-4);
        }
    }
}
