//! Subframe 1 word assembly: SV clock correction and health, IS-GPS-200
//! Table 20-I word layout (words 3..10; words 1..2 are TLM/HOW).

use crate::gps::clock::ClockData;
use crate::gps::scale::{encode_param, encode_twos_complement};
use crate::gps::word::GpsDataWord;

const TGD_SCALE: f64 = 2.0_f64.powi(-31);
const TOC_SCALE: f64 = 16.0;
const AF0_SCALE: f64 = 2.0_f64.powi(-31);
const AF1_SCALE: f64 = 2.0_f64.powi(-43);
const AF2_SCALE: f64 = 2.0_f64.powi(-55);

/// Writes subframe 1 words 3..10 (array indices 2..9) from clock/health
/// parameters. Words 0/1 (TLM/HOW) and the parity field are left to their
/// own assembly stages.
#[allow(clippy::too_many_arguments)]
pub(crate) fn set_words(
    words: &mut [GpsDataWord; 10],
    clock: &ClockData,
    week: u16,
    ca_or_p_l2: u8,
    ura: u8,
    health: u8,
) {
    let iodc = clock.iodc & 0x3ff;
    let iodc_msb = (iodc >> 8) as u32;
    let iodc_lsb = (iodc & 0xff) as u32;

    let word3 = &mut words[2];
    word3.segment_set(0, week as u32 & 0x3ff, 0, 9);
    word3.segment_set(10, ca_or_p_l2 as u32 & 0x3, 0, 1);
    word3.segment_set(12, ura as u32 & 0xf, 0, 3);
    word3.segment_set(16, health as u32 & 0x3f, 0, 5);
    word3.segment_set(22, iodc_msb, 0, 1);

    // word4: L2 P-code data flag + 23-bit reserved filler.
    words[3].set_bit(0, false);

    // word5/word6: 24-bit reserved fillers, left untouched (caller may
    // pre-fill the whole subframe with the reserved pattern).

    let tgd = encode_twos_complement(encode_param(clock.t_gd, TGD_SCALE), 8);
    words[6].segment_set(16, tgd, 0, 7);

    let toc = encode_param(clock.t_oc, TOC_SCALE) as u32 & 0xffff;
    words[7].segment_set(0, iodc_lsb, 0, 7);
    words[7].segment_set(8, toc, 0, 15);

    let af2 = encode_twos_complement(encode_param(clock.a_f2, AF2_SCALE), 8);
    let af1 = encode_twos_complement(encode_param(clock.a_f1, AF1_SCALE), 16);
    words[8].segment_set(0, af2, 0, 7);
    words[8].segment_set(8, af1, 0, 15);

    let af0 = encode_twos_complement(encode_param(clock.a_f0, AF0_SCALE), 22);
    words[9].segment_set(0, af0, 0, 21);
}
