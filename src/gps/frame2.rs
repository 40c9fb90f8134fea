//! Subframe 2 word assembly: ephemeris part A, IS-GPS-200 Table 20-II
//! word layout (words 3..10).

use crate::gps::ephemeris::Ephemeris;
use crate::gps::scale::{encode_param, encode_twos_complement, split_msb_lsb};
use crate::gps::word::GpsDataWord;

const CRS_SCALE: f64 = 2.0_f64.powi(-5);
const DN_SCALE: f64 = 2.0_f64.powi(-43);
const M0_SCALE: f64 = 2.0_f64.powi(-31);
const CUC_SCALE: f64 = 2.0_f64.powi(-29);
const E_SCALE: f64 = 2.0_f64.powi(-33);
const CUS_SCALE: f64 = 2.0_f64.powi(-29);
const SQRT_A_SCALE: f64 = 2.0_f64.powi(-19);
const TOE_SCALE: f64 = 16.0;

/// Writes subframe 2 words 3..10 (array indices 2..9) from ephemeris
/// part-A parameters. `fit_interval_flag` and `aodo` are DataFrame-level
/// state, not part of [`Ephemeris`] itself.
pub(crate) fn set_words(
    words: &mut [GpsDataWord; 10],
    eph: &Ephemeris,
    fit_interval_flag: bool,
    aodo: u8,
) {
    words[2].segment_set(0, eph.iode as u32 & 0xff, 0, 7);
    let crs = encode_twos_complement(encode_param(eph.c_rs, CRS_SCALE), 16);
    words[2].segment_set(8, crs, 0, 15);

    let dn = encode_twos_complement(encode_param(eph.del_n, DN_SCALE), 16);
    words[3].segment_set(0, dn, 0, 15);

    let m0 = encode_twos_complement(encode_param(eph.m_0, M0_SCALE), 32);
    let (m0_msb, m0_lsb) = split_msb_lsb(m0, 8, 24);
    words[3].segment_set(16, m0_msb, 0, 7);
    words[4].segment_set(0, m0_lsb, 0, 23);

    let cuc = encode_twos_complement(encode_param(eph.c_uc, CUC_SCALE), 16);
    words[5].segment_set(0, cuc, 0, 15);

    let e = encode_param(eph.e, E_SCALE) as u32;
    let (e_msb, e_lsb) = split_msb_lsb(e, 8, 24);
    words[5].segment_set(16, e_msb, 0, 7);
    words[6].segment_set(0, e_lsb, 0, 23);

    let cus = encode_twos_complement(encode_param(eph.c_us, CUS_SCALE), 16);
    words[7].segment_set(0, cus, 0, 15);

    let sqrt_a = encode_param(eph.sqrt_a, SQRT_A_SCALE) as u32;
    let (sqrt_a_msb, sqrt_a_lsb) = split_msb_lsb(sqrt_a, 8, 24);
    words[7].segment_set(16, sqrt_a_msb, 0, 7);
    words[8].segment_set(0, sqrt_a_lsb, 0, 23);

    let toe = encode_param(eph.t_oe, TOE_SCALE) as u32 & 0xffff;
    words[9].segment_set(0, toe, 0, 15);
    words[9].set_bit(16, fit_interval_flag);
    words[9].segment_set(17, aodo as u32 & 0x1f, 0, 4);
}
