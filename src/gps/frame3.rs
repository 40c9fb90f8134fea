//! Subframe 3 word assembly: ephemeris part B, IS-GPS-200 Table 20-III
//! word layout (words 3..10).

use crate::gps::ephemeris::Ephemeris;
use crate::gps::scale::{encode_param, encode_twos_complement, split_msb_lsb};
use crate::gps::word::GpsDataWord;

const CIC_SCALE: f64 = 2.0_f64.powi(-29);
const OMEGA0_SCALE: f64 = 2.0_f64.powi(-31);
const CIS_SCALE: f64 = 2.0_f64.powi(-29);
const I0_SCALE: f64 = 2.0_f64.powi(-31);
const CRC_SCALE: f64 = 2.0_f64.powi(-5);
const OMEGA_SCALE: f64 = 2.0_f64.powi(-31);
const OMEGA_DOT_SCALE: f64 = 2.0_f64.powi(-43);
const IDOT_SCALE: f64 = 2.0_f64.powi(-43);

/// Writes subframe 3 words 3..10 (array indices 2..9) from ephemeris
/// part-B parameters.
pub(crate) fn set_words(words: &mut [GpsDataWord; 10], eph: &Ephemeris) {
    let cic = encode_twos_complement(encode_param(eph.c_ic, CIC_SCALE), 16);
    words[2].segment_set(0, cic, 0, 15);

    let omega0 = encode_twos_complement(encode_param(eph.omega_0, OMEGA0_SCALE), 32);
    let (omega0_msb, omega0_lsb) = split_msb_lsb(omega0, 8, 24);
    words[2].segment_set(16, omega0_msb, 0, 7);
    words[3].segment_set(0, omega0_lsb, 0, 23);

    let cis = encode_twos_complement(encode_param(eph.c_is, CIS_SCALE), 16);
    words[4].segment_set(0, cis, 0, 15);

    let i0 = encode_twos_complement(encode_param(eph.i_0, I0_SCALE), 32);
    let (i0_msb, i0_lsb) = split_msb_lsb(i0, 8, 24);
    words[4].segment_set(16, i0_msb, 0, 7);
    words[5].segment_set(0, i0_lsb, 0, 23);

    let crc = encode_twos_complement(encode_param(eph.c_rc, CRC_SCALE), 16);
    words[6].segment_set(0, crc, 0, 15);

    let omega = encode_twos_complement(encode_param(eph.omega, OMEGA_SCALE), 32);
    let (omega_msb, omega_lsb) = split_msb_lsb(omega, 8, 24);
    words[6].segment_set(16, omega_msb, 0, 7);
    words[7].segment_set(0, omega_lsb, 0, 23);

    let omega_dot = encode_twos_complement(encode_param(eph.omega_dot, OMEGA_DOT_SCALE), 24);
    words[8].segment_set(0, omega_dot, 0, 23);

    words[9].segment_set(0, eph.iode as u32 & 0xff, 0, 7);
    let idot = encode_twos_complement(encode_param(eph.idot, IDOT_SCALE), 14);
    words[9].segment_set(8, idot, 0, 13);
}
