//! LNAV Hamming-derived parity: the 6-bit parity field appended to every
//! 30-bit word, and the D29*/D30* thread that carries the last two bits
//! of one word into the parity (and non-information bit) computation of
//! the next.

use crate::gps::word::GpsDataWord;

// Bit positions (MSB-indexed, 0 = first transmitted bit) feeding each of
// the six parity equations, IS-GPS-200 Table 20-XIV.
const PARITY_25: [u8; 14] = [0, 1, 2, 4, 5, 9, 10, 11, 12, 13, 16, 17, 19, 22];
const PARITY_26: [u8; 14] = [1, 2, 3, 5, 6, 10, 11, 12, 13, 14, 17, 18, 20, 23];
const PARITY_27: [u8; 14] = [0, 2, 3, 4, 6, 7, 11, 12, 13, 14, 15, 18, 19, 21];
const PARITY_28: [u8; 14] = [1, 3, 4, 5, 7, 8, 12, 13, 14, 15, 16, 19, 20, 22];
const PARITY_29: [u8; 15] = [0, 2, 4, 5, 6, 8, 9, 13, 14, 15, 16, 17, 20, 21, 23];
const PARITY_30: [u8; 13] = [2, 4, 5, 7, 8, 9, 10, 12, 14, 18, 21, 22, 23];

// Non-information bearing bit masks for words 2 (index 1, HOW) and 10
// (index 9), forced ahead of the parity computation so D29*/D30* of the
// *next* subframe come out consistent regardless of payload content.
const NON_INFO_BIT_23: [u8; 14] = [0, 2, 4, 5, 6, 8, 9, 13, 14, 15, 16, 17, 20, 21];
const NON_INFO_BIT_22: [u8; 12] = [2, 4, 5, 7, 8, 9, 10, 12, 14, 18, 21, 23];

/// Positions (0-indexed) within a subframe whose bits 22/23 are
/// non-information bearing and get overwritten before parity encoding.
pub const NON_INFO_WORDS: [u8; 2] = [1, 9];

/// Computes the 6 parity bits (positions 24..29) of `word` given the
/// previous word's carried D29*/D30*, and applies the D30*-controlled
/// data inversion. Mirrors `Word::Parity`.
pub fn word_parity(mut word: GpsDataWord, d29: bool, d30: bool) -> GpsDataWord {
    word.set_bit(24, d29 ^ word.xor_of(&PARITY_25));
    word.set_bit(25, d30 ^ word.xor_of(&PARITY_26));
    word.set_bit(26, d29 ^ word.xor_of(&PARITY_27));
    word.set_bit(27, d30 ^ word.xor_of(&PARITY_28));
    word.set_bit(28, d30 ^ word.xor_of(&PARITY_29));
    word.set_bit(29, d29 ^ word.xor_of(&PARITY_30));

    if d30 {
        for i in 0..24 {
            let bit = word.bit(i);
            word.set_bit(i, !bit);
        }
    }
    word
}

/// Encodes parity across all 10 words of a subframe, threading D29*/D30*
/// from one word to the next. `d29`/`d30` carry the final state in (from
/// the previous subframe) and out (for the next one). Mirrors
/// `DataFrame::ParityFrame`.
pub fn encode_subframe_parity(words: &mut [GpsDataWord; 10], d29: &mut bool, d30: &mut bool) {
    for (w, word) in words.iter_mut().enumerate() {
        if NON_INFO_WORDS.contains(&(w as u8)) {
            word.set_bit(23, *d30 ^ word.xor_of(&NON_INFO_BIT_23));
            word.set_bit(22, *d29 ^ word.xor_of(&NON_INFO_BIT_22));
        }
        *word = word_parity(*word, *d29, *d30);
        *d29 = word.bit(28);
        *d30 = word.bit(29);
    }
}
