//! Subframe 4 word assembly: 25-page rotation. Word 3 carries a 2-bit
//! data-ID followed by a 6-bit page/SV-ID; per-page payloads (almanac,
//! ionospheric/UTC, special messages, health summary) are out of scope
//! and left as the reserved alternating-bit pattern.

use crate::gps::subframe::RESERVED_PATTERN;
use crate::gps::word::GpsDataWord;

/// Data-ID value IS-GPS-200 assigns to GPS (as opposed to QZSS), written
/// MSB-first: bit 0 = 0, bit 1 = 1.
const DATA_ID_GPS: u32 = 0b01;

/// Page/SV-ID per subframe-4 page (0-indexed), IS-GPS-200 Table 20-V:
/// pages 2-5, 7-10 carry almanac data for SVs 25-32; page 13 is the NMCT;
/// page 17 is special messages; page 18 is ionospheric/UTC; page 25 is
/// A-S flags/SV configs/health; everything else is the dummy ID 57.
const PAGE_IDS: [u8; 25] = [
    57, 25, 26, 27, 28, 57, 29, 30, 31, 32, 57, 62, 52, 53, 54, 57, 55, 56, 58, 59, 57, 60, 61, 62,
    63,
];

/// Writes subframe 4 words 3..10 (array indices 2..9) for `page_index`
/// (0-based, 0..24). Words 0/1 (TLM/HOW) are left to their own assembly
/// stage.
pub(crate) fn set_words(words: &mut [GpsDataWord; 10], page_index: u8) {
    for word in words.iter_mut().skip(2) {
        *word = GpsDataWord::from(RESERVED_PATTERN);
    }

    let sv_id = PAGE_IDS[(page_index % 25) as usize] as u32;

    words[2].segment_set(0, DATA_ID_GPS, 0, 1);
    words[2].segment_set(2, sv_id, 0, 5);
}
