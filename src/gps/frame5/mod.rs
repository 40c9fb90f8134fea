//! Subframe 5 word assembly: 25-page almanac/health rotation. Word 3
//! carries the same 2-bit data-ID as subframe 4, followed by a 6-bit
//! page/SV-ID; per-page almanac and health-summary payloads are out of
//! scope and left as the reserved alternating-bit pattern.

use crate::gps::subframe::RESERVED_PATTERN;
use crate::gps::word::GpsDataWord;

const DATA_ID_GPS: u32 = 0b01;

/// Page/SV-ID per subframe-5 page (0-indexed), IS-GPS-200 Table 20-V:
/// pages 1-24 carry almanac data for SVs 1-24, page 25 is the SV health
/// summary (SV-ID 51).
const PAGE_IDS: [u8; 25] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 51,
];

/// Writes subframe 5 words 3..10 (array indices 2..9) for `page_index`
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn data_id_is_01_msb_first() {
        let mut words = [GpsDataWord::default(); 10];
        set_words(&mut words, 0);
        assert!(!words[2].bit(0));
        assert!(words[2].bit(1));
    }

    #[test]
    fn almanac_pages_map_to_sv_1_through_24() {
        let mut words = [GpsDataWord::default(); 10];
        for (page_index, expected_sv) in [(0, 1), (11, 12), (23, 24)] {
            set_words(&mut words, page_index);
            let mut sv = 0u32;
            for i in 2..8 {
                sv = (sv << 1) | words[2].bit(i) as u32;
            }
            assert_eq!(sv, expected_sv);
        }
    }

    #[test]
    fn page_25_is_sv_health_summary_51() {
        let mut words = [GpsDataWord::default(); 10];
        set_words(&mut words, 24);
        let mut sv = 0u32;
        for i in 2..8 {
            sv = (sv << 1) | words[2].bit(i) as u32;
        }
        assert_eq!(sv, 51);
    }

    #[test]
    fn page_index_wraps_modulo_25() {
        let mut a = [GpsDataWord::default(); 10];
        let mut b = [GpsDataWord::default(); 10];
        set_words(&mut a, 0);
        set_words(&mut b, 25);
        assert_eq!(a[2].value(), b[2].value());
    }

    #[test]
    fn reserved_trailing_words_carry_sentinel_pattern() {
        let mut words = [GpsDataWord::default(); 10];
        set_words(&mut words, 0);
        assert_eq!(
            words[9].value(),
            GpsDataWord::from(RESERVED_PATTERN).value()
        );
    }
}
