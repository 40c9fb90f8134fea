//! [Subframe] (ten parity-bearing words) and [DataFrame] (five subframes
//! plus the clock/ephemeris parameters and time-varying state they are
//! assembled from).

use rand::Rng;

use crate::gps::clock::ClockData;
use crate::gps::constants::TOW_COUNT_WRAP;
use crate::gps::ephemeris::Ephemeris;
use crate::gps::frame_id::GpsQzssFrameId;
use crate::gps::how::GpsQzssHow;
use crate::gps::parity;
use crate::gps::tlm::GpsQzssTelemetry;
use crate::gps::word::GpsDataWord;
use crate::gps::{frame1, frame2, frame3, frame4, frame5};

/// 30-bit alternating-bit sentinel (`0b10_1010..`) reserved words carry
/// until their content is defined.
pub(crate) const RESERVED_PATTERN: u32 = 0x2AAA_AAAA;

/// A single LNAV subframe: ten 30-bit words (TLM, HOW, then eight payload
/// words), addressable either word-by-word or by flat bit index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Subframe {
    words: [GpsDataWord; 10],
}

impl Default for Subframe {
    fn default() -> Self {
        Self {
            words: [GpsDataWord::from(RESERVED_PATTERN); 10],
        }
    }
}

impl Subframe {
    /// Returns the ten words making up this subframe.
    pub fn words(&self) -> &[GpsDataWord; 10] {
        &self.words
    }

    /// Reads the bit at flat index `i` (0..299): word `i/30`, bit `i % 30`.
    pub fn bit(&self, i: u16) -> bool {
        debug_assert!(i < 300, "subframe bit index out of range: {i}");
        self.words[(i / 30) as usize].bit((i % 30) as u8)
    }

    fn fill_reserved(&mut self) {
        self.words = [GpsDataWord::from(RESERVED_PATTERN); 10];
    }
}

/// Five subframes plus the orbital/clock parameters and time-varying
/// state (TOW, week, page rotation, parity carry) they are assembled
/// from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataFrame {
    subframes: [Subframe; 5],

    clock: ClockData,
    ephemeris: Ephemeris,

    /// Time-of-week, 1.5-second counts, 0..=403199.
    tow: u32,
    week: u16,

    integrity_flag: bool,
    alert_flag: bool,
    anti_spoofing_flag: bool,

    ca_or_p_l2: u8,
    ura: u8,
    health: u8,

    fit_interval_flag: bool,
    aodo: u8,

    tlm_message: u16,

    /// Current subframe-4/5 page index, 0..24.
    page_index: u8,

    /// Parity carry bits threaded across consecutive words and subframes.
    d29: bool,
    d30: bool,
}

impl Default for DataFrame {
    fn default() -> Self {
        Self {
            subframes: [Subframe::default(); 5],
            clock: ClockData::default(),
            ephemeris: Ephemeris::default(),
            tow: 0,
            week: 0,
            integrity_flag: false,
            alert_flag: false,
            anti_spoofing_flag: false,
            ca_or_p_l2: 0,
            ura: 0,
            health: 0,
            fit_interval_flag: false,
            aodo: 0,
            tlm_message: 0,
            page_index: 0,
            d29: false,
            d30: false,
        }
    }
}

impl DataFrame {
    pub fn with_clock(mut self, clock: ClockData) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ephemeris(mut self, ephemeris: Ephemeris) -> Self {
        self.ephemeris = ephemeris;
        self
    }

    pub fn with_tow(mut self, tow: u32) -> Self {
        self.tow = tow % TOW_COUNT_WRAP;
        self
    }

    pub fn with_week(mut self, week: u16) -> Self {
        self.week = week;
        self
    }

    pub fn with_flags(mut self, integrity: bool, alert: bool, anti_spoofing: bool) -> Self {
        self.integrity_flag = integrity;
        self.alert_flag = alert;
        self.anti_spoofing_flag = anti_spoofing;
        self
    }

    pub fn with_codes(mut self, ca_or_p_l2: u8, ura: u8, health: u8) -> Self {
        self.ca_or_p_l2 = ca_or_p_l2;
        self.ura = ura;
        self.health = health;
        self
    }

    pub fn with_fit_interval_flag(mut self, fit_interval_flag: bool) -> Self {
        self.fit_interval_flag = fit_interval_flag;
        self
    }

    pub fn with_aodo(mut self, aodo: u8) -> Self {
        self.aodo = aodo;
        self
    }

    pub fn with_tlm_message(mut self, tlm_message: u16) -> Self {
        self.tlm_message = tlm_message;
        self
    }

    pub fn with_page_index(mut self, page_index: u8) -> Self {
        self.page_index = page_index % 25;
        self
    }

    pub fn clock(&self) -> &ClockData {
        &self.clock
    }

    pub fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    pub fn tow(&self) -> u32 {
        self.tow
    }

    pub fn week(&self) -> u16 {
        self.week
    }

    pub fn page_index(&self) -> u8 {
        self.page_index
    }

    /// Draws new random clock/ephemeris parameters, then forces the
    /// `t_oc = t_oe` and `IODC = IODE` consistency every internally
    /// self-consistent frame must satisfy.
    pub fn randomize_params(&mut self, rng: &mut impl Rng) {
        self.ephemeris = Ephemeris::randomize(rng);
        self.clock = ClockData::randomize(rng).with_t_oc(self.ephemeris.t_oe);
        self.clock.iodc = self.ephemeris.iode as u16;
    }

    /// Advances TOW by 20 counts (30 seconds: the subframe period), wrapping
    /// at [`TOW_COUNT_WRAP`] and incrementing the week on wrap.
    pub fn time_increment(&mut self) {
        self.advance_tow(20);
    }

    /// Advances TOW by an arbitrary number of 1.5-second counts, wrapping
    /// at [`TOW_COUNT_WRAP`] and incrementing the week on wrap. Generalizes
    /// [`DataFrame::time_increment`]'s fixed "+20" step.
    pub fn advance_tow(&mut self, counts: u32) {
        self.tow += counts;
        if self.tow >= TOW_COUNT_WRAP {
            self.tow %= TOW_COUNT_WRAP;
            self.week = self.week.wrapping_add(1);
        }
    }

    /// Advances the subframe-4/5 page index, wrapping at 25.
    pub fn advance_page(&mut self) {
        self.page_index = (self.page_index + 1) % 25;
    }

    fn preamble(&self, subframe_index: u8, frame_id: GpsQzssFrameId) -> (GpsDataWord, GpsDataWord) {
        let tlm = GpsQzssTelemetry::default()
            .with_message(self.tlm_message)
            .with_reserved_bit(false);
        let tlm = if self.integrity_flag {
            tlm.with_integrity()
        } else {
            tlm.without_integrity()
        };

        let subframe_tow = (self.tow + subframe_index as u32 * 4) % TOW_COUNT_WRAP;
        let how = GpsQzssHow::default()
            .with_tow(subframe_tow)
            .with_frame_id(frame_id)
            .with_alert_bit(self.alert_flag)
            .with_anti_spoofing(self.anti_spoofing_flag);

        (tlm.encode(), how.encode())
    }

    /// Re-encodes a single 0-indexed subframe from the current parameters.
    pub fn set_subframe(&mut self, sf: u8) {
        let frame_id = match sf {
            0 => GpsQzssFrameId::Ephemeris1,
            1 => GpsQzssFrameId::Ephemeris2,
            2 => GpsQzssFrameId::Ephemeris3,
            3 => GpsQzssFrameId::Page4,
            4 => GpsQzssFrameId::Page5,
            _ => panic!("invalid subframe index: {sf}"),
        };

        let subframe = &mut self.subframes[sf as usize];
        subframe.fill_reserved();

        let (tlm_word, how_word) = self.preamble(sf, frame_id);
        subframe.words[0] = tlm_word;
        subframe.words[1] = how_word;

        match sf {
            0 => frame1::set_words(
                &mut subframe.words,
                &self.clock,
                self.week,
                self.ca_or_p_l2,
                self.ura,
                self.health,
            ),
            1 => frame2::set_words(
                &mut subframe.words,
                &self.ephemeris,
                self.fit_interval_flag,
                self.aodo,
            ),
            2 => frame3::set_words(&mut subframe.words, &self.ephemeris),
            3 => frame4::set_words(&mut subframe.words, self.page_index),
            4 => frame5::set_words(&mut subframe.words, self.page_index),
            _ => unreachable!(),
        }
    }

    /// Re-encodes all five subframes from the current parameters.
    pub fn set_subframes(&mut self) {
        for sf in 0..5 {
            self.set_subframe(sf);
        }
    }

    /// Returns the unparsed (pre-parity) subframe at 0-indexed `sf`.
    pub fn subframe(&self, sf: usize) -> &Subframe {
        &self.subframes[sf]
    }

    /// Parity-encodes the 0-indexed subframe `sf`, threading D29*/D30*
    /// forward from whatever state this [`DataFrame`] currently carries
    /// (set to `false`/`false` at the start of a superframe).
    pub fn parity_frame(&mut self, sf: usize) -> Subframe {
        let mut words = self.subframes[sf].words;
        parity::encode_subframe_parity(&mut words, &mut self.d29, &mut self.d30);
        Subframe { words }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gps::rng;

    fn sample_frame() -> DataFrame {
        let mut rng = rng::seeded(3);
        let mut frame = DataFrame::default().with_tow(4).with_week(0x2AA);
        frame.randomize_params(&mut rng);
        frame.set_subframes();
        frame
    }

    #[test]
    fn iodc_matches_iode_after_randomize() {
        let mut rng = rng::seeded(1);
        let mut frame = DataFrame::default();
        frame.randomize_params(&mut rng);
        assert_eq!(frame.clock.iodc, frame.ephemeris.iode as u16);
        assert_eq!(frame.clock.t_oc, frame.ephemeris.t_oe);
    }

    #[test]
    fn bit_accessor_matches_word_bit() {
        let frame = sample_frame();
        let subframe = frame.subframe(0);
        for i in 0..300u16 {
            assert_eq!(
                subframe.bit(i),
                subframe.words[(i / 30) as usize].bit((i % 30) as u8)
            );
        }
    }

    #[test]
    fn time_increment_adds_20_counts() {
        let mut frame = DataFrame::default().with_tow(100).with_week(10);
        frame.time_increment();
        assert_eq!(frame.tow(), 120);
        assert_eq!(frame.week(), 10);
    }

    #[test]
    fn tow_wraps_and_increments_week_at_boundary() {
        let mut frame = DataFrame::default().with_tow(403199).with_week(10);
        frame.advance_tow(1);
        assert_eq!(frame.tow(), 0);
        assert_eq!(frame.week(), 11);
    }

    #[test]
    fn page_index_wraps_at_25() {
        let mut frame = DataFrame::default().with_page_index(24);
        frame.advance_page();
        assert_eq!(frame.page_index(), 0);
    }

    #[test]
    fn parity_frame_is_idempotent_from_zero_carry() {
        let mut frame = sample_frame();
        let first = frame.parity_frame(0);

        let mut replay = sample_frame();
        let second = replay.parity_frame(0);

        assert_eq!(first.words(), second.words());
    }

    #[test]
    fn subframe4_and_5_carry_distinct_page_ids_across_pages() {
        let mut frame = sample_frame();
        let page0 = *frame.subframe(3);
        frame.advance_page();
        frame.set_subframe(3);
        let page1 = *frame.subframe(3);
        assert_ne!(page0.words()[2].value(), page1.words()[2].value());
    }
}
