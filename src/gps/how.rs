use crate::gps::word::GpsDataWord;
use crate::gps::GpsError;
use crate::gps::GpsQzssFrameId;

#[cfg(doc)]
use crate::gps::GpsQzssTelemetry;

/// [GpsQzssHow] (GPS HandOver Word) marks word 2 of each subframe, following
/// [GpsQzssTelemetry], and defines the content to follow.
///
/// `tow` is the full time-of-week count at 1.5-second resolution
/// (`0..=403199`); only its high 17 bits are actually transmitted (the low
/// 2 bits are always zero at a subframe boundary, since subframes are
/// 6 seconds = 4 counts long).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GpsQzssHow {
    /// Time-of-week, 1.5-second counts, of the start of the *next* subframe.
    pub tow: u32,

    /// When alert is asserted, the SV URA may be worse than indicated in subframe 1
    /// and user shall use this SV at their own risk.
    pub alert: bool,

    /// A-S mode is ON in that SV
    pub anti_spoofing: bool,

    /// Following Frame ID (to decode following data words)
    pub frame_id: GpsQzssFrameId,
}

#[cfg(feature = "std")]
impl std::fmt::Display for GpsQzssHow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "TOW={} - ALERT={} - A/S={} - ID={}",
            self.tow, self.alert, self.anti_spoofing, self.frame_id
        )
    }
}

impl GpsQzssHow {
    /// Copies and returns [GpsQzssHow] with updated TOW, in 1.5-second counts.
    pub fn with_tow(mut self, tow: u32) -> Self {
        self.tow = tow;
        self
    }

    /// Copies and returns [GpsQzssHow] with updated [GpsQzssFrameId]
    pub fn with_frame_id(mut self, frame_id: GpsQzssFrameId) -> Self {
        self.frame_id = frame_id;
        self
    }

    /// Copies and returns [GpsQzssHow] with updated alert bit
    pub fn with_alert_bit(mut self, alert: bool) -> Self {
        self.alert = alert;
        self
    }

    /// Copies and returns [GpsQzssHow] with updated A/S bit
    pub fn with_anti_spoofing(mut self, anti_spoofing: bool) -> Self {
        self.anti_spoofing = anti_spoofing;
        self
    }

    /// Builds an Ephemeris #1 [GpsQzssHow]
    pub fn ephemeris1() -> Self {
        Self {
            frame_id: GpsQzssFrameId::Ephemeris1,
            ..Default::default()
        }
    }

    /// Builds an Ephemeris #2 [GpsQzssHow]
    pub fn ephemeris2() -> Self {
        Self {
            frame_id: GpsQzssFrameId::Ephemeris2,
            ..Default::default()
        }
    }

    /// Builds an Ephemeris #3 [GpsQzssHow]
    pub fn ephemeris3() -> Self {
        Self {
            frame_id: GpsQzssFrameId::Ephemeris3,
            ..Default::default()
        }
    }

    pub(crate) fn decode(word: GpsDataWord) -> Result<Self, GpsError> {
        let mut truncated = 0u32;
        for i in 0..17 {
            truncated = (truncated << 1) | word.bit(i) as u32;
        }

        let mut subframe_id = 0u8;
        for i in 19..22 {
            subframe_id = (subframe_id << 1) | word.bit(i) as u8;
        }

        let frame_id = GpsQzssFrameId::decode(subframe_id)?;

        Ok(Self {
            tow: truncated << 2,
            alert: word.bit(17),
            anti_spoofing: word.bit(18),
            frame_id,
        })
    }

    /// Encodes this [GpsQzssHow] word as a [GpsDataWord]
    pub(crate) fn encode(&self) -> GpsDataWord {
        let mut word = GpsDataWord::default();
        let truncated = (self.tow >> 2) & 0x1_ffff;

        word.segment_set(0, truncated, 0, 16);
        word.set_bit(17, self.alert);
        word.set_bit(18, self.anti_spoofing);
        word.segment_set(19, self.frame_id.encode() as u32, 0, 2);

        word
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn how_roundtrip() {
        for (tow, frame_id, alert, anti_spoofing) in [
            (4, GpsQzssFrameId::Ephemeris1, false, false),
            (604, GpsQzssFrameId::Ephemeris1, false, true),
            (403196, GpsQzssFrameId::Ephemeris2, false, true),
            (0, GpsQzssFrameId::Ephemeris2, false, false),
            (1200, GpsQzssFrameId::Ephemeris3, true, false),
            (1200, GpsQzssFrameId::Page4, true, true),
            (1200, GpsQzssFrameId::Page5, false, false),
        ] {
            let how = GpsQzssHow::default()
                .with_tow(tow)
                .with_frame_id(frame_id)
                .with_alert_bit(alert)
                .with_anti_spoofing(anti_spoofing);

            let word = how.encode();
            let decoded = GpsQzssHow::decode(word).unwrap_or_else(|e| {
                panic!("failed to decode gps-how: {}", e);
            });

            assert_eq!(decoded, how);
        }
    }

    #[test]
    fn full_tow_4_subframe_1_matches_concrete_scenario() {
        // full_tow = 4, subframe_id = 1, flags = 0:
        // bits 0..16 = 00000000000000001, bits 19..21 = 001.
        let how = GpsQzssHow::default()
            .with_tow(4)
            .with_frame_id(GpsQzssFrameId::Ephemeris1);
        let word = how.encode();

        for i in 0..16 {
            assert!(!word.bit(i), "bit {} should be clear", i);
        }
        assert!(word.bit(16));

        assert!(!word.bit(19));
        assert!(!word.bit(20));
        assert!(word.bit(21));
    }

    #[test]
    fn low_two_tow_bits_are_truncated_away() {
        // tow values that differ only in their low 2 bits encode identically.
        let a = GpsQzssHow::default().with_tow(400).encode();
        let b = GpsQzssHow::default().with_tow(403).encode();
        assert_eq!(a.value(), b.value());
    }
}
