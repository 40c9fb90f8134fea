use crate::gps::word::GpsDataWord;
use crate::gps::GpsError;

/// Fixed 8-bit preamble at the start of every LNAV word 1, MSB-first.
const PREAMBLE: u32 = 0b1000_1011;

/// [GpsQzssTelemetry] marks the beginning of each subframe (word 1).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GpsQzssTelemetry {
    /// 14-bit TLM Message
    pub message: u16,

    /// Integrity bit is asserted means the conveying signal is provided
    /// with an enhanced level of integrity assurance.
    pub integrity: bool,

    /// Reserved bit
    pub reserved_bit: bool,
}

#[cfg(feature = "std")]
impl std::fmt::Display for GpsQzssTelemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "INTEGRITY={} - MSG=0x{:04X} - reserved={}",
            self.integrity, self.message, self.reserved_bit
        )
    }
}

impl GpsQzssTelemetry {
    /// Copies and returns new [GpsQzssTelemetry] with updated 14-bit TLM message
    pub fn with_message(mut self, message_14b: u16) -> Self {
        self.message = message_14b & 0x3fff;
        self
    }

    /// Copies and returns new [GpsQzssTelemetry] with message integrity asserted
    pub fn with_integrity(mut self) -> Self {
        self.integrity = true;
        self
    }

    /// Copies and returns new [GpsQzssTelemetry] with message integrity deasserted
    pub fn without_integrity(mut self) -> Self {
        self.integrity = false;
        self
    }

    /// Copies and returns new [GpsQzssTelemetry] with reserved bit asserted
    pub fn with_reserved_bit(mut self) -> Self {
        self.reserved_bit = true;
        self
    }

    /// Copies and returns new [GpsQzssTelemetry] with reserved bit deasserted
    pub fn without_reserved_bit(mut self) -> Self {
        self.reserved_bit = false;
        self
    }

    /// [GpsQzssTelemetry] decoding attempt from an assembled [GpsDataWord].
    /// The fixed preamble must be present on bits 0..7 for this to pass.
    pub(crate) fn decode(word: GpsDataWord) -> Result<Self, GpsError> {
        let mut preamble = 0u32;
        for i in 0..8 {
            preamble = (preamble << 1) | word.bit(i) as u32;
        }

        if preamble != PREAMBLE {
            return Err(GpsError::InvalidPreamble);
        }

        let mut message = 0u16;
        for i in 0..14 {
            message = (message << 1) | word.bit(8 + i) as u16;
        }

        Ok(Self {
            message,
            integrity: word.bit(22),
            reserved_bit: word.bit(23),
        })
    }

    /// [GpsQzssTelemetry] encoding as a [GpsDataWord]
    pub(crate) fn encode(&self) -> GpsDataWord {
        let mut word = GpsDataWord::default();
        word.segment_set(0, PREAMBLE, 0, 7);
        word.segment_set(8, self.message as u32, 0, 13);
        word.set_bit(22, self.integrity);
        word.set_bit(23, self.reserved_bit);
        word
    }
}
