use crate::gps::GpsError;

/// Identifies which of the five LNAV subframes a [`crate::gps::GpsQzssHow`]
/// is handing off to, from the 3-bit subframe ID field.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum GpsQzssFrameId {
    #[default]
    /// Subframe 1: SV clock correction and health.
    Ephemeris1,

    /// Subframe 2: ephemeris, part A.
    Ephemeris2,

    /// Subframe 3: ephemeris, part B.
    Ephemeris3,

    /// Subframe 4: almanac pages 1-24, special messages, ionospheric/UTC.
    Page4,

    /// Subframe 5: almanac pages 1-24 and health.
    Page5,
}

#[cfg(feature = "std")]
impl std::fmt::Display for GpsQzssFrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ephemeris1 => write!(f, "Ephemeris-1"),
            Self::Ephemeris2 => write!(f, "Ephemeris-2"),
            Self::Ephemeris3 => write!(f, "Ephemeris-3"),
            Self::Page4 => write!(f, "Page-4"),
            Self::Page5 => write!(f, "Page-5"),
        }
    }
}

impl GpsQzssFrameId {
    /// [GpsQzssFrameId] decoding attempt from the 3-bit subframe ID mask.
    pub(crate) fn decode(mask: u8) -> Result<Self, GpsError> {
        match mask {
            1 => Ok(Self::Ephemeris1),
            2 => Ok(Self::Ephemeris2),
            3 => Ok(Self::Ephemeris3),
            4 => Ok(Self::Page4),
            5 => Ok(Self::Page5),
            _ => Err(GpsError::UnknownFrameType),
        }
    }

    /// Encodes as the 3-bit subframe ID mask.
    pub(crate) fn encode(&self) -> u8 {
        match self {
            Self::Ephemeris1 => 1,
            Self::Ephemeris2 => 2,
            Self::Ephemeris3 => 3,
            Self::Page4 => 4,
            Self::Page5 => 5,
        }
    }

    /// Subframe index (0-based) within a [`crate::gps::DataFrame`].
    pub fn subframe_index(&self) -> usize {
        self.encode() as usize - 1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_all_five() {
        for (mask, id) in [
            (1, GpsQzssFrameId::Ephemeris1),
            (2, GpsQzssFrameId::Ephemeris2),
            (3, GpsQzssFrameId::Ephemeris3),
            (4, GpsQzssFrameId::Page4),
            (5, GpsQzssFrameId::Page5),
        ] {
            assert_eq!(GpsQzssFrameId::decode(mask).unwrap(), id);
            assert_eq!(id.encode(), mask);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GpsQzssFrameId::decode(0).is_err());
        assert!(GpsQzssFrameId::decode(6).is_err());
    }

    #[test]
    fn subframe_index_is_zero_based() {
        assert_eq!(GpsQzssFrameId::Ephemeris1.subframe_index(), 0);
        assert_eq!(GpsQzssFrameId::Page5.subframe_index(), 4);
    }
}
