//! [SatelliteInfo]: one broadcasting space vehicle's identity, cached C/A
//! code, and the navigation frame it is currently transmitting.

#[cfg(feature = "log")]
use log::trace;

use crate::gps::ca_code;
use crate::gps::constants::CA_CODE_LENGTH;
use crate::gps::subframe::{DataFrame, Subframe};
use crate::gps::GpsError;

/// Per-PRN state a signal synthesizer samples from: the cached 1023-chip
/// C/A code, the broadcast [`DataFrame`], and a two-entry cache of
/// parity-encoded subframes so nav-bit lookups during sample synthesis
/// are O(1) (spec: "two-entry parity-encoded subframe buffer").
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteInfo {
    prn: u8,
    ca_code: [bool; CA_CODE_LENGTH],
    frame: DataFrame,
    cache: [Option<(u8, Subframe)>; 2],
}

impl SatelliteInfo {
    /// Builds a [`SatelliteInfo`] for `prn` (1..=32), caching its C/A code.
    pub fn new(prn: u8) -> Result<Self, GpsError> {
        if !(1..=32).contains(&prn) {
            return Err(GpsError::InvalidPrn(prn));
        }

        Ok(Self {
            prn,
            ca_code: ca_code::generate(prn),
            frame: DataFrame::default(),
            cache: [None, None],
        })
    }

    /// This satellite's PRN (1..=32).
    pub fn prn(&self) -> u8 {
        self.prn
    }

    /// The cached 1023-chip C/A code.
    pub fn ca_code(&self) -> &[bool; CA_CODE_LENGTH] {
        &self.ca_code
    }

    /// The broadcast [`DataFrame`] this satellite currently carries.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Mutable access to the broadcast [`DataFrame`], e.g. to randomize
    /// parameters or advance time before calling [`SatelliteInfo::initialize`]
    /// or [`SatelliteInfo::parity_encoded_subframe`].
    pub fn frame_mut(&mut self) -> &mut DataFrame {
        &mut self.frame
    }

    /// Primes the two-entry cache with `first_subframe` and its successor,
    /// so synthesis can start mid-stream without a cache miss on the first
    /// nav-bit lookup.
    pub fn initialize(&mut self, first_subframe: u8) {
        let first = first_subframe % 5;
        let _ = self.parity_encoded_subframe(first);
        let _ = self.parity_encoded_subframe((first + 1) % 5);
    }

    /// Returns the parity-encoded subframe `sf` (0..5), re-encoding and
    /// rotating the two-entry cache on a miss.
    ///
    /// Rotation policy: of the two resident entries, the one that is the
    /// immediate predecessor of `sf` (i.e. `(resident + 1) % 5 == sf`) is
    /// kept; the other is evicted and replaced by the freshly encoded
    /// subframe.
    pub fn parity_encoded_subframe(&mut self, sf: u8) -> Subframe {
        let sf = sf % 5;

        for slot in self.cache.iter().flatten() {
            if slot.0 == sf {
                return slot.1;
            }
        }

        let predecessor = (sf + 4) % 5;
        let evict = match (self.cache[0], self.cache[1]) {
            (Some((n0, _)), Some((n1, _))) => {
                if n0 == predecessor {
                    1
                } else if n1 == predecessor {
                    0
                } else {
                    0
                }
            }
            (None, _) => 0,
            (Some(_), None) => 1,
        };

        #[cfg(feature = "log")]
        trace!("prn {}: subframe cache miss, encoding subframe {}", self.prn, sf);

        let encoded = self.frame.parity_frame(sf as usize);
        self.cache[evict] = Some((sf, encoded));
        encoded
    }

    /// The navigation bit at (subframe, bit) of the currently cached
    /// parity-encoded frame, re-encoding on a cache miss.
    pub fn nav_bit(&mut self, subframe: u8, bit: u16) -> bool {
        self.parity_encoded_subframe(subframe).bit(bit)
    }
}
