use thiserror::Error;

/// Recoverable failures surfaced by the GPS LNAV/signal-synthesis API.
///
/// Programmer errors (an out-of-range bit position, an unsupported PRN, a
/// subframe id outside 1..=5, mismatched correlator container lengths) are
/// `debug_assert!` aborts at the call site instead, since they indicate a
/// bug in the caller rather than a condition a caller should recover from.
#[derive(Debug, Error)]
pub enum GpsError {
    /// The decoded TLM preamble did not match `0x8B`.
    #[error("invalid GPS preamble")]
    InvalidPreamble,

    /// Frame/subframe type is either invalid or not supported.
    #[error("unknown or unsupported frame type")]
    UnknownFrameType,

    /// Destination buffer is too small to receive an encoded data frame.
    #[error("buffer too small to encode data frame")]
    WouldNotFit,

    /// PRN is outside the GPS L1 C/A allocation (1..=32).
    #[error("invalid PRN: {0}")]
    InvalidPrn(u8),

    /// Subframe id is outside 1..=5.
    #[error("invalid subframe id: {0}")]
    InvalidSubframeId(u8),

    /// Kepler's equation failed to converge within the iteration cap.
    #[error("Kepler solver did not converge within {0} iterations")]
    KeplerNonConvergence(u32),
}
