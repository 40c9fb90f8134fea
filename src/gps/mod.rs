//! GPS/QZSS L1 C/A: LNAV frame assembly, broadcast orbit evaluation, C/A
//! code generation, and signal/correlator synthesis.

mod bytes;
mod frame1;
mod frame2;
mod frame3;
mod frame4;
mod frame5;
mod frame_id;
mod how;
mod parity;
mod rotation;
mod scale;
mod tlm;
mod word;

pub mod ca_code;
pub mod clock;
pub mod constants;
pub mod correlator;
pub mod ephemeris;
pub mod errors;
pub mod rng;
pub mod satellite;
pub mod signal;
pub mod subframe;

pub use bytes::GpsDataByte;
pub use clock::ClockData;
pub use constants::*;
pub use correlator::Complex;
pub use ephemeris::Ephemeris;
pub use errors::GpsError;
pub use frame_id::GpsQzssFrameId;
pub use how::GpsQzssHow;
pub use rotation::GpsQzssFrameRotation;
pub use satellite::SatelliteInfo;
pub use signal::{
    gen_baseband_signal_with_data, gen_multi_signal, gen_signal_with_data, IqSample, SignalState,
};
pub use subframe::{DataFrame, Subframe};
pub use tlm::GpsQzssTelemetry;
pub use word::GpsDataWord;
