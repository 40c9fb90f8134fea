//! Numeric constants from IS-GPS-200 and WGS-84, shared by the orbit
//! evaluator, the C/A code generator and the signal synthesizer.

/// Speed of light in vacuum (m/s).
pub const LIGHT_SPEED: f64 = 299_792_458.0;

/// PI at the precision IS-GPS-200 mandates for ephemeris calculations.
pub const PI: f64 = 3.1415926535898;

pub const TWO_PI: f64 = 2.0 * PI;

pub const L1_FREQUENCY_HZ: f64 = 1.575_42e9;
pub const L2_FREQUENCY_HZ: f64 = 1.227_60e9;
pub const L5_FREQUENCY_HZ: f64 = 1.176_45e9;

/// C/A code chipping rate (chips/s).
pub const CA_CHIP_RATE_HZ: f64 = 1.023e6;
pub const P_CHIP_RATE_HZ: f64 = 10.23e6;
pub const M_CHIP_RATE_HZ: f64 = 5.115e6;
pub const L5_CHIP_RATE_HZ: f64 = 10.23e6;

/// Navigation data bit rate (bit/s) and period (s).
pub const DATA_BIT_RATE_HZ: f64 = 50.0;
pub const DATA_BIT_PERIOD_S: f64 = 0.02;

/// Number of chips in one C/A code period.
pub const CA_CODE_LENGTH: usize = 1023;

/// WGS-84 second zonal harmonic of the geopotential.
pub const WGS84_J2: f64 = 0.001_082_626_2;

/// Relativistic correction coefficient `F` (s / sqrt(m)).
pub const RELATIVISTIC_F: f64 = -4.442_807_633e-10;

/// WGS-84 earth's gravitational constant (m^3/s^2).
pub const WGS84_MU: f64 = 3.986_005e14;

/// WGS-84 earth rotation rate (rad/s).
pub const WGS84_EARTH_RATE: f64 = 7.292_115_146_7e-5;

/// WGS-84 equatorial radius (m).
pub const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Seconds in a GPS week, used for the half-week rollover correction.
pub const SECONDS_PER_WEEK: f64 = 604_800.0;
pub const HALF_WEEK_SECONDS: f64 = 302_400.0;

/// TOW count wraps every subframe at this many 1.5s counts (403200 * 1.5s = 1 week).
pub const TOW_COUNT_WRAP: u32 = 403_200;
