//! Fixed-point packing of angular values
//!
//! Layout of an encoded angle:
//! ```text
//! bit 31      : sign (1 = negative)
//! bits 16..30 : whole hours or degrees (15 bits)
//! bits 8..15  : minutes
//! bits 0..7   : seconds
//! ```
//!
//! The encoding is lossy. It exists so two readings can be compared with a
//! shift: the upper 24 bits change exactly when the displayed minutes do.

use core::f64::consts::PI;
use core::fmt::Write;

use heapless::String;

/// Bias added before truncation, half a second of the unit
pub const ROUNDING_BIAS: f64 = 0.000139;

const SIGN_BIT: u32 = 0x8000_0000;
const WHOLE_MASK: u32 = 0x7fff;

/// Capacity of a formatted readout
pub const READOUT_LEN: usize = 16;

/// An angle packed as sign/whole/minutes/seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodedAngle(u32);

impl EncodedAngle {
    /// Marker for "nothing observed yet"; never produced by [`EncodedAngle::encode`]
    /// for a finite angle below 32768 units.
    pub const UNDEFINED: Self = Self(u32::MAX);

    /// Encode a value in hours or degrees
    pub fn encode(value: f64) -> Self {
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value } + ROUNDING_BIAS;

        // Truncation is floor for non-negative values
        let whole = magnitude as u32;
        let minutes_f = (magnitude - whole as f64) * 60.0;
        let minutes = minutes_f as u32;
        let seconds = ((minutes_f - minutes as f64) * 60.0) as u32;

        let sign = if negative { SIGN_BIT } else { 0 };
        Self(sign | ((whole & WHOLE_MASK) << 16) | ((minutes & 0xff) << 8) | (seconds & 0xff))
    }

    /// Encode an angle in radians as hours (right ascension, hour angle)
    pub fn from_radians_as_hours(radians: f64) -> Self {
        Self::encode(radians * 12.0 / PI)
    }

    /// Encode an angle in radians as degrees (declination, altitude)
    pub fn from_radians_as_degrees(radians: f64) -> Self {
        Self::encode(radians * 180.0 / PI)
    }

    /// Wrap a raw encoding
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw encoding
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check for the undefined marker
    pub fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }

    pub fn is_negative(self) -> bool {
        self.0 & SIGN_BIT != 0
    }

    /// Whole hours or degrees
    pub fn whole(self) -> u16 {
        ((self.0 >> 16) & WHOLE_MASK) as u16
    }

    pub fn minutes(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn seconds(self) -> u8 {
        self.0 as u8
    }

    /// Sign, whole and minutes; the part shown on the panel
    pub fn minute_key(self) -> u32 {
        self.0 >> 8
    }

    /// True if both encodings display the same whole minute
    pub fn same_minute(self, other: Self) -> bool {
        self.minute_key() == other.minute_key()
    }

    fn sign_char(self) -> char {
        if self.is_negative() {
            '-'
        } else {
            ' '
        }
    }

    /// Format as an hours readout, e.g. `" 05h07'"`
    pub fn format_hours(self) -> String<READOUT_LEN> {
        let mut text = String::new();
        let _ = write!(
            text,
            "{}{:02}h{:02}'",
            self.sign_char(),
            self.whole(),
            self.minutes()
        );
        text
    }

    /// Format as a degrees readout, e.g. `"-12°07' "`
    pub fn format_degrees(self) -> String<READOUT_LEN> {
        let mut text = String::new();
        let _ = write!(
            text,
            "{}{}°{:02}' ",
            self.sign_char(),
            self.whole(),
            self.minutes()
        );
        text
    }
}

/// Format seconds since midnight as `HH:MM:SS`
pub fn format_clock(seconds_of_day: u32) -> String<READOUT_LEN> {
    let seconds = seconds_of_day % 86_400;
    let mut text = String::new();
    let _ = write!(
        text,
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    );
    text
}
