//! Values published by the control context for the UI context
//!
//! Each field is a single atomic word. The writer stores every field of a
//! fresh reading, the reader loads every field; nothing guarantees that a
//! reader sees all fields from the same tick. The values only feed the
//! display, so a reading that lags by one control tick is acceptable and no
//! lock is taken on either side.

use portable_atomic::{AtomicU32, AtomicU8, Ordering};

use super::codec::EncodedAngle;

/// Seconds-of-day stamp meaning "no clock reading yet"
pub const STAMP_UNDEFINED: u32 = u32::MAX;

/// One position reading as shown on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Right ascension (or azimuth), encoded as hours
    pub ra: EncodedAngle,
    /// Declination (or altitude), encoded as degrees
    pub dec: EncodedAngle,
    /// Mount wall-clock time, seconds since midnight
    pub stamp_s: u32,
}

impl Position {
    /// A reading with nothing observed yet
    pub const UNDEFINED: Self = Self {
        ra: EncodedAngle::UNDEFINED,
        dec: EncodedAngle::UNDEFINED,
        stamp_s: STAMP_UNDEFINED,
    };

    /// Build a reading from raw axis angles in radians
    pub fn from_radians(ra_rad: f64, dec_rad: f64, stamp_s: u32) -> Self {
        Self {
            ra: EncodedAngle::from_radians_as_hours(ra_rad),
            dec: EncodedAngle::from_radians_as_degrees(dec_rad),
            stamp_s,
        }
    }
}

/// Lock-free position hand-off from the control context to the UI context
pub struct PositionSnapshot {
    ra: AtomicU32,
    dec: AtomicU32,
    stamp_s: AtomicU32,
}

impl Default for PositionSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSnapshot {
    /// Create an empty snapshot
    pub const fn new() -> Self {
        Self {
            ra: AtomicU32::new(EncodedAngle::UNDEFINED.raw()),
            dec: AtomicU32::new(EncodedAngle::UNDEFINED.raw()),
            stamp_s: AtomicU32::new(STAMP_UNDEFINED),
        }
    }

    /// Store a fresh reading (control context)
    pub fn publish(&self, position: Position) {
        self.ra.store(position.ra.raw(), Ordering::Release);
        self.dec.store(position.dec.raw(), Ordering::Release);
        self.stamp_s.store(position.stamp_s, Ordering::Release);
    }

    /// Store only the clock stamp, keeping the last position
    pub fn publish_stamp(&self, stamp_s: u32) {
        self.stamp_s.store(stamp_s, Ordering::Release);
    }

    /// Load the latest reading (UI context)
    pub fn load(&self) -> Position {
        Position {
            ra: EncodedAngle::from_raw(self.ra.load(Ordering::Acquire)),
            dec: EncodedAngle::from_raw(self.dec.load(Ordering::Acquire)),
            stamp_s: self.stamp_s.load(Ordering::Acquire),
        }
    }
}

/// Boolean state mirrored onto the latched buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelStatus {
    pub tracking: bool,
    pub slewing: bool,
    pub fast_focus: bool,
}

const FLAG_TRACKING: u8 = 1 << 0;
const FLAG_SLEWING: u8 = 1 << 1;
const FLAG_FAST_FOCUS: u8 = 1 << 2;

impl PanelStatus {
    fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.tracking {
            bits |= FLAG_TRACKING;
        }
        if self.slewing {
            bits |= FLAG_SLEWING;
        }
        if self.fast_focus {
            bits |= FLAG_FAST_FOCUS;
        }
        bits
    }

    fn from_bits(bits: u8) -> Self {
        Self {
            tracking: bits & FLAG_TRACKING != 0,
            slewing: bits & FLAG_SLEWING != 0,
            fast_focus: bits & FLAG_FAST_FOCUS != 0,
        }
    }
}

/// Lock-free status hand-off; all three flags travel in one word
pub struct StatusSnapshot {
    bits: AtomicU8,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSnapshot {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(0),
        }
    }

    pub fn publish(&self, status: PanelStatus) {
        self.bits.store(status.to_bits(), Ordering::Release);
    }

    pub fn load(&self) -> PanelStatus {
        PanelStatus::from_bits(self.bits.load(Ordering::Acquire))
    }
}
