//! Redraw decisions for the coordinate and clock readouts

use super::codec::EncodedAngle;
use super::snapshot::{Position, STAMP_UNDEFINED};

/// What the UI last drew for each readout
///
/// Starts undefined so the first defined reading is always drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadoutCache {
    ra: EncodedAngle,
    dec: EncodedAngle,
    stamp_s: u32,
}

impl Default for ReadoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadoutCache {
    pub const fn new() -> Self {
        Self {
            ra: EncodedAngle::UNDEFINED,
            dec: EncodedAngle::UNDEFINED,
            stamp_s: STAMP_UNDEFINED,
        }
    }

    /// Forget everything drawn; used after the screen is cleared
    pub fn invalidate(&mut self) {
        *self = Self::new();
    }

    /// Right ascension needs a redraw (whole minutes differ)
    pub fn ra_changed(&self, position: &Position) -> bool {
        !position.ra.same_minute(self.ra)
    }

    /// Declination needs a redraw (whole minutes differ)
    pub fn dec_changed(&self, position: &Position) -> bool {
        !position.dec.same_minute(self.dec)
    }

    /// Clock needs a redraw (stamp differs)
    pub fn clock_changed(&self, position: &Position) -> bool {
        position.stamp_s != self.stamp_s
    }

    /// Record that right ascension was drawn
    pub fn mark_ra(&mut self, ra: EncodedAngle) {
        self.ra = ra;
    }

    /// Record that declination was drawn
    pub fn mark_dec(&mut self, dec: EncodedAngle) {
        self.dec = dec;
    }

    /// Record that the clock was drawn
    pub fn mark_clock(&mut self, stamp_s: u32) {
        self.stamp_s = stamp_s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(ra_h: f64, dec_d: f64, stamp_s: u32) -> Position {
        Position {
            ra: EncodedAngle::encode(ra_h),
            dec: EncodedAngle::encode(dec_d),
            stamp_s,
        }
    }

    #[test]
    fn test_first_reading_draws() {
        let cache = ReadoutCache::new();
        let p = position(1.0, 2.0, 0);
        assert!(cache.ra_changed(&p));
        assert!(cache.dec_changed(&p));
        assert!(cache.clock_changed(&p));
    }

    #[test]
    fn test_undefined_reading_does_not_draw() {
        let cache = ReadoutCache::new();
        let p = Position::UNDEFINED;
        assert!(!cache.ra_changed(&p));
        assert!(!cache.dec_changed(&p));
        assert!(!cache.clock_changed(&p));
    }

    #[test]
    fn test_seconds_only_change_skips_redraw() {
        let mut cache = ReadoutCache::new();
        let first = position(3.0 + 10.0 / 60.0 + 5.0 / 3600.0, 40.0, 100);
        cache.mark_ra(first.ra);
        cache.mark_dec(first.dec);

        let later = position(3.0 + 10.0 / 60.0 + 50.0 / 3600.0, 40.0 + 30.0 / 3600.0, 101);
        assert!(!cache.ra_changed(&later));
        assert!(!cache.dec_changed(&later));
    }

    #[test]
    fn test_minute_change_redraws() {
        let mut cache = ReadoutCache::new();
        let first = position(3.0 + 10.0 / 60.0, 40.0, 100);
        cache.mark_ra(first.ra);
        cache.mark_dec(first.dec);
        cache.mark_clock(first.stamp_s);

        let later = position(3.0 + 11.0 / 60.0, 40.0, 100);
        assert!(cache.ra_changed(&later));
        assert!(!cache.dec_changed(&later));
        assert!(!cache.clock_changed(&later));
    }

    #[test]
    fn test_invalidate_forces_redraw() {
        let mut cache = ReadoutCache::new();
        let p = position(1.0, 2.0, 3);
        cache.mark_ra(p.ra);
        cache.mark_dec(p.dec);
        cache.mark_clock(p.stamp_s);
        assert!(!cache.ra_changed(&p));

        cache.invalidate();
        assert!(cache.ra_changed(&p));
        assert!(cache.dec_changed(&p));
        assert!(cache.clock_changed(&p));
    }
}
