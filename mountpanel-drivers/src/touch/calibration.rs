//! Raw touch reading to screen coordinate mapping
//!
//! Affine transform:
//!
//! ```text
//! x = alpha_x * raw_x + beta_x * raw_y + delta_x
//! y = alpha_y * raw_x + beta_y * raw_y + delta_y
//! ```
//!
//! The cross terms carry display rotation, so one set of factors covers
//! every orientation.

/// Raw reading at the top-left edge of the panel glass
pub const DEFAULT_RAW_MIN: u16 = 200;

/// Raw reading at the bottom-right edge of the panel glass
pub const DEFAULT_RAW_MAX: u16 = 3900;

/// Affine calibration factors
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub alpha_x: f32,
    pub beta_x: f32,
    pub delta_x: f32,
    pub alpha_y: f32,
    pub beta_y: f32,
    pub delta_y: f32,
    width: u16,
    height: u16,
}

impl Calibration {
    /// Build factors from the raw range seen across the glass
    ///
    /// `rotation` is in quarter turns, matching the display rotation.
    pub fn from_raw_range(raw_min: u16, raw_max: u16, width: u16, height: u16, rotation: u8) -> Self {
        let min = raw_min as f32;
        let max = raw_max as f32;
        let span = (max - min).max(1.0);
        let sx = width as f32 / span;
        let sy = height as f32 / span;

        let (alpha_x, beta_x, delta_x, alpha_y, beta_y, delta_y) = match rotation % 4 {
            0 => (sx, 0.0, -min * sx, 0.0, sy, -min * sy),
            1 => (0.0, sx, -min * sx, -sy, 0.0, max * sy),
            2 => (-sx, 0.0, max * sx, 0.0, -sy, max * sy),
            _ => (0.0, -sx, max * sx, sy, 0.0, -min * sy),
        };

        Self {
            alpha_x,
            beta_x,
            delta_x,
            alpha_y,
            beta_y,
            delta_y,
            width,
            height,
        }
    }

    /// Default factors for a panel of the given size
    pub fn for_screen(width: u16, height: u16, rotation: u8) -> Self {
        Self::from_raw_range(DEFAULT_RAW_MIN, DEFAULT_RAW_MAX, width, height, rotation)
    }

    /// Map a raw reading to a screen point, clamped to the screen
    pub fn apply(&self, raw_x: u16, raw_y: u16) -> (u16, u16) {
        let rx = raw_x as f32;
        let ry = raw_y as f32;
        let x = self.alpha_x * rx + self.beta_x * ry + self.delta_x;
        let y = self.alpha_y * rx + self.beta_y * ry + self.delta_y;
        (
            clamp(x, self.width),
            clamp(y, self.height),
        )
    }
}

fn clamp(value: f32, extent: u16) -> u16 {
    let max = extent.saturating_sub(1) as i32;
    (value as i32).clamp(0, max) as u16
}
