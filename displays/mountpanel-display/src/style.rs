//! Palette, fonts and fixed screen positions

use embedded_graphics::mono_font::{iso_8859_1::FONT_10X20, MonoFont};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use mountpanel_core::traits::Readout;
use mountpanel_core::ui::Accent;

/// Screen background
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Readout and label text
pub const TEXT: Rgb565 = Rgb565::new(31, 45, 0);

/// Splash title
pub const TITLE: Rgb565 = Rgb565::WHITE;

/// Splash version line
pub const VERSION: Rgb565 = Rgb565::RED;

/// Font for everything; ISO 8859-1 so the degree sign is available
pub const FONT: &MonoFont<'static> = &FONT_10X20;

/// Baseline of the readout row
pub const READOUT_BASELINE: i32 = 25;

/// "R:" label, right edge
pub const RA_LABEL: Point = Point::new(35, READOUT_BASELINE);

/// "D:" label, right edge
pub const DEC_LABEL: Point = Point::new(210, READOUT_BASELINE);

/// Splash title, top-left
pub const SPLASH_TITLE: Point = Point::new(5, 50);

/// Splash version line, top-left
pub const SPLASH_VERSION: Point = Point::new(5, 200);

/// Corner radius of the buttons
pub const BUTTON_RADIUS: u32 = 8;

/// Button outline width
pub const BUTTON_STROKE: u32 = 2;

/// Fill color for a button accent
pub fn accent_color(accent: Accent) -> Rgb565 {
    match accent {
        Accent::Orange => TEXT,
        Accent::Red => Rgb565::RED,
        Accent::Green => Rgb565::GREEN,
        Accent::Blue => Rgb565::BLUE,
    }
}

/// Text anchor of a readout and whether it is right-aligned
pub fn readout_anchor(readout: Readout) -> (Point, bool) {
    match readout {
        Readout::RightAscension => (Point::new(40, READOUT_BASELINE), false),
        Readout::Declination => (Point::new(215, READOUT_BASELINE), false),
        Readout::Clock => (Point::new(478, READOUT_BASELINE), true),
    }
}

/// Area cleared before a readout is redrawn
pub fn readout_region(readout: Readout) -> Rectangle {
    let top = READOUT_BASELINE - FONT.baseline as i32 - 1;
    let height = FONT.character_size.height + 2;
    match readout {
        Readout::RightAscension => Rectangle::new(Point::new(40, top), Size::new(160, height)),
        Readout::Declination => Rectangle::new(Point::new(215, top), Size::new(160, height)),
        Readout::Clock => Rectangle::new(Point::new(388, top), Size::new(91, height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_regions_do_not_overlap() {
        let ra = readout_region(Readout::RightAscension);
        let dec = readout_region(Readout::Declination);
        let clock = readout_region(Readout::Clock);
        assert!(ra.intersection(&dec).is_zero_sized());
        assert!(dec.intersection(&clock).is_zero_sized());
    }

    #[test]
    fn test_readout_regions_fit_clock_text() {
        // "HH:MM:SS" right-aligned at x = 478
        let clock = readout_region(Readout::Clock);
        let width = 8 * FONT.character_size.width as i32;
        assert!(clock.top_left.x <= 478 - width);
        assert!(clock.top_left.x + clock.size.width as i32 <= 480);
    }

    #[test]
    fn test_accents_are_distinct() {
        let colors = [Accent::Orange, Accent::Red, Accent::Green, Accent::Blue].map(accent_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
