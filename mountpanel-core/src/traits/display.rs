//! Rendering collaborator traits
//!
//! The core decides *when* something is drawn and *what* it shows; pixels,
//! fonts and colors belong to the implementation.

use crate::ui::Button;

/// Text fields along the top of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Readout {
    /// Right ascension, `" HHhMM'"`
    RightAscension,
    /// Declination, `"-DD°MM' "`
    Declination,
    /// Mount clock, `HH:MM:SS`
    Clock,
}

/// Draws buttons
pub trait ButtonRenderer {
    type Error;

    /// Draw a button in its current state ([`Button::is_lit`])
    fn draw_button(&mut self, button: &Button) -> Result<(), Self::Error>;
}

/// Draws the rest of the panel
pub trait PanelRenderer: ButtonRenderer {
    /// Splash screen shown once at startup
    fn draw_splash(&mut self, version: &str) -> Result<(), Self::Error>;

    /// Clear the screen and draw static labels of the main screen
    fn draw_frame(&mut self) -> Result<(), Self::Error>;

    /// Replace the text of one readout
    fn draw_readout(&mut self, readout: Readout, text: &str) -> Result<(), Self::Error>;
}
