//! Configuration type definitions
//!
//! Everything is fixed at build time; there is no persisted configuration.

/// Screen width in pixels (landscape)
pub const SCREEN_WIDTH: u16 = 480;

/// Screen height in pixels (landscape)
pub const SCREEN_HEIGHT: u16 = 320;

/// Board the panel is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardVariant {
    /// DLC32 laser controller board
    #[default]
    Dlc32,
    /// Bare development board with the display on flying leads
    DevBoard,
}

impl BoardVariant {
    /// Display rotation in quarter turns
    pub fn rotation(self) -> u8 {
        match self {
            BoardVariant::Dlc32 => 1,
            BoardVariant::DevBoard => 3,
        }
    }

    /// Backlight is lit when the control pin is low
    pub fn backlight_active_low(self) -> bool {
        matches!(self, BoardVariant::Dlc32)
    }
}

/// Panel timing and geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Screen width in pixels
    pub width: u16,
    /// Screen height in pixels
    pub height: u16,
    /// Touch debounce window (ms)
    pub debounce_ms: u32,
    /// UI context period (ms)
    pub ui_period_ms: u64,
    /// Control context period (ms)
    pub control_period_ms: u64,
    /// Bounded wait when the command queue is full (ms)
    pub send_wait_ms: u64,
    /// How long the splash screen stays up (ms)
    pub splash_ms: u64,
    /// Mount reply timeout (ms)
    pub reply_timeout_ms: u64,
    /// Board wiring
    pub board: BoardVariant,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            debounce_ms: crate::ui::DEBOUNCE_MS,
            ui_period_ms: 50,
            control_period_ms: 500,
            send_wait_ms: 10,
            splash_ms: 5000,
            reply_timeout_ms: 100,
            board: BoardVariant::default(),
        }
    }
}
