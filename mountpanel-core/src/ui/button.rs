//! Touch buttons
//!
//! Geometry and commands are fixed at construction; only the visual state
//! (pressed / on) changes afterwards.

use mountpanel_protocol::CommandCode;

/// Rectangle in screen pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point lies inside (right and bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }

    /// Center point, used to place labels
    pub fn center(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// How a button reacts to touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonKind {
    /// Drawn pressed only while held
    Momentary,
    /// Shows an on/off state that persists until set
    Latched,
}

/// Color family of a button's label and lit state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Accent {
    Orange,
    Red,
    Green,
    Blue,
}

/// Status flag a latched button mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusBinding {
    /// Mount is slewing
    Slewing,
    /// Mount is tracking
    Tracking,
    /// Focuser is at the fast rate
    FastFocus,
}

/// A rectangular touch target
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    label: &'static str,
    rect: Rect,
    kind: ButtonKind,
    accent: Accent,
    on_touch: CommandCode,
    on_release: CommandCode,
    binding: Option<StatusBinding>,
    pressed: bool,
    on: bool,
}

impl Button {
    /// Create a momentary button
    pub fn momentary(
        label: &'static str,
        rect: Rect,
        on_touch: CommandCode,
        on_release: CommandCode,
    ) -> Self {
        Self {
            label,
            rect,
            kind: ButtonKind::Momentary,
            accent: Accent::Orange,
            on_touch,
            on_release,
            binding: None,
            pressed: false,
            on: false,
        }
    }

    /// Create a latched button; releasing it does nothing
    pub fn latched(label: &'static str, rect: Rect, on_touch: CommandCode) -> Self {
        Self {
            kind: ButtonKind::Latched,
            ..Self::momentary(label, rect, on_touch, CommandCode::None)
        }
    }

    /// Set the accent color
    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    /// Mirror a status flag in the on/off state
    pub fn bound_to(mut self, binding: StatusBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn on_touch(&self) -> CommandCode {
        self.on_touch
    }

    pub fn on_release(&self) -> CommandCode {
        self.on_release
    }

    pub fn binding(&self) -> Option<StatusBinding> {
        self.binding
    }

    pub fn is_momentary(&self) -> bool {
        self.kind == ButtonKind::Momentary
    }

    /// Currently held by a touch
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Latched on/off state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Whether the button is drawn in its active look
    pub fn is_lit(&self) -> bool {
        match self.kind {
            ButtonKind::Momentary => self.pressed,
            ButtonKind::Latched => self.on,
        }
    }

    /// Check if a point is inside the button
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(x, y)
    }

    pub(crate) fn press(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true if the state changed
    pub(crate) fn set_on(&mut self, on: bool) -> bool {
        let changed = self.on != on;
        self.on = on;
        changed
    }
}
