//! Discrete panel actions carried from the UI context to the control context

/// Compass direction of a guide move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in panel order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Lowercase direction letter used by the guide commands
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }
}

/// A single panel action
///
/// Produced by button presses and releases, queued by value and
/// consumed exactly once by the command dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandCode {
    /// No action; never queued
    #[default]
    None,
    /// Start guiding in a direction
    Move(Direction),
    /// Stop guiding in a direction
    Halt(Direction),
    /// Move the focuser inwards at the current rate
    FocusIn,
    /// Move the focuser outwards at the current rate
    FocusOut,
    /// Stop the focuser
    FocusStop,
    /// Stop all mount motion
    StopAll,
    /// Flip sidereal tracking on/off
    ToggleTracking,
    /// Flip the focuser rate between slow and fast
    ToggleFocusSpeed,
}

impl CommandCode {
    /// Returns true for the no-op code
    pub fn is_none(&self) -> bool {
        matches!(self, CommandCode::None)
    }
}
