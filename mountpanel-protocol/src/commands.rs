//! Textual command vocabulary understood by the mount controller
//!
//! Every command is a short ASCII code. The code is framed for transport by
//! [`crate::frame::encode_command`]; the reply shape is fixed per command.

use crate::codes::Direction;

/// Shape of the reply a command produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplyKind {
    /// Nothing is sent back
    None,
    /// A single `0`/`1` digit without terminator
    Numeric,
    /// Text terminated by `#`
    Text,
}

/// Focuser move rate (`F1`..`F4`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FocuserRate {
    /// 1 µm steps
    #[default]
    Fine = 1,
    /// 10 µm steps
    Slow = 2,
    /// 100 µm steps
    Medium = 3,
    /// Half the goto rate
    Fast = 4,
}

impl FocuserRate {
    /// Rate selected by the "slow" speed setting
    pub const SLOW: FocuserRate = FocuserRate::Fine;
    /// Rate selected by the "fast" speed setting
    pub const FAST: FocuserRate = FocuserRate::Medium;

    /// Rate digit as used in the rate-select command
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// Rates from [`FocuserRate::FAST`] upwards count as fast
    pub fn is_fast(self) -> bool {
        self >= Self::FAST
    }

    /// Flip between the slow and the fast rate
    pub fn toggled(self) -> Self {
        if self.is_fast() {
            Self::SLOW
        } else {
            Self::FAST
        }
    }
}

/// Focuser travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FocusDirection {
    In,
    Out,
}

/// A command addressed to the mount controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MountCommand {
    /// `Mn`/`Ms`/`Me`/`Mw`
    Move(Direction),
    /// `Qn`/`Qs`/`Qe`/`Qw`
    Halt(Direction),
    /// `Q`
    StopAll,
    /// `Te` (true) / `Td` (false)
    SetTracking(bool),
    /// `F1`..`F4`
    FocuserRate(FocuserRate),
    /// `F+` / `F-`
    FocuserMove(FocusDirection),
    /// `FQ`
    FocuserStop,
    /// `GVN`, firmware version number
    Version,
    /// `GU`, status flags
    Status,
    /// `GR`, right ascension
    RightAscension,
    /// `GD`, declination
    Declination,
    /// `GL`, local time
    LocalTime,
}

impl MountCommand {
    /// Command code without framing
    pub fn code(&self) -> &'static str {
        match self {
            MountCommand::Move(Direction::North) => "Mn",
            MountCommand::Move(Direction::South) => "Ms",
            MountCommand::Move(Direction::East) => "Me",
            MountCommand::Move(Direction::West) => "Mw",
            MountCommand::Halt(Direction::North) => "Qn",
            MountCommand::Halt(Direction::South) => "Qs",
            MountCommand::Halt(Direction::East) => "Qe",
            MountCommand::Halt(Direction::West) => "Qw",
            MountCommand::StopAll => "Q",
            MountCommand::SetTracking(true) => "Te",
            MountCommand::SetTracking(false) => "Td",
            MountCommand::FocuserRate(FocuserRate::Fine) => "F1",
            MountCommand::FocuserRate(FocuserRate::Slow) => "F2",
            MountCommand::FocuserRate(FocuserRate::Medium) => "F3",
            MountCommand::FocuserRate(FocuserRate::Fast) => "F4",
            MountCommand::FocuserMove(FocusDirection::In) => "F+",
            MountCommand::FocuserMove(FocusDirection::Out) => "F-",
            MountCommand::FocuserStop => "FQ",
            MountCommand::Version => "GVN",
            MountCommand::Status => "GU",
            MountCommand::RightAscension => "GR",
            MountCommand::Declination => "GD",
            MountCommand::LocalTime => "GL",
        }
    }

    /// Reply produced by the controller for this command
    pub fn reply_kind(&self) -> ReplyKind {
        match self {
            MountCommand::SetTracking(_) => ReplyKind::Numeric,
            MountCommand::Version
            | MountCommand::Status
            | MountCommand::RightAscension
            | MountCommand::Declination
            | MountCommand::LocalTime => ReplyKind::Text,
            _ => ReplyKind::None,
        }
    }
}
