//! Mount panel command protocol
//!
//! This crate defines what the touch panel can ask of the mount controller:
//! the discrete panel actions ([`CommandCode`]), the short textual commands
//! they become ([`MountCommand`]), and how those commands and their replies
//! look on the serial link.
//!
//! # Framing
//!
//! ```text
//! command:  ':' CODE '#'          e.g. ":Mn#"  ":F3#"  ":GU#"
//! reply:    (none) | '0'/'1' | TEXT '#'
//! ```
//!
//! The panel never interprets the controller's internals. It sends a command,
//! optionally reads one reply and moves on.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod codes;
pub mod commands;
pub mod frame;
pub mod reply;
pub mod sexagesimal;
pub mod status;

pub use codes::{CommandCode, Direction};
pub use commands::{FocusDirection, FocuserRate, MountCommand, ReplyKind};
pub use frame::{encode_command, FrameError, ReplyParser, FRAME_END, FRAME_START};
pub use reply::{CommandError, CommandReply, MAX_REPLY_LEN};
pub use sexagesimal::{parse_degrees, parse_hours, parse_time_of_day, ParseError};
pub use status::MountStatus;
