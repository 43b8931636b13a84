//! Command framing and reply parsing for the mount link.
//!
//! Command format: `:` CODE `#`, e.g. `:Mn#`.
//!
//! Reply format depends on the command (see [`ReplyKind`]):
//! - none: nothing is sent back
//! - numeric: a single `0` or `1`, no terminator
//! - text: ASCII text terminated by `#`

use heapless::String;

use crate::commands::{MountCommand, ReplyKind};
use crate::reply::{CommandReply, MAX_REPLY_LEN};

/// Command start byte
pub const FRAME_START: u8 = b':';

/// Command/reply terminator
pub const FRAME_END: u8 = b'#';

/// Degree sign some controllers send in declination replies
const LEGACY_DEGREE: u8 = 0xDF;

/// Longest command code
pub const MAX_CODE_LEN: usize = 4;

/// Maximum complete command frame size (START + CODE + END)
pub const MAX_FRAME_SIZE: usize = 1 + MAX_CODE_LEN + 1;

/// Errors that can occur during framing or reply parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Reply exceeded [`MAX_REPLY_LEN`] before its terminator
    ReplyTooLong,
    /// Non-ASCII byte in a reply
    InvalidByte,
    /// Numeric reply was not `0` or `1`
    InvalidNumeric,
}

/// Encode a command frame into a byte buffer
///
/// Returns the number of bytes written
pub fn encode_command(command: MountCommand, buffer: &mut [u8]) -> Result<usize, FrameError> {
    let code = command.code().as_bytes();
    let frame_len = code.len() + 2;
    if buffer.len() < frame_len {
        return Err(FrameError::BufferTooSmall);
    }

    buffer[0] = FRAME_START;
    buffer[1..1 + code.len()].copy_from_slice(code);
    buffer[1 + code.len()] = FRAME_END;

    Ok(frame_len)
}

/// Incremental reply parser for one command
#[derive(Debug, Clone)]
pub struct ReplyParser {
    kind: ReplyKind,
    buffer: String<MAX_REPLY_LEN>,
}

impl ReplyParser {
    /// Create a parser expecting the reply shape of `command`
    pub fn new(command: MountCommand) -> Self {
        Self::for_kind(command.reply_kind())
    }

    /// Create a parser for an explicit reply shape
    pub fn for_kind(kind: ReplyKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
        }
    }

    /// Whether any bytes need to be read at all
    pub fn expects_reply(&self) -> bool {
        self.kind != ReplyKind::None
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(reply))` when the reply is complete,
    /// `Ok(None)` when more bytes are needed, or `Err` on parse error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<CommandReply>, FrameError> {
        match self.kind {
            ReplyKind::None => Ok(Some(CommandReply::empty())),
            ReplyKind::Numeric => match byte {
                b'0' => Ok(Some(CommandReply::numeric(false))),
                b'1' => Ok(Some(CommandReply::numeric(true))),
                _ => Err(FrameError::InvalidNumeric),
            },
            ReplyKind::Text => {
                if byte == FRAME_END {
                    let reply = CommandReply::text(self.buffer.as_str());
                    self.reset();
                    return Ok(Some(reply));
                }
                let byte = if byte == LEGACY_DEGREE { b'*' } else { byte };
                if !byte.is_ascii() {
                    self.reset();
                    return Err(FrameError::InvalidByte);
                }
                if self.buffer.push(byte as char).is_err() {
                    self.reset();
                    return Err(FrameError::ReplyTooLong);
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete reply found, if any.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<CommandReply>, FrameError> {
        for &byte in bytes {
            if let Some(reply) = self.feed(byte)? {
                return Ok(Some(reply));
            }
        }
        Ok(None)
    }
}
