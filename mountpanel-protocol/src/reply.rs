//! Command results returned by the mount controller

use heapless::String;

use crate::frame::FrameError;
use crate::sexagesimal::ParseError;

/// Maximum reply text kept (longer replies are rejected by the parser)
pub const MAX_REPLY_LEN: usize = 32;

/// Reasons a command did not complete cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Controller rejected or did not recognise the command
    Unknown,
    /// No reply arrived in time
    ReplyTimeout,
    /// Reply arrived but could not be interpreted
    ReplyUnknown,
    /// Reply parameter was malformed
    ParamForm,
    /// Transport failure on the link
    Link,
}

/// Result of one control-subsystem call
///
/// Callers treat `error == None` as success. The reply is kept as text;
/// numeric replies are a single digit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandReply {
    /// Reply text without framing
    pub text: String<MAX_REPLY_LEN>,
    /// Reply is sent without `#` terminator
    pub suppress_frame: bool,
    /// Reply is a `0`/`1` digit
    pub numeric_reply: bool,
    /// Failure, if any
    pub error: Option<CommandError>,
}

impl CommandReply {
    /// Successful call with no reply
    pub fn empty() -> Self {
        Self::default()
    }

    /// Successful call with a text reply
    ///
    /// Text longer than [`MAX_REPLY_LEN`] is reported as [`CommandError::ReplyUnknown`].
    pub fn text(text: &str) -> Self {
        let mut reply = Self::default();
        if reply.text.push_str(text).is_err() {
            reply.text.clear();
            reply.error = Some(CommandError::ReplyUnknown);
        }
        reply
    }

    /// Successful call with a numeric `0`/`1` reply
    pub fn numeric(value: bool) -> Self {
        let mut reply = Self::default();
        let _ = reply.text.push(if value { '1' } else { '0' });
        reply.suppress_frame = true;
        reply.numeric_reply = true;
        reply
    }

    /// Failed call
    pub fn failed(error: CommandError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// True if the controller reported no error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Reply text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Interpret a numeric reply as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        if !self.is_ok() {
            return None;
        }
        match self.text.as_str() {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }
}

impl From<FrameError> for CommandError {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::BufferTooSmall => CommandError::Unknown,
            FrameError::ReplyTooLong | FrameError::InvalidByte | FrameError::InvalidNumeric => {
                CommandError::ReplyUnknown
            }
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(_: ParseError) -> Self {
        CommandError::ParamForm
    }
}
