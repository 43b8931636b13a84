//! Serial link to the mount controller
//!
//! Commands go out as `:CODE#`. Replies are read only for commands that
//! produce one, and every read is bounded by the reply timeout.

use core::f64::consts::PI;

use defmt::*;
use embassy_rp::uart::BufferedUart;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::{Read, Write};

use mountpanel_core::traits::{AxisAngles, MountControl};
use mountpanel_protocol::frame::MAX_FRAME_SIZE;
use mountpanel_protocol::{
    encode_command, parse_degrees, parse_hours, parse_time_of_day, CommandError, CommandReply,
    MountCommand, MountStatus, ReplyParser,
};

/// Read chunk size
const RX_CHUNK: usize = 16;

/// How long to wait for stale bytes before sending a command
const FLUSH_WINDOW: Duration = Duration::from_millis(1);

/// LX200-style mount controller on a UART
pub struct SerialMount {
    uart: BufferedUart,
    reply_timeout: Duration,
}

impl SerialMount {
    /// Create a new mount link
    pub fn new(uart: BufferedUart, reply_timeout_ms: u64) -> Self {
        Self {
            uart,
            reply_timeout: Duration::from_millis(reply_timeout_ms),
        }
    }

    /// Discard bytes left over from a reply that timed out
    async fn flush_stale(&mut self) {
        let mut buf = [0u8; RX_CHUNK];
        while let Ok(Ok(n)) = with_timeout(FLUSH_WINDOW, self.uart.read(&mut buf)).await {
            if n == 0 {
                break;
            }
            trace!("Discarded {} stale bytes", n);
        }
    }

    async fn read_reply(&mut self, parser: &mut ReplyParser) -> CommandReply {
        let mut buf = [0u8; RX_CHUNK];
        loop {
            let n = match self.uart.read(&mut buf).await {
                Ok(n) => n,
                Err(e) => {
                    warn!("Mount UART read error: {:?}", e);
                    return CommandReply::failed(CommandError::Link);
                }
            };
            match parser.feed_bytes(&buf[..n]) {
                Ok(Some(reply)) => return reply,
                Ok(None) => {}
                Err(e) => {
                    warn!("Unparsable mount reply: {:?}", e);
                    return CommandReply::failed(e.into());
                }
            }
        }
    }

    /// Send a text query and return its reply
    async fn query(&mut self, command: MountCommand) -> Result<CommandReply, CommandError> {
        let reply = self.command(command).await;
        match reply.error {
            None => Ok(reply),
            Some(e) => Err(e),
        }
    }
}

impl MountControl for SerialMount {
    async fn command(&mut self, command: MountCommand) -> CommandReply {
        let mut frame = [0u8; MAX_FRAME_SIZE];
        let len = match encode_command(command, &mut frame) {
            Ok(len) => len,
            Err(e) => return CommandReply::failed(e.into()),
        };

        self.flush_stale().await;
        trace!("Mount <- {}", command.code());
        if let Err(e) = self.uart.write_all(&frame[..len]).await {
            warn!("Mount UART write error: {:?}", e);
            return CommandReply::failed(CommandError::Link);
        }

        let mut parser = ReplyParser::new(command);
        if !parser.expects_reply() {
            return CommandReply::empty();
        }

        match with_timeout(self.reply_timeout, self.read_reply(&mut parser)).await {
            Ok(reply) => reply,
            Err(_) => {
                warn!("Mount reply timeout for {}", command.code());
                CommandReply::failed(CommandError::ReplyTimeout)
            }
        }
    }

    async fn status(&mut self) -> Result<MountStatus, CommandError> {
        let reply = self.query(MountCommand::Status).await?;
        Ok(MountStatus::from_reply(reply.as_str()))
    }

    async fn position(&mut self) -> Result<AxisAngles, CommandError> {
        let ra = self.query(MountCommand::RightAscension).await?;
        let ra_hours = parse_hours(ra.as_str())?;
        let dec = self.query(MountCommand::Declination).await?;
        let dec_degrees = parse_degrees(dec.as_str())?;

        Ok(AxisAngles {
            ra_rad: ra_hours * PI / 12.0,
            dec_rad: dec_degrees * PI / 180.0,
        })
    }

    async fn local_time(&mut self) -> Result<u32, CommandError> {
        let reply = self.query(MountCommand::LocalTime).await?;
        Ok(parse_time_of_day(reply.as_str())?)
    }
}
