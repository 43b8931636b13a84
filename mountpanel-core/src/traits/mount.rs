//! Mount controller collaborator trait

use heapless::String;
use mountpanel_protocol::{CommandError, CommandReply, MountCommand, MountStatus, MAX_REPLY_LEN};

/// Shown when the controller does not report a version
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Raw axis angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisAngles {
    /// Right ascension / azimuth axis
    pub ra_rad: f64,
    /// Declination / altitude axis
    pub dec_rad: f64,
}

/// Interface to the motion-control subsystem
///
/// Commands are fire-and-forget: the reply is returned, but callers only
/// act on the boolean queries.
#[allow(async_fn_in_trait)]
pub trait MountControl {
    /// Issue one command and collect its reply
    async fn command(&mut self, command: MountCommand) -> CommandReply;

    /// Current tracking/slewing state
    async fn status(&mut self) -> Result<MountStatus, CommandError>;

    /// Current axis position
    async fn position(&mut self) -> Result<AxisAngles, CommandError>;

    /// Mount local time, seconds since midnight
    async fn local_time(&mut self) -> Result<u32, CommandError>;

    async fn is_tracking(&mut self) -> Result<bool, CommandError> {
        self.status().await.map(|s| s.tracking)
    }

    /// Firmware version, or [`UNKNOWN_VERSION`]
    async fn version(&mut self) -> String<MAX_REPLY_LEN> {
        let reply = self.command(MountCommand::Version).await;
        let mut version = String::new();
        if reply.is_ok() && !reply.as_str().is_empty() {
            let _ = version.push_str(reply.as_str());
        } else {
            let _ = version.push_str(UNKNOWN_VERSION);
        }
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    /// Answers the version query with a fixed reply
    struct VersionMount {
        reply: CommandReply,
    }

    impl MountControl for VersionMount {
        async fn command(&mut self, command: MountCommand) -> CommandReply {
            assert_eq!(command, MountCommand::Version);
            self.reply.clone()
        }

        async fn status(&mut self) -> Result<MountStatus, CommandError> {
            Err(CommandError::Link)
        }

        async fn position(&mut self) -> Result<AxisAngles, CommandError> {
            Err(CommandError::Link)
        }

        async fn local_time(&mut self) -> Result<u32, CommandError> {
            Err(CommandError::Link)
        }
    }

    fn version_for(reply: CommandReply) -> String<MAX_REPLY_LEN> {
        block_on(VersionMount { reply }.version())
    }

    #[test]
    fn test_version_reported() {
        assert_eq!(version_for(CommandReply::text("10.24c")).as_str(), "10.24c");
    }

    #[test]
    fn test_empty_version_is_unknown() {
        assert_eq!(version_for(CommandReply::text("")).as_str(), UNKNOWN_VERSION);
        assert_eq!(version_for(CommandReply::empty()).as_str(), "Unknown");
    }

    #[test]
    fn test_failed_version_is_unknown() {
        let reply = CommandReply::failed(CommandError::ReplyTimeout);
        assert_eq!(version_for(reply).as_str(), UNKNOWN_VERSION);
    }
}
