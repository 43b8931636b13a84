//! Inter-task communication
//!
//! The UI task and the control task share only these statics:
//! - `COMMANDS`: command codes, UI to control, drop-on-full
//! - `POSITION` / `STATUS`: lock-free snapshots, control to UI
//! - `VERSION`: mount firmware version, sent once at startup

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use heapless::String;

use mountpanel_core::command::{CommandChannel, COMMAND_QUEUE_DEPTH};
use mountpanel_core::coord::{PositionSnapshot, StatusSnapshot};
use mountpanel_protocol::{CommandCode, MAX_REPLY_LEN};

/// Commands from touch buttons, drained by the control task
pub static COMMANDS: CommandChannel<CriticalSectionRawMutex, COMMAND_QUEUE_DEPTH> =
    CommandChannel::new();

/// Last mount position and clock
pub static POSITION: PositionSnapshot = PositionSnapshot::new();

/// Tracking / slewing / focus speed flags
pub static STATUS: StatusSnapshot = StatusSnapshot::new();

/// Mount firmware version for the splash screen
pub static VERSION: Signal<CriticalSectionRawMutex, String<MAX_REPLY_LEN>> = Signal::new();

/// Queue a command, waiting at most `wait_ms` for room
///
/// Returns `false` if the command was dropped.
pub async fn send_command(code: CommandCode, wait_ms: u64) -> bool {
    COMMANDS
        .send_within(code, Timer::after_millis(wait_ms))
        .await
}
