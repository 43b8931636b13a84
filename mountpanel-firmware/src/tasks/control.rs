//! Control task
//!
//! Runs every control period:
//! 1. Drain the command queue into mount calls
//! 2. Publish status flags for the latched buttons
//! 3. Publish position and mount clock for the readouts
//!
//! Queries the mount firmware version once before the loop starts.

use defmt::*;
use embassy_time::{Duration, Ticker};

use mountpanel_core::command::CommandDispatcher;
use mountpanel_core::config::PanelConfig;
use mountpanel_core::coord::Position;
use mountpanel_core::traits::MountControl;

use crate::channels::{COMMANDS, POSITION, STATUS, VERSION};
use crate::mount::SerialMount;

/// Control task - drives the mount from queued commands
#[embassy_executor::task]
pub async fn control_task(mut mount: SerialMount, config: PanelConfig) {
    info!("Control task started");

    let version = mount.version().await;
    info!("Mount firmware version: {}", version.as_str());
    VERSION.signal(version);

    let mut dispatcher = CommandDispatcher::new();
    let mut ticker = Ticker::every(Duration::from_millis(config.control_period_ms));

    loop {
        ticker.next().await;

        let count = dispatcher
            .drain(&COMMANDS, &mut mount, |code, e| {
                warn!("Command {:?} failed: {:?}", code, e);
            })
            .await;
        if count > 0 {
            debug!("Dispatched {} commands", count);
        }

        publish_status(&mut mount, &dispatcher).await;
        publish_position(&mut mount).await;
    }
}

async fn publish_status(mount: &mut SerialMount, dispatcher: &CommandDispatcher) {
    let mut status = STATUS.load();
    match mount.status().await {
        Ok(mount_status) => {
            status.tracking = mount_status.tracking;
            status.slewing = mount_status.slewing;
        }
        Err(e) => debug!("Status query failed: {:?}", e),
    }
    status.fast_focus = dispatcher.is_fast_focus();
    STATUS.publish(status);
}

async fn publish_position(mount: &mut SerialMount) {
    match mount.position().await {
        Ok(angles) => {
            let stamp_s = POSITION.load().stamp_s;
            POSITION.publish(Position::from_radians(angles.ra_rad, angles.dec_rad, stamp_s));
        }
        Err(e) => debug!("Position query failed: {:?}", e),
    }

    match mount.local_time().await {
        Ok(seconds) => POSITION.publish_stamp(seconds),
        Err(e) => debug!("Local time query failed: {:?}", e),
    }
}
