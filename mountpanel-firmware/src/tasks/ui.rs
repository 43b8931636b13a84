//! UI task
//!
//! Shows the splash screen once the mount version is known, then every UI
//! period samples the touch controller, queues the resulting commands and
//! redraws whatever the control task changed.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker, Timer};

use mountpanel_core::config::PanelConfig;
use mountpanel_core::layout::default_layout;
use mountpanel_core::traits::TouchInput;
use mountpanel_core::ui::{TouchPanel, TouchSample};

use crate::board::{PanelDisplay, PanelTouch};
use crate::channels::{send_command, POSITION, STATUS, VERSION};

/// UI task - touch input and screen updates
#[embassy_executor::task]
pub async fn ui_task(mut display: PanelDisplay, mut touch: PanelTouch, config: PanelConfig) {
    info!("UI task started");

    let registry = match default_layout() {
        Ok(registry) => registry,
        Err(e) => {
            error!("Button layout does not fit: {:?}", e);
            return;
        }
    };
    let mut panel = TouchPanel::new(registry, &config);

    let version = VERSION.wait().await;
    if panel.draw_splash(&version, &mut display).is_err() {
        warn!("Splash screen draw failed");
    }
    Timer::after_millis(config.splash_ms).await;

    if panel.draw_main(&mut display).is_err() {
        warn!("Main screen draw failed");
    }

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(config.ui_period_ms));

    loop {
        ticker.next().await;
        let now_ms = start.elapsed().as_millis() as u32;

        let sample = match touch.sample() {
            Ok(sample) => sample,
            Err(_) => {
                warn!("Touch controller read failed");
                TouchSample::Released
            }
        };

        let output = panel.handle_sample(sample, now_ms, &mut display);
        if output.render_error.is_some() {
            warn!("Button redraw failed");
        }
        for code in output.commands {
            trace!("Touch -> {:?}", code);
            if !send_command(code, config.send_wait_ms).await {
                warn!("Command queue full, dropping {:?}", code);
            }
        }

        if panel
            .refresh(&POSITION.load(), STATUS.load(), &mut display)
            .is_err()
        {
            warn!("Readout redraw failed");
        }
    }
}
