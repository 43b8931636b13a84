//! UI context state: buttons, touch machine and readout cache
//!
//! [`TouchPanel`] applies the classifier's events: pressed state, momentary
//! redraws and the commands to queue. It also decides which readouts and
//! status buttons need redrawing on each tick.

use heapless::Vec;
use mountpanel_protocol::CommandCode;

use super::button::StatusBinding;
use super::registry::{ButtonId, ButtonRegistry};
use super::touch::{TouchClassifier, TouchEvent, TouchSample};
use crate::config::PanelConfig;
use crate::coord::{format_clock, PanelStatus, Position, ReadoutCache};
use crate::traits::{ButtonRenderer, PanelRenderer, Readout};

/// Commands produced by one touch sample
pub type TouchCommands = Vec<CommandCode, 2>;

/// Result of one touch sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchOutput<E> {
    /// Codes to queue, in order; never contains [`CommandCode::None`]
    pub commands: TouchCommands,
    /// First render error, if a redraw failed
    pub render_error: Option<E>,
}

impl<E> TouchOutput<E> {
    fn new() -> Self {
        Self {
            commands: TouchCommands::new(),
            render_error: None,
        }
    }

    fn queue(&mut self, code: CommandCode) {
        if !code.is_none() {
            let _ = self.commands.push(code);
        }
    }

    fn record<T>(&mut self, result: Result<T, E>) {
        if let Err(e) = result {
            self.render_error.get_or_insert(e);
        }
    }
}

/// Touch panel owned by the UI context
#[derive(Debug, Clone)]
pub struct TouchPanel {
    registry: ButtonRegistry,
    touch: TouchClassifier,
    readouts: ReadoutCache,
}

impl TouchPanel {
    /// Create a panel from a populated registry
    pub fn new(registry: ButtonRegistry, config: &PanelConfig) -> Self {
        Self {
            registry,
            touch: TouchClassifier::new(config.width, config.height, config.debounce_ms),
            readouts: ReadoutCache::new(),
        }
    }

    pub fn registry(&self) -> &ButtonRegistry {
        &self.registry
    }

    pub fn classifier(&self) -> &TouchClassifier {
        &self.touch
    }

    /// Process one touch sample
    ///
    /// Commands are returned even when a redraw fails.
    pub fn handle_sample<R: ButtonRenderer>(
        &mut self,
        sample: TouchSample,
        now_ms: u32,
        renderer: &mut R,
    ) -> TouchOutput<R::Error> {
        let mut output = TouchOutput::new();

        for event in self.touch.step(&self.registry, sample, now_ms) {
            let (id, pressed) = match event {
                TouchEvent::Pressed(id) => (id, true),
                TouchEvent::Released(id) => (id, false),
            };
            let Some(button) = self.registry.get(id) else {
                continue;
            };
            let code = if pressed {
                button.on_touch()
            } else {
                button.on_release()
            };
            let momentary = button.is_momentary();

            self.registry.set_pressed(id, pressed);
            if momentary {
                output.record(self.registry.draw(id, renderer));
            }
            output.queue(code);
        }

        output
    }

    /// Show the splash screen
    pub fn draw_splash<R: PanelRenderer>(
        &mut self,
        version: &str,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        renderer.draw_splash(version)
    }

    /// Draw the main screen from scratch
    ///
    /// Readouts are redrawn on the next [`refresh`](Self::refresh).
    pub fn draw_main<R: PanelRenderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        self.readouts.invalidate();
        renderer.draw_frame()?;
        self.registry.draw_all(renderer)
    }

    /// Redraw whatever changed since the last tick
    ///
    /// A failed draw does not stop the others; the first error is returned
    /// and the failed item is retried on the next call.
    pub fn refresh<R: PanelRenderer>(
        &mut self,
        position: &Position,
        status: PanelStatus,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        let mut first_error = None;

        if self.readouts.ra_changed(position) {
            match renderer.draw_readout(Readout::RightAscension, &position.ra.format_hours()) {
                Ok(()) => self.readouts.mark_ra(position.ra),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        if self.readouts.dec_changed(position) {
            match renderer.draw_readout(Readout::Declination, &position.dec.format_degrees()) {
                Ok(()) => self.readouts.mark_dec(position.dec),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        if self.readouts.clock_changed(position) {
            match renderer.draw_readout(Readout::Clock, &format_clock(position.stamp_s)) {
                Ok(()) => self.readouts.mark_clock(position.stamp_s),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        self.sync_status(status, renderer, &mut first_error);

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn sync_status<R: ButtonRenderer>(
        &mut self,
        status: PanelStatus,
        renderer: &mut R,
        first_error: &mut Option<R::Error>,
    ) {
        let mut bound: Vec<(ButtonId, bool), { super::MAX_BUTTONS }> = Vec::new();
        for (id, button) in self.registry.iter() {
            let on = match button.binding() {
                Some(StatusBinding::Slewing) => status.slewing,
                Some(StatusBinding::Tracking) => status.tracking,
                Some(StatusBinding::FastFocus) => status.fast_focus,
                None => continue,
            };
            let _ = bound.push((id, on));
        }

        for (id, on) in bound {
            if let Err(e) = self.registry.set(id, on, renderer) {
                first_error.get_or_insert(e);
            }
        }
    }
}
