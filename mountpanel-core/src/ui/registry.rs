//! Button registry
//!
//! Owns every button of the panel. Registration order is hit-test priority:
//! the first button containing a point wins.

use heapless::Vec;

use super::button::Button;
use crate::traits::ButtonRenderer;

/// Maximum number of buttons on one panel
pub const MAX_BUTTONS: usize = 16;

/// Handle to a registered button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(u8);

impl ButtonId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors from registering buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// [`MAX_BUTTONS`] already registered
    Full,
}

/// Ordered set of panel buttons
#[derive(Debug, Clone, Default)]
pub struct ButtonRegistry {
    buttons: Vec<Button, MAX_BUTTONS>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }

    /// Add a button; it is hit-tested after all earlier ones
    pub fn register(&mut self, button: Button) -> Result<ButtonId, RegistryError> {
        let id = ButtonId(self.buttons.len() as u8);
        self.buttons.push(button).map_err(|_| RegistryError::Full)?;
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.get(id.index())
    }

    /// Iterate buttons in registration order
    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, &Button)> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, b)| (ButtonId(i as u8), b))
    }

    /// Find a button by its label
    pub fn find(&self, label: &str) -> Option<ButtonId> {
        self.iter().find(|(_, b)| b.label() == label).map(|(id, _)| id)
    }

    /// First button containing the point
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ButtonId> {
        self.iter().find(|(_, b)| b.contains(x, y)).map(|(id, _)| id)
    }

    /// Check if a specific button contains the point
    pub fn contains(&self, id: ButtonId, x: u16, y: u16) -> bool {
        self.get(id).is_some_and(|b| b.contains(x, y))
    }

    pub(crate) fn set_pressed(&mut self, id: ButtonId, pressed: bool) {
        if let Some(button) = self.buttons.get_mut(id.index()) {
            button.press(pressed);
        }
    }

    /// Draw one button in its current state
    pub fn draw<R: ButtonRenderer>(&self, id: ButtonId, renderer: &mut R) -> Result<(), R::Error> {
        match self.get(id) {
            Some(button) => renderer.draw_button(button),
            None => Ok(()),
        }
    }

    /// Draw every button
    pub fn draw_all<R: ButtonRenderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        for button in &self.buttons {
            renderer.draw_button(button)?;
        }
        Ok(())
    }

    /// Set the on/off state, redrawing only when it changes
    ///
    /// Returns whether a redraw happened. If the redraw fails the old state
    /// is restored, so the next call with the same value tries again.
    pub fn set<R: ButtonRenderer>(
        &mut self,
        id: ButtonId,
        on: bool,
        renderer: &mut R,
    ) -> Result<bool, R::Error> {
        let Some(button) = self.buttons.get_mut(id.index()) else {
            return Ok(false);
        };
        if !button.set_on(on) {
            return Ok(false);
        }
        if let Err(e) = renderer.draw_button(button) {
            button.set_on(!on);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button::Rect;
    use mountpanel_protocol::{CommandCode, Direction};
    use std::vec::Vec as StdVec;

    /// Records every draw as (label, lit)
    #[derive(Default)]
    struct RecordingRenderer {
        draws: StdVec<(&'static str, bool)>,
        fail: bool,
    }

    impl ButtonRenderer for RecordingRenderer {
        type Error = ();

        fn draw_button(&mut self, button: &Button) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.draws.push((button.label(), button.is_lit()));
            Ok(())
        }
    }

    fn registry() -> ButtonRegistry {
        let mut registry = ButtonRegistry::new();
        registry
            .register(Button::momentary(
                "N",
                Rect::new(0, 0, 100, 100),
                CommandCode::Move(Direction::North),
                CommandCode::Halt(Direction::North),
            ))
            .unwrap();
        registry
            .register(Button::latched(
                "Track",
                Rect::new(50, 50, 100, 100),
                CommandCode::ToggleTracking,
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_hit_test_first_match_wins() {
        let registry = registry();
        // Overlap region belongs to the first registered button
        assert_eq!(registry.hit_test(60, 60), registry.find("N"));
        assert_eq!(registry.hit_test(120, 120), registry.find("Track"));
        assert_eq!(registry.hit_test(200, 200), None);
    }

    #[test]
    fn test_contains_by_id() {
        let registry = registry();
        let track = registry.find("Track").unwrap();
        assert!(registry.contains(track, 149, 149));
        assert!(!registry.contains(track, 10, 10));
    }

    #[test]
    fn test_register_until_full() {
        let mut registry = ButtonRegistry::new();
        for _ in 0..MAX_BUTTONS {
            registry
                .register(Button::latched("x", Rect::new(0, 0, 1, 1), CommandCode::StopAll))
                .unwrap();
        }
        let result = registry.register(Button::latched("y", Rect::new(0, 0, 1, 1), CommandCode::StopAll));
        assert_eq!(result, Err(RegistryError::Full));
        assert_eq!(registry.len(), MAX_BUTTONS);
    }

    #[test]
    fn test_set_redraws_only_on_change() {
        let mut registry = registry();
        let track = registry.find("Track").unwrap();
        let mut renderer = RecordingRenderer::default();

        assert_eq!(registry.set(track, false, &mut renderer), Ok(false));
        assert!(renderer.draws.is_empty());

        assert_eq!(registry.set(track, true, &mut renderer), Ok(true));
        assert_eq!(renderer.draws, [("Track", true)]);

        assert_eq!(registry.set(track, true, &mut renderer), Ok(false));
        assert_eq!(renderer.draws.len(), 1);

        assert_eq!(registry.set(track, false, &mut renderer), Ok(true));
        assert_eq!(renderer.draws, [("Track", true), ("Track", false)]);
    }

    #[test]
    fn test_failed_set_retries() {
        let mut registry = registry();
        let track = registry.find("Track").unwrap();
        let mut renderer = RecordingRenderer {
            fail: true,
            ..Default::default()
        };

        assert_eq!(registry.set(track, true, &mut renderer), Err(()));
        assert!(!registry.get(track).unwrap().is_on());

        renderer.fail = false;
        assert_eq!(registry.set(track, true, &mut renderer), Ok(true));
        assert!(registry.get(track).unwrap().is_on());
    }

    #[test]
    fn test_draw_all_in_order() {
        let registry = registry();
        let mut renderer = RecordingRenderer::default();
        registry.draw_all(&mut renderer).unwrap();
        assert_eq!(renderer.draws, [("N", false), ("Track", false)]);
    }
}
