//! Debounced touch classification
//!
//! Turns one raw touch sample per UI tick into press/release events against
//! the button registry. The classifier is pure: it only decides which
//! events happen. Drawing and command emission are applied by
//! [`crate::ui::TouchPanel`].
//!
//! ```text
//!            sample inside button B
//!   Idle ─────────────────────────────▶ Active(B, now)
//!    ▲                                   │  sample inside B: t = now
//!    │ released / outside B,             │  outside B or no touch,
//!    │ now - t >= debounce               │  now - t < debounce: ignored
//!    └───────────────────────────────────┘
//! ```
//!
//! The debounce window applies to both leaving the button and losing
//! contact, so a noisy press yields exactly one press/release pair.

use heapless::Vec;

use super::registry::{ButtonId, ButtonRegistry};

/// Default debounce window in milliseconds
pub const DEBOUNCE_MS: u32 = 250;

/// One touch reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchSample {
    /// Screen touched at a point
    Point { x: u16, y: u16 },
    /// No touch detected
    Released,
}

/// Classifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchState {
    /// No button is held
    Idle,
    /// A button is held; `since_ms` is the last sample accepted for it
    Active { button: ButtonId, since_ms: u32 },
}

/// Press/release transitions emitted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    Pressed(ButtonId),
    Released(ButtonId),
}

/// At most one release followed by one press per sample
pub type TouchEvents = Vec<TouchEvent, 2>;

/// Debounced two-state touch machine
#[derive(Debug, Clone)]
pub struct TouchClassifier {
    state: TouchState,
    debounce_ms: u32,
    max_x: u16,
    max_y: u16,
}

impl TouchClassifier {
    /// Create a classifier for a screen of `width` × `height` pixels
    pub fn new(width: u16, height: u16, debounce_ms: u32) -> Self {
        Self {
            state: TouchState::Idle,
            debounce_ms,
            max_x: width.saturating_sub(1),
            max_y: height.saturating_sub(1),
        }
    }

    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Button currently held, if any
    pub fn active(&self) -> Option<ButtonId> {
        match self.state {
            TouchState::Idle => None,
            TouchState::Active { button, .. } => Some(button),
        }
    }

    /// Clamp a point to the screen
    pub fn clamp(&self, x: u16, y: u16) -> (u16, u16) {
        (x.min(self.max_x), y.min(self.max_y))
    }

    fn settled(&self, since_ms: u32, now_ms: u32) -> bool {
        now_ms.wrapping_sub(since_ms) >= self.debounce_ms
    }

    /// Process one sample taken at `now_ms`
    pub fn step(
        &mut self,
        registry: &ButtonRegistry,
        sample: TouchSample,
        now_ms: u32,
    ) -> TouchEvents {
        let mut events = TouchEvents::new();

        match sample {
            TouchSample::Point { x, y } => {
                let (x, y) = self.clamp(x, y);

                if let TouchState::Active { button, since_ms } = self.state {
                    if registry.contains(button, x, y) {
                        self.state = TouchState::Active {
                            button,
                            since_ms: now_ms,
                        };
                        return events;
                    }
                    if !self.settled(since_ms, now_ms) {
                        return events;
                    }
                    let _ = events.push(TouchEvent::Released(button));
                    self.state = TouchState::Idle;
                }

                if let Some(button) = registry.hit_test(x, y) {
                    let _ = events.push(TouchEvent::Pressed(button));
                    self.state = TouchState::Active {
                        button,
                        since_ms: now_ms,
                    };
                }
            }
            TouchSample::Released => {
                if let TouchState::Active { button, since_ms } = self.state {
                    if self.settled(since_ms, now_ms) {
                        let _ = events.push(TouchEvent::Released(button));
                        self.state = TouchState::Idle;
                    }
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button::{Button, Rect};
    use mountpanel_protocol::{CommandCode, Direction};
    use proptest::prelude::*;

    const WIDTH: u16 = 480;
    const HEIGHT: u16 = 320;

    fn registry() -> ButtonRegistry {
        let mut registry = ButtonRegistry::new();
        registry
            .register(Button::momentary(
                "N",
                Rect::new(110, 40, 100, 100),
                CommandCode::Move(Direction::North),
                CommandCode::Halt(Direction::North),
            ))
            .unwrap();
        registry
            .register(Button::momentary(
                "S",
                Rect::new(110, 145, 100, 100),
                CommandCode::Move(Direction::South),
                CommandCode::Halt(Direction::South),
            ))
            .unwrap();
        registry
            .register(Button::latched(
                "Corner",
                Rect::new(400, 280, 80, 40),
                CommandCode::StopAll,
            ))
            .unwrap();
        registry
    }

    fn classifier() -> TouchClassifier {
        TouchClassifier::new(WIDTH, HEIGHT, DEBOUNCE_MS)
    }

    fn at(x: u16, y: u16) -> TouchSample {
        TouchSample::Point { x, y }
    }

    #[test]
    fn test_press_inside_button() {
        let registry = registry();
        let north = registry.find("N").unwrap();
        let mut touch = classifier();

        let events = touch.step(&registry, at(150, 80), 0);
        assert_eq!(events.as_slice(), [TouchEvent::Pressed(north)]);
        assert_eq!(touch.active(), Some(north));
    }

    #[test]
    fn test_touch_outside_buttons_stays_idle() {
        let registry = registry();
        let mut touch = classifier();

        assert!(touch.step(&registry, at(5, 5), 0).is_empty());
        assert_eq!(touch.state(), TouchState::Idle);
    }

    #[test]
    fn test_hold_does_not_refire() {
        let registry = registry();
        let mut touch = classifier();

        assert_eq!(touch.step(&registry, at(150, 80), 0).len(), 1);
        for t in (50..2000).step_by(50) {
            assert!(touch.step(&registry, at(150, 80), t).is_empty());
        }
    }

    #[test]
    fn test_release_deferred_within_debounce() {
        let registry = registry();
        let north = registry.find("N").unwrap();
        let mut touch = classifier();

        touch.step(&registry, at(150, 80), 1000);
        assert!(touch.step(&registry, TouchSample::Released, 1100).is_empty());
        assert!(touch.step(&registry, TouchSample::Released, 1249).is_empty());
        assert_eq!(touch.active(), Some(north));

        let events = touch.step(&registry, TouchSample::Released, 1250);
        assert_eq!(events.as_slice(), [TouchEvent::Released(north)]);
        assert_eq!(touch.state(), TouchState::Idle);
    }

    #[test]
    fn test_release_when_idle_is_ignored() {
        let registry = registry();
        let mut touch = classifier();
        assert!(touch.step(&registry, TouchSample::Released, 5000).is_empty());
    }

    #[test]
    fn test_brief_excursion_is_noise() {
        let registry = registry();
        let north = registry.find("N").unwrap();
        let mut touch = classifier();

        touch.step(&registry, at(150, 80), 0);
        // Slides over S for less than the debounce window
        assert!(touch.step(&registry, at(150, 200), 50).is_empty());
        assert!(touch.step(&registry, at(150, 200), 100).is_empty());
        // Back on N
        assert!(touch.step(&registry, at(150, 80), 100).is_empty());
        assert_eq!(touch.active(), Some(north));
    }

    #[test]
    fn test_slide_to_other_button_after_debounce() {
        let registry = registry();
        let north = registry.find("N").unwrap();
        let south = registry.find("S").unwrap();
        let mut touch = classifier();

        touch.step(&registry, at(150, 80), 0);
        assert!(touch.step(&registry, at(150, 200), 100).is_empty());

        let events = touch.step(&registry, at(150, 200), 250);
        assert_eq!(
            events.as_slice(),
            [TouchEvent::Released(north), TouchEvent::Pressed(south)]
        );
        assert_eq!(touch.active(), Some(south));
    }

    #[test]
    fn test_slide_off_to_empty_area() {
        let registry = registry();
        let north = registry.find("N").unwrap();
        let mut touch = classifier();

        touch.step(&registry, at(150, 80), 0);
        let events = touch.step(&registry, at(5, 5), 300);
        assert_eq!(events.as_slice(), [TouchEvent::Released(north)]);
        assert_eq!(touch.state(), TouchState::Idle);
    }

    #[test]
    fn test_samples_are_clamped() {
        let registry = registry();
        let corner = registry.find("Corner").unwrap();
        let mut touch = classifier();

        assert_eq!(touch.clamp(999, 999), (WIDTH - 1, HEIGHT - 1));
        let events = touch.step(&registry, at(600, 400), 0);
        assert_eq!(events.as_slice(), [TouchEvent::Pressed(corner)]);
    }

    #[test]
    fn test_debounce_across_timer_wrap() {
        let registry = registry();
        let north = registry.find("N").unwrap();
        let mut touch = classifier();

        let start = u32::MAX - 100;
        touch.step(&registry, at(150, 80), start);
        assert!(touch.step(&registry, TouchSample::Released, start.wrapping_add(200)).is_empty());
        let events = touch.step(&registry, TouchSample::Released, start.wrapping_add(250));
        assert_eq!(events.as_slice(), [TouchEvent::Released(north)]);
    }

    proptest! {
        /// Any sample stream whose gaps away from the held button stay below
        /// the debounce window yields exactly one press and no release.
        #[test]
        fn prop_noise_below_debounce_never_releases(
            gaps in proptest::collection::vec((0u32..50, any::<bool>(), any::<bool>()), 1..60)
        ) {
            let registry = registry();
            let mut touch = classifier();
            let mut now = 0u32;
            let mut presses = touch.step(&registry, at(150, 80), now).len();
            let mut releases = 0;
            let mut last_inside = now;

            for (dt, inside, lifted) in gaps {
                now += dt;
                let sample = if inside {
                    at(150, 80)
                } else if lifted {
                    TouchSample::Released
                } else {
                    at(150, 200)
                };
                if now - last_inside >= DEBOUNCE_MS {
                    // Force contact so every gap stays under the window
                    let _ = touch.step(&registry, at(150, 80), now);
                    last_inside = now;
                    continue;
                }
                for event in touch.step(&registry, sample, now) {
                    match event {
                        TouchEvent::Pressed(_) => presses += 1,
                        TouchEvent::Released(_) => releases += 1,
                    }
                }
                if inside {
                    last_inside = now;
                }
            }

            prop_assert_eq!(presses, 1);
            prop_assert_eq!(releases, 0);
        }
    }
}
