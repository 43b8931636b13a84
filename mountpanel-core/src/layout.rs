//! Main screen button layout
//!
//! ```text
//!  R: ...   D: ...            HH:MM:SS
//!            ┌───┐             ┌───────┐
//!            │ N │             │ Stop  │
//!   ┌───┐    └───┘    ┌───┐    └───────┘
//!   │ W │    ┌───┐    │ E │    ┌───────┐
//!   └───┘    │ S │    └───┘    │ Track │
//!            └───┘             └───────┘
//!   ┌──────┐  ┌──────┐         ┌───────┐
//!   │  In  │  │ Out  │         │ Speed │
//!   └──────┘  └──────┘         └───────┘
//! ```

use mountpanel_protocol::{CommandCode, Direction};

use crate::ui::{Accent, Button, ButtonRegistry, Rect, RegistryError, StatusBinding};

/// Side of the square direction pad buttons
const PAD: u16 = 100;

fn direction(label: &'static str, x: u16, y: u16, direction: Direction) -> Button {
    Button::momentary(
        label,
        Rect::new(x, y, PAD, PAD),
        CommandCode::Move(direction),
        CommandCode::Halt(direction),
    )
}

/// Build the registry for the main screen
///
/// Registration order is hit-test priority. Buttons are registered in
/// creation order and first match wins; since no two buttons overlap, the
/// reverse order would find the same button for every point.
pub fn default_layout() -> Result<ButtonRegistry, RegistryError> {
    let mut registry = ButtonRegistry::new();

    registry.register(direction("N", 110, 40, Direction::North))?;
    registry.register(direction("S", 110, 145, Direction::South))?;
    registry.register(direction("W", 5, 93, Direction::West))?;
    registry.register(direction("E", 215, 93, Direction::East))?;

    registry.register(Button::momentary(
        "In",
        Rect::new(5, 250, 152, 65),
        CommandCode::FocusIn,
        CommandCode::FocusStop,
    ))?;
    registry.register(Button::momentary(
        "Out",
        Rect::new(162, 250, 153, 65),
        CommandCode::FocusOut,
        CommandCode::FocusStop,
    ))?;

    registry.register(
        Button::latched("Stop", Rect::new(340, 40, 135, 65), CommandCode::StopAll)
            .with_accent(Accent::Red)
            .bound_to(StatusBinding::Slewing),
    )?;
    registry.register(
        Button::latched(
            "Track",
            Rect::new(340, 145, 135, 65),
            CommandCode::ToggleTracking,
        )
        .with_accent(Accent::Green)
        .bound_to(StatusBinding::Tracking),
    )?;
    registry.register(
        Button::latched(
            "Speed",
            Rect::new(340, 250, 135, 65),
            CommandCode::ToggleFocusSpeed,
        )
        .with_accent(Accent::Blue)
        .bound_to(StatusBinding::FastFocus),
    )?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::ui::ButtonKind;

    #[test]
    fn test_layout_order() {
        let registry = default_layout().unwrap();
        let labels: std::vec::Vec<_> = registry.iter().map(|(_, b)| b.label()).collect();
        assert_eq!(
            labels,
            ["N", "S", "W", "E", "In", "Out", "Stop", "Track", "Speed"]
        );
    }

    #[test]
    fn test_buttons_fit_on_screen() {
        let registry = default_layout().unwrap();
        for (_, button) in registry.iter() {
            let rect = button.rect();
            assert!(rect.x + rect.width <= SCREEN_WIDTH, "{}", button.label());
            assert!(rect.y + rect.height <= SCREEN_HEIGHT, "{}", button.label());
        }
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let registry = default_layout().unwrap();
        for (a, first) in registry.iter() {
            for (b, second) in registry.iter() {
                if a == b {
                    continue;
                }
                let (x, y) = first.rect().center();
                assert!(!second.contains(x, y), "{} / {}", first.label(), second.label());
            }
        }
    }

    #[test]
    fn test_hit_test_independent_of_order() {
        let registry = default_layout().unwrap();
        for y in (0..SCREEN_HEIGHT).step_by(2) {
            for x in (0..SCREEN_WIDTH).step_by(2) {
                let hits = registry.iter().filter(|(_, b)| b.contains(x, y)).count();
                assert!(hits <= 1, "{} buttons at ({}, {})", hits, x, y);
            }
        }
    }

    #[test]
    fn test_direction_pad_codes() {
        let registry = default_layout().unwrap();
        let north = registry.get(registry.find("N").unwrap()).unwrap();
        assert_eq!(north.kind(), ButtonKind::Momentary);
        assert_eq!(north.on_touch(), CommandCode::Move(Direction::North));
        assert_eq!(north.on_release(), CommandCode::Halt(Direction::North));

        let out = registry.get(registry.find("Out").unwrap()).unwrap();
        assert_eq!(out.on_touch(), CommandCode::FocusOut);
        assert_eq!(out.on_release(), CommandCode::FocusStop);
    }

    #[test]
    fn test_latched_buttons_are_bound() {
        let registry = default_layout().unwrap();
        let track = registry.get(registry.find("Track").unwrap()).unwrap();
        assert_eq!(track.kind(), ButtonKind::Latched);
        assert_eq!(track.on_touch(), CommandCode::ToggleTracking);
        assert_eq!(track.on_release(), CommandCode::None);
        assert_eq!(track.binding(), Some(StatusBinding::Tracking));
        assert_eq!(track.accent(), Accent::Green);
    }
}
