//! Touch UI: buttons, hit-testing and the debounced touch machine

pub mod button;
pub mod panel;
pub mod registry;
pub mod touch;

pub use button::{Accent, Button, ButtonKind, Rect, StatusBinding};
pub use panel::{TouchCommands, TouchOutput, TouchPanel};
pub use registry::{ButtonId, ButtonRegistry, RegistryError, MAX_BUTTONS};
pub use touch::{TouchClassifier, TouchEvent, TouchEvents, TouchSample, TouchState, DEBOUNCE_MS};
