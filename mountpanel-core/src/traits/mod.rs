//! Collaborator traits
//!
//! These traits define the interface between the panel logic and the
//! rendering, touch and mount-control implementations.

pub mod display;
pub mod mount;
pub mod touch;

pub use display::{ButtonRenderer, PanelRenderer, Readout};
pub use mount::{AxisAngles, MountControl, UNKNOWN_VERSION};
pub use touch::TouchInput;
