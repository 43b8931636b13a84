//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod control;
pub mod ui;

pub use control::control_task;
pub use ui::ui_task;
