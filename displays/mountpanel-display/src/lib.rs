//! Panel rendering on embedded-graphics draw targets
//!
//! This crate provides:
//! - [`GraphicsRenderer`], implementing the core's `PanelRenderer` for any
//!   RGB565 `DrawTarget` (the ILI9486 on the panel, or a framebuffer in tests)
//! - The panel palette and the screen regions of the readouts
//!
//! # Architecture
//!
//! The core decides what changed; this crate only turns a button state or
//! a readout string into pixels. Every draw overwrites its whole region, so
//! no frame buffer is kept on the device.

#![cfg_attr(not(test), no_std)]

pub mod renderer;
pub mod style;

// Re-export key types
pub use renderer::GraphicsRenderer;
pub use style::{accent_color, readout_anchor, BACKGROUND};
