//! Board-agnostic core logic for the mount hand-control panel
//!
//! This crate contains all panel logic that does not depend on specific
//! hardware implementations:
//!
//! - Collaborator traits (renderer, mount controller)
//! - Button registry and the debounced touch state machine
//! - Command channel and dispatcher
//! - Coordinate encoding and the position/status snapshots
//! - Panel configuration and button layout

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod coord;
pub mod layout;
pub mod traits;
pub mod ui;
