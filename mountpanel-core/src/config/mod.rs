//! Panel configuration

pub mod types;

pub use types::*;
