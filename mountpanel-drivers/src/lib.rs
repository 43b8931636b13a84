//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in mountpanel-core for the panel hardware:
//!
//! - Touch controllers (XPT2046 resistive touch)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod touch;
