//! Board-agnostic core logic for the Mikros pulse-timing firmware
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Compile-time configuration (with build-time defect checks)
//! - Pulse-frame state machine (advanced by the timer interrupt)
//! - Foreground sweep controller
//! - Tick arithmetic and distance conversion for echo ranging

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod pulse;
pub mod range;
pub mod sweep;
