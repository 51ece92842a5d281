//! Mikros Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the pulse-timing drivers are
//! written against. Chip-specific bindings (RP2040, ...) implement them;
//! host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware images (servo-fw, ranger-fw)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mikros-drivers (pin/timer generic)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mikros-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mikros-hal-rp2040 (SysTick, GPIO, µs)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`timer::IntervalTimer`] - "fire after N ticks" one-shot programming
//! - [`timer::TickCounter`] - free-running counter snapshots

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use timer::{IntervalTimer, TickCounter, TICK_HZ};
