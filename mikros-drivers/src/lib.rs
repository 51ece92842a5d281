//! Hardware driver implementations
//!
//! Concrete drivers over the `mikros-hal` traits:
//!
//! - Pulse generator (interrupt-driven, fixed-period frames)
//! - Echo ranger (bounded busy-polling pulse-width measurement)
//! - Indicator (blocking output pulses and blink patterns)
//!
//! Each driver is generic over its pins and timer, so all of them are
//! exercised on the host with mocks.

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod pulse;
pub mod ranger;

pub use indicator::Indicator;
pub use pulse::PulseGenerator;
pub use ranger::{EchoRanger, RangerConfig};
