//! RP2040 bindings for the Mikros hardware abstraction traits
//!
//! - GPIO lines over `embassy-rp` [`Output`](embassy_rp::gpio::Output) /
//!   [`Input`](embassy_rp::gpio::Input)
//! - Interval timer over the Cortex-M SysTick down-counter, clocked from
//!   the RP2040's external 1 MHz reference so one tick is one microsecond
//! - Free-running microsecond counter over `embassy-time`
//!
//! Requires `embassy_rp::init` to have run: it starts the watchdog tick
//! that feeds both the SysTick external clock and the timer peripheral.

#![no_std]

pub mod gpio;
pub mod timer;

pub use gpio::{OutputLine, SenseLine};
pub use timer::{MicrosCounter, SysTickTimer};
