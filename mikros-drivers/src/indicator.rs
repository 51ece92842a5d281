//! Blocking output indicator
//!
//! Drives the actuation line high for a fixed duration then low, blocking
//! the foreground for that duration. The same mechanism serves both
//! indications: a solid pulse for detection and a short blink for a
//! measurement timeout. Single caller at a time; the interrupt context
//! never touches this line.

use embedded_hal::delay::DelayNs;
use mikros_hal::OutputPin;

/// Fixed-duration pulse and blink patterns on one output line.
pub struct Indicator<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Indicator<P, D> {
    /// Create an indicator. The line is driven low immediately.
    pub fn new(mut pin: P, delay: D) -> Self {
        pin.set_low();
        Self { pin, delay }
    }

    /// Drive the line high for `on_ms`, then low. Blocks.
    pub fn pulse_ms(&mut self, on_ms: u32) {
        self.pin.set_high();
        self.delay.delay_ms(on_ms);
        self.pin.set_low();
    }

    /// One blink: high for `on_ms`, low for `off_ms`. Blocks.
    pub fn blink_ms(&mut self, on_ms: u32, off_ms: u32) {
        self.pulse_ms(on_ms);
        self.delay.delay_ms(off_ms);
    }
}
