//! GPIO line bindings
//!
//! Thin newtypes binding `embassy-rp` pins to the `mikros-hal` pin traits.
//! Pull configuration and drive strength are chosen at construction by the
//! firmware image.

use embassy_rp::gpio::{Input, Output};
use mikros_hal::{InputPin, OutputPin};

/// Push-pull output line.
pub struct OutputLine<'d> {
    inner: Output<'d>,
}

impl<'d> OutputLine<'d> {
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// Digital sense input line.
pub struct SenseLine<'d> {
    inner: Input<'d>,
}

impl<'d> SenseLine<'d> {
    pub fn new(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl InputPin for SenseLine<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}
