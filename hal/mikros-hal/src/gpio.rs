//! GPIO pin abstractions
//!
//! Digital input and output lines as the drivers see them. Electrical
//! specifics (drive strength, pulls, slew) stay in the chip bindings.

/// Digital output pin
///
/// Implementations handle the actual register manipulation for the
/// specific chip.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Implementations handle the actual register reading for the specific
/// chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
