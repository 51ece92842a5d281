//! Interrupt-driven pulse generator
//!
//! Owns the output line and the interval timer; the frame logic itself
//! lives in [`mikros_core::pulse`]. The firmware's timer interrupt calls
//! [`PulseGenerator::on_timer_fire`] with the current duty width; the
//! driver applies the pin level and arms the next interval. Nothing on
//! this path waits.

use mikros_core::pulse::PulseSchedule;
use mikros_hal::{IntervalTimer, OutputPin};

/// Two-phase pulse generator over one output line and one interval timer.
pub struct PulseGenerator<P, T> {
    pin: P,
    timer: T,
    schedule: PulseSchedule,
}

impl<P: OutputPin, T: IntervalTimer> PulseGenerator<P, T> {
    /// Create a generator for the given frame period. The output is
    /// driven low immediately; the timer stays unarmed until `start`.
    pub fn new(mut pin: P, timer: T, frame_period_us: u32) -> Self {
        pin.set_low();
        Self {
            pin,
            timer,
            schedule: PulseSchedule::new(frame_period_us),
        }
    }

    /// Arm the first firing and start the timer.
    ///
    /// The first programmed interval is the LOW remainder of a frame at
    /// `initial_width_us`, with the output held low, so the first HIGH
    /// phase begins on a clean frame boundary.
    pub fn start(&mut self, initial_width_us: u32) {
        self.pin.set_low();
        self.timer
            .set_next_interval(self.schedule.first_interval_us(initial_width_us));
        self.timer.start();
    }

    /// Advance one firing from the timer interrupt.
    ///
    /// `width_us` is the duty width sampled for this firing; it must be
    /// within the configured bounds. Returns true when a frame completed,
    /// which the caller turns into the foreground update signal.
    pub fn on_timer_fire(&mut self, width_us: u32) -> bool {
        let action = self.schedule.on_fire(width_us);
        self.pin.set_state(action.level);
        self.timer.set_next_interval(action.next_interval_us);
        action.frame_complete
    }
}
