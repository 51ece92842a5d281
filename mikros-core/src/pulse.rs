//! Pulse-frame state machine
//!
//! A frame is one fixed-period cycle: a HIGH phase of the current duty
//! width followed by a LOW phase of the remainder. The state machine is
//! advanced exclusively by the timer interrupt; each firing yields the pin
//! level to drive and the interval to arm next. There is no waiting here -
//! jitter is bounded only by interrupt latency.

/// Phase of the current frame.
///
/// The phase names the edge about to be driven: in `High` the next firing
/// raises the output, in `Low` it lowers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Next firing starts the HIGH part of the frame.
    High,
    /// Next firing starts the LOW part of the frame.
    Low,
}

/// What the interrupt handler must do after one firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FireAction {
    /// Level to drive on the output line.
    pub level: bool,
    /// Interval to arm for the next firing, in microseconds.
    pub next_interval_us: u32,
    /// True when this firing closed a frame (end of the LOW phase).
    pub frame_complete: bool,
}

/// Two-phase schedule for a fixed-period pulse frame.
///
/// `width_us` is sampled once per firing and must already be within the
/// configured bounds; the schedule itself never clamps.
#[derive(Debug, Clone, Copy)]
pub struct PulseSchedule {
    frame_period_us: u32,
    phase: Phase,
}

impl PulseSchedule {
    /// New schedule, ready to drive the HIGH phase of the first frame.
    pub const fn new(frame_period_us: u32) -> Self {
        Self {
            frame_period_us,
            phase: Phase::High,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Interval to preload before the very first firing: the LOW remainder
    /// of a frame at the given width, with the output held low.
    pub const fn first_interval_us(&self, width_us: u32) -> u32 {
        self.frame_period_us - width_us
    }

    /// Advance by one timer firing.
    ///
    /// HIGH phase: raise the output and arm the duty width. LOW phase:
    /// lower the output, arm the remainder of the frame, and report the
    /// frame complete so the foreground can step the sweep.
    pub fn on_fire(&mut self, width_us: u32) -> FireAction {
        match self.phase {
            Phase::High => {
                self.phase = Phase::Low;
                FireAction {
                    level: true,
                    next_interval_us: width_us,
                    frame_complete: false,
                }
            }
            Phase::Low => {
                self.phase = Phase::High;
                FireAction {
                    level: false,
                    next_interval_us: self.frame_period_us - width_us,
                    frame_complete: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FRAME_PERIOD_US, MAX_PULSE_US, MIN_PULSE_US};

    #[test]
    fn test_high_then_low_intervals() {
        let mut sched = PulseSchedule::new(FRAME_PERIOD_US);

        let rise = sched.on_fire(1_500);
        assert!(rise.level);
        assert_eq!(rise.next_interval_us, 1_500);
        assert!(!rise.frame_complete);

        let fall = sched.on_fire(1_500);
        assert!(!fall.level);
        assert_eq!(fall.next_interval_us, FRAME_PERIOD_US - 1_500);
        assert!(fall.frame_complete);
    }

    #[test]
    fn test_frame_sums_to_period_for_every_width() {
        // HIGH + LOW must equal the frame period exactly, for every
        // admissible duty width.
        let mut sched = PulseSchedule::new(FRAME_PERIOD_US);
        for width in MIN_PULSE_US..=MAX_PULSE_US {
            let rise = sched.on_fire(width);
            let fall = sched.on_fire(width);
            assert_eq!(rise.next_interval_us, width);
            assert_eq!(rise.next_interval_us + fall.next_interval_us, FRAME_PERIOD_US);
        }
    }

    #[test]
    fn test_frame_complete_only_on_falling_edge() {
        let mut sched = PulseSchedule::new(FRAME_PERIOD_US);
        for _ in 0..10 {
            assert!(!sched.on_fire(800).frame_complete);
            assert!(sched.on_fire(800).frame_complete);
        }
    }

    #[test]
    fn test_first_interval_is_low_remainder() {
        let sched = PulseSchedule::new(FRAME_PERIOD_US);
        assert_eq!(sched.first_interval_us(1_500), FRAME_PERIOD_US - 1_500);
        assert_eq!(sched.phase(), Phase::High);
    }
}
