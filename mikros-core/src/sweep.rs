//! Foreground sweep controller
//!
//! Ramps the duty width between its bounds, one step per completed frame.
//! At each bound the width freezes for a dwell period before the direction
//! reverses. The sweep runs forever; it is stepped from the foreground
//! loop only, never from the interrupt.

/// Sweep parameters.
///
/// A step that does not fit inside the bounds is a design-time defect,
/// rejected by the `const` assertions in [`crate::config`] for the
/// canonical set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepConfig {
    /// Lower duty-width bound, microseconds.
    pub min_us: u32,
    /// Upper duty-width bound, microseconds.
    pub max_us: u32,
    /// Step magnitude per frame, microseconds.
    pub step_us: u32,
    /// Frames to hold at a bound before reversing.
    pub dwell_frames: u32,
}

impl SweepConfig {
    /// The canonical configuration set.
    pub const fn standard() -> Self {
        use crate::config::{DWELL_FRAMES, MAX_PULSE_US, MIN_PULSE_US, STEP_US};
        Self {
            min_us: MIN_PULSE_US,
            max_us: MAX_PULSE_US,
            step_us: STEP_US,
            dwell_frames: DWELL_FRAMES,
        }
    }
}

/// Sweep state: current width, step direction and dwell counter.
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    config: SweepConfig,
    width_us: u32,
    /// Signed step; magnitude is invariant, only the sign flips.
    step: i32,
    dwell: u32,
}

impl Sweep {
    /// New sweep starting at `start_us`, initially stepping upward.
    pub const fn new(config: SweepConfig, start_us: u32) -> Self {
        Self {
            config,
            width_us: start_us,
            step: config.step_us as i32,
            dwell: 0,
        }
    }

    /// Current duty width.
    pub fn width_us(&self) -> u32 {
        self.width_us
    }

    /// Advance by one completed frame and return the new width.
    ///
    /// At a bound the width holds for `dwell_frames` calls, then the step
    /// sign flips and the ramp resumes. Off the bounds the width moves by
    /// exactly one step, clamped so an overshooting step lands on the
    /// bound instead of escaping it.
    pub fn advance(&mut self) -> u32 {
        if self.width_us <= self.config.min_us || self.width_us >= self.config.max_us {
            self.dwell += 1;
            if self.dwell < self.config.dwell_frames {
                return self.width_us;
            }
            self.dwell = 0;
            self.step = -self.step;
        }

        let next = self.width_us as i64 + self.step as i64;
        self.width_us = next.clamp(self.config.min_us as i64, self.config.max_us as i64) as u32;
        self.width_us
    }
}
