//! Hardware timer abstractions
//!
//! Both pulse-timing subsystems share one timer discipline: a counter whose
//! tick rate is a fixed, documented real-time duration. The calibration is
//! an explicit constant here, never baked into delay-loop iteration counts.
//!
//! Two trait seams cover the two ways the firmware consumes a timer. The
//! pulse generator programs "fire after N ticks" one-shots from its
//! interrupt handler; the echo ranger takes raw snapshots of a free-running
//! count. An image uses one or the other, never both.

/// Tick rate all timer implementations are calibrated to: 1 MHz,
/// so one tick is one microsecond.
pub const TICK_HZ: u32 = 1_000_000;

/// One-shot interval timer driving a periodic interrupt.
///
/// `set_next_interval` arms the hardware to fire after the given number of
/// microseconds. On up-counting reload hardware this is
/// `reload = max_count - interval`; on a down-counter it is the interval
/// itself. Either way the contract is "fire after N ticks".
///
/// An interval outside `[1, max_count]` of the backing counter is a
/// configuration defect. It is prevented by compile-time checks in the
/// configuration, not reported at runtime.
pub trait IntervalTimer {
    /// Start the counter and enable its interrupt.
    fn start(&mut self);

    /// Stop the counter and disable its interrupt.
    fn stop(&mut self);

    /// Arm the next firing, `interval_us` microseconds from now.
    ///
    /// Callable from the interrupt handler itself to chain intervals.
    fn set_next_interval(&mut self, interval_us: u32);
}

/// Free-running counter for pulse-width measurement.
///
/// `ticks()` returns the raw count since the last `reset()`, one tick per
/// microsecond ([`TICK_HZ`]). The counter may wrap; callers own the
/// wrap-around arithmetic and know `max_count`.
pub trait TickCounter {
    /// Largest value `ticks()` can return before wrapping to zero.
    fn max_count(&self) -> u32;

    /// Start counting.
    fn start(&mut self);

    /// Freeze the count.
    fn stop(&mut self);

    /// Reset the count to zero.
    fn reset(&mut self);

    /// Raw counter snapshot.
    fn ticks(&self) -> u32;
}
