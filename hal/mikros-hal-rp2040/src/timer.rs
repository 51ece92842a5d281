//! Timer bindings
//!
//! Both bindings honor the 1 MHz calibration in [`mikros_hal::TICK_HZ`]:
//!
//! - [`SysTickTimer`]: the Cortex-M SysTick down-counter on its external
//!   reference, which the RP2040 derives from the watchdog tick at 1 MHz.
//!   One reload tick is one microsecond.
//! - [`MicrosCounter`]: snapshot counter over the `embassy-time` instant
//!   clock (the RP2040 timer peripheral, also 1 MHz).

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use embassy_time::Instant;
use mikros_hal::{IntervalTimer, TickCounter};

/// One-shot interval timer over SysTick.
///
/// SysTick counts down from its reload value and fires the `SysTick`
/// exception on wrap, so "fire after N ticks" programs `reload = N - 1`
/// directly; there is no subtraction from a top value as on up-counting
/// reload hardware.
pub struct SysTickTimer {
    syst: SYST,
}

impl SysTickTimer {
    /// Largest representable interval: the reload register is 24 bits.
    ///
    /// Intervals outside `[1, MAX_INTERVAL_US]` are configuration defects;
    /// the frame constants are checked against this bound at compile time
    /// by the firmware image.
    pub const MAX_INTERVAL_US: u32 = 0x00FF_FFFF;

    /// Take ownership of SysTick, configured on the external 1 MHz
    /// reference, counter and exception disabled.
    pub fn new(mut syst: SYST) -> Self {
        syst.set_clock_source(SystClkSource::External);
        syst.disable_counter();
        syst.disable_interrupt();
        Self { syst }
    }
}

impl IntervalTimer for SysTickTimer {
    fn start(&mut self) {
        self.syst.enable_interrupt();
        self.syst.enable_counter();
    }

    fn stop(&mut self) {
        self.syst.disable_counter();
        self.syst.disable_interrupt();
    }

    fn set_next_interval(&mut self, interval_us: u32) {
        debug_assert!((1..=Self::MAX_INTERVAL_US).contains(&interval_us));
        self.syst.set_reload(interval_us - 1);
        // Clearing the current count makes the new reload take effect on
        // this period, not the next wrap.
        self.syst.clear_current();
    }
}

/// Free-running microsecond counter over the instant clock.
///
/// `reset` rebases the count; `stop` freezes the snapshot so captures
/// after a timeout read consistently.
pub struct MicrosCounter {
    base: Instant,
    frozen: Option<u32>,
}

impl MicrosCounter {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            frozen: None,
        }
    }
}

impl Default for MicrosCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickCounter for MicrosCounter {
    fn max_count(&self) -> u32 {
        u32::MAX
    }

    fn start(&mut self) {
        if let Some(at) = self.frozen.take() {
            // Resume from the frozen count.
            self.base = Instant::now() - embassy_time::Duration::from_micros(at as u64);
        }
    }

    fn stop(&mut self) {
        self.frozen = Some(self.ticks());
    }

    fn reset(&mut self) {
        self.base = Instant::now();
        self.frozen = None;
    }

    fn ticks(&self) -> u32 {
        match self.frozen {
            Some(at) => at,
            None => self.base.elapsed().as_micros() as u32,
        }
    }
}
