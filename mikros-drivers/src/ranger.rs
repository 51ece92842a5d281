//! Polling echo ranger
//!
//! Fires a trigger pulse, then busy-polls the sense line for the echo
//! under two independent bounded timeouts: one ceiling on waiting for the
//! echo to start, one on the echo width itself. Every wait here is a
//! counted poll with a hard deadline in iterations, never wall-clock
//! blocking - there is no real-time clock to block on.
//!
//! A measurement cycle always runs to completion (success or timeout)
//! before the next one begins; there is no cancellation.

use embedded_hal::delay::DelayNs;
use mikros_core::range::{elapsed_ticks, EchoError};
use mikros_hal::{InputPin, OutputPin, TickCounter};

/// Trigger and timeout parameters for one measurement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangerConfig {
    /// Trigger line settle time before the pulse, microseconds.
    pub settle_us: u32,
    /// Trigger pulse length, microseconds.
    pub trig_pulse_us: u32,
    /// Poll iterations allowed for the echo to start (1 µs each).
    pub start_timeout_us: u32,
    /// Poll iterations allowed for the echo to end (1 µs each).
    pub width_timeout_us: u32,
}

impl RangerConfig {
    /// The canonical configuration set.
    pub const fn standard() -> Self {
        use mikros_core::config::{
            ECHO_START_TIMEOUT_US, ECHO_WIDTH_TIMEOUT_US, TRIG_PULSE_US, TRIG_SETTLE_US,
        };
        Self {
            settle_us: TRIG_SETTLE_US,
            trig_pulse_us: TRIG_PULSE_US,
            start_timeout_us: ECHO_START_TIMEOUT_US,
            width_timeout_us: ECHO_WIDTH_TIMEOUT_US,
        }
    }
}

/// Pulse-width measurement engine over a trigger line, a sense line and a
/// free-running tick counter.
pub struct EchoRanger<T, E, C, D> {
    trig: T,
    echo: E,
    counter: C,
    delay: D,
    config: RangerConfig,
}

impl<T, E, C, D> EchoRanger<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: TickCounter,
    D: DelayNs,
{
    /// Create a ranger. The trigger line is driven low immediately.
    pub fn new(mut trig: T, echo: E, counter: C, delay: D, config: RangerConfig) -> Self {
        trig.set_low();
        Self {
            trig,
            echo,
            counter,
            delay,
            config,
        }
    }

    /// Run one measurement cycle and return the echo width in ticks.
    ///
    /// On either timeout the counter is stopped and the corresponding
    /// [`EchoError`] kind is returned; the cycle never blocks past its
    /// two poll ceilings.
    pub fn measure(&mut self) -> Result<u32, EchoError> {
        // Settle the trigger line, then time the cycle from zero.
        self.trig.set_low();
        self.delay.delay_us(self.config.settle_us);
        self.counter.reset();
        self.counter.start();

        // Trigger pulse.
        self.trig.set_high();
        self.delay.delay_us(self.config.trig_pulse_us);
        self.trig.set_low();

        // Rising edge of the echo, bounded by the start timeout.
        let mut budget = self.config.start_timeout_us;
        while self.echo.is_low() {
            budget -= 1;
            if budget == 0 {
                self.counter.stop();
                return Err(EchoError::NoEchoStart);
            }
            self.delay.delay_us(1);
        }
        let start = self.counter.ticks();

        // Falling edge, bounded by the width timeout.
        let mut budget = self.config.width_timeout_us;
        while self.echo.is_high() {
            budget -= 1;
            if budget == 0 {
                self.counter.stop();
                return Err(EchoError::EchoStuckHigh);
            }
            self.delay.delay_us(1);
        }
        let end = self.counter.ticks();
        self.counter.stop();

        Ok(elapsed_ticks(start, end, self.counter.max_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use mikros_core::config::DISTANCE_DIVISOR;
    use mikros_core::range::ticks_to_cm;

    /// Shared simulated time base, advanced only by the delay mock.
    struct Clock {
        now_us: Cell<u32>,
    }

    impl Clock {
        fn new() -> Self {
            Self {
                now_us: Cell::new(0),
            }
        }

        fn now(&self) -> u32 {
            self.now_us.get()
        }
    }

    /// Delay mock: advances the simulated clock.
    struct SimDelay<'a>(&'a Clock);

    impl DelayNs for SimDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            let us = ns.div_ceil(1_000);
            self.0.now_us.set(self.0.now_us.get() + us);
        }
    }

    /// Trigger pin mock: records the last pulse edges.
    struct SimTrig<'a> {
        clock: &'a Clock,
        high: bool,
        rose_at: Cell<u32>,
        fell_at: Cell<u32>,
    }

    impl OutputPin for SimTrig<'_> {
        fn set_high(&mut self) {
            self.high = true;
            self.rose_at.set(self.clock.now());
        }

        fn set_low(&mut self) {
            if self.high {
                self.fell_at.set(self.clock.now());
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Echo line mock: high inside a scripted absolute-time window.
    struct SimEcho<'a> {
        clock: &'a Clock,
        /// Window in absolute simulated time; None means the line never rises.
        window: Option<(u32, u32)>,
    }

    impl InputPin for SimEcho<'_> {
        fn is_high(&self) -> bool {
            match self.window {
                Some((rise, fall)) => (rise..fall).contains(&self.clock.now()),
                None => false,
            }
        }
    }

    /// Tick counter mock over the simulated clock, wrapping at max_count.
    struct SimCounter<'a> {
        clock: &'a Clock,
        max_count: u32,
        base: u32,
        running: bool,
        frozen: u32,
    }

    impl<'a> SimCounter<'a> {
        fn new(clock: &'a Clock, max_count: u32) -> Self {
            Self {
                clock,
                max_count,
                base: 0,
                running: false,
                frozen: 0,
            }
        }
    }

    impl TickCounter for SimCounter<'_> {
        fn max_count(&self) -> u32 {
            self.max_count
        }

        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.frozen = self.ticks();
            self.running = false;
        }

        fn reset(&mut self) {
            self.base = self.clock.now();
            self.frozen = 0;
        }

        fn ticks(&self) -> u32 {
            if !self.running {
                return self.frozen;
            }
            let span = self.clock.now().wrapping_sub(self.base) as u64;
            (span % (self.max_count as u64 + 1)) as u32
        }
    }

    fn ranger<'a>(
        clock: &'a Clock,
        window: Option<(u32, u32)>,
        max_count: u32,
    ) -> EchoRanger<SimTrig<'a>, SimEcho<'a>, SimCounter<'a>, SimDelay<'a>> {
        let trig = SimTrig {
            clock,
            high: false,
            rose_at: Cell::new(0),
            fell_at: Cell::new(0),
        };
        let echo = SimEcho { clock, window };
        EchoRanger::new(
            trig,
            echo,
            SimCounter::new(clock, max_count),
            SimDelay(clock),
            RangerConfig::standard(),
        )
    }

    #[test]
    fn test_trigger_pulse_shape() {
        let clock = Clock::new();
        let mut r = ranger(&clock, Some((100, 300)), u32::MAX);
        r.measure().unwrap();

        // Settle (2 µs) precedes the rising edge; the pulse holds 10 µs.
        assert_eq!(r.trig.rose_at.get(), 2);
        assert_eq!(r.trig.fell_at.get(), 12);
        assert!(!r.trig.is_set_high());
    }

    #[test]
    fn test_measures_echo_width() {
        let clock = Clock::new();
        // Echo rises 500 µs into the cycle and stays high for 580 µs.
        let mut r = ranger(&clock, Some((512, 1_092)), u32::MAX);

        let ticks = r.measure().unwrap();
        assert_eq!(ticks, 580);
        assert_eq!(ticks_to_cm(ticks, DISTANCE_DIVISOR), 10);
        assert!(!r.counter.running, "counter must be stopped after a cycle");
    }

    #[test]
    fn test_wrapping_counter_still_measures() {
        let clock = Clock::new();
        // A 1000-tick counter wraps mid-echo: 200 µs width spanning the wrap.
        let mut r = ranger(&clock, Some((912, 1_112)), 1_000);

        assert_eq!(r.measure().unwrap(), 200);
    }

    #[test]
    fn test_no_echo_start_times_out() {
        let clock = Clock::new();
        let mut r = ranger(&clock, None, u32::MAX);

        assert_eq!(r.measure(), Err(EchoError::NoEchoStart));
        assert!(!r.counter.running);
        // The poll burned its full budget, one microsecond per iteration.
        assert!(clock.now() >= r.config.start_timeout_us);
    }

    #[test]
    fn test_echo_stuck_high_times_out() {
        let clock = Clock::new();
        // Rises promptly, never falls within the width ceiling.
        let mut r = ranger(&clock, Some((20, u32::MAX)), u32::MAX);

        assert_eq!(r.measure(), Err(EchoError::EchoStuckHigh));
        assert!(!r.counter.running);
    }

    #[test]
    fn test_cycles_are_independent() {
        let clock = Clock::new();
        let mut r = ranger(&clock, None, u32::MAX);
        assert!(r.measure().is_err());

        // Second cycle: echo present relative to the new cycle start.
        let cycle_start = clock.now();
        r.echo.window = Some((cycle_start + 100, cycle_start + 390));
        assert_eq!(r.measure().unwrap(), 290);
    }
}
