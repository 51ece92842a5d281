//! Mikros servo sweep image
//!
//! Emits a 50 Hz servo pulse train whose duty width sweeps between its
//! bounds. The SysTick exception drives the two-phase pulse generator;
//! the foreground loop steps the sweep once per completed frame.
//!
//! Exactly two execution contexts share state, without locks:
//! [`PULSE_WIDTH_US`] (foreground writes, handler reads) and
//! [`FRAME_DONE`] (handler sets, foreground consumes). Both are single
//! words; the swap on the flag is backed by the critical-section
//! implementation `embassy-rp` provides, since thumbv6m has no CAS.

#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use cortex_m_rt::{entry, exception};
use defmt::{debug, info};
use embassy_rp::gpio::{Level, Output};
use portable_atomic::{AtomicBool, AtomicU32, Ordering};
use {defmt_rtt as _, panic_probe as _};

use mikros_core::config::{
    FRAME_PERIOD_US, MAX_PULSE_US, MIN_PULSE_US, SWEEP_START_US,
};
use mikros_core::sweep::{Sweep, SweepConfig};
use mikros_drivers::PulseGenerator;
use mikros_hal_rp2040::{OutputLine, SysTickTimer};

type Generator = PulseGenerator<OutputLine<'static>, SysTickTimer>;

/// Duty width for the next firing: foreground writes, handler reads.
static PULSE_WIDTH_US: AtomicU32 = AtomicU32::new(SWEEP_START_US);

/// End-of-frame signal: handler sets, foreground reads-and-clears. A
/// delayed consume is absorbed into the next frame, never duplicated.
static FRAME_DONE: AtomicBool = AtomicBool::new(false);

/// Generator state; touched only from the SysTick handler once started.
static GENERATOR: Mutex<RefCell<Option<Generator>>> = Mutex::new(RefCell::new(None));

// Every interval a frame can program must be representable by SysTick.
const _: () = assert!(FRAME_PERIOD_US - MIN_PULSE_US <= SysTickTimer::MAX_INTERVAL_US);
const _: () = assert!(FRAME_PERIOD_US <= SysTickTimer::MAX_INTERVAL_US);

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    let cp = cortex_m::Peripherals::take().unwrap();

    info!("mikros-servo-fw starting, frame {} us", FRAME_PERIOD_US);

    // Servo signal line (RP2040 GPIO2).
    let pin = OutputLine::new(Output::new(p.PIN_2, Level::Low));
    let timer = SysTickTimer::new(cp.SYST);
    let mut generator = PulseGenerator::new(pin, timer, FRAME_PERIOD_US);

    let mut sweep = Sweep::new(SweepConfig::standard(), SWEEP_START_US);
    PULSE_WIDTH_US.store(sweep.width_us(), Ordering::Relaxed);

    // Arm inside the critical section so the first firing cannot preempt
    // the handoff of the generator into its static slot.
    cortex_m::interrupt::free(|cs| {
        generator.start(SWEEP_START_US);
        GENERATOR.borrow(cs).replace(Some(generator));
    });

    let mut prev_width = SWEEP_START_US;
    loop {
        if FRAME_DONE.swap(false, Ordering::AcqRel) {
            let width = sweep.advance();
            PULSE_WIDTH_US.store(width, Ordering::Relaxed);

            if width != prev_width && (width == MIN_PULSE_US || width == MAX_PULSE_US) {
                debug!("sweep reached bound {} us", width);
            }
            prev_width = width;
        } else {
            // Sleep until the next firing; at worst one update is
            // deferred into the following frame.
            cortex_m::asm::wfi();
        }
    }
}

#[exception]
fn SysTick() {
    cortex_m::interrupt::free(|cs| {
        if let Some(generator) = GENERATOR.borrow(cs).borrow_mut().as_mut() {
            let width = PULSE_WIDTH_US.load(Ordering::Relaxed);
            if generator.on_timer_fire(width) {
                FRAME_DONE.store(true, Ordering::Release);
            }
        }
    });
}
