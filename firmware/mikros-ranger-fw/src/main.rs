//! Mikros ultrasonic ranger image
//!
//! Perpetual measurement loop: trigger the sensor, time the echo under
//! two bounded timeouts, convert ticks to centimeters, and indicate the
//! result - a solid output pulse on detection, a short blink on timeout.
//! One foreground task; the only interrupt activity is the embassy time
//! driver behind the delays.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use mikros_core::config::{
    DETECT_THRESHOLD_CM, DISTANCE_DIVISOR, ERROR_BLINK_OFF_MS, ERROR_BLINK_ON_MS, MEASURE_GAP_MS,
    OUTPUT_PULSE_MS,
};
use mikros_core::range::ticks_to_cm;
use mikros_drivers::{EchoRanger, Indicator, RangerConfig};
use mikros_hal_rp2040::{MicrosCounter, OutputLine, SenseLine};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    info!("mikros-ranger-fw starting, threshold {} cm", DETECT_THRESHOLD_CM);

    // Detection output GPIO3, trigger GPIO4, echo sense GPIO5.
    let out = OutputLine::new(Output::new(p.PIN_3, Level::Low));
    let trig = OutputLine::new(Output::new(p.PIN_4, Level::Low));
    let echo = SenseLine::new(Input::new(p.PIN_5, Pull::None));

    let mut ranger = EchoRanger::new(
        trig,
        echo,
        MicrosCounter::new(),
        Delay,
        RangerConfig::standard(),
    );
    let mut indicator = Indicator::new(out, Delay);

    loop {
        match ranger.measure() {
            Ok(ticks) => {
                let distance_cm = ticks_to_cm(ticks, DISTANCE_DIVISOR);
                info!("echo {} us -> {} cm", ticks, distance_cm);

                if distance_cm < DETECT_THRESHOLD_CM {
                    indicator.pulse_ms(OUTPUT_PULSE_MS);
                }

                Timer::after(Duration::from_millis(MEASURE_GAP_MS as u64)).await;
            }
            Err(err) => {
                // Either poll ceiling degrades to the same indication.
                warn!("measurement timeout: {}", err);
                indicator.blink_ms(ERROR_BLINK_ON_MS, ERROR_BLINK_OFF_MS);
            }
        }
    }
}
