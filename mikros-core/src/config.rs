//! Compile-time configuration
//!
//! All tunables are one set of constants. Out-of-range values are
//! configuration defects and fail the build through the `const` assertions
//! at the bottom of this module; nothing here is checked at runtime.

// --- Pulse generation (servo image) ---

/// Full pulse frame, HIGH phase plus LOW phase (50 Hz servo frame).
pub const FRAME_PERIOD_US: u32 = 20_000;

/// Narrowest duty width the sweep may reach (SG90 full left).
pub const MIN_PULSE_US: u32 = 500;

/// Widest duty width the sweep may reach (SG90 full right).
pub const MAX_PULSE_US: u32 = 2_500;

/// Duty width at power-up, mid travel.
pub const SWEEP_START_US: u32 = 1_500;

/// Sweep increment per frame. Smaller is smoother.
pub const STEP_US: u32 = 5;

/// Frames to hold at a sweep bound before reversing (~0.5 s).
pub const DWELL_FRAMES: u32 = 25;

// --- Echo ranging (ranger image) ---

/// Trigger line settle time before a measurement.
pub const TRIG_SETTLE_US: u32 = 2;

/// Trigger pulse length.
pub const TRIG_PULSE_US: u32 = 10;

/// Bounded-poll ceiling waiting for the echo to start.
pub const ECHO_START_TIMEOUT_US: u32 = 30_000;

/// Bounded-poll ceiling on the echo width itself.
pub const ECHO_WIDTH_TIMEOUT_US: u32 = 30_000;

/// Empirical ticks-to-centimeters divisor (HC-SR04: ~58 µs/cm round trip).
pub const DISTANCE_DIVISOR: u32 = 58;

/// Distances below this fire the detection output.
pub const DETECT_THRESHOLD_CM: u32 = 20;

/// Detection output pulse length.
pub const OUTPUT_PULSE_MS: u32 = 100;

/// Gap between successful measurement cycles.
pub const MEASURE_GAP_MS: u32 = 60;

/// Timeout indication blink timing.
pub const ERROR_BLINK_ON_MS: u32 = 80;
pub const ERROR_BLINK_OFF_MS: u32 = 80;

// --- Design-time defect checks ---

// Sweep bounds must be a real range and the step must fit inside it,
// otherwise the sweep would oscillate or escape its bounds.
const _: () = assert!(MIN_PULSE_US < MAX_PULSE_US);
const _: () = assert!(STEP_US >= 1);
const _: () = assert!(STEP_US < MAX_PULSE_US - MIN_PULSE_US);
const _: () = assert!(MIN_PULSE_US <= SWEEP_START_US && SWEEP_START_US <= MAX_PULSE_US);
const _: () = assert!(DWELL_FRAMES >= 1);

// Both timer intervals of a frame must stay representable and non-zero:
// the LOW remainder is FRAME_PERIOD_US - width for any in-bounds width.
const _: () = assert!(MAX_PULSE_US < FRAME_PERIOD_US);
const _: () = assert!(MIN_PULSE_US >= 1);

// Ranging timeouts must be non-zero and small enough that a well-formed
// measurement can never be mistaken for the sentinel.
const _: () = assert!(ECHO_START_TIMEOUT_US >= 1);
const _: () = assert!(ECHO_WIDTH_TIMEOUT_US >= 1);
const _: () = assert!(ECHO_WIDTH_TIMEOUT_US < u32::MAX);
const _: () = assert!(DISTANCE_DIVISOR >= 1);
