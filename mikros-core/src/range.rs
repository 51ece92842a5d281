//! Tick arithmetic and distance conversion for echo ranging
//!
//! Pure arithmetic over raw counter snapshots. The counter is free-running
//! and may wrap between the rising and falling edge captures; the elapsed
//! computation accounts for exactly one wrap, which the bounded timeouts
//! guarantee is all that can happen.

/// Reserved "no valid measurement" value: the maximum representable tick
/// count. Both timeout kinds and the distance derived from them collapse
/// to this sentinel.
pub const SENTINEL: u32 = u32::MAX;

/// Which bounded poll was exhausted during a measurement.
///
/// The kinds are distinct so callers can log which bound was exhausted,
/// but both surface the same sentinel and degrade to the same indication
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EchoError {
    /// The sense line never rose within the start timeout.
    NoEchoStart,
    /// The sense line rose but never fell within the width timeout.
    EchoStuckHigh,
}

impl EchoError {
    /// The sentinel value this error surfaces as.
    pub const fn sentinel(self) -> u32 {
        SENTINEL
    }
}

/// Elapsed ticks between two snapshots of a counter that wraps at
/// `max_count`.
///
/// `end >= start` is the common case; otherwise the counter wrapped once
/// and the elapsed span is `(max_count - start) + end + 1`.
pub const fn elapsed_ticks(start: u32, end: u32, max_count: u32) -> u32 {
    if end >= start {
        end - start
    } else {
        (max_count - start) + end + 1
    }
}

/// Convert an echo width in ticks to centimeters by truncating division.
///
/// The sentinel maps to the sentinel with no division performed.
pub const fn ticks_to_cm(ticks: u32, divisor: u32) -> u32 {
    if ticks == SENTINEL {
        return SENTINEL;
    }
    ticks / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DETECT_THRESHOLD_CM, DISTANCE_DIVISOR};
    use proptest::prelude::*;

    #[test]
    fn test_elapsed_no_wrap() {
        assert_eq!(elapsed_ticks(100, 1_260, u32::MAX), 1_160);
        assert_eq!(elapsed_ticks(0, 0, u32::MAX), 0);
        assert_eq!(elapsed_ticks(7, 7, 0xFFFF), 0);
    }

    #[test]
    fn test_elapsed_with_wrap() {
        // Counter wrapped once between the captures: 16 ticks from 0xFFF0
        // through the wrap to zero, 15 more to 0x000F.
        assert_eq!(elapsed_ticks(0xFFF0, 0x000F, 0xFFFF), 0x1F);
        assert_eq!(elapsed_ticks(u32::MAX, 0, u32::MAX), 1);
        assert_eq!(elapsed_ticks(1, 0, 0xFFFF), 0xFFFF);
    }

    #[test]
    fn test_elapsed_formula_holds_for_all_snapshots() {
        // Exhaustive over a small counter range R: for every start/end pair
        // the formula matches the defining case split.
        const R: u32 = 257;
        for start in 0..=R {
            for end in 0..=R {
                let elapsed = elapsed_ticks(start, end, R);
                if end >= start {
                    assert_eq!(elapsed, end - start);
                } else {
                    assert_eq!(elapsed, (R - start) + end + 1);
                }
                // Never more than one full revolution.
                assert!(elapsed <= R + 1);
            }
        }
    }

    proptest! {
        /// Advancing a wrapping counter by any span from any start must be
        /// recovered exactly, wrap or no wrap.
        #[test]
        fn test_elapsed_recovers_span(start in 0u32..=0xFFFF, span in 0u32..=0xFFFF) {
            const R: u32 = 0xFFFF;
            let end = ((start as u64 + span as u64) % (R as u64 + 1)) as u32;
            prop_assert_eq!(elapsed_ticks(start, end, R), span);
        }
    }

    #[test]
    fn test_conversion_truncates() {
        assert_eq!(ticks_to_cm(1_160, DISTANCE_DIVISOR), 20);
        assert_eq!(ticks_to_cm(1_000, DISTANCE_DIVISOR), 17);
        assert_eq!(ticks_to_cm(57, 58), 0);
        assert_eq!(ticks_to_cm(0, 58), 0);
    }

    #[test]
    fn test_sentinel_passes_through_conversion() {
        assert_eq!(ticks_to_cm(SENTINEL, DISTANCE_DIVISOR), SENTINEL);
        assert_eq!(EchoError::NoEchoStart.sentinel(), SENTINEL);
        assert_eq!(EchoError::EchoStuckHigh.sentinel(), SENTINEL);
    }

    #[test]
    fn test_threshold_scenarios() {
        // 1160 ticks -> exactly 20 cm: the strict `< 20` check must not fire.
        let at_threshold = ticks_to_cm(1_160, DISTANCE_DIVISOR);
        assert_eq!(at_threshold, 20);
        assert!(!(at_threshold < DETECT_THRESHOLD_CM));

        // 1000 ticks -> 17 cm: detection fires.
        let near = ticks_to_cm(1_000, DISTANCE_DIVISOR);
        assert_eq!(near, 17);
        assert!(near < DETECT_THRESHOLD_CM);
    }
}
