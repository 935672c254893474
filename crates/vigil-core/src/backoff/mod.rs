//! Adaptive poll delay schedule.
//!
//! The delay before poll attempt `run` is `1000ms + e^(0.05 * run)` ms.
//! The curve is nearly flat for the first dozen attempts (a machine that
//! settles quickly is polled about once a second) and slows down long
//! sessions without ever stopping them. There is intentionally no upper
//! bound; see DESIGN.md.

use std::time::Duration;

/// Fixed floor of every poll delay, in milliseconds.
const FLOOR_MS: f64 = 1000.0;

/// Growth rate of the exponential term per completed run.
const GROWTH_RATE: f64 = 0.05;

/// Delay to wait before poll attempt number `run`.
pub fn delay(run: u32) -> Duration {
    let millis = FLOOR_MS + f64::exp(GROWTH_RATE * f64::from(run));
    Duration::from_secs_f64(millis / 1000.0)
}
