//! Monotonic interval timer.
//!
//! [`Timer`] records two `CLOCK_MONOTONIC` readings in nanoseconds. The
//! elapsed accessors subtract them with wrapping arithmetic, so a timer that
//! was stopped before it was started reports a huge value rather than
//! panicking.
//!
//! ```rust
//! use nixplat::timer::Timer;
//!
//! let (sum, timer) = Timer::time(|| (1..=1000u64).sum::<u64>());
//! assert_eq!(sum, 500_500);
//! assert!(timer.seconds() >= 0.0);
//! ```

use serde::Serialize;
use std::mem::MaybeUninit;

use crate::constants::{NANOS_PER_SECOND, TIMER_UNIT_DIVISOR};

/// Start and stop timestamps in nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Timer {
    pub start: u64,
    pub stop: u64,
}

impl Timer {
    /// A timer with both timestamps at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { start: 0, stop: 0 }
    }

    /// Record the start time. A failed clock read leaves `start` unchanged.
    pub fn start(&mut self) {
        if let Some(now) = monotonic_nanos() {
            self.start = now;
        }
    }

    /// Record the stop time. A failed clock read leaves `stop` unchanged.
    pub fn stop(&mut self) {
        if let Some(now) = monotonic_nanos() {
            self.stop = now;
        }
    }

    #[must_use]
    pub const fn nanoseconds(&self) -> u64 {
        self.stop.wrapping_sub(self.start)
    }

    #[must_use]
    pub fn microseconds(&self) -> f64 {
        self.nanoseconds() as f64 / TIMER_UNIT_DIVISOR
    }

    #[must_use]
    pub fn milliseconds(&self) -> f64 {
        self.microseconds() / TIMER_UNIT_DIVISOR
    }

    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.milliseconds() / TIMER_UNIT_DIVISOR
    }

    /// Run `f` between a start and a stop, returning its value and the timer.
    pub fn time<T>(f: impl FnOnce() -> T) -> (T, Self) {
        let mut timer = Self::new();
        timer.start();
        let value = f();
        timer.stop();
        (value, timer)
    }
}

/// Current `CLOCK_MONOTONIC` reading in nanoseconds.
fn monotonic_nanos() -> Option<u64> {
    let mut ts = MaybeUninit::<libc::timespec>::zeroed();

    // SAFETY: `ts` is valid writable storage for one timespec.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, ts.as_mut_ptr()) };
    if rc != 0 {
        tracing::trace!(
            "clock_gettime(CLOCK_MONOTONIC) failed: {}",
            std::io::Error::last_os_error()
        );
        return None;
    }

    // SAFETY: zero-initialised and filled in by a successful call.
    let ts = unsafe { ts.assume_init() };
    let secs = u64::try_from(ts.tv_sec).ok()?;
    let nanos = u64::try_from(ts.tv_nsec).ok()?;
    Some(secs.wrapping_mul(NANOS_PER_SECOND).wrapping_add(nanos))
}
