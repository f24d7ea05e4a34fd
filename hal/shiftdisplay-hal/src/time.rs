//! Time source abstraction
//!
//! Timed refresh needs real elapsed wall-clock time, so the driver reads a
//! monotonic clock rather than counting loop iterations.

/// Monotonic microsecond clock
pub trait Clock {
    /// Microseconds since an arbitrary fixed epoch
    ///
    /// Must never go backwards.
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since `start` (a value from [`Clock::now_us`])
    fn elapsed_us(&self, start: u64) -> u64 {
        self.now_us().saturating_sub(start)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
