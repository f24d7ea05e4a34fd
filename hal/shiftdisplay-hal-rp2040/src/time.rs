//! Monotonic time

use embassy_time::Instant;
use shiftdisplay_hal::Clock;

/// Microseconds since boot from the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
