//! Multiplexed shift-register display
//!
//! Two registers sit in the chain: the one furthest from the MCU selects a
//! digit (one bit per position), the nearer one carries that digit's
//! segments. Lighting one digit at a time and cycling faster than the eye
//! can follow produces an apparently steady multi-digit image.
//!
//! # Refresh cycle
//!
//! ```text
//! for each digit i:
//!     latch low
//!     shift select(i)   LSB first   -> digit-select register
//!     shift frame[i]    LSB first   -> segment register
//!     latch high
//!     hold dwell_us
//! latch low, shift 0x00 0x00 MSB first, latch high    (blank)
//! ```
//!
//! Everything blocks. [`SegmentDisplay::show_for`] busy-waits for the whole
//! requested duration; callers that must poll other inputs interleave
//! single [`SegmentDisplay::show`] passes instead.
//!
//! # Usage
//!
//! ```ignore
//! let config = DisplayConfig::with_defaults(Polarity::CommonAnode, 4);
//! let mut display = ShiftDisplay::new(config, latch, clock, data, clock_source, delay);
//!
//! display.set(DisplayValue::real(3.14, 2), Alignment::Right);
//! loop {
//!     display.show();
//!     // poll encoder, handle host messages...
//! }
//! ```

use embedded_hal::delay::DelayNs;
use shiftdisplay_core::{Alignment, DisplayConfig, DisplayValue, FrameBuffer, SegmentDisplay};
use shiftdisplay_hal::{Clock, OutputPin};

use crate::shift_register::{BitOrder, ShiftRegister};

/// Bytes that turn every output off whatever the polarity
///
/// Select and segment lines at the same level leave no voltage across any
/// LED.
const CLEAR: [u8; 2] = [0x00, 0x00];

/// Multiplexed 7-segment display on a shift-register chain
///
/// - `L`, `C`, `D`: latch, clock and data pins
/// - `K`: monotonic clock for timed refresh
/// - `W`: delay used for the per-digit dwell
pub struct ShiftDisplay<L, C, D, K, W> {
    config: DisplayConfig,
    frame: FrameBuffer,
    register: ShiftRegister<L, C, D>,
    clock: K,
    delay: W,
}

impl<L, C, D, K, W> ShiftDisplay<L, C, D, K, W>
where
    L: OutputPin,
    C: OutputPin,
    D: OutputPin,
    K: Clock,
    W: DelayNs,
{
    /// Create a display driver
    ///
    /// The frame buffer starts blank. Digit count comes from
    /// [`DisplayConfig::digit_count`], which is always within `1..=8`.
    pub fn new(
        config: DisplayConfig,
        latch: L,
        clock_pin: C,
        data: D,
        clock: K,
        delay: W,
    ) -> Self {
        let frame = FrameBuffer::new(config.digit_count(), config.polarity);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ShiftDisplay: {} digits, {}, dwell {}us",
            frame.digit_count(),
            config.polarity,
            config.dwell_us
        );

        Self {
            config,
            frame,
            register: ShiftRegister::new(latch, clock_pin, data),
            clock,
            delay,
        }
    }

    /// Configuration the driver was built with
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current frame buffer contents
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Tear down the driver and return its resources
    pub fn release(self) -> (L, C, D, K, W) {
        let (latch, clock_pin, data) = self.register.release();
        (latch, clock_pin, data, self.clock, self.delay)
    }

    /// Light each digit once for the dwell time, leaving the last one lit
    fn refresh(&mut self) {
        let polarity = self.frame.polarity();
        for (index, &segments) in self.frame.as_bytes().iter().enumerate() {
            self.register
                .write(&[polarity.select(index), segments], BitOrder::LsbFirst);
            self.delay.delay_us(self.config.dwell_us);
        }
    }

    /// Blank every output
    fn clear(&mut self) {
        self.register.write(&CLEAR, BitOrder::MsbFirst);
    }
}

impl<L, C, D, K, W> SegmentDisplay for ShiftDisplay<L, C, D, K, W>
where
    L: OutputPin,
    C: OutputPin,
    D: OutputPin,
    K: Clock,
    W: DelayNs,
{
    fn set(&mut self, value: DisplayValue<'_>, alignment: Alignment) {
        let layout = value.layout(self.frame.digit_count(), alignment);

        #[cfg(feature = "defmt")]
        defmt::debug!("set {} -> {}", value, layout);

        self.frame.encode(&layout);
    }

    fn insert_point(&mut self, index: usize) {
        self.frame.insert_point(index);
    }

    fn remove_point(&mut self, index: usize) {
        self.frame.remove_point(index);
    }

    fn show(&mut self) {
        self.refresh();
        self.clear();
    }

    fn show_for(&mut self, duration_ms: u32) {
        let start = self.clock.now_us();

        // Stop early enough that the last pass ends within the duration
        let budget_us = u64::from(duration_ms) * 1_000;
        if let Some(last_start_us) = budget_us.checked_sub(self.config.cycle_us()) {
            while self.clock.elapsed_us(start) <= last_start_us {
                self.refresh();
            }
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("show_for {}ms took {}us", duration_ms, self.clock.elapsed_us(start));

        self.clear();
    }
}
