//! Display driver trait
//!
//! The outer control loop (encoder polling, host protocol) talks to a
//! display only through this trait, so it never depends on how the digits
//! are wired.

use crate::layout::Alignment;
use crate::value::DisplayValue;

/// A multiplexed 7-segment display
///
/// Every operation is infallible. Values that do not fit are truncated and
/// out-of-range indexes are ignored.
pub trait SegmentDisplay {
    /// Encode `value` into the frame buffer without touching the hardware
    fn set(&mut self, value: DisplayValue<'_>, alignment: Alignment);

    /// Light the decimal point of digit `index`
    fn insert_point(&mut self, index: usize);

    /// Clear the decimal point of digit `index`
    fn remove_point(&mut self, index: usize);

    /// Run one refresh pass over every digit, then blank the outputs
    fn show(&mut self);

    /// Refresh repeatedly for about `duration_ms`, then blank the outputs
    ///
    /// Blocks the caller for the whole duration.
    fn show_for(&mut self, duration_ms: u32);

    /// Encode a real with explicit decimal places
    fn set_real(&mut self, value: f64, decimal_places: u8, alignment: Alignment) {
        self.set(DisplayValue::real(value, decimal_places), alignment);
    }

    /// [`set`](Self::set) followed by [`show_for`](Self::show_for)
    fn print(&mut self, duration_ms: u32, value: DisplayValue<'_>, alignment: Alignment) {
        self.set(value, alignment);
        self.show_for(duration_ms);
    }

    /// [`set_real`](Self::set_real) followed by [`show_for`](Self::show_for)
    fn print_real(&mut self, duration_ms: u32, value: f64, decimal_places: u8, alignment: Alignment) {
        self.set_real(value, decimal_places, alignment);
        self.show_for(duration_ms);
    }
}
