//! Frame buffer
//!
//! One polarity-adjusted segment byte per digit position. Encoding a layout
//! replaces the whole buffer at once so a refresh never shows a mix of old
//! and new digits.

use crate::config::{Polarity, MAX_DIGITS};
use crate::encoding::encode_char;
use crate::layout::Layout;

/// Encoded bytes awaiting display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer {
    bytes: [u8; MAX_DIGITS],
    digit_count: usize,
    polarity: Polarity,
}

impl FrameBuffer {
    /// Create a blank buffer, clamping `digit_count` into `1..=MAX_DIGITS`
    pub fn new(digit_count: usize, polarity: Polarity) -> Self {
        let digit_count = digit_count.clamp(1, MAX_DIGITS);
        let mut frame = Self {
            bytes: [0; MAX_DIGITS],
            digit_count,
            polarity,
        };
        frame.encode(&Layout::blank(digit_count));
        frame
    }

    /// Number of digit positions
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// Wiring convention applied to every byte
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Encoded bytes, left to right
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.digit_count]
    }

    /// Encoded byte at `index`, if on the display
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Replace the whole buffer with the encoding of `layout`
    ///
    /// Layout positions beyond the buffer are ignored; buffer positions the
    /// layout does not cover become blank.
    pub fn encode(&mut self, layout: &Layout) {
        let mut bytes = [self.polarity.blank(); MAX_DIGITS];

        for (byte, &c) in bytes
            .iter_mut()
            .take(self.digit_count)
            .zip(layout.characters.iter())
        {
            *byte = self.polarity.apply(encode_char(c));
        }

        if let Some(point) = layout.point.filter(|&p| p < self.digit_count) {
            bytes[point] = self.polarity.with_point(bytes[point], true);
        }

        self.bytes = bytes;
    }

    /// Light the decimal point at `index`; no-op when off the display
    pub fn insert_point(&mut self, index: usize) {
        self.write_point(index, true);
    }

    /// Clear the decimal point at `index`; no-op when off the display
    pub fn remove_point(&mut self, index: usize) {
        self.write_point(index, false);
    }

    fn write_point(&mut self, index: usize, show: bool) {
        if index < self.digit_count {
            self.bytes[index] = self.polarity.with_point(self.bytes[index], show);
        }
    }
}
