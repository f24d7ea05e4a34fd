//! Display configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of digit positions
///
/// The digit-select byte has one bit per position.
pub const MAX_DIGITS: usize = 8;

/// Default latch (storage register clock) pin
pub const DEFAULT_LATCH_PIN: u8 = 6;

/// Default shift clock pin
pub const DEFAULT_CLOCK_PIN: u8 = 7;

/// Default serial data pin
pub const DEFAULT_DATA_PIN: u8 = 5;

/// Default number of digit positions
pub const DEFAULT_DIGITS: u8 = 4;

/// Default time each digit is held lit during a refresh pass
pub const DEFAULT_DWELL_US: u32 = 1_000;

/// Display wiring convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Segments share the anode; a low segment line lights the segment
    CommonAnode,
    /// Segments share the cathode; a high segment line lights the segment
    #[default]
    CommonCathode,
}

/// Display hardware configuration
///
/// Immutable once a driver is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Latch (storage register clock) GPIO
    pub latch_pin: u8,
    /// Shift clock GPIO
    pub clock_pin: u8,
    /// Serial data GPIO
    pub data_pin: u8,
    /// Wiring convention
    pub polarity: Polarity,
    /// Number of digit positions (1-8)
    pub digits: u8,
    /// Per-digit dwell time in microseconds
    pub dwell_us: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::with_defaults(Polarity::CommonCathode, DEFAULT_DIGITS)
    }
}

impl DisplayConfig {
    /// Create a config, clamping `digits` into `1..=MAX_DIGITS`
    pub const fn new(
        latch_pin: u8,
        clock_pin: u8,
        data_pin: u8,
        polarity: Polarity,
        digits: u8,
    ) -> Self {
        Self {
            latch_pin,
            clock_pin,
            data_pin,
            polarity,
            digits: clamp_digits(digits),
            dwell_us: DEFAULT_DWELL_US,
        }
    }

    /// Create a config using the default pin numbers
    pub const fn with_defaults(polarity: Polarity, digits: u8) -> Self {
        Self::new(
            DEFAULT_LATCH_PIN,
            DEFAULT_CLOCK_PIN,
            DEFAULT_DATA_PIN,
            polarity,
            digits,
        )
    }

    /// Override the per-digit dwell time
    pub const fn with_dwell_us(mut self, dwell_us: u32) -> Self {
        self.dwell_us = dwell_us;
        self
    }

    /// Number of digit positions, always within `1..=MAX_DIGITS`
    pub const fn digit_count(&self) -> usize {
        clamp_digits(self.digits) as usize
    }

    /// Time for one full refresh pass over every digit
    pub const fn cycle_us(&self) -> u64 {
        self.dwell_us as u64 * self.digit_count() as u64
    }
}

const fn clamp_digits(digits: u8) -> u8 {
    if digits == 0 {
        1
    } else if digits as usize > MAX_DIGITS {
        MAX_DIGITS as u8
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_clamped() {
        let config = DisplayConfig::new(1, 2, 3, Polarity::CommonAnode, 12);
        assert_eq!(config.digits, 8);
        assert_eq!(config.digit_count(), 8);

        let config = DisplayConfig::new(1, 2, 3, Polarity::CommonAnode, 0);
        assert_eq!(config.digit_count(), 1);
    }

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.latch_pin, DEFAULT_LATCH_PIN);
        assert_eq!(config.clock_pin, DEFAULT_CLOCK_PIN);
        assert_eq!(config.data_pin, DEFAULT_DATA_PIN);
        assert_eq!(config.polarity, Polarity::CommonCathode);
        assert_eq!(config.digit_count(), 4);
        assert_eq!(config.dwell_us, 1_000);
    }

    #[test]
    fn test_cycle_time() {
        let config = DisplayConfig::with_defaults(Polarity::CommonAnode, 3).with_dwell_us(500);
        assert_eq!(config.cycle_us(), 1_500);
    }

    #[test]
    fn test_digit_count_clamps_direct_writes() {
        let mut config = DisplayConfig::default();
        config.digits = 200;
        assert_eq!(config.digit_count(), MAX_DIGITS);
    }
}
