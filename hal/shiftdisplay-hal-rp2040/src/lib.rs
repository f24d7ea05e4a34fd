//! RP2040 HAL for the ShiftDisplay driver
//!
//! Implements the `shiftdisplay-hal` traits on top of `embassy-rp`:
//!
//! - Push-pull GPIO outputs for the latch, clock and data lines
//! - A microsecond clock backed by the embassy time driver
//! - Dynamic pin allocation for config-driven setup
//!
//! The per-digit dwell uses `embassy_time::Delay`, which already
//! implements `embedded_hal::delay::DelayNs`.

#![no_std]

pub mod gpio;
pub mod pins;
pub mod time;

pub use gpio::RpOutput;
pub use pins::{PinBank, PinError};
pub use time::EmbassyClock;

pub use shiftdisplay_hal::{Clock, OutputPin};
