//! Hardware driver implementations
//!
//! This crate drives 7-segment digit modules through a chain of
//! serial-in/parallel-out shift registers (74HC595 style):
//!
//! - [`shift_register::ShiftRegister`] - latch/clock/data bit-banging
//! - [`display::ShiftDisplay`] - multiplexed display implementing
//!   [`shiftdisplay_core::SegmentDisplay`]
//!
//! Pins come from any [`shiftdisplay_hal::OutputPin`], elapsed time from a
//! [`shiftdisplay_hal::Clock`] and dwell holds from an
//! [`embedded_hal::delay::DelayNs`].

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod shift_register;

pub use display::ShiftDisplay;
pub use shift_register::{BitOrder, ShiftRegister};

#[cfg(test)]
pub(crate) mod bench;
