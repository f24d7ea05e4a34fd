//! ShiftDisplay Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the display driver
//! needs. Chip-specific crates implement them so the same driver runs on
//! any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  shiftdisplay-drivers (ShiftDisplay)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  shiftdisplay-hal (this crate - traits) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ shiftdisplay-hal- │
//!           │      rp2040       │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (latch, clock and data lines)
//! - [`time::Clock`] - Monotonic time source for timed refresh

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

pub use gpio::OutputPin;
pub use time::Clock;
