//! Board-agnostic core logic for multiplexed 7-segment displays
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Segment encoding table for digits, letters, minus and blank
//! - Value-to-characters conversion (integers and reals)
//! - Layout formatting (alignment, truncation, decimal point placement)
//! - The per-digit frame buffer with polarity applied
//! - Display configuration types and a TOML subset parser
//! - The [`traits::SegmentDisplay`] trait implemented by drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod convert;
pub mod encoding;
pub mod frame;
pub mod layout;
pub mod traits;
pub mod value;

pub use config::{DisplayConfig, Polarity, MAX_DIGITS};
pub use frame::FrameBuffer;
pub use layout::{Alignment, Layout};
pub use traits::SegmentDisplay;
pub use value::DisplayValue;
