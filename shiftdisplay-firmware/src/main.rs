//! ShiftDisplay demo firmware
//!
//! Drives a multiplexed 7-segment display on an RP2040 from the wiring in
//! `display.toml`: a short greeting, then a counter with a blinking point.
//!
//! The display refresh busy-waits, so everything runs on the main task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use shiftdisplay_core::config::parse_config;
use shiftdisplay_core::{Alignment, DisplayValue, SegmentDisplay};
use shiftdisplay_drivers::ShiftDisplay;
use shiftdisplay_hal_rp2040::{pin_bank, EmbassyClock};

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// How long each counter value stays up
const TICK_MS: u32 = 250;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ShiftDisplay firmware starting...");

    let p = embassy_rp::init(Default::default());

    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => panic!("display.toml rejected: {}", e),
    };
    info!("Display config: {}", config);

    let mut bank = pin_bank!(p);
    let latch = unwrap!(bank.output(config.latch_pin));
    let clock = unwrap!(bank.output(config.clock_pin));
    let data = unwrap!(bank.output(config.data_pin));

    let mut display = ShiftDisplay::new(config, latch, clock, data, EmbassyClock, Delay);

    display.print(1500, DisplayValue::from("hi"), Alignment::Center);
    display.print_real(1500, 3.14159, 3, Alignment::Left);

    let mut count: i32 = 0;
    loop {
        display.set(DisplayValue::from(count), Alignment::Right);
        if count % 2 == 0 {
            display.insert_point(config.digit_count() - 1);
        }
        display.show_for(TICK_MS);

        count = count.wrapping_add(1);
        if count % 100 == 0 {
            debug!("count {}", count);
        }
    }
}
