//! GPIO outputs

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use shiftdisplay_hal::OutputPin;

/// Push-pull output starting low
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}
