//! Serial-in/parallel-out shift register chain
//!
//! Bit-bangs the classic three-wire protocol: pull the latch low, present
//! each bit on the data line and pulse the clock, then raise the latch to
//! copy the shifted bits to the outputs. With several registers daisy
//! chained, the first byte shifted ends up in the register furthest from
//! the microcontroller.

use shiftdisplay_hal::OutputPin;

/// Order in which the bits of a byte go out on the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 first
    MsbFirst,
    /// Bit 0 first
    LsbFirst,
}

/// Three-wire shift register chain
pub struct ShiftRegister<L, C, D> {
    latch: L,
    clock: C,
    data: D,
}

impl<L: OutputPin, C: OutputPin, D: OutputPin> ShiftRegister<L, C, D> {
    /// Take ownership of the pins and drive them to a known idle state
    pub fn new(latch: L, clock: C, data: D) -> Self {
        let mut register = Self { latch, clock, data };
        register.latch.set_low();
        register.clock.set_low();
        register.data.set_low();
        register
    }

    /// Shift one byte out without touching the latch
    pub fn shift_out(&mut self, byte: u8, order: BitOrder) {
        for i in 0..8 {
            let bit = match order {
                BitOrder::MsbFirst => byte & (0x80 >> i),
                BitOrder::LsbFirst => byte & (0x01 << i),
            };
            self.data.set_state(bit != 0);
            self.clock.set_high();
            self.clock.set_low();
        }
    }

    /// Shift `bytes` out in order and latch them onto the outputs
    pub fn write(&mut self, bytes: &[u8], order: BitOrder) {
        self.latch.set_low();
        for &byte in bytes {
            self.shift_out(byte, order);
        }
        self.latch.set_high();
    }

    /// Give the pins back
    pub fn release(self) -> (L, C, D) {
        (self.latch, self.clock, self.data)
    }
}
