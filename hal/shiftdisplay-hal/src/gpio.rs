//! GPIO pin abstractions
//!
//! The shift-register chain is driven by three plain digital outputs.

/// Digital output pin
///
/// Writes are infallible from the driver's point of view. Implementations
/// for chips whose HAL returns a `Result` must absorb the error.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }
}
