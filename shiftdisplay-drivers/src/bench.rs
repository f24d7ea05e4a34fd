//! Simulated shift-register chain for driver tests
//!
//! Two daisy-chained 8-bit registers sample the data line on each rising
//! clock edge and copy to their outputs on each rising latch edge. Time
//! only moves when the driver delays.

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use shiftdisplay_hal::{Clock, OutputPin};

/// One rising latch edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latched {
    /// Chain contents, first-shifted bit in bit 15
    pub value: u16,
    /// Simulated time of the edge
    pub at_us: u64,
}

impl Latched {
    /// First and second byte as shifted, assuming LSB-first transfer
    pub fn lsb_first_bytes(&self) -> (u8, u8) {
        let [first, second] = self.value.to_be_bytes();
        (first.reverse_bits(), second.reverse_bits())
    }

    /// First and second byte as shifted, assuming MSB-first transfer
    pub fn msb_first_bytes(&self) -> (u8, u8) {
        let [first, second] = self.value.to_be_bytes();
        (first, second)
    }
}

#[derive(Debug, Default)]
pub struct State {
    latch: bool,
    clock: bool,
    data: bool,
    chain: u16,
    time_ns: u64,
    pub latched: Vec<Latched, 256>,
    pub latch_count: usize,
}

/// Shared wire state; pins, clock and delay all borrow it
#[derive(Debug, Default)]
pub struct Bench(RefCell<State>);

#[derive(Debug, Clone, Copy)]
enum Line {
    Latch,
    Clock,
    Data,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pins(&self) -> (BenchPin<'_>, BenchPin<'_>, BenchPin<'_>) {
        (
            BenchPin { line: Line::Latch, bench: self },
            BenchPin { line: Line::Clock, bench: self },
            BenchPin { line: Line::Data, bench: self },
        )
    }

    pub fn time(&self) -> BenchTime<'_> {
        BenchTime(self)
    }

    pub fn latched(&self) -> Vec<Latched, 256> {
        self.0.borrow().latched.clone()
    }

    pub fn latch_count(&self) -> usize {
        self.0.borrow().latch_count
    }

    pub fn now_us(&self) -> u64 {
        self.0.borrow().time_ns / 1_000
    }

    fn advance_ns(&self, ns: u64) {
        self.0.borrow_mut().time_ns += ns;
    }

    fn write(&self, line: Line, high: bool) {
        let mut state = self.0.borrow_mut();
        match line {
            Line::Data => state.data = high,
            Line::Clock => {
                if high && !state.clock {
                    state.chain = (state.chain << 1) | u16::from(state.data);
                }
                state.clock = high;
            }
            Line::Latch => {
                if high && !state.latch {
                    let latched = Latched {
                        value: state.chain,
                        at_us: state.time_ns / 1_000,
                    };
                    let _ = state.latched.push(latched);
                    state.latch_count += 1;
                }
                state.latch = high;
            }
        }
    }
}

pub struct BenchPin<'a> {
    line: Line,
    bench: &'a Bench,
}

impl OutputPin for BenchPin<'_> {
    fn set_high(&mut self) {
        self.bench.write(self.line, true);
    }

    fn set_low(&mut self) {
        self.bench.write(self.line, false);
    }
}

/// Clock and delay over the bench's simulated time
pub struct BenchTime<'a>(&'a Bench);

impl Clock for BenchTime<'_> {
    fn now_us(&self) -> u64 {
        self.0.now_us()
    }
}

impl DelayNs for BenchTime<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.advance_ns(u64::from(ns));
    }
}
