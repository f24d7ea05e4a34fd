//! Segment encoding table
//!
//! Every pattern is stored in common-cathode form (bit set = segment lit)
//! with the following layout:
//!
//! ```txt
//!    bit:  7 6 5 4 3 2 1 0
//! segment: A B C D E F G DP
//!
//!    * A *
//!    F   B
//!    * G *
//!    E   C
//!    * D *  DP
//! ```
//!
//! [`Polarity`] converts a stored pattern into the logic levels a given
//! wiring needs.

use crate::config::{Polarity, MAX_DIGITS};

/// Segment A (top)
pub const SEG_A: u8 = 0b_1000_0000;
/// Segment B (top right)
pub const SEG_B: u8 = 0b_0100_0000;
/// Segment C (bottom right)
pub const SEG_C: u8 = 0b_0010_0000;
/// Segment D (bottom)
pub const SEG_D: u8 = 0b_0001_0000;
/// Segment E (bottom left)
pub const SEG_E: u8 = 0b_0000_1000;
/// Segment F (top left)
pub const SEG_F: u8 = 0b_0000_0100;
/// Segment G (middle)
pub const SEG_G: u8 = 0b_0000_0010;
/// Decimal point
pub const POINT: u8 = 0b_0000_0001;

/// All segments off
pub const BLANK: u8 = 0b_0000_0000;

/// Minus sign
pub const MINUS: u8 = SEG_G;

/// Patterns for digits 0-9
pub const DIGITS: [u8; 10] = [
    0b_1111_1100, // 0
    0b_0110_0000, // 1
    0b_1101_1010, // 2
    0b_1111_0010, // 3
    0b_0110_0110, // 4
    0b_1011_0110, // 5
    0b_1011_1110, // 6
    0b_1110_0000, // 7
    0b_1111_1110, // 8
    0b_1111_0110, // 9
];

/// Patterns for letters a-z (case-insensitive)
pub const LETTERS: [u8; 26] = [
    0b_1110_1110, // a
    0b_0011_1110, // b
    0b_1001_1100, // c
    0b_0111_1010, // d
    0b_1001_1110, // e
    0b_1000_1110, // f
    0b_1011_1100, // g
    0b_0010_1110, // h
    0b_0000_1100, // i
    0b_0111_1000, // j
    0b_0110_1110, // k
    0b_0001_1100, // l
    0b_1010_1000, // m
    0b_0010_1010, // n
    0b_0011_1010, // o
    0b_1100_1110, // p
    0b_1110_0110, // q
    0b_0000_1010, // r
    0b_1011_0110, // s
    0b_0001_1110, // t
    0b_0111_1100, // u
    0b_0011_1000, // v
    0b_0101_0100, // w
    0b_0110_1110, // x
    0b_0111_0110, // y
    0b_1101_1010, // z
];

/// Digit-select bytes, one bit per digit position, left to right
pub const INDEXES: [u8; MAX_DIGITS] = [
    0b_1000_0000,
    0b_0100_0000,
    0b_0010_0000,
    0b_0001_0000,
    0b_0000_1000,
    0b_0000_0100,
    0b_0000_0010,
    0b_0000_0001,
];

/// Look up the common-cathode pattern for an ASCII character
///
/// Anything that is not a digit, a Latin letter or `-` encodes as blank.
pub const fn encode_char(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => DIGITS[(c - b'0') as usize],
        b'a'..=b'z' => LETTERS[(c - b'a') as usize],
        b'A'..=b'Z' => LETTERS[(c - b'A') as usize],
        b'-' => MINUS,
        _ => BLANK,
    }
}

impl Polarity {
    /// Convert a common-cathode pattern to the logic levels for this wiring
    ///
    /// Common cathode lights a segment with a high level, common anode with
    /// a low level, so common anode stores the complement.
    pub const fn apply(self, pattern: u8) -> u8 {
        match self {
            Polarity::CommonCathode => pattern,
            Polarity::CommonAnode => !pattern,
        }
    }

    /// Frame byte with every segment off
    pub const fn blank(self) -> u8 {
        self.apply(BLANK)
    }

    /// Digit-select byte for `index`
    ///
    /// The selected digit's common line is driven opposite to the segment
    /// "on" level: low for common cathode, high for common anode.
    pub const fn select(self, index: usize) -> u8 {
        let mask = INDEXES[index % MAX_DIGITS];
        match self {
            Polarity::CommonCathode => !mask,
            Polarity::CommonAnode => mask,
        }
    }

    /// Write the decimal point bit of an already polarity-adjusted byte
    ///
    /// Point on is bit 0 = 1 for common cathode and bit 0 = 0 for common anode.
    pub const fn with_point(self, byte: u8, show: bool) -> u8 {
        let high = match self {
            Polarity::CommonCathode => show,
            Polarity::CommonAnode => !show,
        };
        if high {
            byte | POINT
        } else {
            byte & !POINT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(encode_char(b'0'), SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F);
        assert_eq!(encode_char(b'1'), SEG_B | SEG_C);
        assert_eq!(encode_char(b'8'), !POINT);
    }

    #[test]
    fn test_letters_case_insensitive() {
        for (lower, upper) in (b'a'..=b'z').zip(b'A'..=b'Z') {
            assert_eq!(encode_char(lower), encode_char(upper));
        }
        assert_eq!(encode_char(b'E'), SEG_A | SEG_D | SEG_E | SEG_F | SEG_G);
    }

    #[test]
    fn test_minus_and_blank() {
        assert_eq!(encode_char(b'-'), SEG_G);
        assert_eq!(encode_char(b' '), BLANK);
        assert_eq!(encode_char(b'.'), BLANK);
        assert_eq!(encode_char(b'?'), BLANK);
        assert_eq!(encode_char(0xFF), BLANK);
    }

    #[test]
    fn test_no_pattern_uses_point_bit() {
        for pattern in DIGITS.iter().chain(LETTERS.iter()) {
            assert_eq!(pattern & POINT, 0);
        }
    }

    #[test]
    fn test_polarity_inverts() {
        let three = encode_char(b'3');
        assert_eq!(Polarity::CommonCathode.apply(three), three);
        assert_eq!(Polarity::CommonAnode.apply(three), !three);
        assert_eq!(Polarity::CommonCathode.blank(), 0x00);
        assert_eq!(Polarity::CommonAnode.blank(), 0xFF);
    }

    #[test]
    fn test_select() {
        assert_eq!(Polarity::CommonAnode.select(0), 0b_1000_0000);
        assert_eq!(Polarity::CommonAnode.select(7), 0b_0000_0001);
        assert_eq!(Polarity::CommonCathode.select(0), 0b_0111_1111);
        assert_eq!(Polarity::CommonCathode.select(3), 0b_1110_1111);
    }

    #[test]
    fn test_point_levels() {
        let cathode = Polarity::CommonCathode;
        assert_eq!(cathode.with_point(0x00, true), 0x01);
        assert_eq!(cathode.with_point(0x01, false), 0x00);

        let anode = Polarity::CommonAnode;
        assert_eq!(anode.with_point(0xFF, true), 0xFE);
        assert_eq!(anode.with_point(0xFE, false), 0xFF);
    }
}
