//! Value-to-characters conversion
//!
//! Integers become their minimal decimal representation with a leading `-`
//! when negative. Reals are scaled by `10^decimal_places`, rounded
//! half away from zero, and rendered as that scaled integer. The layout
//! formatter decides where the decimal point goes.

use heapless::Vec;

/// Capacity for a converted value
///
/// Enough for any `i64` plus a sign and the maximum decimal places.
pub const MAX_CHARACTERS: usize = 32;

/// Decimal places used for reals when the caller gives none
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Upper bound on requested decimal places
///
/// Beyond this the scaled value no longer fits an `i64` for ordinary inputs.
pub const MAX_DECIMAL_PLACES: u8 = 9;

/// Characters produced by the converter, ASCII only
pub type Characters = Vec<u8, MAX_CHARACTERS>;

/// Number of characters needed to print `number`, minus sign included
pub fn count_characters(number: i64) -> usize {
    usize::from(number < 0) + count_digits(number.unsigned_abs())
}

/// Number of decimal digits in `magnitude` (zero has one digit)
pub fn count_digits(magnitude: u64) -> usize {
    if magnitude < 10 {
        1
    } else {
        1 + count_digits(magnitude / 10)
    }
}

/// Render `number` into exactly `size` characters
///
/// Digits fill from the right and are zero padded on the left. A negative
/// number overwrites position 0 with `-`. When `size` is too small the most
/// significant digits are lost.
pub fn get_characters(number: i64, size: usize) -> Characters {
    write_characters(number.unsigned_abs(), number < 0, size)
}

/// Render a real value with `decimal_places` digits after the (implicit) point
///
/// With zero decimal places the value is rounded and rendered as an integer.
/// Otherwise the integer part length comes from the rounded value, so a
/// carry such as `9.996 -> 10.00` gets its extra digit. Any negative input
/// keeps its minus sign, including values in `(-1, 0)` (`-0.3` with one
/// place renders as `-03`).
pub fn real_characters(value: f64, decimal_places: u8) -> Characters {
    let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
    let scaled = round_scaled(value, decimal_places);

    if decimal_places == 0 {
        return get_characters(scaled, count_characters(scaled));
    }

    let magnitude = scaled.unsigned_abs();
    let integer_part = magnitude / 10u64.pow(u32::from(decimal_places));
    let negative = value < 0.0;
    let size = usize::from(negative) + count_digits(integer_part) + usize::from(decimal_places);

    write_characters(magnitude, negative, size)
}

/// Scale by `10^decimal_places` and round half away from zero
///
/// Out-of-range results saturate at the `i64` bounds; NaN becomes zero.
pub fn round_scaled(value: f64, decimal_places: u8) -> i64 {
    let mut scaled = value;
    for _ in 0..decimal_places {
        scaled *= 10.0;
    }

    if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    }
}

fn write_characters(mut magnitude: u64, negative: bool, size: usize) -> Characters {
    let mut characters = Characters::new();
    let _ = characters.resize(size.min(MAX_CHARACTERS), b'0');

    for slot in characters.iter_mut().rev() {
        *slot = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
    }

    if negative {
        if let Some(first) = characters.first_mut() {
            *first = b'-';
        }
    }

    characters
}
