//! Display input values
//!
//! One tagged type for everything a display can be asked to show. Each
//! variant keeps its own conversion rule but shares the layout pipeline.

use crate::convert::{
    count_characters, get_characters, real_characters, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES,
};
use crate::layout::{format_characters, Alignment, Layout};

/// A value to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue<'a> {
    /// Signed integer, minimal decimal form
    Integer(i64),
    /// Real number with a fixed count of decimal places
    Real {
        /// Value to show
        value: f64,
        /// Digits after the decimal point (0 rounds to an integer)
        decimal_places: u8,
    },
    /// Single character
    Character(char),
    /// Text, one display position per character
    Text(&'a str),
}

impl<'a> DisplayValue<'a> {
    /// A real value with an explicit number of decimal places
    pub const fn real(value: f64, decimal_places: u8) -> Self {
        Self::Real {
            value,
            decimal_places,
        }
    }

    /// Convert and lay out the value over `digit_count` positions
    pub fn layout(&self, digit_count: usize, alignment: Alignment) -> Layout {
        match *self {
            Self::Integer(number) => {
                let size = count_characters(number);
                let characters = get_characters(number, size);
                format_characters(characters, size, digit_count, alignment, None)
            }
            Self::Real {
                value,
                decimal_places,
            } => {
                // Characters and point must agree on the capped count
                let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
                let characters = real_characters(value, decimal_places);
                let size = characters.len();
                let places = (decimal_places > 0).then_some(decimal_places);
                format_characters(characters, size, digit_count, alignment, places)
            }
            Self::Character(c) => {
                format_characters([ascii_or_blank(c)], 1, digit_count, alignment, None)
            }
            Self::Text(text) => {
                let size = text.chars().count();
                let characters = text.chars().map(ascii_or_blank);
                format_characters(characters, size, digit_count, alignment, None)
            }
        }
    }
}

/// Non-ASCII characters have no pattern and occupy a blank position
fn ascii_or_blank(c: char) -> u8 {
    if c.is_ascii() {
        c as u8
    } else {
        b' '
    }
}

macro_rules! integer_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DisplayValue<'_> {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for DisplayValue<'_> {
    fn from(value: f32) -> Self {
        Self::real(f64::from(value), DEFAULT_DECIMAL_PLACES)
    }
}

impl From<f64> for DisplayValue<'_> {
    fn from(value: f64) -> Self {
        Self::real(value, DEFAULT_DECIMAL_PLACES)
    }
}

impl From<char> for DisplayValue<'_> {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl<'a> From<&'a str> for DisplayValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayValue<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Integer(number) => defmt::write!(f, "Integer({})", number),
            Self::Real {
                value,
                decimal_places,
            } => defmt::write!(f, "Real({}, {})", value, decimal_places),
            Self::Character(c) => defmt::write!(f, "Character({})", c),
            Self::Text(text) => defmt::write!(f, "Text({})", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(value: DisplayValue<'_>, digits: usize, alignment: Alignment) -> Layout {
        value.layout(digits, alignment)
    }

    #[test]
    fn test_integer() {
        let layout = chars(DisplayValue::from(-42), 4, Alignment::Right);
        assert_eq!(layout.characters.as_slice(), b" -42");
        assert_eq!(layout.point, None);
    }

    #[test]
    fn test_integer_overflow_keeps_low_digits() {
        let layout = chars(DisplayValue::from(123_456), 4, Alignment::Right);
        assert_eq!(layout.characters.as_slice(), b"3456");
    }

    #[test]
    fn test_real_right() {
        let layout = chars(DisplayValue::real(3.14, 2), 4, Alignment::Right);
        assert_eq!(layout.characters.as_slice(), b" 314");
        assert_eq!(layout.point, Some(1));
    }

    #[test]
    fn test_negative_fraction_left() {
        let layout = chars(DisplayValue::real(-0.3, 1), 3, Alignment::Left);
        assert_eq!(layout.characters.as_slice(), b"-03");
        assert_eq!(layout.point, Some(1));
    }

    #[test]
    fn test_real_zero_places_is_integer() {
        let layout = chars(DisplayValue::real(2.6, 0), 3, Alignment::Right);
        assert_eq!(layout.characters.as_slice(), b"  3");
        assert_eq!(layout.point, None);
    }

    #[test]
    fn test_excess_places_keep_point_with_digits() {
        // Capped to 9 places: "1000000000", point on the leading 1
        let layout = chars(DisplayValue::real(1.0, 12), 8, Alignment::Left);
        assert_eq!(layout.characters.as_slice(), b"10000000");
        assert_eq!(layout.point, Some(0));

        let capped = chars(DisplayValue::real(1.0, MAX_DECIMAL_PLACES), 8, Alignment::Left);
        assert_eq!(layout, capped);
    }

    #[test]
    fn test_real_default_places() {
        let layout = chars(DisplayValue::from(1.5f32), 4, Alignment::Right);
        assert_eq!(layout.characters.as_slice(), b" 150");
        assert_eq!(layout.point, Some(1));
    }

    #[test]
    fn test_character() {
        let layout = chars(DisplayValue::from('h'), 3, Alignment::Center);
        assert_eq!(layout.characters.as_slice(), b" h ");
    }

    #[test]
    fn test_text() {
        let layout = chars(DisplayValue::from("Hi"), 4, Alignment::Left);
        assert_eq!(layout.characters.as_slice(), b"Hi  ");
    }

    #[test]
    fn test_text_non_ascii_is_one_blank_position() {
        let layout = chars(DisplayValue::from("a\u{e9}b"), 3, Alignment::Left);
        assert_eq!(layout.characters.as_slice(), b"a b");
    }

    #[test]
    fn test_long_text_right_keeps_tail() {
        let layout = chars(DisplayValue::from("hello world"), 5, Alignment::Right);
        assert_eq!(layout.characters.as_slice(), b"world");
    }
}
