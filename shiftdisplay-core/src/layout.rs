//! Layout formatter
//!
//! Places a character sequence inside the fixed digit window. The sequence
//! occupies a virtual `[left, right]` range chosen by the alignment; parts of
//! that range outside the display are dropped and display positions outside
//! it are blank.

use heapless::Vec;

use crate::config::MAX_DIGITS;

/// Horizontal placement of a value within the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    /// First character on digit 0
    Left,
    /// Last character on the last digit
    #[default]
    Right,
    /// Centered, extra space goes to the right
    Center,
}

/// Exactly one character per digit position
pub type FormattedCharacters = Vec<u8, MAX_DIGITS>;

/// Result of formatting: characters plus an optional decimal point position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// One ASCII character per digit, left to right
    pub characters: FormattedCharacters,
    /// Digit whose decimal point is lit, if any
    pub point: Option<usize>,
}

impl Layout {
    /// A layout with every position blank and no point
    pub fn blank(digit_count: usize) -> Self {
        format_characters(core::iter::empty(), 0, digit_count, Alignment::Left, None)
    }
}

/// Arrange `size` characters from `input` over `digit_count` positions
///
/// `digit_count` is clamped into `1..=MAX_DIGITS`. When `decimal_places` is
/// given, the point goes on digit `right - decimal_places` unless that digit
/// is off the display.
pub fn format_characters<I>(
    input: I,
    size: usize,
    digit_count: usize,
    alignment: Alignment,
    decimal_places: Option<u8>,
) -> Layout
where
    I: IntoIterator<Item = u8>,
{
    let digit_count = digit_count.clamp(1, MAX_DIGITS);
    let (left, right) = window(size, digit_count, alignment);

    let mut characters = FormattedCharacters::new();
    let _ = characters.resize(digit_count, b' ');

    for (offset, c) in input.into_iter().take(size).enumerate() {
        let position = left.saturating_add(offset as isize);
        if let Some(slot) = usize::try_from(position)
            .ok()
            .and_then(|index| characters.get_mut(index))
        {
            *slot = c;
        }
    }

    let point = decimal_places
        .map(|places| right - isize::from(places))
        .and_then(|index| usize::try_from(index).ok())
        .filter(|&index| index < digit_count);

    Layout { characters, point }
}

/// Virtual `[left, right]` range for a value of `size` characters
///
/// Both ends may fall outside `0..digit_count`.
pub fn window(size: usize, digit_count: usize, alignment: Alignment) -> (isize, isize) {
    let size = isize::try_from(size).unwrap_or(isize::MAX / 2);
    let digits = digit_count as isize;

    let left = match alignment {
        Alignment::Left => 0,
        Alignment::Right => digits - size,
        Alignment::Center => (digits - size).div_euclid(2),
    };

    (left, left + size - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn format(text: &str, digits: usize, alignment: Alignment, places: Option<u8>) -> Layout {
        format_characters(text.bytes(), text.len(), digits, alignment, places)
    }

    #[test]
    fn test_alignment_padding() {
        assert_eq!(format("12", 4, Alignment::Left, None).characters.as_slice(), b"12  ");
        assert_eq!(format("12", 4, Alignment::Right, None).characters.as_slice(), b"  12");
        assert_eq!(format("12", 4, Alignment::Center, None).characters.as_slice(), b" 12 ");
        assert_eq!(format("12", 5, Alignment::Center, None).characters.as_slice(), b" 12  ");
    }

    #[test]
    fn test_exact_fit_any_alignment() {
        for alignment in [Alignment::Left, Alignment::Right, Alignment::Center] {
            let layout = format("-42", 3, alignment, None);
            assert_eq!(layout.characters.as_slice(), b"-42");
            assert_eq!(layout.point, None);
        }
    }

    #[test]
    fn test_truncation() {
        assert_eq!(format("12345", 3, Alignment::Right, None).characters.as_slice(), b"345");
        assert_eq!(format("12345", 3, Alignment::Left, None).characters.as_slice(), b"123");
        // (3 - 5) / 2 floors to -1, so the first character is dropped
        assert_eq!(format("12345", 3, Alignment::Center, None).characters.as_slice(), b"234");
        // (3 - 6) / 2 floors to -2
        assert_eq!(format("123456", 3, Alignment::Center, None).characters.as_slice(), b"345");
    }

    #[test]
    fn test_point_placement() {
        let layout = format("314", 4, Alignment::Right, Some(2));
        assert_eq!(layout.characters.as_slice(), b" 314");
        assert_eq!(layout.point, Some(1));

        let layout = format("-03", 3, Alignment::Left, Some(1));
        assert_eq!(layout.characters.as_slice(), b"-03");
        assert_eq!(layout.point, Some(1));
    }

    #[test]
    fn test_point_out_of_range_omitted() {
        // right = 1, point would be at -1
        assert_eq!(format("12", 4, Alignment::Left, Some(2)).point, None);
        // right = 5 is off a 4-digit display, point at 5 - 1 = 4 is too
        assert_eq!(format("123456", 4, Alignment::Left, Some(1)).point, None);
    }

    #[test]
    fn test_digit_count_clamped() {
        assert_eq!(format("1", 0, Alignment::Right, None).characters.as_slice(), b"1");
        assert_eq!(format("1", 20, Alignment::Left, None).characters.len(), MAX_DIGITS);
    }

    #[test]
    fn test_blank() {
        let layout = Layout::blank(3);
        assert_eq!(layout.characters.as_slice(), b"   ");
        assert_eq!(layout.point, None);
    }

    #[test]
    fn test_short_input_iterator() {
        // size claims more than the iterator yields; missing positions stay blank
        let layout = format_characters(b"7".iter().copied(), 3, 4, Alignment::Right, None);
        assert_eq!(layout.characters.as_slice(), b" 7  ");
    }

    proptest! {
        #[test]
        fn prop_output_is_display_width(
            text in "[0-9a-z-]{0,12}",
            digits in 1usize..=MAX_DIGITS,
        ) {
            for alignment in [Alignment::Left, Alignment::Right, Alignment::Center] {
                let layout = format(&text, digits, alignment, None);
                prop_assert_eq!(layout.characters.len(), digits);
            }
        }

        #[test]
        fn prop_right_keeps_rightmost(text in "[0-9]{1,12}", digits in 1usize..=MAX_DIGITS) {
            let layout = format(&text, digits, Alignment::Right, None);
            let kept = text.len().min(digits);
            prop_assert_eq!(
                &layout.characters[digits - kept..],
                &text.as_bytes()[text.len() - kept..]
            );
        }

        #[test]
        fn prop_point_always_on_display(
            text in "[0-9]{0,12}",
            digits in 1usize..=MAX_DIGITS,
            places in 0u8..16,
        ) {
            let layout = format(&text, digits, Alignment::Center, Some(places));
            if let Some(point) = layout.point {
                prop_assert!(point < digits);
            }
        }
    }
}
