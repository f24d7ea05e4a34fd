//! Minimal TOML parser for display configuration
//!
//! Handles only the subset needed for the `[display]` table. It does NOT
//! support full TOML and never allocates.
//!
//! Supported:
//! - `[display]` section header
//! - Key = value pairs (integer, quoted or bare string)
//! - Comments (`# ...`), full-line or trailing
//!
//! ```toml
//! [display]
//! latch_pin = "gpio6"
//! clock_pin = 7
//! data_pin = "gpio5"
//! polarity = "common_anode"
//! digits = 4
//! dwell_us = 1000
//! ```

use super::types::{DisplayConfig, Polarity};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Malformed or unsupported section header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value could not be parsed for its key
    InvalidValue,
    /// Polarity is neither `common_anode` nor `common_cathode`
    InvalidPolarity,
    /// Pin is neither an integer nor a `gpioN` string
    InvalidPin,
    /// No `[display]` section present
    MissingSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
}

/// Parse TOML text into a [`DisplayConfig`]
///
/// Keys missing from `[display]` keep their [`DisplayConfig::default`]
/// values. `digits` is clamped into `1..=8` like every other construction
/// path.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;
    let mut seen_display = false;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            seen_display |= section == Section::Display;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;

        match section {
            Section::Root => return Err(ConfigError::UnknownKey),
            Section::Display => apply_value(&mut config, key, value)?,
        }
    }

    if !seen_display {
        return Err(ConfigError::MissingSection);
    }

    // Route through the constructor so the digit clamp always applies
    Ok(DisplayConfig::new(
        config.latch_pin,
        config.clock_pin,
        config.data_pin,
        config.polarity,
        config.digits,
    )
    .with_dwell_us(config.dwell_us))
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply_value(config: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "latch_pin" => config.latch_pin = parse_pin(value)?,
        "clock_pin" => config.clock_pin = parse_pin(value)?,
        "data_pin" => config.data_pin = parse_pin(value)?,
        "polarity" => config.polarity = parse_polarity(value)?,
        "digits" => config.digits = parse_int(value)?,
        "dwell_us" => config.dwell_us = parse_dwell(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `#` comment unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(hash_pos) if line[..hash_pos].matches('"').count() % 2 == 0 => &line[..hash_pos],
        _ => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Dwell must be non-zero or refresh never holds a digit lit
fn parse_dwell(value: &str) -> Result<u32, ConfigError> {
    match parse_int(value)? {
        0 => Err(ConfigError::InvalidValue),
        dwell => Ok(dwell),
    }
}

/// Parse a pin given as `5`, `"5"`, `gpio5` or `"gpio5"`
fn parse_pin(value: &str) -> Result<u8, ConfigError> {
    let value = parse_string(value);
    let number = value.strip_prefix("gpio").unwrap_or(value);
    number.parse().map_err(|_| ConfigError::InvalidPin)
}

fn parse_polarity(value: &str) -> Result<Polarity, ConfigError> {
    match parse_string(value) {
        "common_anode" => Ok(Polarity::CommonAnode),
        "common_cathode" => Ok(Polarity::CommonCathode),
        _ => Err(ConfigError::InvalidPolarity),
    }
}
