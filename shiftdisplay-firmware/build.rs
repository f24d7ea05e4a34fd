//! Build script for shiftdisplay-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in `[display]`
const DISPLAY_KEYS: [&str; 6] = [
    "latch_pin",
    "clock_pin",
    "data_pin",
    "polarity",
    "digits",
    "dwell_us",
];

const GPIO_COUNT: i64 = 30;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    // cortex-m-rt, embassy-rp boot2 and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        fail(
            "display.toml not found",
            &["The firmware embeds display.toml from the crate directory.".to_string()],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in display.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = validate_display(&config);
    if !errors.is_empty() {
        fail("Invalid [display] configuration", &errors);
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Check the `[display]` table, returning one message per problem
fn validate_display(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let display = match config.get("display") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => return vec!["[display] must be a table".to_string()],
        None => return vec!["Missing [display] section".to_string()],
    };

    for key in display.keys() {
        if !DISPLAY_KEYS.contains(&key.as_str()) {
            errors.push(format!("[display] unknown key '{}'", key));
        }
    }

    let mut pins = Vec::new();
    for key in ["latch_pin", "clock_pin", "data_pin"] {
        let pin = match display.get(key) {
            None => continue,
            Some(toml::Value::Integer(n)) => Some(*n),
            Some(toml::Value::String(s)) => s.strip_prefix("gpio").and_then(|n| n.parse().ok()),
            Some(_) => None,
        };
        match pin {
            Some(n) if (0..GPIO_COUNT).contains(&n) => {
                if pins.contains(&n) {
                    errors.push(format!("[display] {} reuses gpio{}", key, n));
                }
                pins.push(n);
            }
            _ => errors.push(format!("[display] {} must be gpio0-gpio29", key)),
        }
    }

    if let Some(polarity) = display.get("polarity") {
        if !matches!(polarity.as_str(), Some("common_anode" | "common_cathode")) {
            errors.push(
                "[display] polarity must be 'common_anode' or 'common_cathode'".to_string(),
            );
        }
    }

    if let Some(digits) = display.get("digits") {
        if !matches!(digits.as_integer(), Some(1..=8)) {
            errors.push("[display] digits must be 1-8".to_string());
        }
    }

    if let Some(dwell) = display.get("dwell_us") {
        if !matches!(dwell.as_integer(), Some(n) if n > 0 && n <= i64::from(u32::MAX)) {
            errors.push("[display] dwell_us must be a positive 32-bit integer".to_string());
        }
    }

    errors
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| format!("║  • {:<62} ║", line))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
