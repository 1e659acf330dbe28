//! Build script for nunchuk-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates nunchuk.toml and generates its constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// One integer setting and the constant it becomes
struct Setting {
    section: &'static str,
    key: &'static str,
    constant: &'static str,
    ty: &'static str,
    min: i64,
    max: i64,
}

const SETTINGS: &[Setting] = &[
    Setting { section: "bus", key: "address", constant: "I2C_ADDRESS", ty: "u8", min: 0x08, max: 0x77 },
    Setting { section: "bus", key: "frequency_hz", constant: "I2C_FREQUENCY_HZ", ty: "u32", min: 10_000, max: 400_000 },
    Setting { section: "poll", key: "interval_ms", constant: "POLL_INTERVAL_MS", ty: "u32", min: 1, max: 1000 },
    Setting { section: "timing", key: "handshake_settle_us", constant: "HANDSHAKE_SETTLE_US", ty: "u32", min: 900, max: 1100 },
    Setting { section: "timing", key: "read_settle_us", constant: "READ_SETTLE_US", ty: "u32", min: 1900, max: 2100 },
    Setting { section: "device", key: "power_up_delay_ms", constant: "POWER_UP_DELAY_MS", ty: "u32", min: 0, max: 5000 },
];

/// Validate nunchuk.toml and write the generated constants module
fn generate_config() {
    // Re-run if nunchuk.toml changes
    println!("cargo:rerun-if-changed=nunchuk.toml");

    let config_path = Path::new("nunchuk.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: nunchuk.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a nunchuk.toml configuration file.        ║\n\
            ║  Please create one in the nunchuk-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read nunchuk.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in nunchuk.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let mut values = Vec::new();

    for setting in SETTINGS {
        match config.get(setting.section).and_then(|s| s.get(setting.key)) {
            Some(toml::Value::Integer(v)) if (setting.min..=setting.max).contains(v) => {
                values.push((setting, *v));
            }
            Some(toml::Value::Integer(v)) => errors.push(format!(
                "[{}] {} = {} (allowed {}..={})",
                setting.section, setting.key, v, setting.min, setting.max
            )),
            Some(_) => errors.push(format!(
                "[{}] {} must be an integer",
                setting.section, setting.key
            )),
            None => errors.push(format!("Missing [{}] {}", setting.section, setting.key)),
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid settings in nunchuk.toml                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("nunchuk_config.rs")).unwrap();
    for (setting, value) in values {
        writeln!(
            f,
            "pub const {}: {} = {};",
            setting.constant, setting.ty, value
        )
        .unwrap();
    }

    println!("cargo:warning=nunchuk.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
