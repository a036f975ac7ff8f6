pub mod params_file;
pub mod render;

pub const APP_NAME: &str = "procgen";

/// Format a map fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}
