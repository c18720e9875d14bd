use rand::{rngs::OsRng, Rng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Longest otp whose value range still fits in a u64
const MAX_OTP_LENGTH: u32 = 19;

/// Get EPOCH timestamp in milliseconds
pub fn get_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|n| n.as_millis() as u64)
        .unwrap_or_default()
}

/// Generate a numeric OTP of a given length from the OS random source.
/// The value is uniform over `0..10^len` and zero padded to `len` digits.
pub fn generate_otp(len: u32) -> String {
    if len == 0 {
        return String::new();
    }
    let len = len.min(MAX_OTP_LENGTH);
    let upper = 10u64.pow(len);
    let value = OsRng.gen_range(0..upper);
    format_otp(value, len)
}

/// Render an otp value as exactly `len` digits, keeping leading zeros
pub fn format_otp(value: u64, len: u32) -> String {
    format!("{:0width$}", value, width = len as usize)
}
