use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Pending otp for a mobile number. At most one exists per mobile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OtpRecord {
    pub mobile: String,
    pub otp: String,
    /// milliseconds since the unix epoch
    pub created_at: u64,
}

impl OtpRecord {
    pub fn new(mobile: &str, otp: &str, created_at: u64) -> Self {
        Self {
            mobile: mobile.to_owned(),
            otp: otp.to_owned(),
            created_at,
        }
    }

    /// An otp is valid up to and including `validity_ms` after creation
    pub fn is_expired(&self, now: u64, validity_ms: u64) -> bool {
        now.saturating_sub(self.created_at) > validity_ms
    }
}

/// Rules applied while verifying a submitted otp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtpPolicy {
    pub validity_ms: u64,
    /// When set, a successful login deletes the otp so it cannot be replayed
    pub single_use: bool,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            validity_ms: OTP_VALIDITY_MINS * 60 * 1000,
            single_use: false,
        }
    }
}
