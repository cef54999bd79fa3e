//! PII categories recognized by the pattern library

use serde::{Deserialize, Serialize};

/// A PII category. Each category owns exactly one masking transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Indian mobile number, optionally prefixed with a country code
    Phone,
    /// Aadhaar-style 12 digit national identifier
    NationalId,
    /// One uppercase letter followed by seven digits
    Passport,
    Email,
    /// UPI payment handle (`user@bank`)
    UpiHandle,
    /// Multi-word personal name from a single field
    FullName,
    /// First and last name split across two fields
    NameCombo,
    Address,
    IpAddress,
    DeviceId,
}

impl Category {
    /// Stable snake_case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::NationalId => "national_id",
            Self::Passport => "passport",
            Self::Email => "email",
            Self::UpiHandle => "upi_handle",
            Self::FullName => "full_name",
            Self::NameCombo => "name_combo",
            Self::Address => "address",
            Self::IpAddress => "ip_address",
            Self::DeviceId => "device_id",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
