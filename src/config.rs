//! PiiShield configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main PiiShield configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PiiShieldConfig {
    /// Privacy configuration
    #[serde(default)]
    pub privacy: PrivacyConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl PiiShieldConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if self.privacy.combination_threshold == 0 {
            return Err(Error::Config(
                "privacy.combination_threshold must be at least 1".to_string(),
            ));
        }
        let markers = &self.privacy.markers;
        for (name, marker) in [
            ("address", &markers.address),
            ("ip_address", &markers.ip_address),
            ("device_id", &markers.device_id),
        ] {
            if marker.is_empty() {
                return Err(Error::Config(format!(
                    "privacy.markers.{} must not be empty",
                    name
                )));
            }
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(Error::Config("output.path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Privacy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Keywords that mark a value as a postal address when combined with a digit
    pub address_indicators: Vec<String>,

    /// Distinct combinatorial evidence categories needed before a record is flagged
    pub combination_threshold: usize,

    /// Full-value replacement markers
    pub markers: RedactionMarkers,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            address_indicators: default_address_indicators(),
            combination_threshold: 2,
            markers: RedactionMarkers::default(),
        }
    }
}

/// Fixed placeholders for categories that are never partially masked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionMarkers {
    pub address: String,
    pub ip_address: String,
    pub device_id: String,
}

impl Default for RedactionMarkers {
    fn default() -> Self {
        Self {
            address: "[REDACTED_ADDRESS]".to_string(),
            ip_address: "[REDACTED_IP]".to_string(),
            device_id: "[REDACTED_DEVICE_ID]".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the redacted CSV file
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("redacted_output.csv"),
        }
    }
}

/// Built-in address keyword vocabulary (English and common Indian locality terms)
pub fn default_address_indicators() -> Vec<String> {
    [
        "street", "road", "rd", "st", "avenue", "ave", "lane", "ln", "block", "apt",
        "apartment", "floor", "building", "house", "complex", "nagar", "colony", "society",
        "vihar", "enclave", "sector", "phase", "chawl", "marg", "bagh", "gali", "galli",
        "chowk", "layout", "puram", "puri", "wadi", "wada", "pada", "village", "gram", "gaon",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
