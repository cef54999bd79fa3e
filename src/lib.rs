//! PiiShield - PII detection and masking for tabular datasets
//!
//! PiiShield scans JSON records embedded in CSV rows for personally
//! identifiable information and produces a redacted copy of each record
//! together with a flag telling whether any PII was found.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CSV Processor                          │
//! │  (record_id, data_json) rows ──► (record_id, redacted, is_pii)│
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ one line at a time
//! ┌──────────────────────────────▼───────────────────────────────┐
//! │                       Redaction Engine                        │
//! │  ┌────────────────────┐  ┌──────────────────────────────────┐ │
//! │  │  Standalone pass   │  │  Combinatorial pass              │ │
//! │  │  email, upi, phone │  │  names, addresses, ip, device id │ │
//! │  │  passport, aadhaar │  │  reported only in combination    │ │
//! │  └─────────┬──────────┘  └────────────────┬─────────────────┘ │
//! │            └──────────── merge ───────────┘                   │
//! │  Raw-text scan for lines that are not JSON objects            │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ shared, read-only
//! ┌──────────────────────────────▼───────────────────────────────┐
//! │                       Pattern Library                         │
//! │  compiled recognizers, address vocabulary, redaction markers  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use piishield::config::PrivacyConfig;
//! use piishield::privacy::{Record, RedactionEngine};
//!
//! let engine = RedactionEngine::new(&PrivacyConfig::default()).unwrap();
//! let record = Record::parse(r#"{"email": "john.doe@example.com"}"#).unwrap();
//! let (redacted, found) = engine.classify_and_mask(&record);
//! assert!(found);
//! assert_eq!(redacted.to_json().unwrap(), r#"{"email": "joXXXXXX@example.com"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`privacy`]: Pattern library and decision engine
//! - [`pipeline`]: CSV batch processing and run statistics
//! - [`config`]: Configuration management

pub mod config;
pub mod error;
pub mod pipeline;
pub mod privacy;

pub use config::PiiShieldConfig;
pub use error::{Error, Result};
