//! Tabular input and output around the redaction engine

pub mod processor;
pub mod summary;

pub use processor::{CsvProcessor, OUTPUT_HEADER};
pub use summary::RunSummary;
