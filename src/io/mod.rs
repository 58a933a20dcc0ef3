//! I/O module
//!
//! Handles reading saved invocations and writing classification reports.
//!
//! # Components
//!
//! - `token_reader` - Reads a token sequence from a file, one token per line
//! - `report` - Text and CSV classification reports

pub mod report;
pub mod token_reader;

pub use report::{report_rows, write_csv_report, write_report, write_text_report, ReportRow};
pub use token_reader::read_tokens;
