//! Output formatting module
//!
//! Provides the report formats for suite results.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
