//! Data models for the Poker Coach suite
//!
//! This module contains the result types shared by checks, runner and output.

mod test_result;

pub use test_result::{CheckKind, CheckResult, CheckStatus, SuiteSummary};
