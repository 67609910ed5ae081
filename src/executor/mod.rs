//! Check execution engine
//!
//! Provides strictly sequential execution of the suite.

mod runner;

pub use runner::{select_checks, SuiteRunner};
