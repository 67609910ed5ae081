//! Check result models for the Poker Coach suite
//!
//! Defines the checks, their outcomes and the per-run summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The four end-to-end checks, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    BackendHealth,
    FrontendLoads,
    MobileResponsive,
    ApiAuthRequired,
}

impl CheckKind {
    /// Get check number (1-4)
    pub fn number(&self) -> u8 {
        match self {
            CheckKind::BackendHealth => 1,
            CheckKind::FrontendLoads => 2,
            CheckKind::MobileResponsive => 3,
            CheckKind::ApiAuthRequired => 4,
        }
    }

    /// Get check name as shown in the report
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::BackendHealth => "Backend Health",
            CheckKind::FrontendLoads => "Frontend Loads",
            CheckKind::MobileResponsive => "Mobile Responsive",
            CheckKind::ApiAuthRequired => "API Auth Required",
        }
    }

    /// Get check category
    pub fn category(&self) -> &'static str {
        match self {
            CheckKind::BackendHealth | CheckKind::ApiAuthRequired => "Backend",
            CheckKind::FrontendLoads | CheckKind::MobileResponsive => "Browser",
        }
    }

    /// All checks in their fixed execution order
    pub fn all() -> Vec<CheckKind> {
        vec![
            CheckKind::BackendHealth,
            CheckKind::FrontendLoads,
            CheckKind::MobileResponsive,
            CheckKind::ApiAuthRequired,
        ]
    }

    /// Parse from check number
    pub fn from_number(n: u8) -> Option<CheckKind> {
        Self::all().into_iter().find(|c| c.number() == n)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check {}: {}", self.number(), self.name())
    }
}

/// Check outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Result of a single check execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: CheckKind,
    pub status: CheckStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<PathBuf>,
}

impl CheckResult {
    pub fn pass(check: CheckKind, duration_ms: u64) -> Self {
        Self {
            check,
            status: CheckStatus::Pass,
            duration_ms,
            message: None,
            details: Vec::new(),
            screenshots: Vec::new(),
        }
    }

    pub fn fail(check: CheckKind, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            duration_ms,
            message: Some(message.into()),
            details: Vec::new(),
            screenshots: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_screenshots(mut self, screenshots: Vec<PathBuf>) -> Self {
        self.screenshots = screenshots;
        self
    }

    pub fn passed(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.check,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Summary of one suite run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
}

impl SuiteSummary {
    pub fn new(started_at: DateTime<Utc>, results: Vec<CheckResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let total_duration_ms = results.iter().map(|r| r.duration_ms).sum();

        Self {
            started_at,
            total,
            passed,
            failed: total - passed,
            total_duration_ms,
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed())
    }

    /// Process exit code: 0 iff every check passed
    pub fn exit_code(&self) -> i32 {
        if self.is_all_passed() {
            0
        } else {
            1
        }
    }

    /// Outcomes as ordered (name, passed) pairs
    pub fn outcomes(&self) -> Vec<(&'static str, bool)> {
        self.results
            .iter()
            .map(|r| (r.check.name(), r.passed()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(results: Vec<CheckResult>) -> SuiteSummary {
        SuiteSummary::new(Utc::now(), results)
    }

    #[test]
    fn test_check_numbers() {
        assert_eq!(CheckKind::BackendHealth.number(), 1);
        assert_eq!(CheckKind::ApiAuthRequired.number(), 4);
    }

    #[test]
    fn test_check_from_number() {
        assert_eq!(CheckKind::from_number(2), Some(CheckKind::FrontendLoads));
        assert_eq!(CheckKind::from_number(0), None);
        assert_eq!(CheckKind::from_number(5), None);
    }

    #[test]
    fn test_fixed_order() {
        let names: Vec<_> = CheckKind::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Backend Health",
                "Frontend Loads",
                "Mobile Responsive",
                "API Auth Required"
            ]
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(CheckKind::BackendHealth.category(), "Backend");
        assert_eq!(CheckKind::FrontendLoads.category(), "Browser");
        assert_eq!(CheckKind::MobileResponsive.category(), "Browser");
        assert_eq!(CheckKind::ApiAuthRequired.category(), "Backend");
    }

    #[test]
    fn test_exit_code_all_passed() {
        let s = summary(
            CheckKind::all()
                .into_iter()
                .map(|c| CheckResult::pass(c, 10))
                .collect(),
        );
        assert!(s.is_all_passed());
        assert_eq!(s.exit_code(), 0);
        assert_eq!(s.passed, 4);
        assert_eq!(s.total_duration_ms, 40);
    }

    #[test]
    fn test_exit_code_single_failure() {
        let s = summary(vec![
            CheckResult::pass(CheckKind::BackendHealth, 10),
            CheckResult::fail(CheckKind::FrontendLoads, 10, "title mismatch"),
            CheckResult::pass(CheckKind::MobileResponsive, 10),
            CheckResult::pass(CheckKind::ApiAuthRequired, 10),
        ]);
        assert_eq!(s.exit_code(), 1);
        assert_eq!(s.passed, 3);
        assert_eq!(s.failed, 1);
    }

    #[test]
    fn test_outcomes_keep_execution_order() {
        let s = summary(vec![
            CheckResult::fail(CheckKind::BackendHealth, 1, "down"),
            CheckResult::pass(CheckKind::FrontendLoads, 1),
        ]);
        assert_eq!(
            s.outcomes(),
            vec![("Backend Health", false), ("Frontend Loads", true)]
        );
    }

    #[test]
    fn test_result_serializes_without_empty_lists() {
        let json = serde_json::to_value(CheckResult::pass(CheckKind::BackendHealth, 5)).unwrap();
        assert_eq!(json["check"], "backend_health");
        assert_eq!(json["status"], "pass");
        assert!(json.get("details").is_none());
    }
}
