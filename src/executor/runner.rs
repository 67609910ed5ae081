//! Suite runner
//!
//! Executes the selected checks one after another and aggregates results.

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::browser::BrowserLauncher;
use crate::checks;
use crate::config::SuiteConfig;
use crate::http::HttpClient;
use crate::models::{CheckKind, CheckResult, SuiteSummary};

/// Sequential runner for the Poker Coach checks
pub struct SuiteRunner {
    config: SuiteConfig,
    client: HttpClient,
    launcher: Arc<dyn BrowserLauncher>,
}

impl SuiteRunner {
    /// Create a new runner
    pub fn new(config: SuiteConfig, launcher: Arc<dyn BrowserLauncher>) -> Result<Self> {
        let client =
            HttpClient::with_timeout(config.http_timeout_secs)?.base_url(&config.backend_url);
        Ok(Self {
            config,
            client,
            launcher,
        })
    }

    /// Run a single check
    pub async fn run_check(&self, check: CheckKind) -> Result<CheckResult> {
        info!("Running {}", check);
        checks::run_check(check, &self.config, &self.client, self.launcher.as_ref()).await
    }

    /// Run the given checks in order. A failing check never stops the run.
    pub async fn run_checks(&self, checks: &[CheckKind]) -> Result<SuiteSummary> {
        info!(
            "Running {} checks against frontend {} and backend {}",
            checks.len(),
            self.config.frontend_url,
            self.config.backend_url
        );

        let started_at = Utc::now();
        let mut results = Vec::with_capacity(checks.len());

        for &check in checks {
            let result = self.run_check(check).await?;
            info!("  {}", result);
            results.push(result);
        }

        let summary = SuiteSummary::new(started_at, results);

        info!(
            "Suite completed in {}ms - Pass: {}/{} ({:.1}%)",
            summary.total_duration_ms,
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        let failed: Vec<&str> = summary
            .outcomes()
            .into_iter()
            .filter(|(_, passed)| !passed)
            .map(|(name, _)| name)
            .collect();
        if !failed.is_empty() {
            warn!("Failed checks: {}", failed.join(", "));
        }

        Ok(summary)
    }
}

/// Resolve `--check` / `--skip` into the ordered list of checks to run
pub fn select_checks(only: Option<u8>, skip: &[u8]) -> Result<Vec<CheckKind>> {
    if only.is_some() && !skip.is_empty() {
        anyhow::bail!("--check and --skip cannot be combined");
    }

    if let Some(n) = only {
        let check = CheckKind::from_number(n)
            .ok_or_else(|| anyhow::anyhow!("Invalid check number: {n} (expected 1-4)"))?;
        return Ok(vec![check]);
    }

    for &n in skip {
        if CheckKind::from_number(n).is_none() {
            anyhow::bail!("Invalid check number in --skip: {n} (expected 1-4)");
        }
    }

    Ok(CheckKind::all()
        .into_iter()
        .filter(|c| !skip.contains(&c.number()))
        .collect())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::browser::fake::{FakeLauncher, FakeSite};
    use crate::test_support::spawn_backend;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    fn healthy_backend() -> Router {
        let unauthorized = || async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "unauthorized"}))) };
        Router::new()
            .route("/api/health", get(|| async { Json(json!({"status": "ok"})) }))
            .route("/api/modules", get(unauthorized))
            .route("/api/progress", get(unauthorized))
            .route("/api/achievements", get(unauthorized))
    }

    fn config(backend_url: String, dir: &tempfile::TempDir) -> SuiteConfig {
        SuiteConfig {
            backend_url,
            render_delay_ms: 0,
            screenshot_dir: dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_all_by_default() {
        assert_eq!(select_checks(None, &[]).unwrap(), CheckKind::all());
    }

    #[test]
    fn test_select_single_and_skip() {
        assert_eq!(
            select_checks(Some(3), &[]).unwrap(),
            vec![CheckKind::MobileResponsive]
        );
        assert_eq!(
            select_checks(None, &[2, 3]).unwrap(),
            vec![CheckKind::BackendHealth, CheckKind::ApiAuthRequired]
        );
        assert!(select_checks(Some(9), &[]).is_err());
        assert!(select_checks(None, &[0]).is_err());
    }

    #[test]
    fn test_select_rejects_check_with_skip() {
        let err = select_checks(Some(2), &[2]).unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
        assert!(select_checks(Some(1), &[3, 4]).is_err());
    }

    #[tokio::test]
    async fn test_full_suite_passes() {
        let dir = tempfile::tempdir().unwrap();
        let backend = spawn_backend(healthy_backend()).await;
        let launcher = Arc::new(FakeLauncher::new(FakeSite::poker_coach()));

        let runner = SuiteRunner::new(config(backend, &dir), launcher.clone()).unwrap();
        let summary = runner.run_checks(&CheckKind::all()).await.unwrap();

        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.passed, 4);
        assert_eq!(launcher.opened_count(), 2);
        assert_eq!(launcher.closed_count(), 2);
    }

    #[tokio::test]
    async fn test_failures_do_not_short_circuit() {
        let dir = tempfile::tempdir().unwrap();
        let backend = spawn_backend(Router::new()).await;
        let launcher = Arc::new(FakeLauncher::new(FakeSite {
            title: "Untitled".to_string(),
            ..FakeSite::poker_coach()
        }));

        let runner = SuiteRunner::new(config(backend, &dir), launcher).unwrap();
        let summary = runner.run_checks(&CheckKind::all()).await.unwrap();

        assert_eq!(
            summary.outcomes(),
            vec![
                ("Backend Health", false),
                ("Frontend Loads", false),
                ("Mobile Responsive", true),
                ("API Auth Required", false),
            ]
        );
        assert_eq!(summary.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let backend = spawn_backend(healthy_backend()).await;
        let launcher = Arc::new(FakeLauncher::new(FakeSite::poker_coach()));
        let runner = SuiteRunner::new(config(backend, &dir), launcher).unwrap();

        let first = runner.run_checks(&CheckKind::all()).await.unwrap();
        let second = runner.run_checks(&CheckKind::all()).await.unwrap();
        assert_eq!(first.outcomes(), second.outcomes());
    }

    #[tokio::test]
    async fn test_launch_failure_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let backend = spawn_backend(healthy_backend()).await;
        let launcher = Arc::new(FakeLauncher::new(FakeSite {
            fail_launch: true,
            ..Default::default()
        }));

        let runner = SuiteRunner::new(config(backend, &dir), launcher).unwrap();
        assert!(runner.run_checks(&CheckKind::all()).await.is_err());
        // Backend-only selection never touches the browser
        let summary = runner
            .run_checks(&[CheckKind::BackendHealth, CheckKind::ApiAuthRequired])
            .await
            .unwrap();
        assert!(summary.is_all_passed());
    }
}
