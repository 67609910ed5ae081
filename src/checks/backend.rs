//! Backend API checks
//!
//! Check 1 (Backend Health) and check 4 (API Auth Required)

use anyhow::{ensure, Result};
use tracing::{error, info};

use crate::http::{HttpClient, HttpResponse};
use crate::models::{CheckKind, CheckResult};
use crate::utils::Timer;

/// Check 1: the health endpoint answers 200 with `status: "ok"`
#[derive(Clone, Debug)]
pub struct HealthCheck {
    pub path: String,
}

impl HealthCheck {
    pub fn new() -> Self {
        Self {
            path: "/api/health".to_string(),
        }
    }

    pub async fn run(&self, client: &HttpClient) -> CheckResult {
        info!("Testing backend health endpoint...");
        let timer = Timer::start("backend health");

        let outcome = match client.get(&self.path).await {
            Ok(resp) => verify_health(&resp),
            Err(e) => Err(e.into()),
        };
        let duration_ms = timer.elapsed_ms();

        match outcome {
            Ok(()) => {
                info!("  ✓ Backend health check passed");
                CheckResult::pass(CheckKind::BackendHealth, duration_ms)
                    .with_details(vec![format!("✓ GET {} returned status ok", self.path)])
            }
            Err(e) => {
                error!("  ✗ Backend health check failed: {:#}", e);
                CheckResult::fail(CheckKind::BackendHealth, duration_ms, format!("{e:#}"))
            }
        }
    }
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert a health response: exactly 200 and a JSON `status` of `"ok"`
pub fn verify_health(resp: &HttpResponse) -> Result<()> {
    ensure!(
        resp.status_code == 200,
        "Expected 200, got {}",
        resp.status_code
    );

    let body: serde_json::Value = resp.json()?;
    let status = body.get("status").and_then(serde_json::Value::as_str);
    ensure!(
        status == Some("ok"),
        "Expected status 'ok', got {}",
        status.unwrap_or("<missing>")
    );
    Ok(())
}

/// Check 4: protected endpoints reject unauthenticated requests
#[derive(Clone, Debug)]
pub struct AuthRequiredCheck {
    pub paths: Vec<String>,
}

impl AuthRequiredCheck {
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    pub fn add_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// The API routes that sit behind the auth middleware
    pub fn protected_routes() -> Self {
        Self::new()
            .add_path("/api/modules")
            .add_path("/api/progress")
            .add_path("/api/achievements")
    }

    pub async fn run(&self, client: &HttpClient) -> CheckResult {
        info!("Testing API authentication requirements...");
        let timer = Timer::start("api auth");
        let mut details = Vec::new();
        let mut failures = Vec::new();

        for path in &self.paths {
            let verdict = match client.get(path).await {
                Ok(resp) => verify_unauthorized(&resp),
                Err(e) => Err(e.into()),
            };

            match verdict {
                Ok(()) => {
                    info!("  ✓ {} requires authentication (401)", path);
                    details.push(format!("✓ {path} requires authentication (401)"));
                }
                Err(e) => {
                    error!("  ✗ {}: {:#}", path, e);
                    details.push(format!("✗ {path}: {e:#}"));
                    failures.push(format!("{path}: {e:#}"));
                }
            }
        }

        let duration_ms = timer.elapsed_ms();

        if failures.is_empty() {
            info!("  ✓ API authentication tests passed");
            CheckResult::pass(CheckKind::ApiAuthRequired, duration_ms).with_details(details)
        } else {
            error!("  ✗ API auth test failed");
            CheckResult::fail(CheckKind::ApiAuthRequired, duration_ms, failures.join("; "))
                .with_details(details)
        }
    }
}

impl Default for AuthRequiredCheck {
    fn default() -> Self {
        Self::protected_routes()
    }
}

/// Assert a response is exactly 401
pub fn verify_unauthorized(resp: &HttpResponse) -> Result<()> {
    ensure!(
        resp.status_code == 401,
        "Expected 401 unauthorized, got {}",
        resp.status_code
    );
    Ok(())
}
