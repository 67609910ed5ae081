//! Poker Coach end-to-end checks
//!
//! ## Backend Checks
//! 1. Backend Health: `GET /api/health` is 200 with `status: "ok"`
//! 4. API Auth Required: protected routes answer 401 without credentials
//!
//! ## Browser Checks
//! 2. Frontend Loads: title and body carry the Poker branding
//! 3. Mobile Responsive: root page renders at 375x667 @2x
//!
//! Every check reduces to a single pass/fail [`CheckResult`]. Only a browser
//! that cannot be started surfaces as an `Err`.

mod backend;
mod frontend;

use backend::{AuthRequiredCheck, HealthCheck};
use frontend::{FrontendLoadCheck, MobileResponsiveCheck};

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::browser::BrowserLauncher;
use crate::config::SuiteConfig;
use crate::http::HttpClient;
use crate::models::{CheckKind, CheckResult};

/// Fixed screenshot locations, overwritten on each run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenshotPaths {
    pub signin: PathBuf,
    pub error: PathBuf,
    pub mobile: PathBuf,
}

impl ScreenshotPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            signin: dir.join("poker-coach-signin.png"),
            error: dir.join("poker-coach-error.png"),
            mobile: dir.join("poker-coach-mobile.png"),
        }
    }
}

/// Run a single check
pub async fn run_check(
    check: CheckKind,
    config: &SuiteConfig,
    client: &HttpClient,
    launcher: &dyn BrowserLauncher,
) -> Result<CheckResult> {
    let screenshots = ScreenshotPaths::in_dir(&config.screenshot_dir);
    let render_delay = Duration::from_millis(config.render_delay_ms);

    match check {
        CheckKind::BackendHealth => Ok(HealthCheck::new().run(client).await),
        CheckKind::FrontendLoads => {
            FrontendLoadCheck::new(&config.frontend_url, screenshots)
                .render_delay(render_delay)
                .run(launcher)
                .await
        }
        CheckKind::MobileResponsive => {
            MobileResponsiveCheck::new(&config.frontend_url, screenshots)
                .render_delay(render_delay)
                .run(launcher)
                .await
        }
        CheckKind::ApiAuthRequired => Ok(AuthRequiredCheck::protected_routes().run(client).await),
    }
}
