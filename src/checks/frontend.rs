//! Browser-driven frontend checks
//!
//! Check 2 (Frontend Loads) and check 3 (Mobile Responsive). Each check
//! opens its own page and closes it before returning, whatever happened in
//! between. Failing to open a page at all is returned as an error.

use anyhow::{ensure, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

use super::ScreenshotPaths;
use crate::browser::{BrowserLauncher, BrowserPage, ViewportProfile};
use crate::models::{CheckKind, CheckResult};
use crate::utils::Timer;

/// Text both the title and the page body must contain
pub const BRAND: &str = "Poker";

/// Collected per-step output of a browser check
#[derive(Debug, Default)]
struct Trace {
    details: Vec<String>,
    screenshots: Vec<PathBuf>,
}

impl Trace {
    fn ok(&mut self, line: String) {
        info!("  ✓ {}", line);
        self.details.push(format!("✓ {line}"));
    }
}

async fn release(page: Box<dyn BrowserPage>, check: CheckKind) {
    if let Err(e) = page.close().await {
        warn!("Failed to close browser for {}: {}", check, e);
    }
}

/// Check 2: the root page renders with Poker branding
#[derive(Clone, Debug)]
pub struct FrontendLoadCheck {
    pub url: String,
    pub screenshots: ScreenshotPaths,
    pub render_delay: Duration,
}

impl FrontendLoadCheck {
    pub fn new(url: impl Into<String>, screenshots: ScreenshotPaths) -> Self {
        Self {
            url: url.into(),
            screenshots,
            render_delay: Duration::from_millis(2000),
        }
    }

    pub fn render_delay(mut self, delay: Duration) -> Self {
        self.render_delay = delay;
        self
    }

    pub async fn run(&self, launcher: &dyn BrowserLauncher) -> Result<CheckResult> {
        info!("Testing frontend loads...");
        let page = launcher
            .open_page(&ViewportProfile::desktop())
            .await
            .context("Could not start browser for frontend check")?;

        let timer = Timer::start("frontend load");
        let mut trace = Trace::default();
        let outcome = self.exercise(page.as_ref(), &mut trace).await;

        let result = match outcome {
            Ok(()) => {
                trace.ok("Frontend loads successfully".to_string());
                CheckResult::pass(CheckKind::FrontendLoads, timer.elapsed_ms())
            }
            Err(e) => {
                error!("  ✗ Frontend test failed: {:#}", e);
                trace.details.push(format!("✗ {e:#}"));

                let error_shot = &self.screenshots.error;
                match page.screenshot(error_shot).await {
                    Ok(()) => {
                        info!("  Error screenshot saved to {}", error_shot.display());
                        trace.screenshots.push(error_shot.clone());
                    }
                    Err(shot_err) => warn!("  Could not capture error screenshot: {}", shot_err),
                }

                CheckResult::fail(CheckKind::FrontendLoads, timer.elapsed_ms(), format!("{e:#}"))
            }
        };

        release(page, CheckKind::FrontendLoads).await;

        Ok(result
            .with_details(trace.details)
            .with_screenshots(trace.screenshots))
    }

    async fn exercise(&self, page: &dyn BrowserPage, trace: &mut Trace) -> Result<()> {
        page.goto(&self.url).await?;

        let title = page.title().await?;
        ensure!(
            title.contains(BRAND),
            "Expected '{BRAND}' in title, got: {title}"
        );
        trace.ok(format!("Page title: {title}"));

        page.screenshot(&self.screenshots.signin).await?;
        trace.screenshots.push(self.screenshots.signin.clone());
        trace.ok(format!(
            "Screenshot saved to {}",
            self.screenshots.signin.display()
        ));

        let content = page.content().await?;
        ensure!(content.contains(BRAND), "Expected '{BRAND}' text on page");
        trace.ok("Poker Coach branding found".to_string());

        // Sign-in widget is mounted client-side after network idle
        page.wait(self.render_delay).await;
        Ok(())
    }
}

/// Check 3: the root page renders at phone size
#[derive(Clone, Debug)]
pub struct MobileResponsiveCheck {
    pub url: String,
    pub screenshots: ScreenshotPaths,
    pub viewport: ViewportProfile,
    pub render_delay: Duration,
}

impl MobileResponsiveCheck {
    pub fn new(url: impl Into<String>, screenshots: ScreenshotPaths) -> Self {
        Self {
            url: url.into(),
            screenshots,
            viewport: ViewportProfile::mobile(),
            render_delay: Duration::from_millis(2000),
        }
    }

    pub fn render_delay(mut self, delay: Duration) -> Self {
        self.render_delay = delay;
        self
    }

    pub async fn run(&self, launcher: &dyn BrowserLauncher) -> Result<CheckResult> {
        info!("Testing mobile responsiveness...");
        let page = launcher
            .open_page(&self.viewport)
            .await
            .context("Could not start browser for mobile check")?;

        let timer = Timer::start("mobile responsive");
        let mut trace = Trace::default();
        let outcome = self.exercise(page.as_ref(), &mut trace).await;

        let result = match outcome {
            Ok(()) => {
                trace.ok("Mobile view loads successfully".to_string());
                CheckResult::pass(CheckKind::MobileResponsive, timer.elapsed_ms())
            }
            Err(e) => {
                error!("  ✗ Mobile test failed: {:#}", e);
                trace.details.push(format!("✗ {e:#}"));
                CheckResult::fail(
                    CheckKind::MobileResponsive,
                    timer.elapsed_ms(),
                    format!("{e:#}"),
                )
            }
        };

        release(page, CheckKind::MobileResponsive).await;

        Ok(result
            .with_details(trace.details)
            .with_screenshots(trace.screenshots))
    }

    async fn exercise(&self, page: &dyn BrowserPage, trace: &mut Trace) -> Result<()> {
        page.goto(&self.url).await?;
        page.wait(self.render_delay).await;

        page.screenshot(&self.screenshots.mobile).await?;
        trace.screenshots.push(self.screenshots.mobile.clone());
        trace.ok(format!(
            "Mobile screenshot saved to {}",
            self.screenshots.mobile.display()
        ));
        Ok(())
    }
}
