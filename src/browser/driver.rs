//! Playwright-backed browser sessions
//!
//! Every page gets its own Chromium instance and context, mirroring a fresh
//! `launch()` per check.

use async_trait::async_trait;
use playwright::api::{Browser, BrowserContext, DocumentLoadState, Page, Viewport};
use playwright::Playwright;
use std::path::Path;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, warn};

use super::{BrowserError, BrowserLauncher, BrowserPage, ViewportProfile};

/// Launches headless Chromium through the Playwright driver.
///
/// The driver process starts on the first `open_page`, so runs without
/// browser checks never need Playwright installed.
pub struct PlaywrightLauncher {
    driver: OnceCell<Playwright>,
    headless: bool,
    install_browsers: bool,
    navigation_timeout_ms: f64,
}

impl PlaywrightLauncher {
    pub fn new(headless: bool, navigation_timeout_secs: u64) -> Self {
        Self {
            driver: OnceCell::new(),
            headless,
            install_browsers: false,
            navigation_timeout_ms: Duration::from_secs(navigation_timeout_secs).as_millis() as f64,
        }
    }

    /// Download the browsers the driver needs before first use
    pub fn install_browsers(mut self, install: bool) -> Self {
        self.install_browsers = install;
        self
    }

    async fn driver(&self) -> Result<&Playwright, BrowserError> {
        self.driver
            .get_or_try_init(|| async {
                let playwright = Playwright::initialize().await.map_err(|e| {
                    BrowserError::Launch(format!("Failed to initialize Playwright: {e}"))
                })?;
                if self.install_browsers {
                    playwright.prepare().map_err(|e| {
                        BrowserError::Launch(format!("Failed to install Playwright browsers: {e}"))
                    })?;
                    info!("Playwright browsers installed");
                }
                Ok(playwright)
            })
            .await
    }

    async fn new_context(
        browser: &Browser,
        viewport: &ViewportProfile,
    ) -> Result<(BrowserContext, Page), BrowserError> {
        let mut builder = browser.context_builder().viewport(Some(Viewport {
            width: viewport.width as i32,
            height: viewport.height as i32,
        }));
        if let Some(scale) = viewport.device_scale_factor {
            builder = builder.device_scale_factor(scale);
        }

        let context = builder
            .build()
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;
        let page = context
            .new_page()
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        Ok((context, page))
    }
}

#[async_trait]
impl BrowserLauncher for PlaywrightLauncher {
    async fn open_page(
        &self,
        viewport: &ViewportProfile,
    ) -> Result<Box<dyn BrowserPage>, BrowserError> {
        let chromium = self.driver().await?.chromium();
        let browser = chromium
            .launcher()
            .headless(self.headless)
            .launch()
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        debug!(
            "Launched chromium ({}x{}, scale {:?})",
            viewport.width, viewport.height, viewport.device_scale_factor
        );

        match Self::new_context(&browser, viewport).await {
            Ok((context, page)) => Ok(Box::new(PlaywrightPage {
                browser,
                context,
                page: Mutex::new(page),
                navigation_timeout_ms: self.navigation_timeout_ms,
            })),
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    warn!("Failed to close browser after setup error: {}", close_err);
                }
                Err(e)
            }
        }
    }
}

/// Page owned together with its browser and context
pub struct PlaywrightPage {
    browser: Browser,
    context: BrowserContext,
    page: Mutex<Page>,
    navigation_timeout_ms: f64,
}

#[async_trait]
impl BrowserPage for PlaywrightPage {
    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        let page = self.page.lock().await;
        page.goto_builder(url)
            .wait_until(DocumentLoadState::NetworkIdle)
            .timeout(self.navigation_timeout_ms)
            .goto()
            .await
            .map_err(|e| BrowserError::Navigation(format!("{url}: {e}")))?;
        Ok(())
    }

    async fn title(&self) -> Result<String, BrowserError> {
        let page = self.page.lock().await;
        page.title()
            .await
            .map_err(|e| BrowserError::Query(e.to_string()))
    }

    async fn content(&self) -> Result<String, BrowserError> {
        let page = self.page.lock().await;
        page.content()
            .await
            .map_err(|e| BrowserError::Query(e.to_string()))
    }

    async fn screenshot(&self, path: &Path) -> Result<(), BrowserError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BrowserError::Screenshot(e.to_string()))?;
        }

        let page = self.page.lock().await;
        page.screenshot_builder()
            .full_page(true)
            .path(path.to_path_buf())
            .screenshot()
            .await
            .map_err(|e| BrowserError::Screenshot(e.to_string()))?;
        Ok(())
    }

    async fn close(&self) -> Result<(), BrowserError> {
        let context_result = self.context.close().await;
        self.browser
            .close()
            .await
            .map_err(|e| BrowserError::Close(e.to_string()))?;
        context_result.map_err(|e| BrowserError::Close(e.to_string()))
    }
}
