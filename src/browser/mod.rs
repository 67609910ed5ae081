//! Browser automation capability
//!
//! Browser checks talk to a [`BrowserLauncher`], which hands out one scoped
//! [`BrowserPage`] per check. The page must be closed by the caller on every
//! exit path. The Playwright implementation lives in [`driver`].

mod driver;

#[cfg(test)]
pub mod fake;

pub use driver::PlaywrightLauncher;

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Browser automation errors
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Page query failed: {0}")]
    Query(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    #[error("Failed to close browser: {0}")]
    Close(String),
}

/// Viewport emulation for a browsing context
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportProfile {
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: Option<f64>,
}

impl ViewportProfile {
    /// Playwright's default desktop viewport
    pub fn desktop() -> Self {
        Self {
            width: 1280,
            height: 720,
            device_scale_factor: None,
        }
    }

    /// Phone-sized viewport at 2x density
    pub fn mobile() -> Self {
        Self {
            width: 375,
            height: 667,
            device_scale_factor: Some(2.0),
        }
    }
}

/// A single page inside its own browser session
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Navigate and wait until network activity settles
    async fn goto(&self, url: &str) -> Result<(), BrowserError>;

    async fn title(&self) -> Result<String, BrowserError>;

    /// Rendered HTML of the page
    async fn content(&self) -> Result<String, BrowserError>;

    /// Full-page PNG screenshot, overwriting `path`
    async fn screenshot(&self, path: &Path) -> Result<(), BrowserError>;

    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Release the page together with its context and browser
    async fn close(&self) -> Result<(), BrowserError>;
}

/// Source of fresh browser sessions
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn open_page(
        &self,
        viewport: &ViewportProfile,
    ) -> Result<Box<dyn BrowserPage>, BrowserError>;
}
