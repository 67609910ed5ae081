//! In-memory browser used by unit tests

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BrowserError, BrowserLauncher, BrowserPage, ViewportProfile};

/// Canned page contents and failure switches
#[derive(Clone, Debug, Default)]
pub struct FakeSite {
    pub title: String,
    pub content: String,
    pub fail_navigation: bool,
    pub fail_launch: bool,
    pub fail_screenshot: bool,
}

impl FakeSite {
    pub fn poker_coach() -> Self {
        Self {
            title: "Poker Coach — Sign In".to_string(),
            content: "<html><body><h1>Poker Coach</h1></body></html>".to_string(),
            ..Default::default()
        }
    }
}

#[derive(Default)]
pub struct FakeLauncher {
    pub site: FakeSite,
    pub opened: Mutex<Vec<ViewportProfile>>,
    pub visited: Arc<Mutex<Vec<String>>>,
    pub closed: Arc<AtomicUsize>,
}

impl FakeLauncher {
    pub fn new(site: FakeSite) -> Self {
        Self {
            site,
            ..Default::default()
        }
    }

    pub fn opened_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserLauncher for FakeLauncher {
    async fn open_page(
        &self,
        viewport: &ViewportProfile,
    ) -> Result<Box<dyn BrowserPage>, BrowserError> {
        if self.site.fail_launch {
            return Err(BrowserError::Launch("no browser installed".to_string()));
        }
        self.opened.lock().unwrap().push(*viewport);
        Ok(Box::new(FakePage {
            site: self.site.clone(),
            visited: Arc::clone(&self.visited),
            closed: Arc::clone(&self.closed),
        }))
    }
}

pub struct FakePage {
    site: FakeSite,
    visited: Arc<Mutex<Vec<String>>>,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl BrowserPage for FakePage {
    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.visited.lock().unwrap().push(url.to_string());
        if self.site.fail_navigation {
            return Err(BrowserError::Navigation(format!(
                "{url}: net::ERR_CONNECTION_REFUSED"
            )));
        }
        Ok(())
    }

    async fn title(&self) -> Result<String, BrowserError> {
        Ok(self.site.title.clone())
    }

    async fn content(&self) -> Result<String, BrowserError> {
        Ok(self.site.content.clone())
    }

    async fn screenshot(&self, path: &Path) -> Result<(), BrowserError> {
        if self.site.fail_screenshot {
            return Err(BrowserError::Screenshot("target closed".to_string()));
        }
        std::fs::write(path, b"\x89PNG\r\n\x1a\n")
            .map_err(|e| BrowserError::Screenshot(e.to_string()))
    }

    async fn wait(&self, _duration: Duration) {}

    async fn close(&self) -> Result<(), BrowserError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
