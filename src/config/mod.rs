//! Configuration module
//!
//! Handles loading and layering the suite configuration.

mod env;

pub use env::{print_env_help, EnvConfig};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Frontend origin in the reference setup
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Backend API origin in the reference setup
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Suite configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Frontend root URL
    pub frontend_url: String,

    /// Backend API base URL
    pub backend_url: String,

    /// HTTP timeout in seconds
    pub http_timeout_secs: u64,

    /// Browser navigation timeout in seconds
    pub navigation_timeout_secs: u64,

    /// Extra wait after network idle for client-side rendering
    pub render_delay_ms: u64,

    /// Directory receiving screenshots
    pub screenshot_dir: PathBuf,

    /// Run the browser without a window
    pub headless: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            http_timeout_secs: 5,
            navigation_timeout_secs: 30,
            render_delay_ms: 2000,
            screenshot_dir: std::env::temp_dir(),
            headless: true,
        }
    }
}

impl SuiteConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Per-user config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("poker-coach-e2e").join("config.yaml"))
    }

    /// Resolve defaults, then the config file, then environment overrides.
    /// The result is not validated; callers validate after their own overrides.
    pub fn resolve(explicit_path: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        let file = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| env.config_file.as_ref().map(PathBuf::from));

        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::load(path)?,
                None => Self::default(),
            },
        };

        config.apply_env(env);
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(url) = &env.frontend_url {
            self.frontend_url = url.clone();
        }
        if let Some(url) = &env.backend_url {
            self.backend_url = url.clone();
        }
        if let Some(timeout) = env.timeout {
            self.http_timeout_secs = timeout;
        }
        if let Some(timeout) = env.navigation_timeout {
            self.navigation_timeout_secs = timeout;
        }
        if let Some(delay) = env.render_delay_ms {
            self.render_delay_ms = delay;
        }
        if let Some(dir) = &env.screenshot_dir {
            self.screenshot_dir = PathBuf::from(dir);
        }
        if let Some(headless) = env.headless {
            self.headless = headless;
        }
    }

    /// Reject values that would make every check fail for the wrong reason
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("frontend_url", &self.frontend_url),
            ("backend_url", &self.backend_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("{name} must be an http(s) URL, got '{url}'");
            }
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
