//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "POKER_COACH_E2E";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Frontend URL from POKER_COACH_E2E_FRONTEND_URL
    pub frontend_url: Option<String>,
    /// Backend URL from POKER_COACH_E2E_BACKEND_URL
    pub backend_url: Option<String>,
    /// HTTP timeout from POKER_COACH_E2E_TIMEOUT
    pub timeout: Option<u64>,
    /// Navigation timeout from POKER_COACH_E2E_NAV_TIMEOUT
    pub navigation_timeout: Option<u64>,
    /// Render delay from POKER_COACH_E2E_RENDER_DELAY
    pub render_delay_ms: Option<u64>,
    /// Screenshot directory from POKER_COACH_E2E_SCREENSHOT_DIR
    pub screenshot_dir: Option<String>,
    /// Headless flag from POKER_COACH_E2E_HEADLESS
    pub headless: Option<bool>,
    /// Config file from POKER_COACH_E2E_CONFIG
    pub config_file: Option<String>,
    /// Output format from POKER_COACH_E2E_FORMAT
    pub format: Option<String>,
    /// Verbose from POKER_COACH_E2E_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            frontend_url: get_env("FRONTEND_URL"),
            backend_url: get_env("BACKEND_URL"),
            timeout: get_env_parse("TIMEOUT"),
            navigation_timeout: get_env_parse("NAV_TIMEOUT"),
            render_delay_ms: get_env_parse("RENDER_DELAY"),
            screenshot_dir: get_env("SCREENSHOT_DIR"),
            headless: get_env_bool("HEADLESS"),
            config_file: get_env("CONFIG"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
        }
    }

    /// Get output format with fallback
    pub fn format_or(&self, default: &str) -> String {
        self.format.clone().unwrap_or_else(|| default.to_string())
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Print all POKER_COACH_E2E environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_FRONTEND_URL    Frontend root URL");
    println!("  {ENV_PREFIX}_BACKEND_URL     Backend API base URL");
    println!("  {ENV_PREFIX}_TIMEOUT         HTTP timeout in seconds");
    println!("  {ENV_PREFIX}_NAV_TIMEOUT     Browser navigation timeout in seconds");
    println!("  {ENV_PREFIX}_RENDER_DELAY    Client render delay in milliseconds");
    println!("  {ENV_PREFIX}_SCREENSHOT_DIR  Directory for screenshots");
    println!("  {ENV_PREFIX}_HEADLESS        Run browser headless (true/false)");
    println!("  {ENV_PREFIX}_CONFIG          Path to configuration file");
    println!("  {ENV_PREFIX}_FORMAT          Output format (table, summary, json, csv)");
    println!("  {ENV_PREFIX}_VERBOSE         Enable verbose output (true/false)");
}
