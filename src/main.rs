//! Poker Coach E2E - end-to-end smoke tests for the Poker Coach web app
//!
//! Runs four checks, in order, against a running frontend and backend:
//!
//! 1. Backend Health: `GET /api/health` answers 200 with `status: "ok"`
//! 2. Frontend Loads: the root page title and body mention "Poker"
//! 3. Mobile Responsive: the root page renders at 375x667 @2x
//! 4. API Auth Required: protected API routes answer 401 without credentials
//!
//! The process exits with 0 when every check passed and 1 otherwise.
//!
//! ## Usage
//!
//! ```bash
//! # Run all checks against the default local ports
//! poker-coach-e2e
//!
//! # Point at another deployment, backend checks only
//! poker-coach-e2e test --backend-url http://10.0.0.5:3001 --skip 2,3
//!
//! # Machine-readable output
//! poker-coach-e2e test --format json --output results.json
//!
//! # List available checks
//! poker-coach-e2e list --detailed
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

mod browser;
mod checks;
mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod utils;

#[cfg(test)]
mod test_support;

use browser::PlaywrightLauncher;
use cli::{Args, Command, TestArgs};
use config::{EnvConfig, SuiteConfig};
use executor::{select_checks, SuiteRunner};
use models::CheckKind;
use output::{OutputFormat, ResultFormatter};
use utils::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    let verbose = args.verbose || env.verbose.unwrap_or(false);
    let level = args
        .log_level
        .as_deref()
        .and_then(LogLevel::from_str)
        .unwrap_or_else(|| LogLevel::from_verbose(verbose));
    init_logger(level);

    match args
        .command
        .unwrap_or_else(|| Command::Test(TestArgs::default()))
    {
        Command::Test(test_args) => {
            let code = run_suite(args.config.as_deref(), &env, test_args).await?;
            std::process::exit(code);
        }
        Command::List(list_args) => list_checks(list_args),
    }

    Ok(())
}

async fn run_suite(config_path: Option<&Path>, env: &EnvConfig, args: TestArgs) -> Result<i32> {
    let config = build_config(config_path, env, &args)?;

    let checks = select_checks(args.check, &args.skip)?;

    let format_name = args.format.clone().unwrap_or_else(|| env.format_or("table"));
    let format = OutputFormat::from_str(&format_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {format_name}"))?;
    let mut formatter = ResultFormatter::new(format);
    if args.no_color || !std::io::stdout().is_terminal() {
        formatter = formatter.no_color();
    }

    let launcher = PlaywrightLauncher::new(config.headless, config.navigation_timeout_secs)
        .install_browsers(args.install_browsers);
    let runner = SuiteRunner::new(config, Arc::new(launcher))?;

    if let Some(banner) = formatter.banner() {
        println!("{banner}");
    }

    let summary = runner.run_checks(&checks).await?;
    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize results")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        info!("Results saved to {}", path.display());
    }

    Ok(summary.exit_code())
}

/// Layer file, environment and CLI settings, then validate the result
fn build_config(config_path: Option<&Path>, env: &EnvConfig, args: &TestArgs) -> Result<SuiteConfig> {
    let mut config = SuiteConfig::resolve(config_path, env)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// CLI flags win over file and environment settings
fn apply_cli_overrides(config: &mut SuiteConfig, args: &TestArgs) {
    if let Some(url) = &args.frontend_url {
        config.frontend_url = url.clone();
    }
    if let Some(url) = &args.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.http_timeout_secs = timeout;
    }
    if let Some(timeout) = args.nav_timeout {
        config.navigation_timeout_secs = timeout;
    }
    if let Some(delay) = args.render_delay {
        config.render_delay_ms = delay;
    }
    if let Some(dir) = &args.screenshot_dir {
        config.screenshot_dir = dir.clone();
    }
    if args.headed {
        config.headless = false;
    }
}

fn list_checks(args: cli::ListArgs) {
    println!("\nPoker Coach E2E Checks ({} total)\n", CheckKind::all().len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for check in CheckKind::all() {
        if args.detailed {
            println!(
                "  {}. {:20} [{}]",
                check.number(),
                check.name(),
                check.category()
            );
        } else {
            println!("  {}. {}", check.number(), check.name());
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    if args.env {
        config::print_env_help();
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win() {
        let mut config = SuiteConfig::default();
        let args = TestArgs {
            frontend_url: Some("http://127.0.0.1:8080".to_string()),
            render_delay: Some(0),
            headed: true,
            ..Default::default()
        };
        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.frontend_url, "http://127.0.0.1:8080");
        assert_eq!(config.backend_url, config::DEFAULT_BACKEND_URL);
        assert_eq!(config.render_delay_ms, 0);
        assert!(!config.headless);
    }

    #[test]
    fn test_cli_url_repairs_bad_env_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.yaml");
        std::fs::write(&path, "render_delay_ms: 0\n").unwrap();

        let env = EnvConfig {
            backend_url: Some("localhost:3001".to_string()),
            ..Default::default()
        };
        let args = TestArgs {
            backend_url: Some("http://127.0.0.1:3001".to_string()),
            ..Default::default()
        };

        let config = build_config(Some(&path), &env, &args).unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:3001");
    }

    #[test]
    fn test_bad_env_url_without_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.yaml");
        std::fs::write(&path, "render_delay_ms: 0\n").unwrap();

        let env = EnvConfig {
            backend_url: Some("localhost:3001".to_string()),
            ..Default::default()
        };

        let err = build_config(Some(&path), &env, &TestArgs::default()).unwrap_err();
        assert!(err.to_string().contains("backend_url must be an http(s) URL"));
    }
}
