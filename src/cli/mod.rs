//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Poker Coach end-to-end smoke tests
#[derive(Parser, Debug)]
#[command(name = "poker-coach-e2e")]
#[command(version)]
#[command(about = "Run end-to-end checks against a running Poker Coach instance")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error); overrides --verbose
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the end-to-end checks
    Test(TestArgs),

    /// List available checks
    List(ListArgs),
}

/// Arguments for test command
#[derive(Parser, Debug, Default)]
pub struct TestArgs {
    /// Frontend root URL
    #[arg(long)]
    pub frontend_url: Option<String>,

    /// Backend API base URL
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Specific check number to run (1-4)
    #[arg(long)]
    pub check: Option<u8>,

    /// Skip specific checks (comma-separated check numbers)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<u8>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Browser navigation timeout in seconds
    #[arg(long)]
    pub nav_timeout: Option<u64>,

    /// Wait after network idle for client-side rendering, in milliseconds
    #[arg(long)]
    pub render_delay: Option<u64>,

    /// Directory for screenshots
    #[arg(long)]
    pub screenshot_dir: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Install Playwright browsers before running
    #[arg(long)]
    pub install_browsers: bool,

    /// Output format (table, summary, json, json-pretty, csv)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Save the JSON summary to file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show check categories
    #[arg(short, long)]
    pub detailed: bool,

    /// Show supported environment variables
    #[arg(long)]
    pub env: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_suite() {
        let args = Args::parse_from(["poker-coach-e2e"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_list_args() {
        let args = Args::parse_from(["poker-coach-e2e", "list", "--detailed"]);
        match args.command {
            Some(Command::List(list_args)) => assert!(list_args.detailed),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_test_args() {
        let args = Args::parse_from([
            "poker-coach-e2e",
            "test",
            "--backend-url",
            "http://127.0.0.1:4000",
            "--skip",
            "2,3",
            "--format",
            "json",
            "-v",
        ]);
        assert!(args.verbose);
        match args.command {
            Some(Command::Test(test_args)) => {
                assert_eq!(
                    test_args.backend_url.as_deref(),
                    Some("http://127.0.0.1:4000")
                );
                assert_eq!(test_args.skip, vec![2, 3]);
                assert_eq!(test_args.format.as_deref(), Some("json"));
                assert!(!test_args.headed);
            }
            _ => panic!("Expected Test command"),
        }
    }
}
