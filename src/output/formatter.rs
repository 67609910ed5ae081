//! Output formatters for suite results
//!
//! Provides the banner report plus summary, JSON and CSV formats.

use anyhow::Result;

use crate::models::{CheckResult, CheckStatus, SuiteSummary};

const RULE: &str = "==================================================";

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Header printed before the checks start (table format only)
    pub fn banner(&self) -> Option<String> {
        match self.format {
            OutputFormat::Table => Some(format!("\n{RULE}\n  POKER COACH E2E TESTS\n{RULE}\n")),
            _ => None,
        }
    }

    fn status_label(&self, status: CheckStatus) -> &'static str {
        match (status, self.colorize) {
            (CheckStatus::Pass, true) => "\x1b[32m✓ PASS\x1b[0m",
            (CheckStatus::Fail, true) => "\x1b[31m✗ FAIL\x1b[0m",
            (CheckStatus::Pass, false) => "✓ PASS",
            (CheckStatus::Fail, false) => "✗ FAIL",
        }
    }

    fn format_result_line(&self, result: &CheckResult) -> String {
        format!(
            "  {}: {}",
            self.status_label(result.status),
            result.check.name()
        )
    }

    /// Format the suite summary
    pub fn format_summary(&self, summary: &SuiteSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => self
                .format_results_csv(&summary.results)
                .unwrap_or_default(),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &SuiteSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{RULE}\n  TEST RESULTS\n{RULE}\n"));

        // Execution order, never sorted by outcome
        for result in &summary.results {
            output.push_str(&self.format_result_line(result));
            output.push('\n');
            if let Some(message) = result.message.as_ref().filter(|_| !result.passed()) {
                output.push_str(&format!("      {message}\n"));
            }
        }

        let passed = if self.colorize && summary.is_all_passed() {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else if self.colorize {
            format!("\x1b[31m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };

        output.push_str(&format!(
            "\n  Total: {}/{} tests passed\n",
            passed, summary.total
        ));
        output.push_str(RULE);
        output.push('\n');

        output
    }

    fn format_summary_brief(&self, summary: &SuiteSummary) -> String {
        format!(
            "Poker Coach E2E: {}/{} passed ({:.1}%) in {}ms",
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.total_duration_ms
        )
    }

    fn format_results_csv(&self, results: &[CheckResult]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["check_num", "check_name", "status", "duration_ms", "message"])?;
        for result in results {
            writer.write_record([
                result.check.number().to_string(),
                result.check.name().to_string(),
                result.status.to_string(),
                result.duration_ms.to_string(),
                result.message.clone().unwrap_or_default(),
            ])?;
        }
        let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(String::from_utf8(bytes)?)
    }
}
