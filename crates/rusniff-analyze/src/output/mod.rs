//! Output formatters for analysis results

mod github;
mod json;
mod raw;

pub use github::GithubFormatter;
pub use json::JsonFormatter;
pub use raw::RawFormatter;

use crate::issue::IssueCollection;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One finding per line, reconciliation order preserved
    #[default]
    Raw,
    /// JSON with totals and per-file messages
    Json,
    /// GitHub Actions annotations
    Github,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "raw" => Some(OutputFormat::Raw),
            "json" => Some(OutputFormat::Json),
            "github" => Some(OutputFormat::Github),
            _ => None,
        }
    }
}

/// Trait for output formatters
pub trait Formatter {
    /// Format the issues and return the output string
    fn format(&self, issues: &IssueCollection) -> String;
}

/// Format issues using the specified format
pub fn format_issues(issues: &IssueCollection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Raw => RawFormatter.format(issues),
        OutputFormat::Json => JsonFormatter.format(issues),
        OutputFormat::Github => GithubFormatter.format(issues),
    }
}
