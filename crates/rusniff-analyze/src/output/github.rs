//! GitHub Actions annotations output format

use super::Formatter;
use crate::issue::IssueCollection;

pub struct GithubFormatter;

impl Formatter for GithubFormatter {
    fn format(&self, issues: &IssueCollection) -> String {
        let mut output = String::new();

        for issue in issues.issues() {
            // GitHub Actions annotation format:
            // ::error file={name},line={line}::{message}
            output.push_str(&format!(
                "::error file={},line={}::{}\n",
                issue.file.display(),
                issue.line,
                escape_message(&issue.message)
            ));
        }

        output
    }
}

/// Escape special characters for GitHub Actions annotations
fn escape_message(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;
    use std::path::PathBuf;

    #[test]
    fn test_github_format() {
        let mut issues = IssueCollection::new();
        issues.add(Issue::new(
            "function.notDefined",
            "The 'foo' function was called but not defined here: src/file.php:10",
            PathBuf::from("src/file.php"),
            10,
        ));

        let output = GithubFormatter.format(&issues);

        assert!(output.starts_with("::error file=src/file.php,line=10::"));
    }

    #[test]
    fn test_escape_message() {
        assert_eq!(escape_message("line1\nline2"), "line1%0Aline2");
        assert_eq!(escape_message("100%"), "100%25");
    }
}
