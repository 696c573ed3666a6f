//! JSON output format

use super::Formatter;
use crate::issue::{Issue, IssueCollection};
use serde::Serialize;
use std::collections::BTreeMap;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    totals: Totals,
    files: BTreeMap<String, FileErrors>,
}

#[derive(Serialize)]
struct Totals {
    errors: usize,
    file_errors: usize,
}

#[derive(Serialize)]
struct FileErrors {
    errors: usize,
    messages: Vec<FileMessage>,
}

#[derive(Serialize)]
struct FileMessage {
    message: String,
    line: usize,
    check: String,
}

impl Formatter for JsonFormatter {
    fn format(&self, issues: &IssueCollection) -> String {
        let mut files: BTreeMap<String, Vec<&Issue>> = BTreeMap::new();

        // Group issues by file
        for issue in issues.issues() {
            let path = issue.file.display().to_string();
            files.entry(path).or_default().push(issue);
        }

        let mut file_errors: BTreeMap<String, FileErrors> = BTreeMap::new();
        let mut total_errors = 0;

        for (path, path_issues) in files {
            let error_count = path_issues.len();
            total_errors += error_count;

            let messages: Vec<FileMessage> = path_issues
                .iter()
                .map(|issue| FileMessage {
                    message: issue.message.clone(),
                    line: issue.line,
                    check: issue.check_id.clone(),
                })
                .collect();

            file_errors.insert(
                path,
                FileErrors {
                    errors: error_count,
                    messages,
                },
            );
        }

        let output = JsonOutput {
            totals: Totals {
                errors: total_errors,
                file_errors: file_errors.len(),
            },
            files: file_errors,
        };

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;
    use std::path::PathBuf;

    #[test]
    fn test_json_format() {
        let mut issues = IssueCollection::new();
        issues.add(Issue::new(
            "arguments.missing",
            "Parameters missing for a call to the 'save' function here: /path/to/file.php:10",
            PathBuf::from("/path/to/file.php"),
            10,
        ));

        let output = JsonFormatter.format(&issues);

        assert!(output.contains("\"errors\": 1"));
        assert!(output.contains("arguments.missing"));
        assert!(output.contains("/path/to/file.php"));
    }
}
