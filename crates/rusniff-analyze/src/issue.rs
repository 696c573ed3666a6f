//! Issue/diagnostic types for analysis results

use std::path::PathBuf;

/// A single finding from the reconciliation pass. Every finding this tool
/// produces is an error; there is no severity ladder.
#[derive(Debug, Clone)]
pub struct Issue {
    /// The check that produced this finding (e.g., "arguments.missing")
    pub check_id: String,
    /// Human-readable message, one line, location included
    pub message: String,
    /// File where the offending call was observed
    pub file: PathBuf,
    /// Line number (1-based)
    pub line: usize,
}

impl Issue {
    pub fn new(
        check_id: impl Into<String>,
        message: impl Into<String>,
        file: PathBuf,
        line: usize,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            message: message.into(),
            file,
            line,
        }
    }
}

/// Collection of findings, kept in emission order.
///
/// The reconciler emits findings in call-table insertion order and the
/// formatters must not re-sort them.
#[derive(Debug, Default)]
pub struct IssueCollection {
    issues: Vec<Issue>,
}

impl IssueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creation() {
        let issue = Issue::new(
            "arguments.missing",
            "Parameters missing for a call to the 'save' function here: /test.php:10",
            PathBuf::from("/test.php"),
            10,
        );

        assert_eq!(issue.check_id, "arguments.missing");
        assert_eq!(issue.line, 10);
    }

    #[test]
    fn test_collection_preserves_order() {
        let mut collection = IssueCollection::new();
        collection.add(Issue::new("b", "second file first", PathBuf::from("/b.php"), 2));
        collection.add(Issue::new("a", "first file second", PathBuf::from("/a.php"), 1));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.issues()[0].check_id, "b");
        assert_eq!(collection.issues()[1].check_id, "a");
    }
}
