//! Raw output format
//!
//! One finding per line, exactly the reconciler's message text, in the
//! order the reconciler emitted them. No headers, no summary, no
//! re-sorting - the finding order is part of the sniff's contract.

use super::Formatter;
use crate::issue::IssueCollection;

pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn format(&self, issues: &IssueCollection) -> String {
        let mut output = String::new();

        for issue in issues.issues() {
            output.push_str(&issue.message);
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;
    use std::path::PathBuf;

    #[test]
    fn test_raw_format_preserves_order() {
        let mut issues = IssueCollection::new();
        issues.add(Issue::new(
            "function.notDefined",
            "The 'zeta' function was called but not defined here: /b.php:3",
            PathBuf::from("/b.php"),
            3,
        ));
        issues.add(Issue::new(
            "arguments.missing",
            "Parameters missing for a call to the 'alpha' function here: /a.php:1",
            PathBuf::from("/a.php"),
            1,
        ));

        let output = RawFormatter.format(&issues);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("'zeta'"));
        assert!(lines[1].contains("'alpha'"));
    }
}
