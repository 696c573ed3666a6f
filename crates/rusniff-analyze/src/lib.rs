//! rusniff-analyze: token-level PHP function-arity analysis
//!
//! This crate provides:
//!
//! - A small PHP lexer producing the flat token stream the sniffer walks
//! - The accumulating arity sniff (definitions, call observations,
//!   reconciliation into findings)
//! - Multiple output formats (raw, json, github)
//! - Optional file logging of the scan
//!
//! # Example
//!
//! ```no_run
//! use rusniff_analyze::{Analyzer, SniffConfig, output::OutputFormat};
//! use std::path::Path;
//!
//! let mut analyzer = Analyzer::new(SniffConfig::default());
//! analyzer.scan_paths(&[Path::new("src/")]).unwrap();
//! let issues = analyzer.finish();
//!
//! let output = rusniff_analyze::output::format_issues(&issues, OutputFormat::Raw);
//! print!("{}", output);
//! ```

pub mod builtins;
pub mod issue;
pub mod lexer;
pub mod logging;
pub mod output;
pub mod sniff;

use issue::IssueCollection;
use rusniff_core::TokenKind;
use sniff::FunctionArgumentSniff;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use sniff::SniffConfig;

/// Drives the sniff: walks files in a stable order, tokenizes each one,
/// feeds the tokens of interest to the accumulator, and finally runs the
/// one reconciliation pass.
///
/// Scanning is strictly sequential; every observation of one file lands
/// before the next file begins, which is what the reconciler's ordering
/// rules depend on.
pub struct Analyzer {
    sniff: FunctionArgumentSniff,
    exclude: Vec<glob::Pattern>,
    files_scanned: usize,
}

impl Analyzer {
    /// Create a new analyzer with the given sniff configuration
    pub fn new(config: SniffConfig) -> Self {
        Self {
            sniff: FunctionArgumentSniff::new(config),
            exclude: Vec::new(),
            files_scanned: 0,
        }
    }

    /// Add glob patterns for paths to skip while walking directories
    pub fn with_exclude_patterns(mut self, patterns: &[String]) -> Self {
        self.exclude = patterns
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .collect();
        self
    }

    /// Number of files scanned so far
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Scan already-loaded source under the given path label
    pub fn scan_source(&mut self, path: &Path, source: &str) {
        let tokens = lexer::tokenize(source);
        let mut hits = 0;
        for (index, token) in tokens.iter().enumerate() {
            if matches!(token.kind, TokenKind::Function | TokenKind::OpenParen) {
                self.sniff.process(path, &tokens, index);
                hits += 1;
            }
        }
        logging::log_file_scanned(path, tokens.len(), hits);
        self.files_scanned += 1;
    }

    /// Scan a single file
    pub fn scan_file(&mut self, path: &Path) -> Result<(), AnalyzeError> {
        let source = fs::read_to_string(path)?;
        self.scan_source(path, &source);
        Ok(())
    }

    /// Scan multiple paths (files or directories). Directories are walked
    /// for `.php` files; the collected list is sorted so observation order
    /// is stable across runs.
    pub fn scan_paths(&mut self, paths: &[&Path]) -> Result<usize, AnalyzeError> {
        if paths.is_empty() {
            return Err(AnalyzeError::NoPathsGiven);
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for path in paths {
            if path.is_file() {
                files.push(path.to_path_buf());
            } else if path.is_dir() {
                for entry in WalkDir::new(path)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                {
                    let entry_path = entry.path();
                    if entry_path.is_file()
                        && entry_path.extension().map(|e| e == "php").unwrap_or(false)
                        && !self.is_excluded(entry_path)
                    {
                        files.push(entry_path.to_path_buf());
                    }
                }
            } else {
                return Err(AnalyzeError::PathNotFound(path.to_path_buf()));
            }
        }
        files.sort();

        logging::log_scan_start(files.len());
        let count = files.len();
        for file in files {
            self.scan_file(&file)?;
        }
        Ok(count)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| {
            pattern.matches(&path_str)
                || path
                    .file_name()
                    .map(|name| pattern.matches(&name.to_string_lossy()))
                    .unwrap_or(false)
        })
    }

    /// Run the one reconciliation pass and consume the analyzer.
    pub fn finish(self) -> IssueCollection {
        self.sniff.reconcile()
    }
}

/// Errors that can occur during analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No paths given for analysis")]
    NoPathsGiven,

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_clean_source() {
        let mut analyzer = Analyzer::new(SniffConfig::default());
        analyzer.scan_source(
            Path::new("test.php"),
            "<?php\nfunction greet($name) {}\ngreet('world');\n",
        );
        let issues = analyzer.finish();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_analyzer_undefined_function() {
        let mut analyzer = Analyzer::new(SniffConfig::default());
        analyzer.scan_source(Path::new("test.php"), "<?php\nmy_undefined_function(1);\n");
        let issues = analyzer.finish();
        assert!(issues
            .issues()
            .iter()
            .any(|i| i.message.contains("'my_undefined_function' function was called but not defined")));
    }

    #[test]
    fn test_analyzer_empty_paths_is_error() {
        let mut analyzer = Analyzer::new(SniffConfig::default());
        assert!(matches!(
            analyzer.scan_paths(&[]),
            Err(AnalyzeError::NoPathsGiven)
        ));
    }

    #[test]
    fn test_definitions_cross_file_boundaries() {
        let mut analyzer = Analyzer::new(SniffConfig::default());
        analyzer.scan_source(Path::new("caller.php"), "<?php\nhelper(1, 2);\n");
        analyzer.scan_source(Path::new("lib.php"), "<?php\nfunction helper($a, $b) {}\n");
        let issues = analyzer.finish();
        // The definition is discovered after the call; reconciliation still
        // resolves it.
        assert!(issues.is_empty());
    }
}
