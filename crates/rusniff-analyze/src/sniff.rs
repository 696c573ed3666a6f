//! Function-arity sniffing over the token stream
//!
//! The sniff is a process-wide accumulator. The scheduler feeds it one
//! token of interest at a time (a `function` keyword or an opening `(`),
//! in file order; `reconcile()` runs exactly once after every file has been
//! scanned and turns the accumulated tables into findings.

use crate::builtins;
use crate::issue::{Issue, IssueCollection};
use crate::logging;
use indexmap::IndexMap;
use rusniff_core::{count_arguments, resolve_called_name, resolve_defined_name, Token, TokenKind};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix marking a definition-table key for a callable reachable only
/// through a variable or reference, never directly by name. Calls resolving
/// to such a name can never be validated and are skipped wholesale.
pub const VARIABLE_SENTINEL: char = '$';

/// Keywords, operators and language constructs that read like calls in the
/// token stream but must never be tracked as user-defined functions.
const IGNORED_KEYWORDS: &[&str] = &[
    "if", "elseif", "else", "while", "do", "for", "foreach", "switch", "match", "catch",
    "return", "use", "fn", "static", "echo", "print", "exit", "die", "list", "array",
    "isset", "unset", "empty", "include", "include_once", "require", "require_once",
    "declare", "throw", "clone", "yield", "global", "namespace", "&&", "||", "+", "-",
    ".", ",", "=", "!",
];

/// Where a call was observed, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// One observed call: how many arguments were supplied, and where.
#[derive(Debug, Clone)]
struct CallObservation {
    args: usize,
    location: SourceLocation,
}

/// Configuration surface for the sniff: foreign definitions with known
/// minimum arities, and extra project-specific names to ignore.
#[derive(Debug, Default, Clone)]
pub struct SniffConfig {
    /// Externally-defined functions and their minimum argument counts.
    pub foreign: Vec<(String, usize)>,
    /// Host-provided helper names known to be safe, on top of the
    /// built-in keyword/operator set.
    pub ignored: Vec<String>,
}

/// The accumulating sniff. One instance per analysis run.
pub struct FunctionArgumentSniff {
    ignored: HashSet<String>,
    /// Function name -> minimum required argument count. Lowest wins.
    definitions: HashMap<String, usize>,
    /// Function name -> call observations, in file order. Insertion order
    /// of the map drives reconciliation order.
    calls: IndexMap<String, Vec<CallObservation>>,
    /// Name captured from the most recent `function` keyword, consumed by
    /// the parameter list that follows it.
    pending_definition: Option<String>,
}

impl FunctionArgumentSniff {
    pub fn new(config: SniffConfig) -> Self {
        let mut ignored: HashSet<String> =
            IGNORED_KEYWORDS.iter().map(|s| s.to_string()).collect();
        ignored.extend(config.ignored);

        Self {
            ignored,
            definitions: config.foreign.into_iter().collect(),
            calls: IndexMap::new(),
            pending_definition: None,
        }
    }

    /// Process one token of interest. `index` points at a `function`
    /// keyword or an opening parenthesis in `tokens`.
    pub fn process(&mut self, file: &Path, tokens: &[Token], index: usize) {
        let Some(token) = tokens.get(index) else {
            return;
        };
        match token.kind {
            TokenKind::Function => {
                // An anonymous `function (` has no name to define; its
                // parenthesis is handled through the call path instead.
                self.pending_definition = resolve_defined_name(tokens, index)
                    .filter(|name| *name != "(")
                    .map(str::to_string);
            }
            TokenKind::OpenParen => self.process_open_paren(file, tokens, index),
            _ => {}
        }
    }

    fn process_open_paren(&mut self, file: &Path, tokens: &[Token], index: usize) {
        let min_args = match count_arguments(tokens, index) {
            Ok(count) => count,
            Err(err) => {
                // Malformed grouping: drop this site, keep the run alive.
                logging::log(&format!(
                    "skipping malformed grouping in {}: {}",
                    file.display(),
                    err
                ));
                self.pending_definition = None;
                return;
            }
        };

        if let Some(name) = self.pending_definition.take() {
            self.record_definition(name, min_args);
            return;
        }

        let Some(called) = resolve_called_name(tokens, index) else {
            return;
        };

        if called.is_constructor
            || self.ignored.contains(called.name)
            || builtins::is_builtin(called.name)
        {
            return;
        }

        if called.name == "function" {
            // Anonymous function passed as an argument. Register it as a
            // variable-held definition; it is not a call to `function`.
            if let Some(name) = resolve_defined_name(tokens, index) {
                self.record_definition(format!("{VARIABLE_SENTINEL}{name}"), min_args);
            }
            return;
        }

        let line = tokens[index].line;
        self.calls
            .entry(called.name.to_string())
            .or_default()
            .push(CallObservation {
                args: min_args,
                location: SourceLocation {
                    file: file.to_path_buf(),
                    line,
                },
            });
    }

    /// Record a definition's minimum required argument count. A lower
    /// minimum observed anywhere is authoritative and overwrites a higher
    /// one; the reverse never happens.
    fn record_definition(&mut self, name: String, min_args: usize) {
        let entry = self.definitions.entry(name).or_insert(min_args);
        if min_args < *entry {
            *entry = min_args;
        }
    }

    /// The one finalization pass. Consumes the accumulated tables and
    /// produces findings in call-table insertion order.
    pub fn reconcile(self) -> IssueCollection {
        let mut issues = IssueCollection::new();

        for (name, observations) in &self.calls {
            if name.starts_with(VARIABLE_SENTINEL) {
                // Callable held in a variable; arity unknowable, skip.
                continue;
            }

            // First divergence only: one inconsistency finding per name,
            // citing the later of the two differing calls.
            for pair in observations.windows(2) {
                if pair[0].args != pair[1].args {
                    issues.add(Issue::new(
                        "arguments.inconsistent",
                        format!(
                            "Inconsistent argument counts for calls to the '{}' function here: {}",
                            name, pair[1].location
                        ),
                        pair[1].location.file.clone(),
                        pair[1].location.line,
                    ));
                    break;
                }
            }

            match self.definitions.get(name.as_str()) {
                None => {
                    for obs in observations {
                        issues.add(Issue::new(
                            "function.notDefined",
                            format!(
                                "The '{}' function was called but not defined here: {}",
                                name, obs.location
                            ),
                            obs.location.file.clone(),
                            obs.location.line,
                        ));
                    }
                }
                Some(&min_args) => {
                    for obs in observations {
                        if obs.args < min_args {
                            issues.add(Issue::new(
                                "arguments.missing",
                                format!(
                                    "Parameters missing for a call to the '{}' function here: {}",
                                    name, obs.location
                                ),
                                obs.location.file.clone(),
                                obs.location.line,
                            ));
                        }
                    }
                }
            }
        }

        logging::log(&format!(
            "reconciled {} definitions against {} called names: {} findings",
            self.definitions.len(),
            self.calls.len(),
            issues.len()
        ));

        issues
    }

    /// Minimum required argument count for a name, if known.
    pub fn minimum_args(&self, name: &str) -> Option<usize> {
        self.definitions.get(name).copied()
    }
}
