//! rusniff CLI - token-level PHP function-arity sniffer
//!
//! Scans PHP sources for three defect classes:
//! - calls to functions never defined or recognized anywhere in the corpus
//! - calls supplying fewer arguments than a definition's declared minimum
//! - calls to the same function with inconsistent argument counts

mod config;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use config::Config;
use rusniff_analyze::output::{format_issues, OutputFormat};
use rusniff_analyze::{logging, Analyzer};

#[derive(Parser)]
#[command(name = "rusniff")]
#[command(version = "0.1.0")]
#[command(about = "A Rust-based PHP function-arity sniffer")]
struct Cli {
    /// Files or directories to scan
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format: raw, json, github (default: raw)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Path to config file (default: auto-detect .rusniff.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Write a scan log to the given path (or a temp file if omitted)
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(log_path) = &cli.log {
        let requested = if log_path.as_os_str().is_empty() {
            None
        } else {
            Some(log_path.as_path())
        };
        let path = logging::init_logger(requested)?;
        if cli.verbose {
            eprintln!("{}: {}", "Logging to".bold(), path.display());
        }
    }

    // Load config file
    let config = if cli.no_config {
        Config::default()
    } else if let Some(config_path) = &cli.config {
        let cfg = Config::load_path(config_path)?;
        if cli.verbose {
            eprintln!("{}: {}", "Using config".bold(), config_path.display());
        }
        cfg
    } else {
        match Config::load()? {
            Some((cfg, path)) => {
                if cli.verbose {
                    eprintln!("{}: {}", "Using config".bold(), path.display());
                }
                cfg
            }
            None => Config::default(),
        }
    };

    let output_format = resolve_format(
        cli.json,
        cli.format.as_deref(),
        config.output.format.as_deref(),
    )?;

    let mut analyzer =
        Analyzer::new(config.sniff_config()).with_exclude_patterns(&config.paths.exclude);

    let paths: Vec<_> = cli.paths.iter().map(|p| p.as_path()).collect();
    let scanned = analyzer.scan_paths(&paths)?;

    let issues = analyzer.finish();
    print!("{}", format_issues(&issues, output_format));

    if cli.verbose && output_format == OutputFormat::Raw {
        let summary = format!("{} findings in {} files", issues.len(), scanned);
        if issues.is_empty() {
            eprintln!("{}", summary.green());
        } else {
            eprintln!("{}", summary.yellow());
        }
    }

    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Pick the output format. An explicit flag always wins over the config
/// file; the config only fills in when no flag was given.
fn resolve_format(
    json: bool,
    flag: Option<&str>,
    config: Option<&str>,
) -> Result<OutputFormat> {
    if json {
        return Ok(OutputFormat::Json);
    }
    if let Some(name) = flag {
        return OutputFormat::from_str(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid output format '{}'. Valid options: raw, json, github",
                name
            )
        });
    }
    Ok(config
        .and_then(OutputFormat::from_str)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_format_flag_beats_config() {
        let format = resolve_format(false, Some("raw"), Some("json")).unwrap();
        assert_eq!(format, OutputFormat::Raw);
    }

    #[test]
    fn test_config_format_used_without_flag() {
        let format = resolve_format(false, None, Some("json")).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_json_shorthand_wins() {
        let format = resolve_format(true, None, Some("github")).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_default_is_raw() {
        let format = resolve_format(false, None, None).unwrap();
        assert_eq!(format, OutputFormat::Raw);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(resolve_format(false, Some("table"), None).is_err());
    }
}
