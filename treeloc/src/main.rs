//! # treeloc
//!
//! Count lines, bytes and files in a directory tree.
//!
//! ## Overview
//!
//! treeloc is built on top of treeloclib and provides the command-line
//! interface: it turns flags into a `FilterConfig`, runs the scan and prints
//! the result.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! treeloc
//!
//! # Skip extra directories (on top of .git, node_modules, target, ...)
//! treeloc --skip generated,fixtures
//!
//! # Count only Go and Markdown files
//! treeloc --count go,md
//!
//! # Show the top 3 files and extensions, or the top 10
//! treeloc --rank
//! treeloc --rank 10
//!
//! # Machine-readable output
//! treeloc --rank --output json
//! ```

mod render;

use std::num::NonZeroUsize;
use std::process::ExitCode;

use anyhow::{anyhow, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use treeloclib::{scan, FilterConfig, Leaderboards, ScanOptions, DEFAULT_TOP};

use render::{render_json, render_text, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("treeloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines, bytes and files in a directory tree")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .default_value(".")
                .help("Directory to scan"),
        )
        .arg(
            Arg::new("skip")
                .short('s')
                .long("skip")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Comma-separated directory names to skip (in addition to defaults)"),
        )
        .arg(
            Arg::new("count")
                .short('c')
                .long("count")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Comma-separated file extensions to count (example: go,md)"),
        )
        .arg(
            Arg::new("include-hidden")
                .long("include-hidden")
                .action(ArgAction::SetTrue)
                .help("Include hidden files and directories (except skipped directories)"),
        )
        .arg(
            Arg::new("rank")
                .short('r')
                .long("rank")
                .action(ArgAction::SetTrue)
                .help("Show leaderboards for files and extensions by line count"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more detail to stderr (repeat for more)"),
        )
        .arg(
            Arg::new("top")
                .value_name("N")
                .num_args(0..)
                .allow_negative_numbers(true)
                .help("Number of leaderboard entries with --rank (default 3)"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> FilterConfig {
    let mut filter = FilterConfig::new().include_hidden(matches.get_flag("include-hidden"));

    if let Some(dirs) = matches.get_many::<String>("skip") {
        filter = filter.skip_dirs(dirs);
    }

    if let Some(exts) = matches.get_many::<String>("count") {
        filter = filter.count_extensions(exts);
    }

    filter
}

/// Validate the positional arguments: at most one positive integer, and
/// only together with `--rank`.
fn resolve_top(rank: bool, args: &[String]) -> anyhow::Result<NonZeroUsize> {
    let Some(first) = args.first() else {
        return Ok(DEFAULT_TOP);
    };
    if !rank {
        bail!("unexpected argument: {}", first);
    }
    let top = first
        .parse::<NonZeroUsize>()
        .map_err(|_| anyhow!("invalid rank value: {} (must be a positive integer)", first))?;
    if let Some(extra) = args.get(1) {
        bail!("unexpected argument: {}", extra);
    }
    Ok(top)
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Run a count from parsed matches and return the rendered output.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let rank = matches.get_flag("rank");
    let positional: Vec<String> = matches
        .get_many::<String>("top")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let top = resolve_top(rank, &positional)?;

    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let output_mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_name(s))
        .unwrap_or_default();

    let options = ScanOptions::new().root(path).filter(build_filter(matches));
    log::debug!("scan options: {:?}", options);

    let result = scan(&options)?;
    let boards = rank.then(|| Leaderboards::from_result(&result, top));

    let output = match output_mode {
        OutputMode::Text => render_text(&result, boards.as_ref()),
        OutputMode::Json => render_json(&result, boards.as_ref())?,
    };
    Ok(output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_top_default() {
        assert_eq!(resolve_top(false, &[]).unwrap(), DEFAULT_TOP);
        assert_eq!(resolve_top(true, &[]).unwrap().get(), 3);
    }

    #[test]
    fn test_resolve_top_explicit() {
        assert_eq!(resolve_top(true, &args(&["10"])).unwrap().get(), 10);
    }

    #[test]
    fn test_resolve_top_rejects_non_positive() {
        for bad in ["0", "-2", "three", ""] {
            let err = resolve_top(true, &args(&[bad])).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid rank value: {} (must be a positive integer)", bad)
            );
        }
    }

    #[test]
    fn test_resolve_top_rejects_extra_arguments() {
        let err = resolve_top(true, &args(&["5", "6"])).unwrap_err();
        assert_eq!(err.to_string(), "unexpected argument: 6");

        let err = resolve_top(false, &args(&["5"])).unwrap_err();
        assert_eq!(err.to_string(), "unexpected argument: 5");
    }

    #[test]
    fn test_build_filter() {
        let matches = build_command().get_matches_from([
            "treeloc",
            "--skip",
            "gen, fixtures",
            "--count",
            "GO,.md",
            "--include-hidden",
        ]);

        let filter = build_filter(&matches);

        assert!(filter.skip_dirs.contains("gen"));
        assert!(filter.skip_dirs.contains("fixtures"));
        assert!(filter.skip_dirs.contains("node_modules"));
        assert!(filter.count_extensions.contains(".go"));
        assert!(filter.count_extensions.contains(".md"));
        assert!(filter.include_hidden);
    }

    #[test]
    fn test_command_parses_rank_value() {
        let matches = build_command().get_matches_from(["treeloc", "--rank", "7"]);

        assert!(matches.get_flag("rank"));
        let top: Vec<&String> = matches.get_many::<String>("top").unwrap().collect();
        assert_eq!(top, vec!["7"]);
    }
}
