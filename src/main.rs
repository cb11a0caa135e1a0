//! refselect: range-based reference designator selection for PCB boards
//!
//! Loads a JSON board snapshot, selects every footprint whose reference
//! matches the configured prefix and numeric range, prints one `Selected <n>`
//! line per match, and requests a view refresh.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use refselect::board::snapshot;
use refselect::config;
use refselect::host::LoggingRefresher;
use refselect::select::{run_selection, Criteria, MalformedPolicy, PassOutcome};

/// Selects footprints by reference designator prefix and numeric range.
///
/// Reads a JSON board snapshot, marks every footprint whose reference is
/// `<PREFIX><n>` with `min <= n <= max`, and reports the selection. The
/// snapshot itself is never modified on disk.
#[derive(Parser, Debug)]
#[command(name = "refselect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON board snapshot
    #[arg(value_name = "BOARD_FILE")]
    board: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Reference prefix to match (overrides config)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Inclusive lower bound for the numeric suffix (overrides config)
    #[arg(long, value_name = "N")]
    min: Option<u32>,

    /// Inclusive upper bound for the numeric suffix (overrides config)
    #[arg(long, value_name = "N")]
    max: Option<u32>,

    /// Policy for a matching prefix with a non-numeric suffix (overrides config)
    #[arg(long, value_enum, value_name = "POLICY")]
    on_malformed: Option<MalformedPolicy>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the refselect CLI.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // CLI arguments override config values
    let prefix = args.prefix.unwrap_or(cfg.selection.prefix);
    let lower = args.min.unwrap_or(cfg.selection.lower);
    let upper = args.max.unwrap_or(cfg.selection.upper);
    let policy = args.on_malformed.unwrap_or(cfg.selection.on_malformed);

    let criteria = match Criteria::new(prefix, lower, upper) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("Invalid selection criteria: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        board = %args.board.display(),
        prefix = criteria.prefix(),
        lower = criteria.lower(),
        upper = criteria.upper(),
        "loading board snapshot"
    );

    let mut board = match snapshot::load(&args.board) {
        Ok(board) => board,
        Err(e) => {
            error!(error = %e, "failed to load board");
            eprintln!("Board error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut refresher = LoggingRefresher;
    let report = match run_selection(&mut board, &criteria, policy, &mut refresher) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "selection pass failed");
            eprintln!("Host error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for matched in &report.matched {
        println!("Selected {}", matched.number);
    }

    for reference in &report.skipped_malformed {
        eprintln!("Warning: skipped malformed reference '{reference}'");
    }

    match report.outcome {
        PassOutcome::Completed => {
            info!(
                examined = report.examined,
                matched = report.matched.len(),
                "selection complete"
            );
            ExitCode::SUCCESS
        }
        PassOutcome::Aborted {
            reference,
            position,
        } => {
            eprintln!(
                "Error: malformed reference '{reference}' at position {position}; \
                 pass aborted, no refresh issued"
            );
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(get_log_level(3, true, "warn"), Level::ERROR);
    }

    #[test]
    fn config_level_used_without_verbosity() {
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn verbosity_escalates() {
        assert_eq!(get_log_level(1, false, "warn"), Level::INFO);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(3, false, "warn"), Level::TRACE);
    }
}
