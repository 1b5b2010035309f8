//! expandsets - Expand multi-valued columns of tab-separated records

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::debug;

use expandsets::config::{Config, DEFAULT_SEPARATOR};
use expandsets::logging::init_logging;
use expandsets::model::ColumnSet;
use expandsets::stream::{self, Summary};

/// Given a COLUMN whose values are joined by a separator, expand it into
/// multiple rows. With more than one COLUMN the cartesian product of the
/// sets is returned.
#[derive(Parser, Debug)]
#[command(name = "expandsets")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Columns to expand (1-based)
    #[arg(value_name = "COLUMN", required = true, num_args = 1..)]
    columns: Vec<String>,

    /// Separator between multiple values of the same column
    #[arg(short, long, value_name = "SEPARATOR", default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// With exactly two columns, pair the i-th value of the first set with the
    /// i-th value of the second instead of taking the cartesian product
    #[arg(short, long)]
    pairs: bool,

    /// Same as --pairs, kept for backward compatibility
    #[arg(short, long)]
    tuples: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(summary) => {
            if summary.closed_early {
                debug!("Stopped early after {} rows", summary.rows);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<Summary> {
    let columns = ColumnSet::parse(&cli.columns).context("Failed to parse COLUMN arguments")?;

    let config = Config::new(columns)
        .with_separator(cli.separator)
        .with_pairs(cli.pairs || cli.tuples);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = stream::run(&config, stdin.lock(), stdout.lock())?;

    Ok(summary)
}

/// Print an error to stderr, with a coloured prefix on terminals
fn report_error(err: &anyhow::Error) {
    let choice = if io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    // Nothing sensible to do if stderr itself is gone
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "error");
    let _ = stderr.reset();
    let _ = writeln!(stderr, ": {:#}", err);
}
