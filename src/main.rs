use std::collections::VecDeque;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use merge_insertion::input::parse_values;
use merge_insertion::measure::{measure, Measurement};
use merge_insertion::report::{render, DEFAULT_SHOW};

#[derive(Parser)]
#[command(
    name = "pmerge",
    about = "Sort positive integers with merge-insertion and time each working sequence",
    version,
    after_help = "\
Examples:
  pmerge 3 5 9 7 4
  pmerge `shuf -i 1-100000 -n 3000 | tr \"\\n\" \" \"`"
)]
struct Cli {
    /// Positive integers to sort, each argument may hold several space separated values
    #[arg(allow_hyphen_values = true)]
    values: Vec<String>,

    /// Number of elements printed before the rest is elided
    #[arg(long, default_value_t = DEFAULT_SHOW)]
    show: usize,

    /// Working sequence(s) to sort and time
    #[arg(long, value_enum, default_value_t = BackingArg::All)]
    backing: BackingArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackingArg {
    Vec,
    VecDeque,
    All,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let values = match parse_values(&cli.values) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(len = values.len(), "parsed input");

    let mut measurements: Vec<Measurement<u32>> = Vec::with_capacity(2);
    if matches!(cli.backing, BackingArg::Vec | BackingArg::All) {
        measurements.push(measure::<u32, Vec<u32>>(&values));
    }
    if matches!(cli.backing, BackingArg::VecDeque | BackingArg::All) {
        measurements.push(measure::<u32, VecDeque<u32>>(&values));
    }

    if let Some((first, rest)) = measurements.split_first() {
        if let Some(other) = rest.iter().find(|m| m.sorted != first.sorted) {
            error!(
                first = first.backing,
                other = other.backing,
                "backings disagree on the sorted sequence"
            );
            return ExitCode::from(2);
        }
    }

    println!("{}", render(&values, &measurements, cli.show));

    ExitCode::SUCCESS
}
