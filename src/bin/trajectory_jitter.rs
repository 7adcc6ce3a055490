//! Trajectory jitter CLI
//!
//! Reads `iter,time,value` coordinate records, spreads coincident points, and writes
//! the jittered records back out.
//!
//! ```text
//! trajectory-jitter --input runs.csv --output shown.csv --jitter-range 0.25 -v
//! ```
//!
//! Exit code is 1 on any error (unreadable file, malformed records, invalid range).

use std::io;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use reedfrost_jitter::constants::DEFAULT_JITTER_RANGE;
use reedfrost_jitter::trajectories::jitter_engine::jitter_trajectories;
use reedfrost_jitter::trajectories::records_csv::{read_records_csv, write_records, write_records_csv};
use reedfrost_jitter::trajectories::unpivot::{batch_to_records, unpivot_trajectories};
use reedfrost_jitter::JitterError;

/// Spread overlapping outbreak trajectories for display
#[derive(Parser)]
#[command(name = "trajectory-jitter")]
#[command(version)]
#[command(about = "Spread coincident (time, value) points of a trajectory batch")]
struct Cli {
    /// CSV file with an `iter,time,value` header
    #[arg(short, long)]
    input: Utf8PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,

    /// Value-axis spread allowed at the most crowded point
    #[arg(short, long, default_value_t = DEFAULT_JITTER_RANGE)]
    jitter_range: f64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<(), JitterError> {
    let records = read_records_csv(&cli.input)?;
    info!(path = %cli.input, records = records.len(), "read coordinate records");

    let batch = unpivot_trajectories(records)?;
    let jittered = jitter_trajectories(&batch, cli.jitter_range)?;
    let out = batch_to_records(&jittered);

    match &cli.output {
        Some(path) => {
            write_records_csv(path, &out)?;
            info!(path = %path, records = out.len(), "wrote jittered records");
        }
        None => write_records(io::stdout().lock(), &out)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
