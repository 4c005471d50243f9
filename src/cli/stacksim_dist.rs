//! Show the distances between two stack listings.
//!
//! Sometimes it is useful to quickly check how far apart two crash stacks are under each of the
//! supported metrics before touching any deduplication configuration; this is what this tool is
//! for.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;

use stacksim::{distance::DistanceType, error::StackSimError};

mod common;
#[macro_use]
#[allow(unused_macros)]
mod logging;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Calculate distances between two stack listings.",
    long_about = None,
    propagate_version = true)]
struct Cli {
    /// The first stack listing.
    #[arg(
        long_help,
        value_name = "STACK 1",
        help = "File containing the first stack listing (one function name per line)"
    )]
    stack_1: PathBuf,

    /// The second stack listing.
    #[arg(
        long_help,
        value_name = "STACK 2",
        help = "File containing the second stack listing (one function name per line)"
    )]
    stack_2: PathBuf,

    /// The distance metric to use (all four are shown by default).
    #[arg(
        long_help,
        short,
        long,
        value_name = "METRIC",
        help = "The distance metric to use"
    )]
    distance_metric: Option<String>,
}

/// Run the distance calculation tool.
fn run(
    stack_1_file: &Path,
    stack_2_file: &Path,
    distance_metric: Option<&str>,
) -> Result<(), StackSimError> {
    let thread_1 = common::load_stack_listing(stack_1_file)?;
    let thread_2 = common::load_stack_listing(stack_2_file)?;

    let metrics: Vec<DistanceType> = match distance_metric {
        Some(name) => vec![name.parse()?],
        None => DistanceType::all().to_vec(),
    };

    println_info!(
        "Distances between '{}' ({} frames) and '{}' ({} frames):",
        stack_1_file.display(),
        thread_1.frame_count(),
        stack_2_file.display(),
        thread_2.frame_count()
    );
    metrics.iter().for_each(|metric| {
        println_info!("  {}: {:.6}", metric, metric.dist(&thread_1, &thread_2));
    });

    Ok(())
}

fn main() -> ExitCode {
    common::reset_sigpipe();
    let cli = Cli::parse();

    match run(
        &cli.stack_1,
        &cli.stack_2,
        cli.distance_metric.as_deref(),
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            println_error!(err);
            ExitCode::FAILURE
        }
    }
}
