//! Bucket a directory of stack listings into groups of duplicate crashes.
//!
//! Every file in the directory is read as one stack listing; the tool computes the full pairwise
//! distance matrix and prints the resulting buckets. The metric and merge threshold come from a
//! TOML configuration file, so a deduplication setup can be pinned once and shared.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;

use stacksim::{
    clustering::cluster_threads,
    config::Config,
    error::{ErrorKind, StackSimError},
    fail,
    matrix::DistanceMatrix,
};

mod common;
#[macro_use]
#[allow(unused_macros)]
mod logging;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Bucket stack listings into groups of duplicate crashes.",
    long_about = None,
    propagate_version = true)]
struct Cli {
    /// The directory containing the stack listings.
    #[arg(
        long_help,
        value_name = "DIR",
        help = "Directory of stack listings (one file per crash)"
    )]
    stacks_dir: PathBuf,

    /// The configuration file to use.
    #[arg(
        long_help,
        short = 'c',
        long = "config-file",
        value_name = "FILE",
        help = "The configuration file to use (defaults apply if missing)"
    )]
    config_file: Option<PathBuf>,

    /// Display the pairwise distances inside every bucket.
    #[arg(long_help, short, long, help = "Be more verbose")]
    verbose: bool,
}

/// Run the deduplication tool.
fn run(stacks_dir: &Path, config_file: Option<&Path>, verbose: bool) -> Result<(), StackSimError> {
    let config = config_file.map_or_else(|| Ok(Config::default()), Config::load)?;

    let mut stack_files: Vec<PathBuf> = fs::read_dir(stacks_dir)
        .map_or_else(
            |err| {
                fail!(
                    ErrorKind::InvalidArgument,
                    "invalid stack listing directory '{}': {}.",
                    stacks_dir.display(),
                    err
                )
            },
            |entries| {
                Ok(entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|path| path.is_file()))
            },
        )?
        .collect();

    // Sort for consistent bucket numbering across runs.
    stack_files.sort();

    let threads = stack_files
        .iter()
        .map(|stack_file| common::load_stack_listing(stack_file))
        .collect::<Result<Vec<_>, _>>()?;

    println_verbose!(
        "Comparing {} stack listing(s) with the '{}' metric (threshold {}).",
        threads.len(),
        config.distance_metric,
        config.dedup_threshold
    );

    let matrix = DistanceMatrix::new(config.distance_metric, &threads)?;
    let clusters = cluster_threads(&matrix, config.dedup_threshold)?;

    println_info!(
        "{} stack listing(s) fall into {} bucket(s):",
        threads.len(),
        clusters.len()
    );
    for cluster in &clusters {
        println_info!("{}:", cluster.uid);
        for &member in &cluster.members {
            println_info!("  {}", stack_files[member].display());
        }

        if verbose {
            for (position, &member1) in cluster.members.iter().enumerate() {
                for &member2 in &cluster.members[position + 1..] {
                    println_verbose!(
                        "  {} <-> {}: {:.6}",
                        stack_files[member1].display(),
                        stack_files[member2].display(),
                        matrix.get(member1, member2)?
                    );
                }
            }
        }
    }

    if clusters.len() == threads.len() {
        println_warning!("no duplicates found; every stack listing is its own bucket.");
    }

    Ok(())
}

fn main() -> ExitCode {
    common::reset_sigpipe();
    let cli = Cli::parse();

    match run(&cli.stacks_dir, cli.config_file.as_deref(), cli.verbose) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            println_error!(err);
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
        Cli::command().debug_assert()
    }
}
