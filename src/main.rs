// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line driver: runs the full search and prints the unique solutions.

use anyhow::{Context, Result};
use clap::Parser;
use magic_star::geometry::{Arrangement, NPOSITIONS, STAR, STONES};
use magic_star::search::parallel::search_parallel;
use magic_star::search::{SearchObserver, StarSearch, DEFAULT_PROGRESS_INTERVAL};
use magic_star::state::{Counters, Statistics};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about = "Find all magic star arrangements of 1..12")]
struct Args {
    /// Worker threads; 0 searches sequentially with progress reports.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Counters fixed per shard in a parallel search.
    #[arg(long, default_value_t = 1)]
    shard_depth: usize,

    /// Permutations between progress reports.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: u64,
}

/// Prints a progress line every `every` permutations.
struct ProgressReporter {
    every: u64,
}

impl SearchObserver<NPOSITIONS> for ProgressReporter {
    fn on_permutation(&mut self, statistics: &Statistics, arrangement: &Arrangement<NPOSITIONS>, _valid: bool) {
        if self.every == 0 || statistics.get(Counters::Examined) % self.every != 0 {
            return;
        }
        println!("At {}.", counts(statistics));
        println!("Current permutation: {}", arrangement);
    }

    fn on_finish(&mut self, statistics: &Statistics, elapsed: Duration) {
        log::info!(
            "Sequential search finished: {} solutions in {:.2?}",
            statistics.get(Counters::UniqueValid),
            elapsed
        );
    }

    fn name(&self) -> &str {
        "Progress"
    }
}

fn counts(statistics: &Statistics) -> String {
    format!(
        "{} with {} correct permutations and {} unique correct permutations",
        statistics.get(Counters::Examined),
        statistics.get(Counters::Valid),
        statistics.get(Counters::UniqueValid)
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("Magic star search.");
    STAR.validate().context("star tables are inconsistent")?;

    let outcome = if args.threads == 0 {
        let mut reporter = ProgressReporter {
            every: args.progress_every,
        };
        StarSearch::new(&STAR, STONES).run(&mut reporter)
    } else {
        search_parallel(&STAR, STONES, args.shard_depth, args.threads)
            .with_context(|| format!("parallel search with shard depth {}", args.shard_depth))?
    };

    println!(
        "Looked at {} in {}ms.",
        counts(&outcome.statistics),
        outcome.elapsed.as_millis()
    );
    println!("All unique solutions:");
    for solution in &outcome.solutions {
        println!("{}", solution);
    }
    println!("Done!");
    Ok(())
}
