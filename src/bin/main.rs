use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};

use advent_lp::puzzle::{self, Day, Part};

/// Advent of Code solutions, solved with linear programming where it helps.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Day of the calendar
    day: u8,
    /// Solve only this part, both parts are solved by default
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
    /// Input file, `-` reads from standard input. Defaults to `inputs/dayNN.txt`
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Run the examples from the puzzle description instead of the input
    #[arg(short, long)]
    check: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let opts = Opts::parse();

    let day = puzzle::find(opts.day)
        .ok_or_else(|| anyhow!("day {} is not implemented", opts.day))?;
    let parts = match opts.part {
        Some(part) => vec![Part::try_from(part)?],
        None => Part::ALL.to_vec(),
    };

    if opts.check {
        return check(day.as_ref(), &parts);
    }

    let path = opts.input.unwrap_or_else(|| PathBuf::from(format!("inputs/day{:02}.txt", opts.day)));
    let input = read_input(&path)?;

    for part in parts {
        let start = Instant::now();
        let answer = day.solve(part, &input)
            .with_context(|| format!("solving {} of day {}", part, opts.day))?;
        println!("Day {}, {}: {} ({:?})", opts.day, part, answer, start.elapsed());
    }

    Ok(ExitCode::SUCCESS)
}

/// Read the whole input, normalized.
fn read_input(path: &Path) -> Result<String> {
    info!("Reading input from {}", path.display());

    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).context("reading standard input")?;
        raw
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };

    Ok(puzzle::normalize_input(&raw))
}

/// Solve the examples of the requested parts and compare with the expected answers.
fn check(day: &dyn Day, parts: &[Part]) -> Result<ExitCode> {
    let mut nr_failures = 0;
    for &part in parts {
        for (index, example) in day.examples(part).iter().enumerate() {
            let input = puzzle::normalize_input(example.input);
            match day.solve(part, &input) {
                Ok(answer) if answer == example.answer => {
                    println!("Day {}, {}, example {}: {}", day.number(), part, index + 1, answer);
                },
                Ok(answer) => {
                    warn!("Expected {}, got {}", example.answer, answer);
                    println!("Day {}, {}, example {}: {} is wrong", day.number(), part, index + 1, answer);
                    nr_failures += 1;
                },
                Err(error) => {
                    println!("Day {}, {}, example {}: {}", day.number(), part, index + 1, error);
                    nr_failures += 1;
                },
            }
        }
    }

    Ok(if nr_failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
