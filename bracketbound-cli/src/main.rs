mod output;
mod parse;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::time::Instant;

use bracketbound_core::solve;
use clap::Parser;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "bracketbound",
    version,
    about = "Best/worst placing bounds for every competitor in a single-elimination bracket"
)]
struct Cli {
    /// Input file with tournament cases (default: stdin).
    /// Format: case count, then per case N and an NxN 0/1 capability matrix.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output JSON instead of the historical text format
    #[arg(long)]
    json: bool,

    /// Print per-case diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Read the whole input from the file argument or from piped stdin.
fn load_input(input: &Option<PathBuf>) -> String {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read input file {}: {e}", path.display()))),
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No input provided. Pass --input <file> or pipe cases via stdin.");
            }
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .unwrap_or_else(|e| bail(format!("Failed to read stdin: {e}")));
            content
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let started = Instant::now();

    let content = load_input(&cli.input);
    let cases = parse::parse_cases(&content).unwrap_or_else(|e| bail(e));

    let mut outcomes = Vec::with_capacity(cases.len());
    let mut max_checks = 0u64;
    for (k, relation) in cases.iter().enumerate() {
        let outcome = solve(relation);
        if cli.verbose {
            eprintln!(
                "Case {}: {} competitors, {} rounds, {} survivor checks",
                k + 1,
                relation.competitor_count(),
                outcome.stats.rounds,
                outcome.stats.survivor_checks,
            );
        }
        max_checks = max_checks.max(outcome.stats.survivor_checks);
        outcomes.push(outcome);
    }

    if cli.json {
        output::print_json(&outcomes);
    } else {
        output::print_text(&outcomes);
    }

    if cli.verbose {
        eprintln!("Total run time {} ms", started.elapsed().as_millis());
        eprintln!("Max survivor checks {max_checks}");
    }
}
