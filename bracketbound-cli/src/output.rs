/// Output formatting: historical per-case text and JSON.
use bracketbound_core::TournamentOutcome;
use serde::Serialize;

#[derive(Serialize)]
struct JsonPlacing {
    competitor: usize,
    worst: usize,
    best: usize,
}

#[derive(Serialize)]
struct JsonCase {
    case: usize,
    competitors: usize,
    placings: Vec<JsonPlacing>,
    rounds: usize,
    survivor_checks: u64,
}

/// The historical text format: `Case #<k>:` then one `worst best` line per
/// competitor.
pub fn format_text(outcomes: &[TournamentOutcome]) -> String {
    let mut out = String::new();
    for (k, outcome) in outcomes.iter().enumerate() {
        out.push_str(&format!("Case #{}:\n", k + 1));
        for p in &outcome.placings {
            out.push_str(&format!("{} {}\n", p.worst, p.best));
        }
    }
    out
}

pub fn print_text(outcomes: &[TournamentOutcome]) {
    print!("{}", format_text(outcomes));
}

/// Print results as JSON.
pub fn print_json(outcomes: &[TournamentOutcome]) {
    let cases: Vec<JsonCase> = outcomes
        .iter()
        .enumerate()
        .map(|(k, outcome)| JsonCase {
            case: k + 1,
            competitors: outcome.placings.len(),
            placings: outcome
                .placings
                .iter()
                .enumerate()
                .map(|(i, p)| JsonPlacing {
                    competitor: i,
                    worst: p.worst,
                    best: p.best,
                })
                .collect(),
            rounds: outcome.stats.rounds,
            survivor_checks: outcome.stats.survivor_checks,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&cases).unwrap());
}
