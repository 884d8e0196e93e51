/// The bracket survival engine.
///
/// One tournament instance in, placing bounds out. The caller supplies the
/// capability relation (already validated — see `CapabilityRelation`); the
/// engine performs no IO and allocates only input-sized structures that die
/// with the invocation.
use crate::frontier::{Binomial, Frontier};
use crate::relation::CapabilityRelation;
use crate::types::{EngineStats, PlacingBounds, TournamentOutcome};

/// Compute both placing bounds for every competitor.
pub fn solve(relation: &CapabilityRelation) -> TournamentOutcome {
    let (worst, stats) = worst_placings(relation);
    let best = best_placings(relation);

    let placings = worst
        .into_iter()
        .zip(best)
        .map(|(worst, best)| PlacingBounds { worst, best })
        .collect();

    TournamentOutcome { placings, stats }
}

/// Worst possible placing per competitor, via the round-by-round survival
/// DP, plus the invocation's diagnostic counters.
///
/// Everyone starts at placing N/2 + 1 (the guaranteed-worst outcome of
/// losing round 1); tracked as the placing minus one to keep the halving
/// arithmetic simple. Each round a competitor could still be alive in cuts
/// the number of competitors who could out-place them in half.
pub fn worst_placings(relation: &CapabilityRelation) -> (Vec<usize>, EngineStats) {
    let n = relation.competitor_count();
    let binomial = Binomial::new(n);
    let mut stats = EngineStats::default();

    let mut max_placing_minus_1 = vec![n / 2; n];
    let mut frontier = Frontier::singletons(n);

    let mut sub_size = 1;
    while sub_size < n {
        frontier = if sub_size == n / 2 {
            // The last round pairs each subtournament with its unique
            // complement; no pairwise scan needed.
            frontier.finale(relation, &binomial, &mut stats)
        } else {
            frontier.advance(relation, &binomial, &mut stats)
        };

        let alive = frontier.surviving_competitors();
        for (i, bound) in max_placing_minus_1.iter_mut().enumerate() {
            if alive & (1 << i) != 0 {
                *bound /= 2;
            }
        }

        stats.rounds += 1;
        sub_size *= 2;
    }

    debug_assert_eq!(frontier.entries().len(), 1);
    let placings = max_placing_minus_1.into_iter().map(|b| b + 1).collect();
    (placings, stats)
}

/// Best possible placing per competitor.
///
/// A competitor capable of beating every other competitor can always take
/// placing 1; anyone else is pegged at the round-1 loser's placing N/2 + 1.
/// This deliberately simple bound is the historical rule and is kept as is
/// rather than generalized to full bracket reachability.
pub fn best_placings(relation: &CapabilityRelation) -> Vec<usize> {
    let n = relation.competitor_count();
    (0..n)
        .map(|i| if relation.beats_all_others(i) { 1 } else { n / 2 + 1 })
        .collect()
}
