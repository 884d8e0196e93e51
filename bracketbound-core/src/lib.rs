/// bracketbound-core: Pure-computation bracket survival engine.
///
/// Given a capability relation ("who is allowed to defeat whom") over the
/// N = 2^k competitors of a balanced single-elimination bracket, computes
/// each competitor's worst and best possible final placing across all match
/// outcomes the relation permits. No IO, no filesystem — just math.
///
/// The worst placing comes from a bottom-up dynamic program that propagates
/// "who could still win this subtournament" bitmasks from the leaves of the
/// bracket to the root, one round at a time. The best placing is a direct
/// capability scan: placing 1 if the competitor can beat everyone else,
/// otherwise the round-1 loser's placing.
///
/// # Quick start
///
/// ```rust
/// use bracketbound_core::{solve, CapabilityRelation};
///
/// // Two competitors; 0 can beat 1, 1 cannot beat 0.
/// let mut relation = CapabilityRelation::new(2);
/// relation.record_win(0, 1);
///
/// let outcome = solve(&relation);
/// assert_eq!(outcome.placings[0].worst, 1);
/// assert_eq!(outcome.placings[0].best, 1);
/// assert_eq!(outcome.placings[1].worst, 2);
/// assert_eq!(outcome.placings[1].best, 2);
/// ```
pub mod constants;
pub mod engine;
pub mod frontier;
pub mod relation;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::{best_placings, solve, worst_placings};
pub use relation::CapabilityRelation;
pub use types::{CompetitorSet, EngineStats, PlacingBounds, TournamentOutcome};
