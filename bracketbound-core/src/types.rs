/// Core data types for the bracket survival engine.

/// Bitmask over competitor indices `0..N-1`; bit i set means competitor i
/// is a member of the set.
///
/// Used both for membership masks (who plays in a subtournament) and for
/// survivor masks (who could still win it). The two are never mixed: a
/// survivor mask is always a subset of its subtournament's membership mask.
pub type CompetitorSet = u32;

/// Per-competitor placing bounds, 1-indexed (placing 1 is the champion).
///
/// `worst` comes from the round-by-round survival DP; `best` from the
/// capability scan (1 if the competitor can beat every other competitor,
/// otherwise N/2 + 1). The historical output order is worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacingBounds {
    pub worst: usize,
    pub best: usize,
}

/// Diagnostic counters for one engine invocation.
///
/// Informational only — not part of the functional contract. Returned by
/// value so nothing is shared across invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineStats {
    /// Rounds executed; always log2(N).
    pub rounds: usize,
    /// Innermost survivor-propagation checks performed across all rounds.
    pub survivor_checks: u64,
}

/// Everything the engine produces for one tournament instance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentOutcome {
    /// Placing bounds per competitor, indexed `0..N-1`.
    pub placings: Vec<PlacingBounds>,
    pub stats: EngineStats,
}
