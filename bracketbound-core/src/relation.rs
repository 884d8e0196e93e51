use crate::constants::MAX_COMPETITORS;
use crate::types::CompetitorSet;

/// The win/loss capability relation for one tournament instance.
///
/// Stored as one bitmask row per competitor: bit j of row i is set when
/// competitor i is capable of beating competitor j. The row form turns the
/// engine's inner membership/capability tests into single bitwise ANDs.
///
/// The relation is not required to be a strict tournament: "i beats j" and
/// "j beats i" are independent, so mutual capability and capability gaps
/// are both representable. Read-only for the lifetime of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRelation {
    competitor_count: usize,
    rows: Vec<CompetitorSet>,
}

impl CapabilityRelation {
    /// Create an empty relation (nobody can beat anybody yet).
    ///
    /// Panics unless `competitor_count` is a power of two within
    /// `MAX_COMPETITORS` — the bracket invariant is a precondition here,
    /// not a recoverable error.
    pub fn new(competitor_count: usize) -> Self {
        assert!(
            competitor_count >= 1 && competitor_count <= MAX_COMPETITORS,
            "competitor count {} out of range 1..={}",
            competitor_count,
            MAX_COMPETITORS,
        );
        assert!(
            competitor_count.is_power_of_two(),
            "competitor count {} is not a power of two",
            competitor_count,
        );
        CapabilityRelation {
            competitor_count,
            rows: vec![0; competitor_count],
        }
    }

    /// Build a relation from pre-assembled bitmask rows.
    pub fn from_rows(rows: Vec<CompetitorSet>) -> Self {
        let mut relation = CapabilityRelation::new(rows.len());
        let full = relation.full_mask();
        for (i, &row) in rows.iter().enumerate() {
            assert!(
                row & !full == 0,
                "row {} has capability bits beyond competitor {}",
                i,
                relation.competitor_count - 1,
            );
        }
        relation.rows = rows;
        relation
    }

    /// Build a relation from an N×N boolean matrix ("row beats column").
    ///
    /// Diagonal entries are ignored — a competitor never plays itself.
    pub fn from_matrix(matrix: &[Vec<bool>]) -> Self {
        let mut relation = CapabilityRelation::new(matrix.len());
        for (i, row) in matrix.iter().enumerate() {
            assert!(
                row.len() == matrix.len(),
                "matrix row {} has {} entries, expected {}",
                i,
                row.len(),
                matrix.len(),
            );
            for (j, &beats) in row.iter().enumerate() {
                if i != j && beats {
                    relation.record_win(i, j);
                }
            }
        }
        relation
    }

    /// Mark `winner` as capable of beating `loser`.
    pub fn record_win(&mut self, winner: usize, loser: usize) {
        assert!(winner < self.competitor_count && loser < self.competitor_count);
        assert!(winner != loser, "competitor {} cannot play itself", winner);
        self.rows[winner] |= 1 << loser;
    }

    pub fn competitor_count(&self) -> usize {
        self.competitor_count
    }

    /// Bitmask with one bit set per competitor in the bracket.
    pub fn full_mask(&self) -> CompetitorSet {
        ((1u64 << self.competitor_count) - 1) as CompetitorSet
    }

    /// Whether competitor i is capable of beating competitor j.
    pub fn beats(&self, i: usize, j: usize) -> bool {
        self.rows[i] & (1 << j) != 0
    }

    /// Whether competitor i can beat at least one member of `set`.
    pub fn beats_any(&self, i: usize, set: CompetitorSet) -> bool {
        self.rows[i] & set != 0
    }

    /// Whether competitor i is capable of beating every other competitor.
    pub fn beats_all_others(&self, i: usize) -> bool {
        self.rows[i] | (1 << i) == self.full_mask()
    }

    /// Capability row for competitor i.
    pub fn row(&self, i: usize) -> CompetitorSet {
        self.rows[i]
    }
}
