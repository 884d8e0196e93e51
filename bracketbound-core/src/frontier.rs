/// Round frontiers: the complete set of subtournament results for one round.
///
/// Every membership mask in a round shares a single population count, so a
/// round's masks are ranked densely by their combinadic rank and stored in a
/// plain `Vec` — no hashing, no nondeterministic iteration order, and the
/// rank space `C(n, subSize)` is filled exactly.
use crate::relation::CapabilityRelation;
use crate::types::{CompetitorSet, EngineStats};

/// One node of the bracket: the competitors it spans and which of them
/// could still win it under some permitted sequence of outcomes.
///
/// Immutable once its round is fully built. `survivors` is always a subset
/// of `members`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtournament {
    pub members: CompetitorSet,
    pub survivors: CompetitorSet,
}

/// Binomial coefficient table for ranking membership masks within a round.
pub struct Binomial {
    table: Vec<Vec<usize>>,
}

impl Binomial {
    pub fn new(n: usize) -> Self {
        let mut table = vec![vec![0usize; n + 1]; n + 1];
        for i in 0..=n {
            table[i][0] = 1;
            for k in 1..=i {
                table[i][k] = table[i - 1][k - 1] + table[i - 1][k];
            }
        }
        Binomial { table }
    }

    pub fn choose(&self, n: usize, k: usize) -> usize {
        if k > n {
            0
        } else {
            self.table[n][k]
        }
    }

    /// Combinadic rank of a mask among all masks with the same population
    /// count: for set bits b0 < b1 < ... the rank is Σ C(b_j, j + 1).
    pub fn rank(&self, mask: CompetitorSet) -> usize {
        let mut rank = 0;
        let mut seen = 0;
        let mut rest = mask;
        while rest != 0 {
            let bit = rest.trailing_zeros() as usize;
            seen += 1;
            rank += self.choose(bit, seen);
            rest &= rest - 1;
        }
        rank
    }
}

/// All subtournament results for one round, indexed by the combinadic rank
/// of their membership masks.
///
/// Only the current frontier is ever held; building the next round consumes
/// nothing from this one beyond reads, and the caller drops it afterwards.
pub struct Frontier {
    sub_size: usize,
    entries: Vec<Subtournament>,
}

impl Frontier {
    /// Round-0 frontier: N one-competitor subtournaments, each competitor
    /// trivially surviving its own bracket. The rank of a singleton mask
    /// `{i}` is C(i, 1) = i, so entries land in index order.
    pub fn singletons(competitor_count: usize) -> Self {
        let entries = (0..competitor_count)
            .map(|i| Subtournament {
                members: 1 << i,
                survivors: 1 << i,
            })
            .collect();
        Frontier {
            sub_size: 1,
            entries,
        }
    }

    pub fn sub_size(&self) -> usize {
        self.sub_size
    }

    pub fn entries(&self) -> &[Subtournament] {
        &self.entries
    }

    /// Build the next round's frontier from every disjoint pair of entries.
    ///
    /// Distinct pairs can produce the same combined membership mask; their
    /// survivor bits are accumulated into the one result for that mask.
    pub fn advance(
        &self,
        relation: &CapabilityRelation,
        binomial: &Binomial,
        stats: &mut EngineStats,
    ) -> Frontier {
        let n = relation.competitor_count();
        let new_size = self.sub_size * 2;
        let mut entries = vec![
            Subtournament {
                members: 0,
                survivors: 0,
            };
            binomial.choose(n, new_size)
        ];

        for i in 0..self.entries.len() {
            for j in (i + 1)..self.entries.len() {
                let a = self.entries[i];
                let b = self.entries[j];
                if a.members & b.members != 0 {
                    continue;
                }
                let members = a.members | b.members;
                let slot = &mut entries[binomial.rank(members)];
                slot.members = members;
                slot.survivors |= combined_survivors(relation, a, b, stats);
            }
        }

        Frontier {
            sub_size: new_size,
            entries,
        }
    }

    /// Build the final round's single full-bracket result.
    ///
    /// No pairwise scan: each entry's partner is its unique complement
    /// mask, looked up directly by rank. Skipping entries that contain
    /// competitor 0 visits each complementary pair exactly once.
    pub fn finale(
        &self,
        relation: &CapabilityRelation,
        binomial: &Binomial,
        stats: &mut EngineStats,
    ) -> Frontier {
        let full = relation.full_mask();
        let mut result = Subtournament {
            members: full,
            survivors: 0,
        };

        for a in &self.entries {
            if a.members & 1 != 0 {
                continue;
            }
            let b = self.entries[binomial.rank(full ^ a.members)];
            result.survivors |= combined_survivors(relation, *a, b, stats);
        }

        Frontier {
            sub_size: relation.competitor_count(),
            entries: vec![result],
        }
    }

    /// Union of every entry's survivor mask: everyone who could still be
    /// alive after this round.
    pub fn surviving_competitors(&self) -> CompetitorSet {
        self.entries
            .iter()
            .fold(0, |alive, sub| alive | sub.survivors)
    }
}

/// Survivors of the subtournament combining siblings `a` and `b`.
///
/// A survivor of one side advances iff it can beat at least one survivor of
/// the other side — no free pass: with no beatable opponent available the
/// competitor cannot win the combined bracket.
fn combined_survivors(
    relation: &CapabilityRelation,
    a: Subtournament,
    b: Subtournament,
    stats: &mut EngineStats,
) -> CompetitorSet {
    debug_assert_eq!(a.members & b.members, 0);
    debug_assert_eq!(a.survivors & !a.members, 0);
    debug_assert_eq!(b.survivors & !b.members, 0);

    let mut survivors = 0;
    let mut rest = a.survivors;
    while rest != 0 {
        let x = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        stats.survivor_checks += 1;
        if relation.beats_any(x, b.survivors) {
            survivors |= 1 << x;
        }
    }
    let mut rest = b.survivors;
    while rest != 0 {
        let x = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        stats.survivor_checks += 1;
        if relation.beats_any(x, a.survivors) {
            survivors |= 1 << x;
        }
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Relation where i beats j iff i < j (a total strict ranking).
    fn strict_ranking(n: usize) -> CapabilityRelation {
        let mut relation = CapabilityRelation::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                relation.record_win(i, j);
            }
        }
        relation
    }

    #[test]
    fn test_binomial_values() {
        let binomial = Binomial::new(8);
        assert_eq!(binomial.choose(8, 0), 1);
        assert_eq!(binomial.choose(8, 4), 70);
        assert_eq!(binomial.choose(8, 8), 1);
        assert_eq!(binomial.choose(4, 2), 6);
        assert_eq!(binomial.choose(2, 4), 0);
    }

    #[test]
    fn test_rank_is_dense_and_unique() {
        let binomial = Binomial::new(6);
        // All 2-bit masks over 6 competitors must rank into 0..C(6,2)
        // with no collisions.
        let mut seen = vec![false; binomial.choose(6, 2)];
        for i in 0..6u32 {
            for j in (i + 1)..6u32 {
                let rank = binomial.rank((1 << i) | (1 << j));
                assert!(!seen[rank], "rank {} assigned twice", rank);
                seen[rank] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_singleton_frontier() {
        let frontier = Frontier::singletons(4);
        assert_eq!(frontier.sub_size(), 1);
        assert_eq!(frontier.entries().len(), 4);
        for (i, sub) in frontier.entries().iter().enumerate() {
            assert_eq!(sub.members, 1 << i);
            assert_eq!(sub.survivors, 1 << i);
        }
    }

    #[test]
    fn test_advance_covers_every_pair_mask() {
        let relation = strict_ranking(8);
        let binomial = Binomial::new(8);
        let mut stats = EngineStats::default();

        let frontier = Frontier::singletons(8).advance(&relation, &binomial, &mut stats);
        assert_eq!(frontier.sub_size(), 2);
        assert_eq!(frontier.entries().len(), 28); // C(8,2)
        for sub in frontier.entries() {
            assert_eq!(sub.members.count_ones(), 2);
            assert_eq!(sub.survivors & !sub.members, 0);
            // Under a strict ranking only the lower index survives a pair.
            assert_eq!(sub.survivors, 1 << sub.members.trailing_zeros());
        }
    }

    #[test]
    fn test_finale_produces_single_full_result() {
        let relation = strict_ranking(4);
        let binomial = Binomial::new(4);
        let mut stats = EngineStats::default();

        let semis = Frontier::singletons(4).advance(&relation, &binomial, &mut stats);
        let finals = semis.finale(&relation, &binomial, &mut stats);
        assert_eq!(finals.entries().len(), 1);
        assert_eq!(finals.entries()[0].members, 0b1111);
        assert_eq!(finals.entries()[0].survivors, 0b0001);
    }

    #[test]
    fn test_mutual_capability_keeps_both_alive() {
        let mut relation = CapabilityRelation::new(2);
        relation.record_win(0, 1);
        relation.record_win(1, 0);
        let binomial = Binomial::new(2);
        let mut stats = EngineStats::default();

        let finals = Frontier::singletons(2).finale(&relation, &binomial, &mut stats);
        assert_eq!(finals.entries()[0].survivors, 0b11);
    }

    #[test]
    fn test_no_capability_empties_survivors() {
        // Nobody can beat anybody: the combined bracket has no possible
        // winner and the engine tolerates the empty mask.
        let relation = CapabilityRelation::new(2);
        let binomial = Binomial::new(2);
        let mut stats = EngineStats::default();

        let finals = Frontier::singletons(2).finale(&relation, &binomial, &mut stats);
        assert_eq!(finals.entries()[0].survivors, 0);
    }
}
