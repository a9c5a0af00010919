//! Matching results: a validated bijection between the two sides.
//!
//! ## Orientation
//!
//! The engine's output contract is reviewer-oriented: for every reviewer,
//! which proposer holds it at termination. `Matching` stores that mapping
//! plus its precomputed inverse, so lookups in either direction are O(1).
//!
//! ## Stability
//!
//! A matching is *stable* when no blocking pair exists: no proposer `x` and
//! reviewer `y` who each prefer the other over their assigned partner.
//! [`Matching::find_blocking_pair`] checks this against the tables the
//! matching was produced from (or any other pair of tables of the same
//! size), which is how the test suite audits every engine output.

use crate::types::{MatchingError, PreferenceTable, PriorityIndex};

/// A perfect matching between `n` proposers and `n` reviewers.
///
/// Construction validates bijectivity; stability is a separate, optional
/// check because it depends on preference tables the matching itself does
/// not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// `by_reviewer[y]` = proposer matched with reviewer `y`.
    by_reviewer: Vec<usize>,
    /// `by_proposer[x]` = reviewer matched with proposer `x`.
    by_proposer: Vec<usize>,
}

impl Matching {
    /// Wrap an explicit reviewer-to-proposer assignment.
    ///
    /// `by_reviewer[y]` names the proposer paired with reviewer `y`. The
    /// assignment must be a bijection over `0..n`.
    ///
    /// # Errors
    ///
    /// * [`MatchingError::CandidateOutOfRange`] if an entry is outside `0..n`
    /// * [`MatchingError::NotABijection`] if a proposer appears twice
    pub fn new(by_reviewer: Vec<usize>) -> Result<Self, MatchingError> {
        let n = by_reviewer.len();
        let mut by_proposer: Vec<Option<usize>> = vec![None; n];

        for (reviewer, &proposer) in by_reviewer.iter().enumerate() {
            if proposer >= n {
                return Err(MatchingError::CandidateOutOfRange {
                    agent: reviewer,
                    candidate: proposer,
                    n,
                });
            }
            if let Some(first) = by_proposer[proposer] {
                return Err(MatchingError::NotABijection {
                    proposer,
                    first,
                    second: reviewer,
                });
            }
            by_proposer[proposer] = Some(reviewer);
        }

        // n distinct in-range proposers fill every slot
        let by_proposer = by_proposer
            .into_iter()
            .map(|reviewer| reviewer.expect("bijection check left no empty slot"))
            .collect();

        Ok(Self {
            by_reviewer,
            by_proposer,
        })
    }

    /// Number of matched pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_reviewer.len()
    }

    /// Check if the matching contains no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_reviewer.is_empty()
    }

    /// The proposer matched with `reviewer`.
    ///
    /// # Panics
    ///
    /// Panics if `reviewer >= self.len()`.
    #[inline]
    pub fn proposer_for(&self, reviewer: usize) -> usize {
        self.by_reviewer[reviewer]
    }

    /// The reviewer matched with `proposer`.
    ///
    /// # Panics
    ///
    /// Panics if `proposer >= self.len()`.
    #[inline]
    pub fn reviewer_for(&self, proposer: usize) -> usize {
        self.by_proposer[proposer]
    }

    /// Iterate over `(proposer, reviewer)` pairs in reviewer order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_reviewer
            .iter()
            .enumerate()
            .map(|(reviewer, &proposer)| (proposer, reviewer))
    }

    /// Find a blocking pair, if any exists.
    ///
    /// A pair `(x, y)` blocks the matching when proposer `x` ranks reviewer
    /// `y` above its assigned partner and `y` ranks `x` above its assigned
    /// partner. Scanning each proposer's list only down to its partner
    /// covers exactly the reviewers that proposer would defect to.
    ///
    /// # Returns
    ///
    /// The first blocking pair in (proposer index, list position) order, or
    /// `None` when the matching is stable.
    ///
    /// # Panics
    ///
    /// Panics if either table's size differs from the matching's.
    pub fn find_blocking_pair(
        &self,
        proposers: &PreferenceTable,
        reviewers: &PreferenceTable,
    ) -> Option<(usize, usize)> {
        let reviewer_ranks = PriorityIndex::from_table(reviewers);

        for proposer in 0..self.len() {
            let assigned = self.by_proposer[proposer];
            for &reviewer in proposers.list(proposer) {
                if reviewer == assigned {
                    // Everything below the assigned partner is not preferred
                    break;
                }
                let holder = self.by_reviewer[reviewer];
                if reviewer_ranks.prefers(reviewer, proposer, holder) {
                    return Some((proposer, reviewer));
                }
            }
        }

        None
    }

    /// Check stability against the given preference tables.
    #[inline]
    pub fn is_stable(&self, proposers: &PreferenceTable, reviewers: &PreferenceTable) -> bool {
        self.find_blocking_pair(proposers, reviewers).is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
