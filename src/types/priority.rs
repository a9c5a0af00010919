//! Priority index: O(1) rank lookups derived from a preference table.
//!
//! ## Design
//!
//! On every contested proposal the engine asks "does reviewer `y` prefer
//! proposer `a` over its current partner `b`?". Scanning `y`'s preference
//! list each time would cost O(n); inverting every list once up front turns
//! the question into two array reads.
//!
//! ## Layout
//!
//! ```text
//! list:  [2, 0, 1]          (agent's ranking, most preferred first)
//! ranks: [1, 2, 0]          (ranks[candidate] = position in list)
//! ```
//!
//! Dense `usize` ids on both axes keep the lookup hashing-free.

use crate::types::PreferenceTable;

/// Rank-by-id lookup built once from a [`PreferenceTable`].
///
/// Read-only after construction; matching runs share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityIndex {
    /// `ranks[agent][candidate]` = candidate's rank in agent's list (0 = top).
    ranks: Vec<Vec<usize>>,
}

impl PriorityIndex {
    /// Invert every preference list of `table` into a rank row.
    pub fn from_table(table: &PreferenceTable) -> Self {
        let n = table.len();
        let mut ranks = vec![vec![0usize; n]; n];

        for (agent, list) in table.iter() {
            for (rank, &candidate) in list.iter().enumerate() {
                ranks[agent][candidate] = rank;
            }
        }

        Self { ranks }
    }

    /// Number of agents covered by the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if the index covers no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `candidate`'s position in `agent`'s preference list (0 = most preferred).
    #[inline]
    pub fn rank(&self, agent: usize, candidate: usize) -> usize {
        self.ranks[agent][candidate]
    }

    /// Check if `agent` ranks `a` strictly above `b`.
    #[inline]
    pub fn prefers(&self, agent: usize, a: usize, b: usize) -> bool {
        self.ranks[agent][a] < self.ranks[agent][b]
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
