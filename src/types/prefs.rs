//! Preference tables: the validated input to the matching engine.
//!
//! ## Shape
//!
//! One `PreferenceTable` describes a whole side. Row `i` is agent `i`'s
//! ranking of the opposite side, most preferred first. Agents are dense
//! indices `0..n`, assigned once when the caller loads its data (the
//! interactive binary maps names to indices in entry order and keeps the
//! names for display only).
//!
//! ## Invariant
//!
//! Every row is a permutation of `0..n`: full length, in range, no repeats,
//! no ties. [`PreferenceTable::new`] checks this once so the engine never
//! has to re-validate on the hot path.
//!
//! ## Example
//!
//! ```
//! use stable_match::PreferenceTable;
//!
//! let table = PreferenceTable::new(vec![
//!     vec![1, 0],
//!     vec![0, 1],
//! ]).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.list(0), &[1, 0]);
//! ```

use crate::types::MatchingError;

/// A complete strict preference table for one side.
///
/// Immutable after construction; matching runs share it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    /// Row per agent: opposite-side indices from most to least preferred.
    lists: Vec<Vec<usize>>,
}

impl PreferenceTable {
    /// Validate and wrap raw preference lists.
    ///
    /// With equal-size sides the opposite side has exactly `lists.len()`
    /// agents, so each row must be a permutation of `0..lists.len()`.
    ///
    /// # Errors
    ///
    /// * [`MatchingError::ListLengthMismatch`] if a row has the wrong length
    /// * [`MatchingError::CandidateOutOfRange`] if a row names an agent
    ///   outside `0..n`
    /// * [`MatchingError::DuplicateCandidate`] if a row ranks the same agent
    ///   twice
    pub fn new(lists: Vec<Vec<usize>>) -> Result<Self, MatchingError> {
        let n = lists.len();
        let mut seen = vec![false; n];

        for (agent, list) in lists.iter().enumerate() {
            if list.len() != n {
                return Err(MatchingError::ListLengthMismatch {
                    agent,
                    expected: n,
                    found: list.len(),
                });
            }

            seen.fill(false);
            for &candidate in list {
                if candidate >= n {
                    return Err(MatchingError::CandidateOutOfRange { agent, candidate, n });
                }
                if seen[candidate] {
                    return Err(MatchingError::DuplicateCandidate { agent, candidate });
                }
                seen[candidate] = true;
            }
            // n in-range entries without repeats is already a permutation
        }

        Ok(Self { lists })
    }

    /// Number of agents on this side.
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if the table has no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Agent `agent`'s full ranking, most preferred first.
    ///
    /// # Panics
    ///
    /// Panics if `agent >= self.len()`.
    #[inline]
    pub fn list(&self, agent: usize) -> &[usize] {
        &self.lists[agent]
    }

    /// Iterate over `(agent, ranking)` rows in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.lists
            .iter()
            .enumerate()
            .map(|(agent, list)| (agent, list.as_slice()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
