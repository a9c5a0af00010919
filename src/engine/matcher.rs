//! Deferred-acceptance matcher (proposer-side Gale-Shapley).
//!
//! ## Algorithm
//!
//! While any proposer is free, take the next one from a FIFO queue and have
//! it propose to the best reviewer it has not tried yet:
//!
//! - **Free reviewer**: the proposal is accepted provisionally
//! - **Engaged reviewer who prefers the newcomer**: the current partner is
//!   displaced and rejoins the queue
//! - **Engaged reviewer who prefers its partner**: the proposer rejoins the
//!   queue and will try its next choice
//!
//! Engagements only ever improve from the reviewer's point of view, and each
//! proposer walks its list monotonically, so the run issues at most n^2
//! proposals before every reviewer is engaged.
//!
//! ## Determinism
//!
//! The queue makes the proposal order fully deterministic, but the outcome
//! does not depend on it: deferred acceptance converges to the unique
//! proposer-optimal stable matching for any free-proposer selection policy.
//! The proposal and displacement counters in [`MatchResult`] do depend on
//! the FIFO order and are reproducible run to run.
//!
//! ## State Layout
//!
//! ```text
//! tables + priority index   built once, shared read-only across runs
//! next_choice[x]            cursor into x's list, only ever advances
//! engaged[y]                reviewer y's provisional partner
//! free                      FIFO queue of unmatched proposer indices
//! ```

use std::collections::VecDeque;

use log::debug;

use crate::types::{Matching, MatchingError, PreferenceTable, PriorityIndex};

/// Minimum agents per side accepted by [`MatchingEngine::new`].
///
/// A single pair has nothing to rank; two is the smallest instance where
/// preferences can disagree.
pub const MIN_AGENTS: usize = 2;

/// Proposer-side deferred-acceptance engine.
///
/// Owns the immutable instance: both preference tables plus the reviewer
/// priority index, built once at construction. [`find_matching`] allocates
/// fresh per-run state on every call, so one engine can be re-run or timed
/// repeatedly without copying the tables.
///
/// [`find_matching`]: MatchingEngine::find_matching
///
/// ## Example
///
/// ```
/// use stable_match::{MatchingEngine, PreferenceTable};
///
/// // Two proposers both want reviewer 0; reviewer 0 prefers proposer 1.
/// let proposers = PreferenceTable::new(vec![vec![0, 1], vec![0, 1]]).unwrap();
/// let reviewers = PreferenceTable::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
///
/// let engine = MatchingEngine::new(proposers, reviewers).unwrap();
/// let result = engine.find_matching();
///
/// assert_eq!(result.matching.proposer_for(0), 1);
/// assert_eq!(result.matching.proposer_for(1), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    /// Side A: each proposer's ranking of the reviewers.
    proposers: PreferenceTable,

    /// Side B: each reviewer's ranking of the proposers.
    reviewers: PreferenceTable,

    /// Inverted reviewer rankings; answers "does y trade up?" in O(1).
    priority: PriorityIndex,
}

/// Outcome of one matching run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The proposer-optimal stable matching.
    pub matching: Matching,

    /// Proposals issued before termination (at most n^2).
    pub proposals: usize,

    /// Engagements broken by a better proposal.
    pub displacements: usize,
}

impl MatchingEngine {
    /// Build an engine from the two sides' preference tables.
    ///
    /// The tables are validated individually by [`PreferenceTable::new`];
    /// this constructor adds the cross-side checks and precomputes the
    /// reviewer priority index.
    ///
    /// # Errors
    ///
    /// * [`MatchingError::SideSizeMismatch`] if the sides differ in size
    /// * [`MatchingError::TooFewAgents`] if a side has fewer than
    ///   [`MIN_AGENTS`] agents
    pub fn new(
        proposers: PreferenceTable,
        reviewers: PreferenceTable,
    ) -> Result<Self, MatchingError> {
        if proposers.len() != reviewers.len() {
            return Err(MatchingError::SideSizeMismatch {
                proposers: proposers.len(),
                reviewers: reviewers.len(),
            });
        }
        if proposers.len() < MIN_AGENTS {
            return Err(MatchingError::TooFewAgents { n: proposers.len() });
        }

        let priority = PriorityIndex::from_table(&reviewers);

        Ok(Self {
            proposers,
            reviewers,
            priority,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of agents per side.
    #[inline]
    pub fn n(&self) -> usize {
        self.proposers.len()
    }

    /// The proposer-side table this engine was built with.
    #[inline]
    pub fn proposers(&self) -> &PreferenceTable {
        &self.proposers
    }

    /// The reviewer-side table this engine was built with.
    #[inline]
    pub fn reviewers(&self) -> &PreferenceTable {
        &self.reviewers
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Run deferred acceptance to completion.
    ///
    /// Allocates fresh run state (cursors, engagements, free queue) and
    /// loops until no proposer is free. On validated input this always
    /// terminates with a perfect stable matching, so the return type carries
    /// no error case.
    ///
    /// # Returns
    ///
    /// The proposer-optimal stable matching plus the proposal and
    /// displacement counts for this run.
    pub fn find_matching(&self) -> MatchResult {
        let n = self.n();

        // Per-run state; the tables and priority index are shared read-only.
        let mut next_choice = vec![0usize; n];
        let mut engaged: Vec<Option<usize>> = vec![None; n];
        let mut free: VecDeque<usize> = (0..n).collect();

        let mut proposals = 0usize;
        let mut displacements = 0usize;

        while let Some(proposer) = free.pop_front() {
            // A free proposer always has an untried reviewer left: only
            // engaged reviewers reject, and n engaged reviewers would leave
            // no proposer free.
            let reviewer = self.proposers.list(proposer)[next_choice[proposer]];
            next_choice[proposer] += 1;
            proposals += 1;

            match engaged[reviewer] {
                None => {
                    engaged[reviewer] = Some(proposer);
                }
                Some(rival) => {
                    if self.priority.prefers(reviewer, proposer, rival) {
                        // Reviewer trades up; the displaced rival keeps its
                        // cursor position and re-enters the queue.
                        engaged[reviewer] = Some(proposer);
                        free.push_back(rival);
                        displacements += 1;
                    } else {
                        free.push_back(proposer);
                    }
                }
            }
        }

        let by_reviewer: Vec<usize> = engaged
            .into_iter()
            .map(|held| held.expect("all reviewers are engaged once no proposer is free"))
            .collect();
        let matching =
            Matching::new(by_reviewer).expect("deferred acceptance pairs each proposer once");

        debug!("matched {n} pairs after {proposals} proposals ({displacements} displacements)");

        MatchResult {
            matching,
            proposals,
            displacements,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
