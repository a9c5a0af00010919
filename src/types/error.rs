//! Error types for table and engine construction.
//!
//! ## Failure Model
//!
//! Every failure in this crate is an input-validation failure. Preference
//! tables, engines, and externally supplied assignments are checked once at
//! construction; after that the matching run itself cannot fail (deferred
//! acceptance always terminates with a perfect matching on validated input).

use thiserror::Error;

/// Errors reported while validating preference data or assignments.
///
/// The variants map one-to-one onto the data-model invariants: equal-size
/// sides, at least two agents per side, and each agent ranking the full
/// opposite side exactly once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// A side has fewer agents than the engine accepts.
    #[error("each side needs at least 2 agents, got {n}")]
    TooFewAgents { n: usize },

    /// The two sides have different cardinalities.
    #[error("side sizes differ: {proposers} proposers vs {reviewers} reviewers")]
    SideSizeMismatch { proposers: usize, reviewers: usize },

    /// A preference list does not rank the whole opposite side.
    #[error("agent {agent}: preference list has {found} entries, expected {expected}")]
    ListLengthMismatch {
        agent: usize,
        expected: usize,
        found: usize,
    },

    /// A preference list (or assignment) names an agent outside `0..n`.
    #[error("agent {agent}: candidate {candidate} is out of range for side size {n}")]
    CandidateOutOfRange {
        agent: usize,
        candidate: usize,
        n: usize,
    },

    /// A preference list ranks the same candidate twice.
    #[error("agent {agent}: candidate {candidate} appears more than once")]
    DuplicateCandidate { agent: usize, candidate: usize },

    /// An externally supplied assignment pairs one proposer with two reviewers.
    #[error("not a bijection: proposer {proposer} is paired with reviewers {first} and {second}")]
    NotABijection {
        proposer: usize,
        first: usize,
        second: usize,
    },
}

// ============================================================================
// Unit Tests
// ============================================================================
