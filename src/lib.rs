//! # Stable Match
//!
//! Deterministic Gale-Shapley stable matching engine.
//!
//! Two equal-size sides of agents each rank every member of the other side.
//! The engine runs proposer-side deferred acceptance and returns a perfect
//! matching with no blocking pair: no two agents who would both rather be
//! with each other than with their assigned partners.
//!
//! ## Architecture
//!
//! - **Types**: validated preference tables, inverted priority index,
//!   bijective matching result
//! - **Engine**: the deferred-acceptance proposal loop
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical tables produce the identical matching
//! 2. **Validate once**: all input checks happen at construction time
//! 3. **Dense indices**: agents are `0..n` per side, no hashing anywhere
//! 4. **Fresh run state**: tables are shared read-only; each run allocates
//!    its own cursors, engagements, and free queue
//!
//! ## Complexity
//!
//! - Proposals per run: at most n^2
//! - Priority index construction: O(n^2), once per engine
//! - Memory: three O(n) arrays per run over the O(n^2) tables
//!
//! ## Example
//!
//! ```
//! use stable_match::{MatchingEngine, PreferenceTable};
//!
//! let proposers = PreferenceTable::new(vec![
//!     vec![0, 1, 2],
//!     vec![1, 2, 0],
//!     vec![2, 0, 1],
//! ]).unwrap();
//! let reviewers = PreferenceTable::new(vec![
//!     vec![0, 1, 2],
//!     vec![1, 2, 0],
//!     vec![2, 0, 1],
//! ]).unwrap();
//!
//! let engine = MatchingEngine::new(proposers, reviewers).unwrap();
//! let result = engine.find_matching();
//!
//! // Mutual first choices pair up immediately
//! assert_eq!(result.proposals, 3);
//! assert!(result.matching.is_stable(engine.proposers(), engine.reviewers()));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: PreferenceTable, PriorityIndex, Matching, MatchingError
pub mod types;

/// Matching engine: proposer-side deferred acceptance
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Matching, MatchingError, PreferenceTable, PriorityIndex};
pub use engine::{MatchResult, MatchingEngine, MIN_AGENTS};
