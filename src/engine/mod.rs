//! Matching engine module.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same tables always produce the same matching
//! 2. **Validate once**: Tables are checked at construction, never in the loop
//! 3. **Synchronous execution**: One run is a single-threaded computation
//! 4. **Proposer optimality**: Each proposer gets its best stable partner
//!
//! ## Matching Rules
//!
//! - **Proposers** work down their preference lists, best first
//! - **Reviewers** hold the best proposal seen so far and trade up freely
//! - **Engagements** are provisional until the last proposer settles
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::MatchingEngine;
//! use stable_match::types::PreferenceTable;
//!
//! let proposers = PreferenceTable::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
//! let reviewers = PreferenceTable::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
//!
//! let engine = MatchingEngine::new(proposers, reviewers).unwrap();
//! let result = engine.find_matching();
//!
//! // Mutual first choices match directly
//! assert_eq!(result.matching.proposer_for(0), 0);
//! assert_eq!(result.matching.proposer_for(1), 1);
//! assert_eq!(result.proposals, 2);
//! ```

pub mod matcher;

pub use matcher::{MatchResult, MatchingEngine, MIN_AGENTS};
