//! Core data types for the stable matching engine.
//!
//! All agents are dense `usize` indices (`0..n` per side); callers keep
//! their own name-to-index mapping. Validation happens once at construction
//! so the engine's proposal loop runs on trusted data.
//!
//! ## Types
//!
//! - [`PreferenceTable`]: one side's validated rankings of the other side
//! - [`PriorityIndex`]: inverted rankings for O(1) "who does y prefer?" lookups
//! - [`Matching`]: a validated bijection between the sides, with stability checks
//! - [`MatchingError`]: every way input validation can fail

mod error;
mod matching;
mod prefs;
mod priority;

// Re-export all types at module level
pub use error::MatchingError;
pub use matching::Matching;
pub use prefs::PreferenceTable;
pub use priority::PriorityIndex;
