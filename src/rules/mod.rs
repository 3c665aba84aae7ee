//! Game rules.
//!
//! Pure functions that judge game situations without mutating state.
//! The controller calls into these and owns every consequence.

pub mod matcher;

pub use matcher::is_match;
