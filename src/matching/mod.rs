//! Reciprocal skill matching between two profiles.

pub mod matcher;

pub use matcher::{MatchDirection, MatchHint, match_profiles};
