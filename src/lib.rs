//! Skillswap - find skill-exchange partners and message them
//!
//! This library holds the logical core of a skill-swap application: users
//! list skills they offer and skills they want to learn, search a bounded
//! directory page for candidates, and exchange messages over a conversation
//! store. It supports:
//!
//! - Filtering directory pages by free text, skill category, and location
//! - Computing reciprocal teach/learn match hints between two profiles
//! - A conversation store with cancellable full-snapshot subscriptions
//! - Credential setup validation for the hosted backend
//!
//! # Example
//!
//! ```
//! use skillswap::search::{SearchFilters, filter_candidates};
//!
//! let filters = SearchFilters { term: "guitar".to_string(), ..Default::default() };
//! let results = filter_candidates("my-user-id", Vec::new(), &filters);
//! assert!(results.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod matching;
pub mod messaging;
pub mod models;
pub mod search;

// Re-export commonly used types
pub use directory::{DIRECTORY_PAGE_SIZE, JsonDirectory, UserDirectory};
pub use error::BackendError;
pub use matching::{MatchDirection, MatchHint, match_profiles};
pub use messaging::MessageBoard;
pub use models::{Skill, SkillCategory, SkillLevel, UserProfile};
pub use search::{SearchFilters, filter_candidates, parse_filter_query};
