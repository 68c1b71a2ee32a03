//! PathMatch - career path matcher
//!
//! This library ranks a fixed catalog of career records against a user's
//! questionnaire answers and summarizes where the closest matches ended up.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use catalog::CATALOG;
pub use self::core::{compute_score, distribution, rank, top_matches, Matcher};
pub use error::{PathMatchError, Result};
pub use models::{CareerRecord, MatchResult, ProfileRequest, ScoredRecord, UserProfile};
