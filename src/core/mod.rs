// Core algorithm exports
pub mod distribution;
pub mod matcher;
pub mod scoring;

pub use distribution::{distribution, Distribution};
pub use matcher::{rank, top_matches, Matcher};
pub use scoring::{compute_score, match_percentage, MAX_SCORE};
