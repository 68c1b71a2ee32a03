use serde::{Deserialize, Serialize};

use crate::models::domain::{CareerRecord, IndustryType, JobType};

/// One of the top matches, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    /// 1-based position in the ranking
    pub rank: usize,
    #[serde(flatten)]
    pub record: CareerRecord,
    pub score: u8,
    pub match_percentage: u8,
}

/// One row of a frequency distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry<K> {
    pub key: K,
    pub count: usize,
    pub percentage: u8,
}

/// Everything the presentation layer needs after a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub top_matches: Vec<MatchEntry>,
    pub industry_distribution: Vec<DistributionEntry<IndustryType>>,
    pub job_type_distribution: Vec<DistributionEntry<JobType>>,
    pub total_records: usize,
}
