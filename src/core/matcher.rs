use tracing::{debug, info};

use crate::catalog::catalog;
use crate::core::{
    distribution::distribution,
    scoring::{compute_score, match_percentage},
};
use crate::models::{CareerRecord, MatchEntry, MatchLimits, MatchResult, ScoredRecord, UserProfile};

/// Score every record and order them by descending score
///
/// The sort is stable, so records with equal scores keep their catalog order.
pub fn rank(catalog: &[CareerRecord], profile: &UserProfile) -> Vec<ScoredRecord> {
    let mut scored: Vec<ScoredRecord> = catalog
        .iter()
        .map(|record| ScoredRecord {
            record: *record,
            score: compute_score(record, profile),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        "Ranked {} records, top score {}",
        scored.len(),
        scored.first().map(|s| s.score).unwrap_or(0)
    );

    scored
}

/// First `n` ranked records, or all of them if there are fewer
#[inline]
pub fn top_matches(ranked: &[ScoredRecord], n: usize) -> &[ScoredRecord] {
    &ranked[..n.min(ranked.len())]
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score and rank the whole catalog
/// 2. Take the top matches for display
/// 3. Compute industry and job type distributions over a wider window
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    catalog: &'a [CareerRecord],
    limits: MatchLimits,
}

impl Matcher<'static> {
    /// Matcher over the built-in catalog
    pub fn new(limits: MatchLimits) -> Self {
        Self {
            catalog: catalog(),
            limits,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchLimits::default())
    }
}

impl<'a> Matcher<'a> {
    /// Matcher over an arbitrary set of records
    pub fn with_catalog(catalog: &'a [CareerRecord], limits: MatchLimits) -> Self {
        Self { catalog, limits }
    }

    pub fn rank(&self, profile: &UserProfile) -> Vec<ScoredRecord> {
        rank(self.catalog, profile)
    }

    /// Run the full pipeline for one submitted profile
    ///
    /// # Arguments
    /// * `profile` - The validated questionnaire answers
    ///
    /// # Returns
    /// MatchResult with the top matches and both distributions
    pub fn submit_profile(&self, profile: &UserProfile) -> MatchResult {
        let ranked = self.rank(profile);

        let top = top_matches(&ranked, self.limits.top_n);
        let window = top_matches(&ranked, self.limits.distribution_window);

        let industries = distribution(window, |s| s.record.industry);
        let job_types = distribution(window, |s| s.record.job_type);

        let matches = top
            .iter()
            .enumerate()
            .map(|(idx, scored)| MatchEntry {
                rank: idx + 1,
                record: scored.record,
                score: scored.score,
                match_percentage: match_percentage(scored.score, self.limits.score_denominator),
            })
            .collect::<Vec<_>>();

        info!(
            "Matched profile ({} / {} / {}): {} top matches, {} industries, {} job types",
            profile.education,
            profile.major,
            profile.interest,
            matches.len(),
            industries.len(),
            job_types.len()
        );

        MatchResult {
            top_matches: matches,
            industry_distribution: industries.to_entries(),
            job_type_distribution: job_types.to_entries(),
            total_records: ranked.len(),
        }
    }
}

impl Default for Matcher<'static> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
