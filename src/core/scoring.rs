use crate::models::{CareerRecord, UserProfile};

/// Highest score a built-in catalog record can reach for any profile
pub const MAX_SCORE: u8 = 6;

/// Score how closely a catalog record resembles a user profile
///
/// Scoring formula:
/// score = (
///     education_match +            # 1 if equal
///     major_match +                # 1 if equal
///     interest_match +             # 1 if equal
///     |record.skills ∩ profile.skills|
/// )
#[inline]
pub fn compute_score(record: &CareerRecord, profile: &UserProfile) -> u8 {
    let mut score = 0;

    if record.education == profile.education {
        score += 1;
    }
    if record.major == profile.major {
        score += 1;
    }
    if record.interest == profile.interest {
        score += 1;
    }

    score + record.skills.intersection(profile.skills).len() as u8
}

/// Displayed match percentage for a score
///
/// The denominator is fixed rather than derived from the profile, so a
/// profile with fewer than three skills can never reach 100%.
#[inline]
pub fn match_percentage(score: u8, denominator: u8) -> u8 {
    percentage(score as usize, denominator as usize)
}

/// `part / whole` as a whole percent, rounded to nearest
#[inline]
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }

    (part as f64 / whole as f64 * 100.0).round().clamp(0.0, u8::MAX as f64) as u8
}
