// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CareerRecord, EducationLevel, IndustryType, InterestType, JobType, MajorCategory, MatchLimits,
    ScoredRecord, SkillSet, SkillTag, UserProfile,
};
pub use requests::ProfileRequest;
pub use responses::{DistributionEntry, MatchEntry, MatchResult};
