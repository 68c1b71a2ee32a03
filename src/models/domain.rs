use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest degree held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[serde(alias = "本科")]
    Bachelor,
    #[serde(alias = "硕士")]
    Master,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 2] = [Self::Bachelor, Self::Master];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bachelor => "本科",
            Self::Master => "硕士",
        }
    }
}

/// Broad field of study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorCategory {
    #[serde(alias = "理工")]
    Stem,
    #[serde(alias = "商科")]
    Business,
    #[serde(alias = "文科")]
    Humanities,
}

impl MajorCategory {
    pub const ALL: [MajorCategory; 3] = [Self::Stem, Self::Business, Self::Humanities];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stem => "理工",
            Self::Business => "商科",
            Self::Humanities => "文科",
        }
    }
}

/// Core skill tag. A profile or record carries a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTag {
    #[serde(alias = "数据分析")]
    DataAnalysis,
    #[serde(alias = "编程")]
    Programming,
    #[serde(alias = "表达能力")]
    Communication,
    #[serde(alias = "商业分析")]
    BusinessAnalysis,
}

impl SkillTag {
    pub const ALL: [SkillTag; 4] = [
        Self::DataAnalysis,
        Self::Programming,
        Self::Communication,
        Self::BusinessAnalysis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DataAnalysis => "数据分析",
            Self::Programming => "编程",
            Self::Communication => "表达能力",
            Self::BusinessAnalysis => "商业分析",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Interest orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestType {
    #[serde(alias = "分析型")]
    Analytical,
    #[serde(alias = "创意型")]
    Creative,
    #[serde(alias = "管理型")]
    Managerial,
    #[serde(alias = "技术型")]
    Technical,
}

impl InterestType {
    pub const ALL: [InterestType; 4] = [
        Self::Analytical,
        Self::Creative,
        Self::Managerial,
        Self::Technical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Analytical => "分析型",
            Self::Creative => "创意型",
            Self::Managerial => "管理型",
            Self::Technical => "技术型",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryType {
    #[serde(alias = "互联网")]
    Internet,
    #[serde(alias = "咨询")]
    Consulting,
    #[serde(alias = "金融")]
    Finance,
    #[serde(alias = "快消")]
    Fmcg,
    #[serde(alias = "制造业")]
    Manufacturing,
}

impl IndustryType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Internet => "互联网",
            Self::Consulting => "咨询",
            Self::Finance => "金融",
            Self::Fmcg => "快消",
            Self::Manufacturing => "制造业",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    #[serde(alias = "产品")]
    Product,
    #[serde(alias = "运营")]
    Operations,
    #[serde(alias = "数据分析")]
    DataAnalyst,
    #[serde(alias = "市场")]
    Marketing,
    #[serde(alias = "咨询顾问")]
    ConsultingAdvisor,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Product => "产品",
            Self::Operations => "运营",
            Self::DataAnalyst => "数据分析",
            Self::Marketing => "市场",
            Self::ConsultingAdvisor => "咨询顾问",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MajorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for IndustryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of skill tags stored as a bit mask
///
/// Serialized as a list of tags in declaration order. Duplicate tags on
/// input collapse into a single member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<SkillTag>", into = "Vec<SkillTag>")]
pub struct SkillSet(u8);

impl SkillSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a slice of tags, usable in `static` initializers
    pub const fn of(tags: &[SkillTag]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < tags.len() {
            bits |= tags[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub fn insert(&mut self, tag: SkillTag) {
        self.0 |= tag.bit();
    }

    #[inline]
    pub const fn contains(self, tag: SkillTag) -> bool {
        self.0 & tag.bit() != 0
    }

    #[inline]
    pub const fn intersection(self, other: SkillSet) -> SkillSet {
        SkillSet(self.0 & other.0)
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SkillTag> {
        SkillTag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl FromIterator<SkillTag> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillTag>>(iter: I) -> Self {
        let mut set = SkillSet::empty();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl From<Vec<SkillTag>> for SkillSet {
    fn from(tags: Vec<SkillTag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<SkillTag> {
    fn from(set: SkillSet) -> Self {
        set.iter().collect()
    }
}

/// One reference career path from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: u32,
    pub education: EducationLevel,
    pub major: MajorCategory,
    pub skills: SkillSet,
    pub interest: InterestType,
    pub industry: IndustryType,
    pub job_type: JobType,
}

impl CareerRecord {
    pub const fn new(
        id: u32,
        education: EducationLevel,
        major: MajorCategory,
        skills: SkillSet,
        interest: InterestType,
        industry: IndustryType,
        job_type: JobType,
    ) -> Self {
        Self {
            id,
            education,
            major,
            skills,
            interest,
            industry,
            job_type,
        }
    }
}

/// Questionnaire answers submitted by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub education: EducationLevel,
    pub major: MajorCategory,
    #[serde(default)]
    pub skills: SkillSet,
    pub interest: InterestType,
}

impl UserProfile {
    pub fn new(
        education: EducationLevel,
        major: MajorCategory,
        skills: SkillSet,
        interest: InterestType,
    ) -> Self {
        Self {
            education,
            major,
            skills,
            interest,
        }
    }
}

/// Catalog record paired with its similarity score for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: CareerRecord,
    pub score: u8,
}

/// Result sizes and percentage base used by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Number of records returned as top matches
    pub top_n: usize,
    /// Ranking prefix the distributions are computed over
    pub distribution_window: usize,
    /// Fixed denominator for a match's displayed percentage
    pub score_denominator: u8,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            top_n: 5,
            distribution_window: 15,
            score_denominator: 6,
        }
    }
}
