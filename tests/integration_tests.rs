// Integration tests for PathMatch

use path_match::config::Settings;
use path_match::models::{
    EducationLevel, IndustryType, InterestType, JobType, MajorCategory, MatchLimits,
    ProfileRequest, SkillSet, SkillTag, UserProfile,
};
use path_match::Matcher;

fn technical_stem_profile() -> UserProfile {
    UserProfile::new(
        EducationLevel::Bachelor,
        MajorCategory::Stem,
        SkillSet::of(&[SkillTag::Programming, SkillTag::DataAnalysis]),
        InterestType::Technical,
    )
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = Matcher::with_defaults();
    let result = matcher.submit_profile(&technical_stem_profile());

    assert_eq!(result.total_records, 30);

    let top_ids: Vec<u32> = result.top_matches.iter().map(|m| m.record.id).collect();
    assert_eq!(top_ids, vec![1, 19, 10, 13, 25]);

    let percentages: Vec<u8> = result.top_matches.iter().map(|m| m.match_percentage).collect();
    assert_eq!(percentages, vec![83, 83, 67, 67, 67]);

    let ranks: Vec<usize> = result.top_matches.iter().map(|m| m.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_integration_industry_distribution() {
    let result = Matcher::with_defaults().submit_profile(&technical_stem_profile());

    let industries: Vec<(IndustryType, usize, u8)> = result
        .industry_distribution
        .iter()
        .map(|e| (e.key, e.count, e.percentage))
        .collect();

    assert_eq!(
        industries,
        vec![
            (IndustryType::Internet, 9, 60),
            (IndustryType::Manufacturing, 3, 20),
            (IndustryType::Fmcg, 2, 13),
            (IndustryType::Finance, 1, 7),
        ]
    );
}

#[test]
fn test_integration_job_type_distribution() {
    let result = Matcher::with_defaults().submit_profile(&technical_stem_profile());

    let job_types: Vec<(JobType, usize, u8)> = result
        .job_type_distribution
        .iter()
        .map(|e| (e.key, e.count, e.percentage))
        .collect();

    // DataAnalyst and Product tie at 5; DataAnalyst is seen first in the window
    assert_eq!(
        job_types,
        vec![
            (JobType::DataAnalyst, 5, 33),
            (JobType::Product, 5, 33),
            (JobType::Operations, 4, 27),
            (JobType::Marketing, 1, 7),
        ]
    );

    let total: usize = result.job_type_distribution.iter().map(|e| e.count).sum();
    assert_eq!(total, 15);
}

#[test]
fn test_integration_request_to_result() {
    let request: ProfileRequest = serde_json::from_str(
        r#"{"education":"硕士","major":"文科","skills":[],"interest":"创意型"}"#,
    )
    .unwrap();
    let profile = request.into_profile().unwrap();

    let result = Matcher::with_defaults().submit_profile(&profile);

    assert!(result.top_matches.iter().any(|m| m.record.id == 30));
    assert!(result.top_matches.iter().all(|m| m.score <= 3));
    assert_eq!(result.top_matches[0].match_percentage, 50);
}

#[test]
fn test_integration_result_serializes_camel_case() {
    let result = Matcher::with_defaults().submit_profile(&technical_stem_profile());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["topMatches"][0]["id"], 1);
    assert_eq!(json["topMatches"][0]["jobType"], "data_analyst");
    assert_eq!(json["topMatches"][0]["matchPercentage"], 83);
    assert_eq!(json["topMatches"][0]["skills"], serde_json::json!(["data_analysis", "programming"]));
    assert_eq!(json["industryDistribution"][0]["key"], "internet");
    assert_eq!(json["totalRecords"], 30);
}

#[test]
fn test_integration_settings_drive_matcher() {
    let settings: Settings = toml::from_str(
        r#"
        [matching]
        top_n = 3
        distribution_window = 30
        "#,
    )
    .unwrap();

    let limits = settings.matching.limits();
    assert_eq!(
        limits,
        MatchLimits {
            top_n: 3,
            distribution_window: 30,
            score_denominator: 6,
        }
    );

    let result = Matcher::new(limits).submit_profile(&technical_stem_profile());
    assert_eq!(result.top_matches.len(), 3);

    let internet = result
        .industry_distribution
        .iter()
        .find(|e| e.key == IndustryType::Internet)
        .unwrap();
    assert_eq!(internet.count, 11);
    assert_eq!(internet.percentage, 37);
}

#[test]
fn test_integration_env_overrides_top_n() {
    std::env::set_var("PATHMATCH__MATCHING__TOP_N", "3");
    let settings = Settings::load();
    std::env::remove_var("PATHMATCH__MATCHING__TOP_N");

    let settings = settings.unwrap();
    assert_eq!(settings.matching.top_n, 3);
    assert_eq!(settings.matching.distribution_window, 15);

    let result = Matcher::new(settings.matching.limits()).submit_profile(&technical_stem_profile());
    assert_eq!(result.top_matches.len(), 3);
}

#[test]
fn test_integration_profile_file_to_result() {
    let path = std::env::temp_dir().join(format!("path-match-it-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "education = \"本科\"\nmajor = \"理工\"\nskills = [\"编程\", \"数据分析\"]\ninterest = \"技术型\"\n",
    )
    .unwrap();

    let request = ProfileRequest::from_path(&path);
    std::fs::remove_file(&path).ok();

    let profile = request.unwrap().into_profile().unwrap();
    assert_eq!(profile, technical_stem_profile());

    let result = Matcher::with_defaults().submit_profile(&profile);
    assert_eq!(result.top_matches[0].record.id, 1);
}
