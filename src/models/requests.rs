use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use validator::Validate;

use crate::error::Result;
use crate::models::domain::{EducationLevel, InterestType, MajorCategory, SkillTag, UserProfile};

/// Questionnaire submission as it arrives from the form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    pub education: EducationLevel,
    pub major: MajorCategory,
    #[validate(length(max = 4))]
    #[serde(default)]
    pub skills: Vec<SkillTag>,
    pub interest: InterestType,
}

impl ProfileRequest {
    /// Read a submission from disk; `.toml` files are parsed as TOML, anything else as JSON
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let request = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            _ => serde_json::from_str(&contents)?,
        };

        Ok(request)
    }

    /// Read a JSON submission from a stream such as stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(serde_json::from_str(&input)?)
    }

    /// Validate the submission and freeze it into a profile
    pub fn into_profile(self) -> Result<UserProfile> {
        self.validate()?;

        Ok(UserProfile::new(
            self.education,
            self.major,
            self.skills.into_iter().collect(),
            self.interest,
        ))
    }
}
