use super::domain::{EducationLevel, UserProfile};
use serde::Deserialize;
use std::collections::BTreeSet;

pub const EMPTY_SELECTION_WARNING: &str =
    "Please select at least one interest and one skill for better recommendations.";

/// Raw profile as it arrives from a form, CLI flags, or a JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSubmission {
    pub education: String,
    pub course: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown education level '{0}'")]
    UnknownEducation(String),
    #[error("{}", EMPTY_SELECTION_WARNING)]
    EmptySelection,
    #[error("limit must be a positive integer")]
    InvalidLimit,
}

impl ProfileSubmission {
    /// Applies the intake policy: a known education level and at least one
    /// interest and one skill.
    pub fn validate(self) -> Result<UserProfile, ProfileError> {
        let education = EducationLevel::from_label(&self.education)
            .ok_or_else(|| ProfileError::UnknownEducation(self.education.clone()))?;

        let interests = collect_selection(self.interests);
        let skills = collect_selection(self.skills);
        if interests.is_empty() || skills.is_empty() {
            return Err(ProfileError::EmptySelection);
        }

        Ok(UserProfile {
            education,
            course: self.course.trim().to_string(),
            interests,
            skills,
        })
    }
}

fn collect_selection(values: Vec<String>) -> BTreeSet<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
