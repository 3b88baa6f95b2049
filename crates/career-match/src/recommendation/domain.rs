use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Highest education level a user reports. Carried with the profile only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    Postgraduate,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Postgraduate,
        EducationLevel::Phd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Phd => "PhD",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a user told us about themselves for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub education: EducationLevel,
    pub course: String,
    pub interests: BTreeSet<String>,
    pub skills: BTreeSet<String>,
}

/// Points each matched attribute contributed to a career's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub course: u32,
    pub interests: u32,
    pub skills: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.course + self.interests + self.skills
    }
}

/// A career that scored above zero for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub career: String,
    pub score: u32,
    pub matched_interests: BTreeSet<String>,
    pub matched_skills: BTreeSet<String>,
    pub breakdown: ScoreBreakdown,
}
