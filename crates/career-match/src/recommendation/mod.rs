//! Weighted set-intersection scoring of careers against a user profile.
//!
//! A career earns a flat bonus when the user's course is one of its courses,
//! plus a per-item bonus for every shared interest and skill. Careers with no
//! overlap are dropped, the rest are ranked by score with ties left in
//! catalog order.

pub mod domain;
mod rules;
pub mod submission;
pub mod views;

pub use domain::{EducationLevel, Match, ScoreBreakdown, UserProfile};
pub use rules::{COURSE_BONUS, INTEREST_BONUS, SKILL_BONUS};
pub use submission::{ProfileError, ProfileSubmission, EMPTY_SELECTION_WARNING};
pub use views::{RankedMatch, RecommendationOutcome, NO_MATCH_MESSAGE};

use crate::catalog::Career;
use crate::config::DEFAULT_RECOMMENDATION_LIMIT;
use tracing::debug;

/// Returns at most `limit` careers with a positive score, best first.
pub fn recommend(catalog: &[Career], profile: &UserProfile, limit: usize) -> Vec<Match> {
    let mut matches: Vec<Match> = catalog
        .iter()
        .filter_map(|career| rules::score_career(career, profile))
        .collect();

    // `sort_by` is stable; equal scores keep catalog order.
    matches.sort_by(|left, right| right.score.cmp(&left.score));
    matches.truncate(limit);

    debug!(
        education = %profile.education,
        course = %profile.course,
        candidates = catalog.len(),
        returned = matches.len(),
        "scored careers"
    );

    matches
}

/// Stateless recommender bound to a result limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT)
    }
}

impl RecommendationEngine {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Applies a per-request limit override. Zero is rejected.
    pub fn with_limit(self, limit: Option<usize>) -> Result<Self, ProfileError> {
        match limit {
            Some(0) => Err(ProfileError::InvalidLimit),
            Some(limit) => Ok(Self::new(limit)),
            None => Ok(self),
        }
    }

    pub fn recommend(&self, catalog: &[Career], profile: &UserProfile) -> Vec<Match> {
        recommend(catalog, profile, self.limit)
    }

    pub fn evaluate(&self, catalog: &[Career], profile: &UserProfile) -> RecommendationOutcome {
        RecommendationOutcome::from_matches(&profile.course, self.recommend(catalog, profile))
    }
}
