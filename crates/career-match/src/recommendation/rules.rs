use super::domain::{Match, ScoreBreakdown, UserProfile};
use crate::catalog::Career;
use std::collections::BTreeSet;

pub const COURSE_BONUS: u32 = 5;
pub const INTEREST_BONUS: u32 = 3;
pub const SKILL_BONUS: u32 = 2;

/// Scores one career. Returns `None` when nothing overlaps.
pub(crate) fn score_career(career: &Career, profile: &UserProfile) -> Option<Match> {
    let matched_interests = intersect(&profile.interests, &career.interests);
    let matched_skills = intersect(&profile.skills, &career.skills);

    let breakdown = ScoreBreakdown {
        course: if career.courses.contains(&profile.course) {
            COURSE_BONUS
        } else {
            0
        },
        interests: INTEREST_BONUS * matched_interests.len() as u32,
        skills: SKILL_BONUS * matched_skills.len() as u32,
    };

    let score = breakdown.total();
    if score == 0 {
        return None;
    }

    Some(Match {
        career: career.name.clone(),
        score,
        matched_interests,
        matched_skills,
        breakdown,
    })
}

fn intersect(left: &BTreeSet<String>, right: &BTreeSet<String>) -> BTreeSet<String> {
    left.intersection(right).cloned().collect()
}
