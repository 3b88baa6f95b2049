use super::domain::Match;
use serde::Serialize;

pub const NO_MATCH_MESSAGE: &str =
    "Sorry, we couldn't find a specific match. Try selecting more interests or skills.";
pub const MATCHES_MESSAGE: &str = "Here are your top career recommendations:";

/// A match with its position in the result list and a one-line pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    pub rank: usize,
    #[serde(flatten)]
    pub recommendation: Match,
    pub narrative: String,
}

/// What the presentation layer renders after a recommendation request.
///
/// An empty result is a valid outcome, kept apart from catalog failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    Matches(Vec<RankedMatch>),
    NoMatch,
}

impl RecommendationOutcome {
    pub fn from_matches(course: &str, matches: Vec<Match>) -> Self {
        if matches.is_empty() {
            return Self::NoMatch;
        }

        let ranked = matches
            .into_iter()
            .enumerate()
            .map(|(index, recommendation)| RankedMatch {
                rank: index + 1,
                narrative: format!(
                    "Based on your background in {} and your profile, a career as a {} would be a great fit!",
                    course, recommendation.career
                ),
                recommendation,
            })
            .collect();

        Self::Matches(ranked)
    }

    pub fn message(&self) -> &'static str {
        match self {
            RecommendationOutcome::Matches(_) => MATCHES_MESSAGE,
            RecommendationOutcome::NoMatch => NO_MATCH_MESSAGE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationOutcome::Matches(_) => "matches",
            RecommendationOutcome::NoMatch => "no_match",
        }
    }

    pub fn ranked(&self) -> &[RankedMatch] {
        match self {
            RecommendationOutcome::Matches(ranked) => ranked,
            RecommendationOutcome::NoMatch => &[],
        }
    }
}
