use career_match::catalog::{Catalog, CatalogLoader};
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::recommendation::{
    EducationLevel, ProfileSubmission, RecommendationEngine, RecommendationOutcome, UserProfile,
};
use career_match::telemetry;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Education level: High School, Undergraduate, Postgraduate, or PhD
    #[arg(long)]
    pub(crate) education: String,
    /// Course or major
    #[arg(long)]
    pub(crate) course: String,
    /// Interest to match (repeat for several)
    #[arg(long = "interest")]
    pub(crate) interests: Vec<String>,
    /// Skill to match (repeat for several)
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Number of recommendations to show (defaults to RECOMMENDATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Career catalog CSV (defaults to CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OptionsArgs {
    /// Career catalog CSV (defaults to CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        education,
        course,
        interests,
        skills,
        limit,
        catalog,
    } = args;

    let config = init_cli(catalog)?;
    let catalog = CatalogLoader::from_path(&config.catalog.path)?;
    let engine = RecommendationEngine::new(config.catalog.recommendation_limit);
    let engine = engine.with_limit(limit)?;
    let profile = ProfileSubmission {
        education,
        course,
        interests,
        skills,
    }
    .validate()?;

    let outcome = engine.evaluate(catalog.careers(), &profile);
    print!("{}", format_recommendations(&profile, &outcome));
    Ok(())
}

pub(crate) fn run_options(args: OptionsArgs) -> Result<(), AppError> {
    let config = init_cli(args.catalog)?;
    let catalog = CatalogLoader::from_path(&config.catalog.path)?;
    print!("{}", format_options(&catalog));
    Ok(())
}

fn init_cli(catalog: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = catalog {
        config.catalog.path = path;
    }
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

/// Error line first, then any operator hint the error carries.
pub fn format_failure(err: &AppError) -> String {
    match err.hint() {
        Some(hint) => format!("application error: {err}\n{hint}"),
        None => format!("application error: {err}"),
    }
}

pub(crate) fn format_recommendations(
    profile: &UserProfile,
    outcome: &RecommendationOutcome,
) -> String {
    let mut out = String::new();
    out.push_str("Career Recommendation System\n");
    out.push_str(&format!(
        "Profile: {} | {} | interests: {} | skills: {}\n\n",
        profile.education,
        profile.course,
        join(profile.interests.iter()),
        join(profile.skills.iter())
    ));
    out.push_str(outcome.message());
    out.push('\n');

    for ranked in outcome.ranked() {
        let matched = &ranked.recommendation;
        out.push_str(&format!("\n#{}: {}\n", ranked.rank, matched.career));
        out.push_str(&format!(
            "  Match Score: {} (course {}, interests {}, skills {})\n",
            matched.score,
            matched.breakdown.course,
            matched.breakdown.interests,
            matched.breakdown.skills
        ));
        if !matched.matched_interests.is_empty() {
            out.push_str(&format!(
                "  Matched Interests: {}\n",
                join(matched.matched_interests.iter())
            ));
        }
        if !matched.matched_skills.is_empty() {
            out.push_str(&format!(
                "  Matched Skills: {}\n",
                join(matched.matched_skills.iter())
            ));
        }
        out.push_str(&format!("  {}\n", ranked.narrative));
    }

    out
}

pub(crate) fn format_options(catalog: &Catalog) -> String {
    let options = catalog.options();
    let levels: Vec<_> = EducationLevel::ALL
        .iter()
        .map(|level| level.label())
        .collect();

    let mut out = String::new();
    out.push_str(&format!("Education levels: {}\n", levels.join(", ")));
    out.push_str(&format!("Courses: {}\n", join(options.courses.iter())));
    out.push_str(&format!("Skills: {}\n", join(options.skills.iter())));
    out.push_str(&format!("Interests: {}\n", join(options.interests.iter())));
    out
}

fn join<'a>(values: impl Iterator<Item = &'a String>) -> String {
    values.map(String::as_str).collect::<Vec<_>>().join(", ")
}
