use career_match::catalog::{Career, CatalogLoader};
use career_match::recommendation::{
    recommend, EducationLevel, RecommendationEngine, RecommendationOutcome, UserProfile,
};
use std::collections::BTreeSet;

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn profile(course: &str, interests: &[&str], skills: &[&str]) -> UserProfile {
    UserProfile {
        education: EducationLevel::Undergraduate,
        course: course.to_string(),
        interests: set(interests),
        skills: set(skills),
    }
}

fn shipped_catalog() -> Vec<Career> {
    let data = include_bytes!("../../../career_recommendation_dataset.csv");
    CatalogLoader::from_reader(&data[..])
        .expect("shipped dataset loads")
        .careers()
        .to_vec()
}

#[test]
fn single_career_scores_course_interest_and_skill() {
    let catalog = vec![Career::new(
        "Data Scientist",
        &["CS"],
        &["Python", "Stats"],
        &["Data"],
    )];

    let result = recommend(&catalog, &profile("CS", &["Data"], &["Python"]), 3);

    assert_eq!(result.len(), 1);
    let matched = &result[0];
    assert_eq!(matched.career, "Data Scientist");
    assert_eq!(matched.score, 10);
    assert_eq!(matched.matched_interests, set(&["Data"]));
    assert_eq!(matched.matched_skills, set(&["Python"]));
    assert_eq!(matched.breakdown.course, 5);
    assert_eq!(matched.breakdown.interests, 3);
    assert_eq!(matched.breakdown.skills, 2);
}

#[test]
fn no_overlap_anywhere_yields_empty_result() {
    let catalog = shipped_catalog();
    let result = recommend(
        &catalog,
        &profile("Astrology", &["Horoscopes"], &["Tarot"]),
        3,
    );
    assert!(result.is_empty());

    let outcome = RecommendationEngine::default()
        .evaluate(&catalog, &profile("Astrology", &["Horoscopes"], &["Tarot"]));
    assert_eq!(outcome, RecommendationOutcome::NoMatch);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let catalog = vec![
        Career::new("X", &["Math"], &["Logic"], &[]),
        Career::new("Y", &["Math"], &[], &["Logic"]),
        Career::new("Z", &["Math"], &["Logic"], &[]),
    ];
    // X: 5 + 2 = 7, Y: 5 + 3 = 8, Z: 7
    let result = recommend(&catalog, &profile("Math", &["Logic"], &["Logic"]), 3);
    let order: Vec<_> = result.iter().map(|m| m.career.as_str()).collect();
    assert_eq!(order, vec!["Y", "X", "Z"]);

    let tied = vec![
        Career::new("X", &[], &["Go"], &["Data"]),
        Career::new("Y", &[], &["Go"], &["Data"]),
    ];
    let result = recommend(&tied, &profile("None", &["Data"], &["Go"]), 3);
    assert_eq!(result[0].score, 5);
    let order: Vec<_> = result.iter().map(|m| m.career.as_str()).collect();
    assert_eq!(order, vec!["X", "Y"]);
}

#[test]
fn ties_at_six_keep_catalog_order() {
    let catalog = vec![
        Career::new("X", &[], &[], &["Art", "Music"]),
        Career::new("Y", &[], &["Paint", "Sing", "Draw"], &[]),
    ];
    let result = recommend(
        &catalog,
        &profile("None", &["Art", "Music"], &["Paint", "Sing", "Draw"]),
        3,
    );
    let scored: Vec<_> = result
        .iter()
        .map(|m| (m.career.as_str(), m.score))
        .collect();
    assert_eq!(scored, vec![("X", 6), ("Y", 6)]);
}

#[test]
fn result_is_not_padded_up_to_limit() {
    let catalog = vec![
        Career::new("Chef", &["Culinary Arts"], &["Cooking"], &["Food"]),
        Career::new("Pilot", &["Aviation"], &["Navigation"], &["Travel"]),
        Career::new("Farmer", &["Agriculture"], &["Planting"], &["Nature"]),
    ];
    let user = profile("Culinary Arts", &["Cars"], &["Driving"]);
    let result = recommend(&catalog, &user, 3);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].career, "Chef");
}

#[test]
fn empty_catalog_is_not_an_error() {
    assert!(recommend(&[], &profile("CS", &["Data"], &["Python"]), 3).is_empty());
}

#[test]
fn empty_selections_still_score_the_course() {
    let catalog = shipped_catalog();
    let result = recommend(&catalog, &profile("Biology", &[], &[]), 10);
    assert!(!result.is_empty());
    assert!(result.iter().all(|m| m.score == 5));
    assert!(result
        .iter()
        .all(|m| m.matched_interests.is_empty() && m.matched_skills.is_empty()));
}

#[test]
fn shipped_catalog_properties_hold_for_many_profiles() {
    let catalog = shipped_catalog();
    let profiles = vec![
        profile(
            "Computer Science",
            &["Technology", "Data"],
            &["Python", "SQL"],
        ),
        profile("Biology", &["Healthcare", "Science"], &["Empathy"]),
        profile("Finance", &["Business"], &["Excel", "Statistics"]),
        profile("Design", &["Design", "Art"], &["Creativity"]),
        profile("Unknown", &["Helping People"], &["Communication"]),
    ];

    for user in &profiles {
        for limit in 1..=5 {
            let result = recommend(&catalog, user, limit);
            let positive = catalog
                .iter()
                .filter(|career| {
                    career.courses.contains(&user.course)
                        || !career.interests.is_disjoint(&user.interests)
                        || !career.skills.is_disjoint(&user.skills)
                })
                .count();

            assert!(result.len() <= limit);
            assert!(result.len() <= positive);
            assert!(result.iter().all(|m| m.score > 0));
            assert!(result.windows(2).all(|pair| pair[0].score >= pair[1].score));

            for matched in &result {
                let career = catalog
                    .iter()
                    .find(|career| career.name == matched.career)
                    .expect("career in catalog");
                let expected_interests = &user.interests & &career.interests;
                let expected_skills = &user.skills & &career.skills;
                assert_eq!(matched.matched_interests, expected_interests);
                assert_eq!(matched.matched_skills, expected_skills);
                assert_eq!(matched.score, matched.breakdown.total());
            }

            assert_eq!(result, recommend(&catalog, user, limit));
        }
    }
}

#[test]
fn stable_order_matches_catalog_positions_for_equal_scores() {
    let catalog = shipped_catalog();
    let user = profile("Unknown", &["Helping People"], &["Communication"]);
    let result = recommend(&catalog, &user, catalog.len());

    let position = |name: &str| {
        catalog
            .iter()
            .position(|career| career.name == name)
            .expect("career in catalog")
    };
    for pair in result.windows(2) {
        if pair[0].score == pair[1].score {
            assert!(position(&pair[0].career) < position(&pair[1].career));
        }
    }
}
