// Integration tests for RSO Match

use rso_match::core::{selector::{DEFAULT_SCORE, MIN_SCORE}, Matcher};
use rso_match::models::{CatalogEntry, Tag};
use rso_match::quiz::{question_bank, QuizSession, QuizState};
use rso_match::services::load_catalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn tags(names: &[&str]) -> Vec<Tag> {
    names.iter().map(|name| Tag::from(*name)).collect()
}

fn shipped_matcher() -> Matcher {
    let catalog = load_catalog("data/catalog.json").expect("shipped catalog loads");
    Matcher::new(catalog)
}

#[test]
fn test_shipped_catalog_is_valid() {
    let matcher = shipped_matcher();
    assert!(matcher.catalog().len() >= 20);

    let names: HashSet<&str> = matcher.catalog().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names.len(), matcher.catalog().len());
}

#[test]
fn test_no_tags_returns_catalog_prefix() {
    let matcher = shipped_matcher();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for n in 0..=matcher.catalog().len() {
        let result = matcher.top_matches(&[], n, &mut rng);

        assert_eq!(result.len(), n);
        for (m, entry) in result.iter().zip(matcher.catalog()) {
            assert_eq!(&m.entry, entry);
            assert_eq!(m.score, DEFAULT_SCORE);
        }
    }
}

#[test]
fn test_results_unique_and_bounded() {
    let matcher = shipped_matcher();
    let user_sets = [
        tags(&["tech", "tech", "career", "high-commitment"]),
        tags(&["creative", "low-commitment", "social", "creative"]),
        tags(&["service", "advocacy", "service", "advocacy", "high-commitment"]),
        tags(&["fitness", "fitness", "low-commitment"]),
        tags(&["social"]),
    ];

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for user in &user_sets {
            for count in [1, 3, 5, 10] {
                let result = matcher.top_matches(user, count, &mut rng);
                let names: HashSet<&str> = result.iter().map(|m| m.name()).collect();

                assert!(result.len() <= count);
                assert_eq!(names.len(), result.len(), "duplicate entry in {:?}", names);
                assert!(result.iter().all(|m| m.score > MIN_SCORE && m.score <= 1.0));
            }
        }
    }
}

#[test]
fn test_repeated_calls_agree_on_qualifying_set() {
    let matcher = Matcher::new(vec![
        CatalogEntry::new("Tech Club", "We build software and host hackathons"),
        CatalogEntry::new("Coding Circle", "Casual coding sessions"),
        CatalogEntry::new("Robotics Team", "Robotics engineering"),
        CatalogEntry::new("Choir", "Vocal music for everyone"),
        CatalogEntry::new("Chess Circle", "Quiet afternoons of chess"),
    ]);
    let user = tags(&["tech", "tech", "career"]);

    let mut first_rng = ChaCha8Rng::seed_from_u64(100);
    let mut second_rng = ChaCha8Rng::seed_from_u64(200);
    let first = matcher.top_matches(&user, 5, &mut first_rng);
    let second = matcher.top_matches(&user, 5, &mut second_rng);

    // Order may differ between calls, the qualifying entries may not
    let first_names: HashSet<&str> = first.iter().map(|m| m.name()).collect();
    let second_names: HashSet<&str> = second.iter().map(|m| m.name()).collect();
    let expected: HashSet<&str> = ["Tech Club", "Coding Circle", "Robotics Team"].into();

    assert_eq!(first_names, expected);
    assert_eq!(second_names, expected);
}

#[test]
fn test_unqualified_user_gets_nothing() {
    let matcher = shipped_matcher();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // Only unregistered and modifier tags: nothing clears the score floor
    let result = matcher.top_matches(&tags(&["social", "low-commitment"]), 5, &mut rng);
    assert!(result.is_empty());
}

#[test]
fn test_quiz_to_recommendations() {
    let matcher = shipped_matcher();
    let mut session = QuizSession::new(question_bank());

    // Tech-leaning answers: option index per question
    let choices = [3, 1, 4, 0, 3, 3, 3, 0, 1];
    for choice in choices {
        assert!(session.submit(choice).unwrap());
        session.complete_transition().unwrap();
    }
    assert_eq!(session.state(), QuizState::Complete);

    let user = session.collected_tags();
    assert!(user.iter().filter(|tag| **tag == "tech").count() >= 3);

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let report = matcher.recommend(&user, 5, &mut rng);

    assert_eq!(report.recommendations.len(), 5);
    assert_eq!(report.total_candidates, matcher.catalog().len());
    for recommendation in &report.recommendations {
        assert!(!recommendation.explanation.is_empty());
        assert!(recommendation.result.score > MIN_SCORE);
    }

    session.restart();
    assert!(session.collected_tags().is_empty());
    assert_eq!(session.state(), QuizState::Displaying(0));
}

#[test]
fn test_report_serializes_for_presentation() {
    let matcher = shipped_matcher();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let report = matcher.recommend(&tags(&["service", "advocacy"]), 3, &mut rng);

    let json = serde_json::to_value(&report).unwrap();
    let first = &json["recommendations"][0];
    assert!(first["name"].is_string());
    assert!(first["description"].is_string());
    assert!(first["score"].is_number());
    assert!(first["tags"].is_array());
    assert!(first["explanation"].is_string());
}
