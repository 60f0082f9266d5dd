//! Ranking properties over the shared fixture league.

use std::num::NonZeroUsize;

use goatrank_ranker::{compute_ranking, Category, PreferenceVector, RankingError};
use goatrank_test_utils::{init_test_tracing, sample_profiles};

fn top(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn single(category: Category) -> PreferenceVector {
    let mut w = [0.0; 6];
    w[category.index()] = 1.0;
    PreferenceVector::from_array(w)
}

#[test]
fn every_weighting_yields_sorted_bounded_rankings() {
    init_test_tracing();
    let players = sample_profiles();
    let weightings = [
        PreferenceVector::default(),
        PreferenceVector::from_percentages([50.0, 5.0, 30.0, 5.0, 5.0, 5.0]),
        PreferenceVector::from_percentages([40.0, 20.0, 10.0, 10.0, 10.0, 10.0]),
        single(Category::PeakPerformance),
    ];

    for weights in weightings {
        let result = compute_ranking(&players, &weights, top(4)).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result.players[0].rank, 1);
        for pair in result.players.windows(2) {
            assert!(pair[0].composite_score >= pair[1].composite_score);
        }
        for row in &result.players {
            assert!((0.0..=1.0).contains(&row.composite_score));
        }
    }
}

#[test]
fn single_category_weighting_puts_category_leader_first() {
    let players = sample_profiles();

    let longevity = compute_ranking(&players, &single(Category::Longevity), top(1)).unwrap();
    assert_eq!(longevity.players[0].name, "Casey Ironman");

    let team = compute_ranking(&players, &single(Category::TeamSuccess), top(1)).unwrap();
    assert_eq!(team.players[0].name, "Blake Anchor");

    let peak = compute_ranking(&players, &single(Category::PeakPerformance), top(1)).unwrap();
    assert_eq!(peak.players[0].name, "Avery Scorer");
}

#[test]
fn player_without_career_stats_scores_zero_on_stat_categories() {
    let players = sample_profiles();
    let result = compute_ranking(&players, &PreferenceVector::default(), top(10)).unwrap();
    let unknown = result.players.iter().find(|r| r.name == "Emery Unknown").unwrap();

    for category in [Category::Offense, Category::Defense, Category::Longevity, Category::Efficiency] {
        assert_eq!(unknown.category_scores.get(category), 0.0, "{}", category.as_str());
    }
}

#[test]
fn top_n_larger_than_population_clamps() {
    let players = sample_profiles();
    let result = compute_ranking(&players, &PreferenceVector::default(), top(100)).unwrap();
    assert_eq!(result.len(), players.len());
}

#[test]
fn eighty_percent_weights_are_rejected() {
    let weights = PreferenceVector::from_percentages([40.0, 10.0, 10.0, 10.0, 5.0, 5.0]);
    let err = compute_ranking(&sample_profiles(), &weights, top(5)).unwrap_err();
    assert!(matches!(err, RankingError::InvalidPreference(_)));
}
