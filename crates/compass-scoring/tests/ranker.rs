use compass_core::models::value::{zeroed_scores, ValueName, ValueScores};
use compass_scoring::ranker::{check_ranking, rank, validate_ranking, DEFAULT_LIMIT};
use compass_scoring::scorer::Scorer;
use indexmap::IndexMap;

fn scores(pairs: &[(ValueName, i64)]) -> ValueScores {
    pairs.iter().copied().collect()
}

#[test]
fn empty_answers_rank_seven_baseline_values() {
    let results = rank(&Scorer::default().score(std::iter::empty()), DEFAULT_LIMIT);

    assert_eq!(results.len(), 7);
    let ranks: Vec<_> = results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [1, 2, 3, 4, 5, 6, 7]);
    assert!(results.iter().all(|r| (40..65).contains(&r.score)));
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(validate_ranking(&results).is_empty());
}

#[test]
fn limit_bounds_the_result_length() {
    let all = zeroed_scores();
    assert_eq!(rank(&all, 3).len(), 3);
    assert_eq!(rank(&all, 50).len(), ValueName::ALL.len());
    assert!(rank(&all, 0).is_empty());
    assert!(rank(&IndexMap::new(), 7).is_empty());
}

#[test]
fn scores_are_clamped() {
    let results = rank(
        &scores(&[(ValueName::Growth, 150), (ValueName::Justice, -20)]),
        7,
    );
    assert_eq!(results[0].name, ValueName::Growth);
    assert_eq!(results[0].score, 100);
    assert_eq!(results[1].score, 0);
}

#[test]
fn ties_keep_enumeration_order() {
    let results = rank(&zeroed_scores(), 10);
    let names: Vec<_> = results.iter().map(|r| r.name).collect();
    assert_eq!(names, ValueName::ALL);
}

#[test]
fn ties_keep_mapping_order_not_alphabetical() {
    let results = rank(
        &scores(&[
            (ValueName::Security, 70),
            (ValueName::Achievement, 70),
            (ValueName::Growth, 90),
        ]),
        7,
    );
    let names: Vec<_> = results.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        [ValueName::Growth, ValueName::Security, ValueName::Achievement]
    );
}

#[test]
fn ids_and_descriptions_follow_position() {
    let results = rank(
        &scores(&[(ValueName::Family, 55), (ValueName::Integrity, 80)]),
        7,
    );
    assert_eq!(results[0].id, 1);
    assert_eq!(results[0].name, ValueName::Integrity);
    assert_eq!(results[0].description, ValueName::Integrity.description());
    assert_eq!(results[1].id, 2);
    assert_eq!(results[1].rank, 2);
}

#[test]
fn ranking_is_idempotent() {
    let input = Scorer::default().score(std::iter::empty());
    assert_eq!(rank(&input, 7), rank(&input, 7));
}

#[test]
fn validation_reports_gaps_and_disorder() {
    let mut results = rank(
        &scores(&[(ValueName::Growth, 90), (ValueName::Balance, 60)]),
        7,
    );
    assert!(check_ranking(&results).is_ok());

    results[1].rank = 3;
    results[1].score = 95;
    let violations = validate_ranking(&results);
    assert_eq!(violations.len(), 2);
    assert!(check_ranking(&results).is_err());
}
