use compass_core::models::answer::{Answer, AnswerValue};
use compass_core::models::value::ValueName;
use compass_scoring::scorer::Scorer;
use compass_scoring::tables::ScoringTables;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn answer(question_id: u32, value: AnswerValue) -> Answer {
    Answer {
        question_id,
        value,
        captured_at: jiff::Timestamp::now(),
    }
}

fn parse(kind: compass_core::models::question::QuestionType, raw: serde_json::Value) -> AnswerValue {
    AnswerValue::interpret(kind, raw)
}

#[test]
fn free_text_matches_synonyms() {
    let scorer = Scorer::default();
    let answers = [answer(
        1,
        AnswerValue::Choice("I value honesty and helping others".to_string()),
    )];

    let scores = scorer.keyword_scores(&answers);
    assert_eq!(scores[&ValueName::Integrity], 15);
    assert_eq!(scores[&ValueName::Compassion], 15);
    for (name, score) in &scores {
        if !matches!(name, ValueName::Integrity | ValueName::Compassion) {
            assert_eq!(*score, 0, "{name} should not have matched");
        }
    }
}

#[test]
fn value_name_itself_matches() {
    let scorer = Scorer::default();
    let answers = [answer(1, AnswerValue::Choice("Fighting for JUSTICE".to_string()))];
    assert_eq!(scorer.keyword_scores(&answers)[&ValueName::Justice], 15);
}

#[test]
fn family_and_balance_share_keywords() {
    let scorer = Scorer::default();
    let answers = [answer(1, AnswerValue::Choice("Time with family".to_string()))];
    let scores = scorer.keyword_scores(&answers);
    assert_eq!(scores[&ValueName::Family], 15);
    assert_eq!(scores[&ValueName::Balance], 15);
}

#[test]
fn ratings_at_or_above_threshold_feed_index_table() {
    use compass_core::models::question::QuestionType;

    let scorer = Scorer::default();
    let answers = [answer(
        3,
        parse(QuestionType::RatingScale, json!({"0": 5, "1": 5, "2": 1, "3": 1})),
    )];

    let scores = scorer.keyword_scores(&answers);
    // Index 0 is "Health", which is not a scored value.
    assert_eq!(scores[&ValueName::Balance], 15);
    assert_eq!(scores.values().sum::<i64>(), 15);
    assert_eq!(scores.len(), ValueName::ALL.len());
}

#[test]
fn ratings_beyond_the_index_table_are_ignored() {
    use compass_core::models::question::QuestionType;

    let scorer = Scorer::default();
    let answers = [answer(
        3,
        parse(QuestionType::RatingScale, json!({"3": 4, "42": 5})),
    )];

    let scores = scorer.keyword_scores(&answers);
    assert_eq!(scores[&ValueName::Growth], 12);
    assert_eq!(scores.values().sum::<i64>(), 12);
}

#[test]
fn float_encoded_ratings_still_score() {
    use compass_core::models::question::QuestionType;

    let scorer = Scorer::default();
    let answers = [answer(
        3,
        parse(QuestionType::RatingScale, json!({"1": 5.0, "3": 4})),
    )];

    let scores = scorer.keyword_scores(&answers);
    assert_eq!(scores[&ValueName::Balance], 15);
    assert_eq!(scores[&ValueName::Growth], 12);
}

#[test]
fn buckets_use_tier_increments() {
    use compass_core::models::question::QuestionType;

    let scorer = Scorer::default();
    let answers = [answer(
        5,
        parse(
            QuestionType::CategorySort,
            json!({
                "Most Important": ["Family time"],
                "essential": ["Learning new skills"],
                "Not Important": ["Success at work"],
            }),
        ),
    )];

    let scores = scorer.keyword_scores(&answers);
    assert_eq!(scores[&ValueName::Family], 30);
    assert_eq!(scores[&ValueName::Balance], 30);
    assert_eq!(scores[&ValueName::Growth], 25);
    assert_eq!(scores[&ValueName::Achievement], 0);
}

#[test]
fn pairwise_choices_add_twelve() {
    use compass_core::models::question::QuestionType;

    let scorer = Scorer::default();
    let answers = [answer(
        6,
        parse(
            QuestionType::Pairwise,
            json!({"security-vs-freedom": "Freedom", "justice-vs-success": "Justice"}),
        ),
    )];

    let scores = scorer.keyword_scores(&answers);
    assert_eq!(scores[&ValueName::Independence], 12);
    assert_eq!(scores[&ValueName::Justice], 12);
    assert_eq!(scores[&ValueName::Security], 0);
}

#[test]
fn unscored_shapes_contribute_nothing() {
    let scorer = Scorer::default();
    let answers = [
        answer(1, AnswerValue::Choices(vec!["Honesty".to_string()])),
        answer(2, AnswerValue::Numeric(4.0)),
        answer(3, AnswerValue::Unrecognized(json!({"help": true}))),
    ];
    assert!(scorer.keyword_scores(&answers).values().all(|s| *s == 0));
}

#[test]
fn baseline_stays_in_range() {
    let scorer = Scorer::default();
    let answers = [answer(
        1,
        AnswerValue::Choice("I value honesty and helping others".to_string()),
    )];
    let keywords = scorer.keyword_scores(&answers);

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let scores = scorer.score_with_rng(&answers, &mut rng);
        for (name, score) in &scores {
            let base = score - keywords[name];
            assert!((40..65).contains(&base), "{name} baseline {base} out of range");
        }
    }
}

#[test]
fn scoring_empty_answers_is_baseline_only() {
    let scores = Scorer::default().score(std::iter::empty());
    assert_eq!(scores.len(), ValueName::ALL.len());
    assert!(scores.values().all(|s| (40..65).contains(s)));
}

#[test]
fn repeated_scoring_varies() {
    let scorer = Scorer::default();
    let mut rng = StdRng::seed_from_u64(11);
    let first = scorer.score_with_rng(std::iter::empty(), &mut rng);
    let differs = (0..20).any(|_| scorer.score_with_rng(std::iter::empty(), &mut rng) != first);
    assert!(differs);
}

#[test]
fn custom_tables_change_increments() {
    let tables = ScoringTables::from_json(r#"{"choice_increment": 5}"#).unwrap();
    assert_eq!(tables.pairwise_increment, 12);

    let scorer = Scorer::new(tables);
    let answers = [answer(1, AnswerValue::Choice("growth".to_string()))];
    assert_eq!(scorer.keyword_scores(&answers)[&ValueName::Growth], 5);
}

#[test]
fn empty_baseline_is_rejected() {
    let err = ScoringTables::from_json(r#"{"baseline": {"min": 50, "max": 50}}"#).unwrap_err();
    assert!(err.to_string().contains("empty"));
}
