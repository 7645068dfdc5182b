use compass_core::models::value::{describe, zeroed_scores, ValueName, GENERIC_DESCRIPTION};

#[test]
fn zeroed_scores_cover_every_value_in_order() {
    let scores = zeroed_scores();
    let names: Vec<_> = scores.keys().copied().collect();
    assert_eq!(names, ValueName::ALL);
    assert!(scores.values().all(|s| *s == 0));
}

#[test]
fn value_names_parse_case_insensitively() {
    assert_eq!("integrity".parse::<ValueName>().unwrap(), ValueName::Integrity);
    assert_eq!(" Justice ".parse::<ValueName>().unwrap(), ValueName::Justice);
    assert!("Health".parse::<ValueName>().is_err());
}

#[test]
fn unknown_names_get_generic_description() {
    assert_eq!(describe("Health"), GENERIC_DESCRIPTION);
    assert_eq!(describe("Growth"), ValueName::Growth.description());
}

#[test]
fn value_name_serializes_as_display_name() {
    let json = serde_json::to_string(&ValueName::Independence).unwrap();
    assert_eq!(json, "\"Independence\"");
}
