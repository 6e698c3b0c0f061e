use crate::tasks::{rules::ValidationRules, unit_tests::validator::validator};

const MESSAGE: &str = "Description must be at least 10 characters.";

#[test]
fn accept_description_of_min_length() {
    assert!(validator().validate_description(Some("0123456789")).is_ok());
}

#[test]
fn reject_description_one_short() {
    assert_eq!(
        validator().validate_description(Some("012345678")),
        Err(MESSAGE.to_string())
    );
}

#[test]
fn reject_missing_or_empty_description() {
    assert_eq!(validator().validate_description(None), Err(MESSAGE.to_string()));
    assert_eq!(validator().validate_description(Some("")), Err(MESSAGE.to_string()));
}

#[test]
fn description_length_counts_utf16_units() {
    // 5 surrogate pairs, 10 units
    assert!(validator().validate_description(Some("🥛🥛🥛🥛🥛")).is_ok());
    // 4 surrogate pairs plus 1 unit, 9 units
    assert_eq!(
        validator().validate_description(Some("🥛🥛🥛🥛a")),
        Err(MESSAGE.to_string())
    );
}

#[test]
fn zero_min_length_still_requires_text() {
    let validator = validator().rules(ValidationRules::new().description_min_len(0));
    assert!(validator.validate_description(Some("x")).is_ok());
    assert!(validator.validate_description(Some("")).is_err());
}
