use crate::tasks::{rules::ValidationRules, unit_tests::validator::validator};

const MESSAGE: &str = "Title must be at least 3 characters.";

#[test]
fn accept_title_of_min_length() {
    assert!(validator().validate_title(Some("Buy")).is_ok());
    assert!(validator().validate_title(Some("Buy milk")).is_ok());
}

#[test]
fn reject_short_title() {
    assert_eq!(validator().validate_title(Some("Hi")), Err(MESSAGE.to_string()));
}

#[test]
fn reject_missing_or_empty_title() {
    assert_eq!(validator().validate_title(None), Err(MESSAGE.to_string()));
    assert_eq!(validator().validate_title(Some("")), Err(MESSAGE.to_string()));
}

#[test]
fn length_counts_utf16_units() {
    // 3 units, 6 bytes
    assert!(validator().validate_title(Some("äöü")).is_ok());
    // 2 emoji are 2 surrogate pairs, 4 units
    assert!(validator().validate_title(Some("🥛🥛")).is_ok());
    // 1 surrogate pair plus 1 unit
    assert!(validator().validate_title(Some("🥛a")).is_ok());
    // 1 surrogate pair
    assert_eq!(validator().validate_title(Some("🥛")), Err(MESSAGE.to_string()));
}

#[test]
fn whitespace_is_not_trimmed() {
    assert!(validator().validate_title(Some("   ")).is_ok());
}

#[test]
fn custom_min_length() {
    let validator = validator().rules(ValidationRules::new().title_min_len(5));
    assert_eq!(
        validator.validate_title(Some("Milk")),
        Err("Title must be at least 5 characters.".to_string())
    );
    assert!(validator.validate_title(Some("Bread")).is_ok());
}
