use std::collections::BTreeMap;

use crate::tasks::result::{TaskField, ValidationResult};

#[test]
fn valid_iff_no_errors() {
    let result = ValidationResult::from_errors(BTreeMap::new());
    assert!(result.is_valid());
    assert!(result.errors().is_empty());

    let mut errors = BTreeMap::new();
    errors.insert(TaskField::Deadline, "late".to_string());
    let result = ValidationResult::from_errors(errors);
    assert!(!result.is_valid());
    assert_eq!(result.error(TaskField::Deadline), Some("late"));
    assert_eq!(result.error(TaskField::Title), None);
}

#[test]
fn errors_follow_form_order() {
    let mut errors = BTreeMap::new();
    errors.insert(TaskField::Deadline, "c".to_string());
    errors.insert(TaskField::Title, "a".to_string());
    errors.insert(TaskField::Description, "b".to_string());

    let fields: Vec<_> = ValidationResult::from_errors(errors)
        .into_errors()
        .into_keys()
        .collect();
    assert_eq!(fields, TaskField::ALL.to_vec());
}

#[test]
fn field_names() {
    let names: Vec<_> = TaskField::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["title", "description", "deadline"]);
}

#[cfg(feature = "serde")]
#[test]
fn serialize_result_shape() {
    let mut errors = BTreeMap::new();
    errors.insert(TaskField::Title, "Title must be at least 3 characters.".to_string());
    let json = serde_json::to_value(ValidationResult::from_errors(errors)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "isValid": false,
            "errors": { "title": "Title must be at least 3 characters." }
        })
    );

    let json = serde_json::to_value(ValidationResult::from_errors(BTreeMap::new())).unwrap();
    assert_eq!(json, serde_json::json!({ "isValid": true, "errors": {} }));
}
