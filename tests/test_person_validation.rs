//! Integration tests for the public validation API.

use person_validation::{join_errors, Person, PersonInput, Validation, ValidationError, MAX_AGE};

// ============================================================================
// ACCUMULATION CONTRACT
// ============================================================================

#[test]
fn test_blank_name_only() {
    let result = Person::validate("", 24);
    assert_eq!(
        result,
        Validation::invalid(ValidationError::BlankName),
        "empty name should fail exactly the blank-name rule"
    );
}

#[test]
fn test_whitespace_name_counts_as_blank() {
    let result = Person::validate("  ", 24);
    assert_eq!(result, Validation::invalid(ValidationError::BlankName));
}

#[test]
fn test_negative_age_only() {
    let result = Person::validate("Alice", -1);
    assert_eq!(result, Validation::invalid(ValidationError::NegativeAge));
}

#[test]
fn test_excessive_age_only() {
    let result = Person::validate("Alice", 131);
    assert_eq!(result, Validation::invalid(ValidationError::MaxAgeExceeded));
}

#[test]
fn test_two_failures_reported_together_in_rule_order() {
    let result = Person::validate("", -1);
    let errors = result.errors().expect("result should be invalid");
    assert_eq!(
        errors.iter().copied().collect::<Vec<_>>(),
        vec![ValidationError::BlankName, ValidationError::NegativeAge],
        "name error must come before age error"
    );
}

#[test]
fn test_blank_name_with_excessive_age() {
    let result = Person::validate(" \t ", 500);
    let errors = result.errors().expect("result should be invalid");
    assert_eq!(
        errors.iter().copied().collect::<Vec<_>>(),
        vec![ValidationError::BlankName, ValidationError::MaxAgeExceeded]
    );
}

#[test]
fn test_age_rules_are_mutually_exclusive_in_practice() {
    // A single age cannot be both negative and above the max, so at most
    // one age error ever appears per attempt.
    for age in [-1000, -1, 0, 130, 131, 1000] {
        let result = Person::validate("", age);
        let errors = result.errors().expect("blank name always fails");
        assert!(errors.len() <= 2, "at most name error plus one age error");
    }
}

// ============================================================================
// VALID CONSTRUCTION
// ============================================================================

#[test]
fn test_valid_person() {
    match Person::validate("Alice", 30) {
        Validation::Valid(person) => {
            assert_eq!(person.name(), "Alice");
            assert_eq!(person.age(), 30);
        }
        Validation::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
    }
}

#[test]
fn test_boundary_ages() {
    assert!(Person::validate("Alice", 0).is_valid());
    assert!(Person::validate("Alice", MAX_AGE).is_valid());
    assert!(Person::validate("Alice", MAX_AGE + 1).is_invalid());
    assert!(Person::validate("Alice", -1).is_invalid());
}

#[test]
fn test_name_stored_untrimmed() {
    match Person::validate(" Alice ", 42) {
        Validation::Valid(person) => assert_eq!(person.name(), " Alice "),
        Validation::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
    }
}

#[test]
fn test_idempotent_results_compare_equal() {
    assert_eq!(Person::validate("Alice", 30), Person::validate("Alice", 30));
    assert_eq!(Person::validate("", 131), Person::validate("", 131));
}

// ============================================================================
// FAIL-FAST ENTRY POINT
// ============================================================================

#[test]
fn test_fail_fast_stops_at_first_rule() {
    // Both the name rule and an age rule fail; only the first is reported.
    assert_eq!(Person::new("", -1), Err(ValidationError::BlankName));
    assert_eq!(Person::new("", 500), Err(ValidationError::BlankName));
}

#[test]
fn test_fail_fast_and_accumulating_agree_on_validity() {
    let cases = [("Alice", 30), ("", 24), ("Alice", -1), ("Alice", 131)];
    for (name, age) in cases {
        assert_eq!(
            Person::new(name, age).is_ok(),
            Person::validate(name, age).is_valid(),
            "entry points disagree for ({:?}, {})",
            name,
            age
        );
    }
}

#[test]
fn test_fail_fast_error_works_with_question_mark() {
    fn build() -> Result<Person, Box<dyn std::error::Error>> {
        let person = Person::new("Alice", 30)?;
        Ok(person)
    }
    assert!(build().is_ok());
}

// ============================================================================
// ERROR PRESENTATION
// ============================================================================

#[test]
fn test_joined_error_messages() {
    let result = Person::validate("", -1);
    let errors = result.errors().expect("result should be invalid");
    assert_eq!(
        join_errors(errors),
        "Name cannot be empty or contain only white space, Age cannot be negative"
    );
}

#[test]
fn test_error_serializes_as_snake_case_tag() {
    let json = serde_json::to_string(&ValidationError::MaxAgeExceeded).unwrap();
    assert_eq!(json, "\"max_age_exceeded\"");
}

#[test]
fn test_input_deserializes_then_validates() {
    let input: PersonInput = serde_json::from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
    assert!(input.validate().is_valid());

    let input: PersonInput = serde_json::from_str(r#"{"name": "", "age": -1}"#).unwrap();
    let result = input.validate();
    let errors = result.errors().expect("result should be invalid");
    assert_eq!(errors.len(), 2);
}
