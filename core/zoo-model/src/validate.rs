use serde_json::Value;

/// Shape check for a submitted candidate.
///
/// `name`, `species` and `diet` must be non-empty strings and
/// `personalityTraits` must be an array. Trait element types are not
/// inspected here.
pub fn validate_animal(candidate: &Value) -> bool {
    let non_empty_str = |key: &str| {
        candidate
            .get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };

    non_empty_str("name")
        && non_empty_str("species")
        && non_empty_str("diet")
        && candidate.get("personalityTraits").is_some_and(Value::is_array)
}
