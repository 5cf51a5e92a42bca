use serde_json::json;
use zoo_model::{validate_animal, NewAnimal};

fn rex() -> serde_json::Value {
    json!({
        "name": "Rex",
        "species": "dog",
        "diet": "carnivore",
        "personalityTraits": ["fierce"]
    })
}

fn without(key: &str) -> serde_json::Value {
    let mut value = rex();
    value.as_object_mut().unwrap().remove(key);
    value
}

#[test]
fn accepts_well_formed_candidate() {
    assert!(validate_animal(&rex()));
}

#[test]
fn accepts_empty_trait_list() {
    let mut value = rex();
    value["personalityTraits"] = json!([]);
    assert!(validate_animal(&value));
}

#[test]
fn trait_element_types_are_not_checked() {
    let mut value = rex();
    value["personalityTraits"] = json!([1, true]);
    assert!(validate_animal(&value));
    // ...but such a candidate cannot become a typed record
    assert!(serde_json::from_value::<NewAnimal>(value).is_err());
}

#[test]
fn rejects_missing_fields() {
    for key in ["name", "species", "diet", "personalityTraits"] {
        assert!(!validate_animal(&without(key)), "missing {key} accepted");
    }
}

#[test]
fn rejects_non_string_fields() {
    for key in ["name", "species", "diet"] {
        let mut value = rex();
        value[key] = json!(42);
        assert!(!validate_animal(&value), "numeric {key} accepted");
    }
}

#[test]
fn rejects_empty_strings() {
    let mut value = rex();
    value["diet"] = json!("");
    assert!(!validate_animal(&value));
}

#[test]
fn rejects_scalar_traits() {
    let mut value = rex();
    value["personalityTraits"] = json!("fierce");
    assert!(!validate_animal(&value));
}

#[test]
fn rejects_non_objects() {
    assert!(!validate_animal(&json!(null)));
    assert!(!validate_animal(&json!(["Rex"])));
    assert!(!validate_animal(&json!("Rex")));
}
