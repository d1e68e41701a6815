//! Field lookups over template collections.

use serde_json::Value as JsonValue;

/// First element of `collection` whose `field` equals `value`.
///
/// Equality is typed (see [`values_match`]): `"1"` never matches `1`.
pub fn find_by_field<'a>(
    collection: &'a [JsonValue],
    field: &str,
    value: &JsonValue,
) -> Option<&'a JsonValue> {
    collection
        .iter()
        .find(|item| item.get(field).is_some_and(|candidate| values_match(candidate, value)))
}

/// Equality that compares within a JSON type only.
///
/// Numbers compare by numeric value (so `1` equals `1.0`); strings, booleans
/// and null compare exactly; arrays and objects compare structurally with the
/// same rules.
pub fn values_match(left: &JsonValue, right: &JsonValue) -> bool {
    match (left, right) {
        (JsonValue::Number(a), JsonValue::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(a), Some(b)) => a == b,
                _ => a.as_f64() == b.as_f64(),
            },
        },
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_match(a, b))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| values_match(a, b)))
        }
        (JsonValue::String(a), JsonValue::String(b)) => a == b,
        (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
        (JsonValue::Null, JsonValue::Null) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responses() -> Vec<JsonValue> {
        vec![
            json!({"statusCode": "200", "payloadType": "Pet"}),
            json!({"statusCode": 201, "payloadType": "Created"}),
            json!({"statusCode": "201", "payloadType": "Duplicate"}),
        ]
    }

    #[test]
    fn test_find_first_match() {
        let items = responses();
        let found = find_by_field(&items, "statusCode", &json!("201")).unwrap();
        assert_eq!(found["payloadType"], "Duplicate");
    }

    #[test]
    fn test_no_cross_type_match() {
        let items = responses();
        let found = find_by_field(&items, "statusCode", &json!(201)).unwrap();
        assert_eq!(found["payloadType"], "Created");
        assert!(find_by_field(&items, "statusCode", &json!(200)).is_none());
    }

    #[test]
    fn test_missing_field_or_value() {
        let items = responses();
        assert!(find_by_field(&items, "missing", &json!("200")).is_none());
        assert!(find_by_field(&items, "statusCode", &json!("404")).is_none());
        assert!(find_by_field(&[], "statusCode", &json!("200")).is_none());
    }

    #[test]
    fn test_values_match_numbers() {
        assert!(values_match(&json!(1), &json!(1.0)));
        assert!(values_match(&json!(-3), &json!(-3)));
        assert!(!values_match(&json!(1), &json!(2)));
        assert!(!values_match(&json!(1), &json!("1")));
        assert!(!values_match(&json!(0), &json!(false)));
        assert!(!values_match(&json!(null), &json!(0)));
    }

    #[test]
    fn test_values_match_nested() {
        assert!(values_match(
            &json!({"a": [1, "x"], "b": null}),
            &json!({"b": null, "a": [1.0, "x"]})
        ));
        assert!(!values_match(&json!([1, 2]), &json!([1])));
        assert!(!values_match(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }
}
