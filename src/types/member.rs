//! Member lookup for `has` checks.

use serde_json::Value;

/// Normalizes a member name written in symbol notation (`:size`).
pub(crate) fn normalize(name: &str) -> String {
    name.trim_start_matches(':').to_string()
}

/// Retrieves `member` from `value`, or `None` if the value does not expose it.
///
/// Object keys take precedence over the built-in members, so an object with
/// a `"size"` key yields that key's value rather than its entry count.
pub(crate) fn lookup(value: &Value, member: &str) -> Option<Value> {
    if let Value::Object(map) = value {
        if let Some(found) = map.get(member) {
            return Some(found.clone());
        }
    }

    match (member, value) {
        ("size" | "length" | "len", Value::String(s)) => Some(Value::from(s.chars().count())),
        ("size" | "length" | "len", Value::Array(items)) => Some(Value::from(items.len())),
        ("size" | "length" | "len", Value::Object(map)) => Some(Value::from(map.len())),
        // An empty array still has `first`/`last`; their value is null.
        ("first", Value::Array(items)) => Some(items.first().cloned().unwrap_or(Value::Null)),
        ("last", Value::Array(items)) => Some(items.last().cloned().unwrap_or(Value::Null)),
        ("keys", Value::Object(map)) => Some(Value::Array(
            map.keys().map(|k| Value::String(k.clone())).collect(),
        )),
        ("abs", Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Some(match i.checked_abs() {
                    Some(abs) => Value::from(abs),
                    None => Value::from(i.unsigned_abs()),
                })
            } else if n.is_u64() {
                Some(value.clone())
            } else {
                n.as_f64().map(|f| Value::from(f.abs()))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_size_counts_chars() {
        assert_eq!(lookup(&json!("abc"), "size"), Some(json!(3)));
        assert_eq!(lookup(&json!("héllo"), "length"), Some(json!(5)));
        assert_eq!(lookup(&json!([1, 2]), "len"), Some(json!(2)));
    }

    #[test]
    fn test_object_keys_shadow_builtins() {
        let value = json!({"a": 1, "size": "large"});
        assert_eq!(lookup(&value, "size"), Some(json!("large")));
        assert_eq!(lookup(&value, "keys"), Some(json!(["a", "size"])));
    }

    #[test]
    fn test_missing_members() {
        assert_eq!(lookup(&json!("abc"), "nonexistent_member"), None);
        assert_eq!(lookup(&json!(5), "size"), None);
        assert_eq!(lookup(&json!("abc"), "first"), None);
    }

    #[test]
    fn test_first_and_last_of_empty_array_are_null() {
        assert_eq!(lookup(&json!([]), "first"), Some(Value::Null));
        assert_eq!(lookup(&json!([]), "last"), Some(Value::Null));
        assert_eq!(lookup(&json!([1, 2]), "last"), Some(json!(2)));
    }

    #[test]
    fn test_abs() {
        assert_eq!(lookup(&json!(-4), "abs"), Some(json!(4)));
        assert_eq!(lookup(&json!(-1.5), "abs"), Some(json!(1.5)));
    }

    #[test]
    fn test_normalize_strips_symbol_prefix() {
        assert_eq!(normalize(":size"), "size");
        assert_eq!(normalize("size"), "size");
    }
}
