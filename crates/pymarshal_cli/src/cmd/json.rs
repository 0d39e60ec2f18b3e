use pymarshal::marshal::Value;
use serde_json::{Value as JsonValue, json};

/// Convert a decoded value tree to JSON.
///
/// Byte strings become JSON strings when they are valid UTF-8 and byte arrays
/// otherwise. Mappings become arrays of `{"key", "value"}` objects so
/// non-string keys, wire order and duplicates all survive. Non-finite floats
/// become the strings `"nan"`, `"inf"` and `"-inf"` since JSON has no literal
/// for them.
pub fn value_to_json_value(value: &Value) -> JsonValue {
	match value {
		Value::Null => JsonValue::Null,
		Value::Int32(v) => json!(v),
		Value::Float64(v) => float_to_json(*v),
		Value::Bytes(v) => match std::str::from_utf8(v) {
			Ok(text) => json!(text),
			Err(_) => JsonValue::Array(v.iter().map(|byte| json!(byte)).collect()),
		},
		Value::Sequence(items) => JsonValue::Array(items.iter().map(value_to_json_value).collect()),
		Value::Mapping(pairs) => JsonValue::Array(
			pairs
				.iter()
				.map(|(key, value)| json!({ "key": value_to_json_value(key), "value": value_to_json_value(value) }))
				.collect(),
		),
	}
}

fn float_to_json(v: f64) -> JsonValue {
	if v.is_finite() {
		json!(v)
	} else if v.is_nan() {
		json!("nan")
	} else if v > 0.0 {
		json!("inf")
	} else {
		json!("-inf")
	}
}
