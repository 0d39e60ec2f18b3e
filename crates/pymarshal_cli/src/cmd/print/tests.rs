use pymarshal::marshal::Value;

use super::{PrintOptions, render_value};

fn text(s: &str) -> Value {
	Value::Bytes(s.as_bytes().to_vec())
}

#[test]
fn scalars_render_on_one_line() {
	let options = PrintOptions::default();
	assert_eq!(render_value(&Value::Null, options), "null\n");
	assert_eq!(render_value(&Value::Int32(-7), options), "-7\n");
	assert_eq!(render_value(&Value::Float64(3.0), options), "3.0\n");
	assert_eq!(render_value(&text("hi \"there\""), options), "\"hi \\\"there\\\"\"\n");
	assert_eq!(render_value(&Value::Bytes(vec![0, b'a', 0xff]), options), "b\"\\x00a\\xff\"\n");
}

#[test]
fn mapping_renders_pairs_in_wire_order() {
	let value = Value::Mapping(vec![
		(text("b"), Value::Int32(1)),
		(text("a"), Value::Sequence(vec![Value::Null])),
		(text("b"), Value::Int32(2)),
	]);
	let rendered = render_value(&value, PrintOptions::default());
	assert_eq!(rendered, "{\n  \"b\" = 1\n  \"a\" = \n    [\n      null\n    ]\n  \"b\" = 2\n}\n");
}

#[test]
fn long_sequences_and_strings_are_truncated() {
	let options = PrintOptions {
		max_sequence_items: 2,
		max_string_len: 3,
		..PrintOptions::default()
	};
	let value = Value::Sequence(vec![text("abcdef"), Value::Int32(1), Value::Int32(2), Value::Int32(3)]);
	let rendered = render_value(&value, options);
	assert_eq!(rendered, "[\n  \"abc...\"\n  1\n  ... 2 more\n]\n");
}

#[test]
fn depth_limit_collapses_nested_containers() {
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let value = Value::Sequence(vec![Value::Sequence(vec![Value::Null; 3]), Value::Mapping(Vec::new())]);
	let rendered = render_value(&value, options);
	assert_eq!(rendered, "[\n  [... 3 items]\n  { ... 0 pairs }\n]\n");
}

#[test]
fn container_keys_render_as_summaries() {
	let value = Value::Mapping(vec![(Value::Sequence(vec![Value::Null, Value::Null]), Value::Int32(0))]);
	let rendered = render_value(&value, PrintOptions::default());
	assert_eq!(rendered, "{\n  [2 items] = 0\n}\n");
}
