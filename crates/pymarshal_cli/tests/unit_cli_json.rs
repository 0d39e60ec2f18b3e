#![allow(missing_docs)]

use std::process::{Command, Output};

use pymarshal_testkit::{fixture_path, stdout_json};

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_pymarshal")).args(args).output().expect("command executes")
}

#[test]
fn show_json_renders_record_fixture() {
	let path = fixture_path("record.marshal");
	let json = stdout_json(&run(&["show", path.to_str().expect("utf-8 path"), "--json"]));

	assert_eq!(json["compression"], "none");
	let pairs = json["values"][0].as_array().expect("mapping renders as pair array");
	assert_eq!(pairs[0]["key"], "name");
	assert_eq!(pairs[0]["value"], "widget");
	assert_eq!(pairs[1]["value"], 42);
	assert_eq!(pairs[2]["value"], 0.75);
	assert_eq!(pairs[3]["value"], serde_json::json!([0, 1, 2, 255]));
	assert!(pairs[4]["value"].is_null());
}

#[test]
fn show_all_decodes_every_packed_value() {
	let path = fixture_path("stream.marshal");
	let json = stdout_json(&run(&["show", path.to_str().expect("utf-8 path"), "--all", "--json"]));
	assert_eq!(json["values"], serde_json::json!([1, "two", 3.0]));
}

#[test]
fn show_without_all_rejects_packed_stream() {
	let path = fixture_path("stream.marshal");
	let output = run(&["show", path.to_str().expect("utf-8 path")]);
	assert!(!output.status.success(), "trailing values should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("trailing bytes"));
}

#[test]
fn info_summarizes_values() {
	let path = fixture_path("stream.marshal");
	let output = run(&["info", path.to_str().expect("utf-8 path")]);
	assert!(output.status.success(), "info should succeed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("value[1]: offset=5 kind=bytes nodes=1 depth=0"), "{stdout}");
	assert!(stdout.contains("value_count: 3"), "{stdout}");
}

#[test]
fn hex_json_reports_consumed_and_unread() {
	let json = stdout_json(&run(&["hex", "5b02000000 6901000000 6902000000 4e", "--json"]));
	assert_eq!(json["consumed"], 15);
	assert_eq!(json["unread"], 1);
	assert_eq!(json["kind"], "sequence");
	assert_eq!(json["value"], serde_json::json!([1, 2]));
}

#[test]
fn hex_reports_decode_errors() {
	let output = run(&["hex", "5b01000000"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: truncated input"));
}

#[test]
fn max_depth_flag_limits_nesting() {
	let output = run(&["hex", "5b010000005b00000000", "--max-depth", "2"]);
	assert!(output.status.success(), "two levels fit in max-depth 2");

	let output = run(&["hex", "5b010000005b00000000", "--max-depth", "1"]);
	assert!(String::from_utf8_lossy(&output.stderr).contains("recursion limit exceeded (max=1)"));
}
