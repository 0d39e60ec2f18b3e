use std::path::Path;

use pymarshal::marshal::{DecodeOptions, MarshalFile, Result, Value};

/// Decode limit flags shared by every decoding command.
#[derive(clap::Args, Debug, Clone)]
pub struct LimitArgs {
	/// Use conservative limits for untrusted input.
	#[arg(long)]
	pub strict: bool,
	/// Override the maximum container nesting depth.
	#[arg(long)]
	pub max_depth: Option<u32>,
}

impl LimitArgs {
	/// Resolve flags into decoder options.
	pub fn decode_options(&self) -> DecodeOptions {
		let mut options = if self.strict { DecodeOptions::strict() } else { DecodeOptions::default() };
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		options
	}
}

/// Open a dump from disk.
pub fn load(path: &Path) -> Result<MarshalFile> {
	log::debug!("opening {}", path.display());
	MarshalFile::open(path)
}

/// Print a serializable payload as pretty JSON on stdout.
pub fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Count nodes and container nesting depth of a value tree.
pub fn value_shape(value: &Value) -> (usize, u32) {
	match value {
		Value::Sequence(items) => items.iter().map(value_shape).fold((1, 1), add_child),
		Value::Mapping(pairs) => pairs
			.iter()
			.flat_map(|(key, value)| [value_shape(key), value_shape(value)])
			.fold((1, 1), add_child),
		_ => (1, 0),
	}
}

fn add_child((nodes, depth): (usize, u32), (child_nodes, child_depth): (usize, u32)) -> (usize, u32) {
	(nodes + child_nodes, depth.max(child_depth + 1))
}
