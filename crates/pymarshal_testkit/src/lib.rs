//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::Output;

use pymarshal::marshal::Value;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Assert a command succeeded and parse its stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Byte builder for hand-written wire fixtures.
///
/// Container helpers only write the header; callers append the elements
/// (and, for dicts, the stop tag) themselves so malformed input is easy to
/// express.
#[derive(Debug, Default, Clone)]
pub struct Wire {
	bytes: Vec<u8>,
}

impl Wire {
	/// Start an empty buffer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append a bare little-endian `i32` without a tag.
	pub fn le_i32(mut self, value: i32) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// `N`
	pub fn null(self) -> Self {
		self.raw(b"N")
	}

	/// `i` + value.
	pub fn int(self, value: i32) -> Self {
		self.raw(b"i").le_i32(value)
	}

	/// `c` + value.
	pub fn int2(self, value: i32) -> Self {
		self.raw(b"c").le_i32(value)
	}

	/// `g` + value.
	pub fn float(mut self, value: f64) -> Self {
		self.bytes.push(b'g');
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// `s` + length + payload.
	pub fn string(self, payload: &[u8]) -> Self {
		self.string_tagged(b's', payload)
	}

	/// String payload under an explicit tag (`s`, `u` or `t`).
	pub fn string_tagged(self, tag: u8, payload: &[u8]) -> Self {
		let len = i32::try_from(payload.len()).expect("fixture payload fits i32");
		self.raw(&[tag]).le_i32(len).raw(payload)
	}

	/// `[` + count.
	pub fn list(self, count: i32) -> Self {
		self.raw(b"[").le_i32(count)
	}

	/// `(` + count.
	pub fn tuple(self, count: i32) -> Self {
		self.raw(b"(").le_i32(count)
	}

	/// `{`
	pub fn dict(self) -> Self {
		self.raw(b"{")
	}

	/// `0`, the dict terminator.
	pub fn stop(self) -> Self {
		self.raw(b"0")
	}

	/// Finish and return the encoded bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}

/// Encode a value tree with the canonical tags (`i`, `g`, `s`, `[`, `{`).
pub fn encode(value: &Value) -> Vec<u8> {
	let mut out = Vec::new();
	encode_into(value, &mut out);
	out
}

fn encode_into(value: &Value, out: &mut Vec<u8>) {
	match value {
		Value::Null => out.push(b'N'),
		Value::Int32(v) => {
			out.push(b'i');
			out.extend_from_slice(&v.to_le_bytes());
		}
		Value::Float64(v) => {
			out.push(b'g');
			out.extend_from_slice(&v.to_le_bytes());
		}
		Value::Bytes(v) => {
			out.push(b's');
			out.extend_from_slice(&len_i32(v.len()).to_le_bytes());
			out.extend_from_slice(v);
		}
		Value::Sequence(items) => {
			out.push(b'[');
			out.extend_from_slice(&len_i32(items.len()).to_le_bytes());
			for item in items {
				encode_into(item, out);
			}
		}
		Value::Mapping(pairs) => {
			out.push(b'{');
			for (key, value) in pairs {
				encode_into(key, out);
				encode_into(value, out);
			}
			out.push(b'0');
		}
	}
}

fn len_i32(len: usize) -> i32 {
	i32::try_from(len).expect("fixture length fits i32")
}
