use std::fmt::Write;

use pymarshal::marshal::Value;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of pairs printed for a single mapping.
	pub max_pairs_per_mapping: usize,
	/// Maximum number of characters (or bytes) printed for byte strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for sequences.
	pub max_sequence_items: usize,
	/// Maximum recursive print depth for nested containers.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_pairs_per_mapping: 80,
			max_string_len: 200,
			max_sequence_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, options: PrintOptions) {
	print!("{}", render_value(value, options));
}

/// Render one decoded value tree as indented text, one node per line.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	render_into(&mut out, value, 0, 0, options);
	out
}

fn render_into(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Sequence(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_sequence_items) {
				render_into(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_sequence_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_sequence_items);
			}
			let _ = writeln!(out, "{pad}]");
		}
		Value::Mapping(pairs) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{{ ... {} pairs }}", pairs.len());
				return;
			}
			let _ = writeln!(out, "{pad}{{");
			for (key, item) in pairs.iter().take(options.max_pairs_per_mapping) {
				let _ = write!(out, "{pad}  {} = ", render_inline(key, options));
				if is_container(item) {
					let _ = writeln!(out);
					render_into(out, item, indent + 4, depth + 1, options);
				} else {
					let _ = writeln!(out, "{}", render_inline(item, options));
				}
			}
			if pairs.len() > options.max_pairs_per_mapping {
				let _ = writeln!(out, "{pad}  ... {} more pairs", pairs.len() - options.max_pairs_per_mapping);
			}
			let _ = writeln!(out, "{pad}}}");
		}
		scalar => {
			let _ = writeln!(out, "{pad}{}", render_inline(scalar, options));
		}
	}
}

/// Single-line rendering used for mapping keys and scalars.
fn render_inline(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Int32(v) => v.to_string(),
		Value::Float64(v) => format!("{v:?}"),
		Value::Bytes(v) => render_bytes(v, options.max_string_len),
		Value::Sequence(items) => format!("[{} items]", items.len()),
		Value::Mapping(pairs) => format!("{{{} pairs}}", pairs.len()),
	}
}

fn render_bytes(bytes: &[u8], max_len: usize) -> String {
	match std::str::from_utf8(bytes) {
		Ok(text) => format!("{:?}", truncate(text, max_len)),
		Err(_) => {
			let shown = &bytes[..bytes.len().min(max_len)];
			let suffix = if shown.len() < bytes.len() { "..." } else { "" };
			format!("b\"{}\"{suffix}", shown.escape_ascii())
		}
	}
}

fn is_container(value: &Value) -> bool {
	matches!(value, Value::Sequence(_) | Value::Mapping(_))
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
