use std::path::PathBuf;

use pymarshal::marshal::{Result, Value};

use crate::cmd::json::value_to_json_value;
use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{LimitArgs, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit JSON instead of indented text.
	#[arg(long)]
	pub json: bool,
	/// Decode every value packed in the file instead of exactly one.
	#[arg(long)]
	pub all: bool,
	/// Maximum sequence elements printed per container.
	#[arg(long, default_value_t = PrintOptions::default().max_sequence_items)]
	pub max_items: usize,
	#[command(flatten)]
	pub limits: LimitArgs,
}

/// Decode a dump and print its value tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		json,
		all,
		max_items,
		limits,
	} = args;

	let options = limits.decode_options();
	let file = load(&path)?;
	let values: Vec<Value> = if all {
		file.values(&options).collect::<Result<_>>()?
	} else {
		vec![file.decode(&options)?]
	};
	log::debug!("decoded {} value(s) from {}", values.len(), path.display());

	if json {
		emit_json(&ShowJson {
			path: path.display().to_string(),
			compression: file.compression.as_str(),
			values: values.iter().map(value_to_json_value).collect(),
		});
		return Ok(());
	}

	let print_options = PrintOptions {
		max_sequence_items: max_items,
		..PrintOptions::default()
	};
	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	for (index, value) in values.iter().enumerate() {
		println!("value[{index}]: {}", value.kind());
		print_value(value, print_options);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	compression: &'static str,
	values: Vec<serde_json::Value>,
}
