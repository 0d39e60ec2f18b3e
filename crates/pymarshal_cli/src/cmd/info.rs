use std::path::PathBuf;

use pymarshal::marshal::Result;

use crate::cmd::util::{LimitArgs, load, value_shape};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub limits: LimitArgs,
}

/// Print file-level facts and a one-line shape summary per value.
pub fn run(args: Args) -> Result<()> {
	let Args { path, limits } = args;

	let file = load(&path)?;
	let options = limits.decode_options();

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("decoded_bytes: {}", file.bytes().len());

	let mut values = file.values(&options);
	let mut count = 0_usize;
	loop {
		let offset = values.offset();
		let Some(value) = values.next() else {
			break;
		};
		let value = value?;
		let (nodes, depth) = value_shape(&value);
		println!("value[{count}]: offset={offset} kind={} nodes={nodes} depth={depth}", value.kind());
		count += 1;
	}
	println!("value_count: {count}");

	Ok(())
}
