use pymarshal::marshal::{Result, SliceSource, decode_with_options};

use crate::cmd::json::value_to_json_value;
use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{LimitArgs, emit_json};

/// Raw bytes parsed from a hex command-line argument.
#[derive(Debug, Clone)]
pub struct HexBytes(pub Vec<u8>);

#[derive(clap::Args)]
pub struct Args {
	/// Encoded value as hex digits; whitespace and a leading `0x` are ignored.
	#[arg(value_parser = parse_hex)]
	pub bytes: HexBytes,
	/// Emit JSON instead of indented text.
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub limits: LimitArgs,
}

/// Decode one value from inline hex and report how much input it consumed.
pub fn run(args: Args) -> Result<()> {
	let Args {
		bytes: HexBytes(bytes),
		json,
		limits,
	} = args;

	let mut source = SliceSource::new(&bytes);
	let value = decode_with_options(&mut source, &limits.decode_options())?;
	let consumed = source.pos();
	let unread = source.rest().len();

	if json {
		emit_json(&HexJson {
			consumed,
			unread,
			kind: value.kind(),
			value: value_to_json_value(&value),
		});
		return Ok(());
	}

	println!("consumed: {consumed}");
	println!("unread: {unread}");
	println!("kind: {}", value.kind());
	print_value(&value, PrintOptions::default());
	Ok(())
}

fn parse_hex(input: &str) -> std::result::Result<HexBytes, String> {
	let digits: Vec<u8> = input.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();
	let digits = digits.strip_prefix(b"0x").unwrap_or(&digits);
	hex::decode(digits).map(HexBytes).map_err(|err| err.to_string())
}

#[derive(serde::Serialize)]
struct HexJson {
	consumed: usize,
	unread: usize,
	kind: &'static str,
	value: serde_json::Value,
}

#[cfg(test)]
mod tests {
	use super::parse_hex;

	#[test]
	fn parses_spaced_and_prefixed_hex() {
		assert_eq!(parse_hex("69 05 00 00 00").expect("hex parses").0, vec![0x69, 5, 0, 0, 0]);
		assert_eq!(parse_hex("0x4E").expect("hex parses").0, vec![b'N']);
		assert!(parse_hex("").expect("empty parses").0.is_empty());
	}

	#[test]
	fn rejects_malformed_hex() {
		assert!(parse_hex("690").is_err());
		assert!(parse_hex("zz").is_err());
	}

	#[test]
	fn malformed_hex_reports_the_decoder_message() {
		let err = parse_hex("0x4e 0g").expect_err("bad digit");
		assert!(err.contains("'g'"), "unexpected message: {err}");
		assert!(parse_hex("0x").expect("bare prefix parses").0.is_empty());
	}
}
