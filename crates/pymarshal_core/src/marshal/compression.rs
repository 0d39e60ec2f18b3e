use std::io::Read;

use crate::marshal::{DecodeError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed dumps.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw marshal stream.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and undo compression, returning `(mode, decoded_bytes)`.
///
/// Marshal streams carry no magic of their own, so anything that is not a
/// zstd frame is passed through untouched.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	decode_bytes_with_limit(raw, MAX_DECOMPRESSED_BYTES)
}

pub(crate) fn decode_bytes_with_limit(raw: Vec<u8>, limit: usize) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, limit)?;
		return Ok((Compression::Zstd, out));
	}
	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(DecodeError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes, decode_bytes_with_limit};
	use crate::marshal::DecodeError;

	#[test]
	fn raw_streams_pass_through() {
		let (mode, out) = decode_bytes(b"N".to_vec()).expect("raw passes");
		assert_eq!(mode, Compression::None);
		assert_eq!(out, b"N");
	}

	#[test]
	fn zstd_frames_are_inflated() {
		let packed = zstd::encode_all(&b"i\x05\x00\x00\x00"[..], 3).expect("compress fixture");
		let (mode, out) = decode_bytes(packed).expect("zstd inflates");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(out, b"i\x05\x00\x00\x00");
	}

	#[test]
	fn inflation_respects_limit() {
		let packed = zstd::encode_all(&[b'N'; 64][..], 3).expect("compress fixture");
		let err = decode_bytes_with_limit(packed, 16).expect_err("limit trips");
		assert!(matches!(err, DecodeError::DecompressedTooLarge { limit: 16 }));
	}
}
