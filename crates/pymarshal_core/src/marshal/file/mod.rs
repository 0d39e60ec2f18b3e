use std::fs;
use std::path::Path;

use crate::marshal::compression::decode_bytes;
use crate::marshal::{Compression, DecodeError, DecodeOptions, Result, SliceSource, Value, ValueIter, decode_with_options};

/// In-memory marshal dump, inflated if it was zstd-compressed.
pub struct MarshalFile {
	/// Compression detected on disk.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl MarshalFile {
	/// Read a dump from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let raw_len = raw.len();
		let file = Self::from_bytes(raw)?;
		log::debug!(
			"loaded {}: {} bytes on disk, {} decoded, compression={}",
			path.display(),
			raw_len,
			file.bytes.len(),
			file.compression.as_str()
		);
		Ok(file)
	}

	/// Wrap bytes already in memory, inflating zstd frames.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		Ok(Self { compression, bytes })
	}

	/// Decoded (decompressed) stream bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the single value the dump holds.
	///
	/// Bytes left over after the value are an error; use [`MarshalFile::values`]
	/// for dumps that pack several values back to back.
	pub fn decode(&self, opt: &DecodeOptions) -> Result<Value> {
		let mut source = SliceSource::new(&self.bytes);
		let value = decode_with_options(&mut source, opt)?;
		if !source.is_empty() {
			return Err(DecodeError::TrailingBytes {
				at: source.pos() as u64,
				remaining: source.rest().len(),
			});
		}
		Ok(value)
	}

	/// Iterate every top-level value in the dump.
	pub fn values(&self, opt: &DecodeOptions) -> ValueIter<'_> {
		ValueIter::new(&self.bytes, opt.clone())
	}
}
