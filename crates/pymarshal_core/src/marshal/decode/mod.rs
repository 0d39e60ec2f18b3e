use crate::marshal::{ByteSource, DecodeError, Result, Tag, Value};

/// Upper bound on sequence slots reserved before any element is decoded.
const SEQUENCE_PREALLOC_CAP: usize = 1024;
/// Byte payloads of unknown-length sources are pulled in steps of this size.
const PAYLOAD_CHUNK: usize = 64 * 1024;

/// Runtime limits for decoding untrusted input.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Maximum declared byte-string length.
	pub max_bytes_len: usize,
	/// Maximum declared tuple/list element count.
	pub max_sequence_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 256,
			max_bytes_len: 64 * 1024 * 1024,
			max_sequence_len: 16 * 1024 * 1024,
		}
	}
}

impl DecodeOptions {
	/// Preset tuned for small, untrusted payloads.
	pub fn strict() -> Self {
		Self {
			max_depth: 64,
			max_bytes_len: 1024 * 1024,
			max_sequence_len: 64 * 1024,
		}
	}
}

/// Decode one value from `source` using [`DecodeOptions::default`].
///
/// Reads the leading tag byte, then the value it introduces, including every
/// nested element. On success the source is left just past the value.
pub fn decode<S: ByteSource + ?Sized>(source: &mut S) -> Result<Value> {
	decode_with_options(source, &DecodeOptions::default())
}

/// Decode one value from `source` with explicit limits.
///
/// Error offsets are counted from the source position at the time of the call.
pub fn decode_with_options<S: ByteSource + ?Sized>(source: &mut S, opt: &DecodeOptions) -> Result<Value> {
	decode_from(source, opt, 0)
}

/// Decode one value, reporting error offsets relative to `base`.
pub(crate) fn decode_from<S: ByteSource + ?Sized>(source: &mut S, opt: &DecodeOptions, base: u64) -> Result<Value> {
	let mut reader = Reader { source, pos: base };
	let tag = reader.read_tag()?;
	decode_value(tag, &mut reader, opt, 0)
}

/// Offset-tracking view over a byte source.
struct Reader<'s, S: ?Sized> {
	source: &'s mut S,
	pos: u64,
}

impl<S: ByteSource + ?Sized> Reader<'_, S> {
	fn read_tag(&mut self) -> Result<u8> {
		let at = self.pos;
		let tag = self.source.read_byte().map_err(|source| DecodeError::SourceExhausted { at, source })?;
		self.pos += 1;
		Ok(tag)
	}

	fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
		let at = self.pos;
		let got = self.source.read_exact(buf).map_err(|source| DecodeError::SourceExhausted { at, source })?;
		self.pos += got as u64;
		if got < buf.len() {
			return Err(DecodeError::TruncatedInput { at, need: buf.len(), got });
		}
		Ok(())
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0_u8; N];
		self.fill(&mut buf)?;
		Ok(buf)
	}

	fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	fn read_f64_le(&mut self) -> Result<f64> {
		Ok(f64::from_le_bytes(self.read_array()?))
	}

	/// Read a signed 32-bit length and validate it against `max`.
	fn read_len(&mut self, max: usize) -> Result<usize> {
		let at = self.pos;
		let len = self.read_i32_le()?;
		match usize::try_from(len) {
			Ok(n) if n <= max => Ok(n),
			_ => Err(DecodeError::InvalidLength { at, len, max }),
		}
	}

	/// Fail early when the source knows it cannot supply `need` more bytes.
	fn ensure_available(&self, need: usize) -> Result<()> {
		match self.source.remaining() {
			Some(rem) if need > rem => Err(DecodeError::TruncatedInput {
				at: self.pos,
				need,
				got: rem,
			}),
			_ => Ok(()),
		}
	}

	fn read_payload(&mut self, len: usize) -> Result<Vec<u8>> {
		self.ensure_available(len)?;

		let at = self.pos;
		let mut out = Vec::with_capacity(len.min(PAYLOAD_CHUNK));
		while out.len() < len {
			let start = out.len();
			let step = (len - start).min(PAYLOAD_CHUNK);
			out.resize(start + step, 0);

			let chunk_at = self.pos;
			let got = self
				.source
				.read_exact(&mut out[start..])
				.map_err(|source| DecodeError::SourceExhausted { at: chunk_at, source })?;
			self.pos += got as u64;
			if got < step {
				return Err(DecodeError::TruncatedInput {
					at,
					need: len,
					got: start + got,
				});
			}
		}
		Ok(out)
	}
}

/// Dispatch on an already-consumed tag byte.
fn decode_value<S: ByteSource + ?Sized>(tag: u8, reader: &mut Reader<'_, S>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	// The tag is always the byte just before the current position.
	let at = reader.pos.saturating_sub(1);
	let Some(kind) = Tag::from_byte(tag) else {
		return Err(DecodeError::UnknownTag { at, tag });
	};

	match kind {
		Tag::Null => Ok(Value::Null),
		Tag::Int | Tag::Int2 => Ok(Value::Int32(reader.read_i32_le()?)),
		Tag::Float => Ok(Value::Float64(reader.read_f64_le()?)),
		Tag::String | Tag::Unicode | Tag::TString => read_bytes(reader, opt),
		Tag::Tuple | Tag::List => read_sequence(reader, opt, depth),
		Tag::Dict => read_mapping(reader, opt, depth),
		// Only meaningful in key position inside a mapping.
		Tag::Stop => Err(DecodeError::UnknownTag { at, tag }),
	}
}

fn read_bytes<S: ByteSource + ?Sized>(reader: &mut Reader<'_, S>, opt: &DecodeOptions) -> Result<Value> {
	let len = reader.read_len(opt.max_bytes_len)?;
	Ok(Value::Bytes(reader.read_payload(len)?))
}

fn read_sequence<S: ByteSource + ?Sized>(reader: &mut Reader<'_, S>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	enter_container(opt, depth)?;

	let count = reader.read_len(opt.max_sequence_len)?;
	// Every element needs at least its tag byte.
	reader.ensure_available(count)?;

	let mut items = Vec::with_capacity(count.min(SEQUENCE_PREALLOC_CAP));
	for _ in 0..count {
		let tag = reader.read_tag()?;
		items.push(decode_value(tag, reader, opt, depth + 1)?);
	}
	Ok(Value::Sequence(items))
}

fn read_mapping<S: ByteSource + ?Sized>(reader: &mut Reader<'_, S>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	enter_container(opt, depth)?;

	let stop = Tag::Stop.as_byte();
	let mut pairs = Vec::new();
	loop {
		let tag = reader.read_tag()?;
		if tag == stop {
			return Ok(Value::Mapping(pairs));
		}
		let key = decode_value(tag, reader, opt, depth + 1)?;

		let tag = reader.read_tag()?;
		let value = decode_value(tag, reader, opt, depth + 1)?;
		pairs.push((key, value));
	}
}

fn enter_container(opt: &DecodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(DecodeError::RecursionLimitExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}
