use thiserror::Error;

use crate::marshal::SourceError;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while loading and decoding marshal data.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// The byte source ended or failed before a required byte could be read.
	#[error("source exhausted at offset {at}: {source}")]
	SourceExhausted {
		/// Byte offset of the failed read.
		at: u64,
		/// Underlying source failure.
		#[source]
		source: SourceError,
	},
	/// A fixed-size field or declared payload had fewer bytes than required.
	#[error("truncated input at offset {at}, need {need} bytes, got {got}")]
	TruncatedInput {
		/// Byte offset where the read began.
		at: u64,
		/// Requested bytes.
		need: usize,
		/// Bytes actually delivered.
		got: usize,
	},
	/// Declared string length or sequence count is negative or above the configured maximum.
	#[error("invalid length {len} at offset {at} (max={max})")]
	InvalidLength {
		/// Byte offset of the length field.
		at: u64,
		/// Declared signed length.
		len: i32,
		/// Configured ceiling for this field.
		max: usize,
	},
	/// Tag byte is not part of the wire format.
	#[error("unknown tag 0x{tag:02x} at offset {at}")]
	UnknownTag {
		/// Byte offset of the tag.
		at: u64,
		/// Offending tag byte.
		tag: u8,
	},
	/// Container nesting exceeded the configured depth.
	#[error("recursion limit exceeded (max={max_depth})")]
	RecursionLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Filesystem or stream IO failure while loading a dump.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decompression output exceeded the configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Single-value decode left unread bytes behind.
	#[error("trailing bytes after value at offset {at}: {remaining} unread")]
	TrailingBytes {
		/// Offset just past the decoded value.
		at: u64,
		/// Bytes left in the input.
		remaining: usize,
	},
}
