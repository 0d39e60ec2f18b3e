use std::io::{ErrorKind, Read};

use thiserror::Error;

/// Failure reported by a [`ByteSource`].
#[derive(Debug, Error)]
pub enum SourceError {
	/// No more bytes are available.
	#[error("end of input")]
	Eof,
	/// The underlying reader failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}

/// Sequential, non-seekable supplier of encoded bytes.
///
/// The decoder only ever pulls bytes forward; it never peeks or seeks.
pub trait ByteSource {
	/// Read exactly one byte.
	fn read_byte(&mut self) -> Result<u8, SourceError>;

	/// Fill as much of `buf` as is available and return the number of bytes written.
	///
	/// A count smaller than `buf.len()` means the source ran dry. Callers decide
	/// whether that is an error.
	fn read_exact(&mut self, buf: &mut [u8]) -> Result<usize, SourceError>;

	/// Bytes left in the source, when the source knows.
	fn remaining(&self) -> Option<usize> {
		None
	}
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
	fn read_byte(&mut self) -> Result<u8, SourceError> {
		(**self).read_byte()
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
		(**self).read_exact(buf)
	}

	fn remaining(&self) -> Option<usize> {
		(**self).remaining()
	}
}

/// Simple bounded cursor over an immutable byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> SliceSource<'a> {
	/// Create a source at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return the unread tail of the slice.
	pub fn rest(&self) -> &'a [u8] {
		self.bytes.get(self.pos..).unwrap_or(&[])
	}

	/// Return true once every byte has been consumed.
	pub fn is_empty(&self) -> bool {
		self.pos >= self.bytes.len()
	}
}

impl ByteSource for SliceSource<'_> {
	fn read_byte(&mut self) -> Result<u8, SourceError> {
		let byte = *self.bytes.get(self.pos).ok_or(SourceError::Eof)?;
		self.pos += 1;
		Ok(byte)
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
		let rest = self.rest();
		let take = buf.len().min(rest.len());
		buf[..take].copy_from_slice(&rest[..take]);
		self.pos += take;
		Ok(take)
	}

	fn remaining(&self) -> Option<usize> {
		Some(self.bytes.len().saturating_sub(self.pos))
	}
}

/// Adapter that turns any [`Read`] into a [`ByteSource`].
///
/// Short reads from the inner reader are retried until the buffer is full or
/// the reader reports end of stream.
#[derive(Debug)]
pub struct ReaderSource<R> {
	inner: R,
	pos: u64,
}

impl<R: Read> ReaderSource<R> {
	/// Wrap a reader.
	pub fn new(inner: R) -> Self {
		Self { inner, pos: 0 }
	}

	/// Return the number of bytes pulled from the reader so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Unwrap the inner reader.
	pub fn into_inner(self) -> R {
		self.inner
	}
}

impl<R: Read> ByteSource for ReaderSource<R> {
	fn read_byte(&mut self) -> Result<u8, SourceError> {
		let mut byte = [0_u8; 1];
		match ByteSource::read_exact(self, &mut byte)? {
			1 => Ok(byte[0]),
			_ => Err(SourceError::Eof),
		}
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.inner.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(read) => filled += read,
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(err) => return Err(SourceError::Io(err)),
			}
		}
		self.pos += filled as u64;
		Ok(filled)
	}
}
