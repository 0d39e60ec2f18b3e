use crate::marshal::decode::decode_from;
use crate::marshal::{DecodeOptions, Result, SliceSource, Value};

/// Iterator over consecutive top-level values packed into one buffer.
///
/// Yields values until the buffer is exhausted. After the first error the
/// iterator is fused, since the stream position can no longer be trusted.
pub struct ValueIter<'a> {
	source: SliceSource<'a>,
	opt: DecodeOptions,
	done: bool,
}

impl<'a> ValueIter<'a> {
	/// Iterate values in `bytes`, starting at offset 0.
	pub fn new(bytes: &'a [u8], opt: DecodeOptions) -> Self {
		Self {
			source: SliceSource::new(bytes),
			opt,
			done: false,
		}
	}

	/// Offset of the next value to be decoded.
	pub fn offset(&self) -> usize {
		self.source.pos()
	}
}

impl Iterator for ValueIter<'_> {
	type Item = Result<Value>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.source.is_empty() {
			self.done = true;
			return None;
		}

		let base = self.source.pos() as u64;
		match decode_from(&mut self.source, &self.opt, base) {
			Ok(value) => Some(Ok(value)),
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pymarshal_testkit::Wire;

	use super::ValueIter;
	use crate::marshal::{DecodeError, DecodeOptions, Value};

	#[test]
	fn yields_every_packed_value() {
		let input = Wire::new().int(1).null().list(1).string(b"x").build();
		let mut iter = ValueIter::new(&input, DecodeOptions::default());
		assert_eq!(iter.next().transpose().expect("first"), Some(Value::Int32(1)));
		assert_eq!(iter.offset(), 5);
		let rest: Vec<Value> = iter.collect::<Result<_, _>>().expect("rest decodes");
		assert_eq!(rest, vec![Value::Null, Value::Sequence(vec![Value::Bytes(b"x".to_vec())])]);
	}

	#[test]
	fn empty_buffer_yields_nothing() {
		assert_eq!(ValueIter::new(&[], DecodeOptions::default()).count(), 0);
	}

	#[test]
	fn stops_after_first_error_with_absolute_offset() {
		let input = Wire::new().int(1).raw(b"Q").int(2).build();
		let mut iter = ValueIter::new(&input, DecodeOptions::default());
		assert!(matches!(iter.next(), Some(Ok(Value::Int32(1)))));
		assert!(matches!(iter.next(), Some(Err(DecodeError::UnknownTag { at: 5, tag: b'Q' }))));
		assert!(iter.next().is_none());
	}
}
