/// Decoded runtime value.
///
/// Tuples and lists share [`Value::Sequence`]; the three string tags share
/// [`Value::Bytes`]. Mappings are ordered pair lists so any value can act as a
/// key and duplicate keys survive.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Null marker.
	Null,
	/// 32-bit signed integer.
	Int32(i32),
	/// IEEE-754 double.
	Float64(f64),
	/// Raw byte string; charset interpretation is left to callers.
	Bytes(Vec<u8>),
	/// Ordered elements of a tuple or list.
	Sequence(Vec<Value>),
	/// Key/value pairs in wire order.
	Mapping(Vec<(Value, Value)>),
}

impl Value {
	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Int32(_) => "int32",
			Self::Float64(_) => "float64",
			Self::Bytes(_) => "bytes",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
		}
	}

	/// Return true for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Integer payload, if any.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Self::Int32(v) => Some(*v),
			_ => None,
		}
	}

	/// Float payload, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float64(v) => Some(*v),
			_ => None,
		}
	}

	/// Byte-string payload, if any.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(v) => Some(v.as_slice()),
			_ => None,
		}
	}

	/// Sequence elements, if any.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Sequence(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Mapping pairs, if any.
	pub fn as_mapping(&self) -> Option<&[(Value, Value)]> {
		match self {
			Self::Mapping(pairs) => Some(pairs.as_slice()),
			_ => None,
		}
	}

	/// Look up the first pair whose key equals `key`.
	///
	/// Returns `None` for non-mapping values. Callers wanting last-write-wins
	/// semantics should scan [`Value::as_mapping`] themselves.
	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.as_mapping()?.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}
}
