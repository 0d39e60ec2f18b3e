/// One-byte wire discriminator at the start of every encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
	/// `N`: null, no payload.
	Null,
	/// `i`: 32-bit little-endian signed integer.
	Int,
	/// `c`: older spelling of [`Tag::Int`] with the same layout.
	Int2,
	/// `g`: 64-bit little-endian IEEE-754 double.
	Float,
	/// `s`: length-prefixed byte string.
	String,
	/// `u`: length-prefixed text, kept as raw bytes.
	Unicode,
	/// `t`: interned byte string, kept as raw bytes.
	TString,
	/// `(`: count-prefixed tuple.
	Tuple,
	/// `[`: count-prefixed list.
	List,
	/// `{`: key/value pairs up to [`Tag::Stop`].
	Dict,
	/// `0`: end of a dict.
	Stop,
}

impl Tag {
	/// Every defined tag in wire-table order.
	pub const ALL: [Tag; 11] = [
		Tag::Null,
		Tag::Int,
		Tag::Int2,
		Tag::Float,
		Tag::String,
		Tag::Unicode,
		Tag::TString,
		Tag::Tuple,
		Tag::List,
		Tag::Dict,
		Tag::Stop,
	];

	/// Map a raw byte to its tag.
	pub fn from_byte(byte: u8) -> Option<Self> {
		Some(match byte {
			b'N' => Self::Null,
			b'i' => Self::Int,
			b'c' => Self::Int2,
			b'g' => Self::Float,
			b's' => Self::String,
			b'u' => Self::Unicode,
			b't' => Self::TString,
			b'(' => Self::Tuple,
			b'[' => Self::List,
			b'{' => Self::Dict,
			b'0' => Self::Stop,
			_ => return None,
		})
	}

	/// Raw byte written on the wire.
	pub fn as_byte(self) -> u8 {
		match self {
			Self::Null => b'N',
			Self::Int => b'i',
			Self::Int2 => b'c',
			Self::Float => b'g',
			Self::String => b's',
			Self::Unicode => b'u',
			Self::TString => b't',
			Self::Tuple => b'(',
			Self::List => b'[',
			Self::Dict => b'{',
			Self::Stop => b'0',
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Int => "int",
			Self::Int2 => "int2",
			Self::Float => "float",
			Self::String => "string",
			Self::Unicode => "unicode",
			Self::TString => "tstring",
			Self::Tuple => "tuple",
			Self::List => "list",
			Self::Dict => "dict",
			Self::Stop => "stop",
		}
	}
}
