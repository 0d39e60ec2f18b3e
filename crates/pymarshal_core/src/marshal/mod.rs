mod compression;
mod decode;
mod error;
mod file;
mod iter;
mod source;
mod tag;
mod value;

/// Compression detection result.
pub use compression::Compression;
/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_with_options};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// File abstraction over raw or zstd-compressed dumps.
pub use file::MarshalFile;
/// Consecutive top-level value iterator.
pub use iter::ValueIter;
/// Byte-source contract and the bundled implementations.
pub use source::{ByteSource, ReaderSource, SliceSource, SourceError};
/// Wire tag table.
pub use tag::Tag;
/// Decoded runtime value type.
pub use value::Value;
