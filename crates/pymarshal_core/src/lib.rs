//! Public library API for decoding marshal-format value streams.

/// Byte sources, wire tags, the recursive value decoder, and file loading.
pub mod marshal;
