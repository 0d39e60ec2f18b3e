/// Inline hex decode command.
pub mod hex;
/// Dump summary command.
pub mod info;
/// JSON rendering of decoded values.
pub mod json;
/// Human-readable value printer.
pub mod print;
/// Dump decode-and-print command.
pub mod show;
/// Shared argument and loading helpers.
pub mod util;
