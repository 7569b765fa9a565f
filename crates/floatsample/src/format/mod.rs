//! Format descriptors and their resolution into codec format codes.
//!
//! A host describes a byte stream with an [`AudioFormat`]. Before any
//! conversion the descriptor is resolved into a [`FormatCode`], which the
//! decoder and encoder match on exhaustively.

mod code;
mod descriptor;

// Re-export public API
pub use code::{check_supported_sample_size, FormatCode, SampleWidth};
pub use descriptor::{AudioFormat, Encoding};
