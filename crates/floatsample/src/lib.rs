//! Floatsample
//!
//! Bit-exact conversion between interleaved PCM byte streams and normalized
//! per-channel floating-point samples.
//!
//! # Overview
//!
//! Samples are held as `f64` in `[-1.0, 1.0)`, scaled by `2^(bits - 1)` of the
//! byte format they came from. Supported byte formats:
//!
//! - **8 bit** - signed, or unsigned with a 128 bias
//! - **16 bit** - signed, little or big endian
//! - **24 bit** - signed, packed in 3 bytes or stored in 4 bytes
//! - **32 bit** - signed, little or big endian
//!
//! Encoding rounds half away from zero and saturates at the format's extremes.
//! When the target format is narrower than the source, uniform dither noise
//! can be added before rounding.
//!
//! # Determinism
//!
//! Dither noise comes from a PCG32 generator owned by each buffer. Given the
//! same seed and input, encoded bytes are identical across runs.
//!
//! # Example
//!
//! ```ignore
//! use floatsample::{AudioFormat, SampleBuffer};
//!
//! let format = AudioFormat::pcm_signed(44100.0, 16, 2, false);
//! let mut buffer = SampleBuffer::default();
//! buffer.init_from_bytes(&input, 0, input.len(), &format)?;
//! buffer.linear_fade(1.0, 0.0);
//! let output = buffer.to_byte_vec(&format)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`SampleBuffer`] - Channel storage with lazy reuse and byte conversion
//! - [`decode`] - Bytes to normalized samples
//! - [`encode`] - Normalized samples to bytes, with quantization and dither
//! - [`dither`] - Dither noise source and mode selection
//! - [`format`] - Format descriptors and format codes

mod bounds;
pub mod buffer;
pub mod decode;
pub mod dither;
pub mod encode;
pub mod error;
pub mod format;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use dither::{Dither, DitherMode, DEFAULT_DITHER_BITS, DEFAULT_DITHER_SEED};
pub use error::{SampleError, SampleResult};
pub use format::{AudioFormat, Encoding, FormatCode, SampleWidth};
