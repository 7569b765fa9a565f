//! Per-channel floating-point sample buffer.
//!
//! [`SampleBuffer`] hosts normalized channels between byte conversions. Its
//! logical sizes can shrink and grow without reallocating: storage that is no
//! longer needed stays behind as hidden capacity and is claimed again when
//! channels are re-added, so a processing chain that rebuilds the same layout
//! every block settles into zero allocations.

mod cache;
mod convert;
mod edit;
mod sample_buffer;

#[cfg(test)]
mod tests_channels;
#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_silence;

// Re-export public API
pub use sample_buffer::SampleBuffer;
