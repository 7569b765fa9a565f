//! Host audio format descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sample encoding of an [`AudioFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Linear PCM, two's-complement signed samples.
    PcmSigned,
    /// Linear PCM, unsigned samples with a mid-scale bias.
    PcmUnsigned,
    /// Any other encoding (compressed, floating point, ...), by name.
    Other(String),
}

impl Encoding {
    /// Returns true for the two linear PCM encodings.
    pub fn is_pcm(&self) -> bool {
        matches!(self, Encoding::PcmSigned | Encoding::PcmUnsigned)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::PcmSigned => f.write_str("PCM_SIGNED"),
            Encoding::PcmUnsigned => f.write_str("PCM_UNSIGNED"),
            Encoding::Other(name) => f.write_str(name),
        }
    }
}

/// Description of an interleaved byte stream.
///
/// The descriptor is treated as plain input: nothing here is validated until it
/// is resolved into a [`FormatCode`](super::FormatCode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample encoding.
    pub encoding: Encoding,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Significant bits per sample.
    pub bits_per_sample: u32,
    /// Number of interleaved channels.
    pub channels: usize,
    /// Bytes per multi-channel frame.
    pub frame_size: usize,
    /// Most significant byte first. Ignored for 8-bit samples.
    #[serde(default)]
    pub big_endian: bool,
}

impl AudioFormat {
    /// Creates a descriptor with every field given explicitly.
    pub fn new(
        encoding: Encoding,
        sample_rate: f64,
        bits_per_sample: u32,
        channels: usize,
        frame_size: usize,
        big_endian: bool,
    ) -> Self {
        Self {
            encoding,
            sample_rate,
            bits_per_sample,
            channels,
            frame_size,
            big_endian,
        }
    }

    /// Creates a signed PCM descriptor with packed samples.
    pub fn pcm_signed(sample_rate: f64, bits_per_sample: u32, channels: usize, big_endian: bool) -> Self {
        Self::new(
            Encoding::PcmSigned,
            sample_rate,
            bits_per_sample,
            channels,
            (bits_per_sample as usize).div_ceil(8) * channels,
            big_endian,
        )
    }

    /// Creates an unsigned PCM descriptor with packed samples.
    pub fn pcm_unsigned(sample_rate: f64, bits_per_sample: u32, channels: usize) -> Self {
        Self::new(
            Encoding::PcmUnsigned,
            sample_rate,
            bits_per_sample,
            channels,
            (bits_per_sample as usize).div_ceil(8) * channels,
            false,
        )
    }

    /// Creates a signed 24-bit descriptor with each sample stored in 4 bytes.
    pub fn pcm_24_in_32(sample_rate: f64, channels: usize, big_endian: bool) -> Self {
        Self::new(
            Encoding::PcmSigned,
            sample_rate,
            24,
            channels,
            4 * channels,
            big_endian,
        )
    }

    /// Bytes occupied by one channel's sample within a frame.
    pub fn bytes_per_sample(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.frame_size / self.channels
    }
}
