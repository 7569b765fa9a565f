//! Resolved internal format codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SampleError, SampleResult};

use super::descriptor::{AudioFormat, Encoding};

/// Storage class of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SampleWidth {
    /// 8 bits in 1 byte.
    Bits8,
    /// 16 bits in 2 bytes.
    Bits16,
    /// 24 bits packed into 3 bytes.
    Bits24Packed,
    /// 24 bits stored in 4 bytes with one zero pad byte.
    Bits24Unpacked,
    /// 32 bits in 4 bytes.
    Bits32,
}

impl SampleWidth {
    /// Bytes occupied by one sample.
    pub const fn byte_size(&self) -> usize {
        match self {
            SampleWidth::Bits8 => 1,
            SampleWidth::Bits16 => 2,
            SampleWidth::Bits24Packed => 3,
            SampleWidth::Bits24Unpacked | SampleWidth::Bits32 => 4,
        }
    }

    /// Number of significant bits.
    pub const fn significant_bits(&self) -> u32 {
        match self {
            SampleWidth::Bits8 => 8,
            SampleWidth::Bits16 => 16,
            SampleWidth::Bits24Packed | SampleWidth::Bits24Unpacked => 24,
            SampleWidth::Bits32 => 32,
        }
    }

    /// 2^(bits - 1): the divisor mapping integers onto [-1.0, 1.0).
    pub const fn full_scale(&self) -> f64 {
        match self {
            SampleWidth::Bits8 => 128.0,
            SampleWidth::Bits16 => 32_768.0,
            SampleWidth::Bits24Packed | SampleWidth::Bits24Unpacked => 8_388_608.0,
            SampleWidth::Bits32 => 2_147_483_648.0,
        }
    }
}

impl fmt::Display for SampleWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SampleWidth::Bits8 => "8bit",
            SampleWidth::Bits16 => "16bit",
            SampleWidth::Bits24Packed => "24_3bit",
            SampleWidth::Bits24Unpacked => "24_4bit",
            SampleWidth::Bits32 => "32bit",
        };
        f.write_str(s)
    }
}

/// Every sample layout the codec can decode and encode.
///
/// Unsigned samples only exist at 8 bits, and 8-bit samples have no
/// endianness, so the variants below are the complete set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCode {
    /// Signed 8-bit.
    S8,
    /// Unsigned 8-bit, biased by 128.
    U8,
    /// Signed 16-bit, little endian.
    S16Le,
    /// Signed 16-bit, big endian.
    S16Be,
    /// Signed 24-bit in 3 bytes, little endian.
    S24Le,
    /// Signed 24-bit in 3 bytes, big endian.
    S24Be,
    /// Signed 24-bit in 4 bytes, little endian. Byte 0 is the zero pad.
    S24In32Le,
    /// Signed 24-bit in 4 bytes, big endian. Byte 0 is the zero pad.
    S24In32Be,
    /// Signed 32-bit, little endian.
    S32Le,
    /// Signed 32-bit, big endian.
    S32Be,
}

impl FormatCode {
    /// All format codes.
    pub fn all() -> &'static [FormatCode] {
        &[
            FormatCode::S8,
            FormatCode::U8,
            FormatCode::S16Le,
            FormatCode::S16Be,
            FormatCode::S24Le,
            FormatCode::S24Be,
            FormatCode::S24In32Le,
            FormatCode::S24In32Be,
            FormatCode::S32Le,
            FormatCode::S32Be,
        ]
    }

    /// Resolves a host descriptor into a format code.
    ///
    /// Fails with [`SampleError::UnsupportedFormat`] when the encoding is not
    /// PCM, when an unsigned format is wider than 8 bits, or when the frame
    /// size does not match `bits_per_sample * channels` (24 bits in 4 bytes per
    /// channel being the one accepted exception).
    pub fn resolve(format: &AudioFormat) -> SampleResult<FormatCode> {
        let signed = match format.encoding {
            Encoding::PcmSigned => true,
            Encoding::PcmUnsigned => false,
            Encoding::Other(ref name) => {
                return Err(SampleError::unsupported(format!(
                    "encoding {} is not PCM",
                    name
                )));
            }
        };
        if !signed && format.bits_per_sample != 8 {
            return Err(SampleError::unsupported(format!(
                "only 8-bit samples can be unsigned, got {} bits",
                format.bits_per_sample
            )));
        }
        if format.channels == 0 {
            return Err(SampleError::unsupported("format has no channels"));
        }
        check_supported_sample_size(format.bits_per_sample, format.channels, format.frame_size)?;
        Self::from_parts(
            format.bits_per_sample,
            format.frame_size / format.channels,
            signed,
            format.big_endian,
        )
    }

    /// Builds a format code from its components.
    ///
    /// `big_endian` is ignored for 8-bit samples.
    pub fn from_parts(
        bits_per_sample: u32,
        bytes_per_sample: usize,
        signed: bool,
        big_endian: bool,
    ) -> SampleResult<FormatCode> {
        let width = match (bits_per_sample, bytes_per_sample) {
            (8, 1) => SampleWidth::Bits8,
            (16, 2) => SampleWidth::Bits16,
            (24, 3) => SampleWidth::Bits24Packed,
            (24, 4) => SampleWidth::Bits24Unpacked,
            (32, 4) => SampleWidth::Bits32,
            _ => {
                return Err(SampleError::unsupported(format!(
                    "sample size of {} bits in {} bytes",
                    bits_per_sample, bytes_per_sample
                )));
            }
        };
        if !signed && width != SampleWidth::Bits8 {
            return Err(SampleError::unsupported(
                "unsigned samples larger than 8 bit are not supported",
            ));
        }
        let code = match (width, signed, big_endian) {
            (SampleWidth::Bits8, true, _) => FormatCode::S8,
            (SampleWidth::Bits8, false, _) => FormatCode::U8,
            (SampleWidth::Bits16, _, false) => FormatCode::S16Le,
            (SampleWidth::Bits16, _, true) => FormatCode::S16Be,
            (SampleWidth::Bits24Packed, _, false) => FormatCode::S24Le,
            (SampleWidth::Bits24Packed, _, true) => FormatCode::S24Be,
            (SampleWidth::Bits24Unpacked, _, false) => FormatCode::S24In32Le,
            (SampleWidth::Bits24Unpacked, _, true) => FormatCode::S24In32Be,
            (SampleWidth::Bits32, _, false) => FormatCode::S32Le,
            (SampleWidth::Bits32, _, true) => FormatCode::S32Be,
        };
        Ok(code)
    }

    /// Storage class of this format.
    pub const fn width(&self) -> SampleWidth {
        match self {
            FormatCode::S8 | FormatCode::U8 => SampleWidth::Bits8,
            FormatCode::S16Le | FormatCode::S16Be => SampleWidth::Bits16,
            FormatCode::S24Le | FormatCode::S24Be => SampleWidth::Bits24Packed,
            FormatCode::S24In32Le | FormatCode::S24In32Be => SampleWidth::Bits24Unpacked,
            FormatCode::S32Le | FormatCode::S32Be => SampleWidth::Bits32,
        }
    }

    /// Bytes occupied by one sample.
    pub const fn byte_size(&self) -> usize {
        self.width().byte_size()
    }

    /// Number of significant bits.
    pub const fn significant_bits(&self) -> u32 {
        self.width().significant_bits()
    }

    /// Whether samples are two's-complement signed.
    pub const fn is_signed(&self) -> bool {
        !matches!(self, FormatCode::U8)
    }

    /// Whether multi-byte samples are stored most significant byte first.
    pub const fn is_big_endian(&self) -> bool {
        matches!(
            self,
            FormatCode::S16Be | FormatCode::S24Be | FormatCode::S24In32Be | FormatCode::S32Be
        )
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.width())?;
        f.write_str(if self.is_signed() { " signed" } else { " unsigned" })?;
        if self.width() != SampleWidth::Bits8 {
            f.write_str(if self.is_big_endian() {
                " big endian"
            } else {
                " little endian"
            })?;
        }
        Ok(())
    }
}

/// Checks that `bits_per_sample` fills the frame exactly.
///
/// Only whole-byte sample sizes are accepted, except 24 bits stored in 4 bytes.
pub fn check_supported_sample_size(
    bits_per_sample: u32,
    channels: usize,
    frame_size: usize,
) -> SampleResult<()> {
    let overflow = || SampleError::unsupported(format!("frame of {} channels overflows", channels));
    if bits_per_sample == 24 && 4usize.checked_mul(channels).ok_or_else(overflow)? == frame_size {
        return Ok(());
    }
    let frame_bits = (bits_per_sample as usize).checked_mul(channels).ok_or_else(overflow)?;
    if frame_size.checked_mul(8) != Some(frame_bits) {
        let per_channel = if channels == 0 { 0 } else { frame_size / channels };
        return Err(SampleError::unsupported(format!(
            "{} bits stored in {} bytes",
            bits_per_sample, per_channel
        )));
    }
    Ok(())
}
