//! Byte conversion entry points and dither settings.

use log::{debug, trace};

use crate::bounds::check_sample_range;
use crate::decode::decode;
use crate::dither::{Dither, DitherMode};
use crate::encode::encode_planar;
use crate::error::{SampleError, SampleResult};
use crate::format::{AudioFormat, FormatCode};

use super::sample_buffer::SampleBuffer;

impl SampleBuffer {
    /// Resolves `format` for a conversion against this buffer.
    ///
    /// On a cache miss the descriptor must match the buffer's sample rate and
    /// channel count before it is resolved and remembered.
    fn resolve_for_conversion(&mut self, format: &AudioFormat) -> SampleResult<FormatCode> {
        if let Some(code) = self.format_cache.lookup(format) {
            return Ok(code);
        }
        if format.sample_rate != self.sample_rate {
            return Err(SampleError::invalid_arg(format!(
                "format sample rate {} differs from buffer sample rate {}",
                format.sample_rate, self.sample_rate
            )));
        }
        if format.channels != self.channel_count {
            return Err(SampleError::invalid_arg(format!(
                "format has {} channels, buffer has {}",
                format.channels, self.channel_count
            )));
        }
        let code = FormatCode::resolve(format)?;
        debug!("resolved {:?} to {}", format, code);
        self.format_cache.store(format, code);
        Ok(code)
    }

    /// Bytes needed to hold all logical samples in `format`.
    pub fn required_byte_buffer_size(&self, format: &AudioFormat) -> SampleResult<usize> {
        self.required_byte_buffer_size_for(format, self.sample_count)
    }

    /// Bytes needed to hold `sample_count` frames in `format`.
    ///
    /// # Errors
    /// [`SampleError::UnsupportedFormat`] if `format` cannot be encoded.
    pub fn required_byte_buffer_size_for(&self, format: &AudioFormat, sample_count: usize) -> SampleResult<usize> {
        FormatCode::resolve(format)?;
        format
            .frame_size
            .checked_mul(sample_count)
            .ok_or_else(|| SampleError::invalid_arg("byte buffer size overflows"))
    }

    /// Encodes `sample_count` frames starting at sample `read_offset` into
    /// `buffer` at `write_offset`, interleaving all channels.
    ///
    /// Dithering follows the buffer's [`DitherMode`]. Returns the number of
    /// bytes written.
    ///
    /// # Errors
    /// [`SampleError::InvalidArgument`] if `buffer` is too small, the sample
    /// range lies outside the buffer, or `format` disagrees with the buffer's
    /// sample rate or channel count. [`SampleError::UnsupportedFormat`] if
    /// `format` cannot be encoded. Nothing is written on error.
    pub fn write_bytes(
        &mut self,
        read_offset: usize,
        sample_count: usize,
        buffer: &mut [u8],
        write_offset: usize,
        format: &AudioFormat,
    ) -> SampleResult<usize> {
        let byte_count = format
            .frame_size
            .checked_mul(sample_count)
            .ok_or_else(|| SampleError::invalid_arg("byte count overflows"))?;
        if write_offset.checked_add(byte_count).map_or(true, |end| end > buffer.len()) {
            return Err(SampleError::invalid_arg(format!(
                "byte buffer of {} bytes too small for {} bytes at offset {}",
                buffer.len(),
                byte_count,
                write_offset
            )));
        }
        check_sample_range(self.sample_count, read_offset, sample_count, "write source")?;
        let code = self.resolve_for_conversion(format)?;

        trace!(
            "encoding {} frames of {} channels as {}",
            sample_count, self.channel_count, code
        );
        let mut no_dither = Dither::disabled();
        let dither = if self.dither_mode.should_dither(self.original_format, code) {
            &mut self.dither
        } else {
            &mut no_dither
        };
        encode_planar(
            &self.channels[..self.channel_count],
            read_offset,
            buffer,
            write_offset,
            sample_count,
            code,
            format.frame_size,
            dither,
        )?;
        Ok(byte_count)
    }

    /// Encodes every logical sample into `buffer` at `offset`.
    ///
    /// Returns the number of bytes written.
    pub fn convert_to_bytes(&mut self, buffer: &mut [u8], offset: usize, format: &AudioFormat) -> SampleResult<usize> {
        self.write_bytes(0, self.sample_count, buffer, offset, format)
    }

    /// Encodes every logical sample into a newly allocated vector.
    pub fn to_byte_vec(&mut self, format: &AudioFormat) -> SampleResult<Vec<u8>> {
        let mut bytes = vec![0u8; self.required_byte_buffer_size(format)?];
        self.convert_to_bytes(&mut bytes, 0, format)?;
        Ok(bytes)
    }

    /// Decodes `frame_count` interleaved frames from `input` at
    /// `in_byte_offset` into every channel, starting at sample `dest_offset`.
    ///
    /// # Errors
    /// [`SampleError::InvalidArgument`] if `input` is too short, the frames
    /// do not fit below [`sample_count`](Self::sample_count), or `format`
    /// disagrees with the buffer's sample rate or channel count.
    /// [`SampleError::UnsupportedFormat`] if `format` cannot be decoded.
    pub fn read_bytes(
        &mut self,
        input: &[u8],
        in_byte_offset: usize,
        format: &AudioFormat,
        dest_offset: usize,
        frame_count: usize,
    ) -> SampleResult<()> {
        let byte_count = format
            .frame_size
            .checked_mul(frame_count)
            .ok_or_else(|| SampleError::invalid_arg("byte count overflows"))?;
        if in_byte_offset.checked_add(byte_count).map_or(true, |end| end > input.len()) {
            return Err(SampleError::invalid_arg(format!(
                "input of {} bytes too small for {} bytes at offset {}",
                input.len(),
                byte_count,
                in_byte_offset
            )));
        }
        check_sample_range(self.sample_count, dest_offset, frame_count, "read target")?;
        let code = self.resolve_for_conversion(format)?;

        trace!(
            "decoding {} frames of {} channels from {}",
            frame_count, self.channel_count, code
        );
        self.decode_into_channels(input, in_byte_offset, format.frame_size, dest_offset, frame_count, code)
    }

    /// Sizes the buffer from `byte_count` bytes of `format` and decodes them.
    ///
    /// The format is remembered as the original format, so later encoding to
    /// a narrower format is dithered in [`DitherMode::Automatic`].
    ///
    /// # Errors
    /// Fails before the buffer is changed if `buffer` is too small or
    /// `format` is unsupported.
    pub fn init_from_bytes(
        &mut self,
        buffer: &[u8],
        offset: usize,
        byte_count: usize,
        format: &AudioFormat,
    ) -> SampleResult<()> {
        if offset.checked_add(byte_count).map_or(true, |end| end > buffer.len()) {
            return Err(SampleError::invalid_arg(format!(
                "buffer of {} bytes too small for {} bytes at offset {}",
                buffer.len(),
                byte_count,
                offset
            )));
        }
        let code = FormatCode::resolve(format)?;
        let frame_count = byte_count / format.frame_size;
        self.init(format.channels, frame_count, format.sample_rate)?;
        self.original_format = Some(code);
        self.format_cache.store(format, code);
        self.decode_into_channels(buffer, offset, format.frame_size, 0, frame_count, code)
    }

    fn decode_into_channels(
        &mut self,
        input: &[u8],
        byte_offset: usize,
        frame_size: usize,
        dest_offset: usize,
        frame_count: usize,
        code: FormatCode,
    ) -> SampleResult<()> {
        let size = code.byte_size();
        let end = dest_offset + frame_count;
        let mut offset = byte_offset;
        for data in &mut self.channels[..self.channel_count] {
            if data.len() < end {
                // Keep what is already below the write region.
                data.resize(end, 0.0);
            }
            decode(input, offset, frame_size, data, dest_offset, frame_count, code)?;
            offset += size;
        }
        Ok(())
    }

    /// Dither magnitude in least significant bits.
    pub fn dither_bits(&self) -> f64 {
        self.dither.amount()
    }

    /// Sets the dither magnitude in least significant bits.
    ///
    /// # Errors
    /// [`SampleError::InvalidArgument`] unless `bits` is positive and finite.
    pub fn set_dither_bits(&mut self, bits: f64) -> SampleResult<()> {
        if bits.is_nan() || bits <= 0.0 {
            return Err(SampleError::invalid_arg(format!(
                "dither bits must be greater than 0, got {}",
                bits
            )));
        }
        self.dither.set_amount(bits)
    }

    /// When encoding adds dither noise.
    pub fn dither_mode(&self) -> DitherMode {
        self.dither_mode
    }

    /// Sets when encoding adds dither noise.
    pub fn set_dither_mode(&mut self, mode: DitherMode) {
        self.dither_mode = mode;
    }

    /// Restarts the dither generator from `seed`.
    pub fn set_dither_seed(&mut self, seed: u64) {
        self.dither.reseed(seed);
    }

    /// The format the samples were last initialized from, if any.
    pub fn original_format(&self) -> Option<FormatCode> {
        self.original_format
    }

    /// Overrides the format [`DitherMode::Automatic`] compares against.
    /// `None` disables automatic dithering.
    pub fn set_original_format(&mut self, code: Option<FormatCode>) {
        self.original_format = code;
    }
}
