//! Raw PCM bytes to normalized samples.
//!
//! Every routine takes a byte stride, so the same loop serves interleaved
//! data (stride = bytes per sample) and channel extraction from interleaved
//! frames (stride = frame size, start offset selecting the channel).

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::bounds::{check_byte_region, check_sample_range};
use crate::error::{SampleError, SampleResult};
use crate::format::{AudioFormat, FormatCode};

/// Reconstructs the signed integer stored at the start of `bytes`.
///
/// `bytes` must hold at least `code.byte_size()` bytes.
#[inline]
pub(crate) fn read_sample(bytes: &[u8], code: FormatCode) -> i32 {
    match code {
        FormatCode::S8 => bytes[0] as i8 as i32,
        FormatCode::U8 => bytes[0] as i32 - 128,
        FormatCode::S16Le => LittleEndian::read_i16(bytes) as i32,
        FormatCode::S16Be => BigEndian::read_i16(bytes) as i32,
        FormatCode::S24Le => LittleEndian::read_i24(bytes),
        FormatCode::S24Be => BigEndian::read_i24(bytes),
        // Byte 0 is the pad in both byte orders.
        FormatCode::S24In32Le => LittleEndian::read_i24(&bytes[1..]),
        FormatCode::S24In32Be => BigEndian::read_i24(&bytes[1..]),
        FormatCode::S32Le => LittleEndian::read_i32(bytes),
        FormatCode::S32Be => BigEndian::read_i32(bytes),
    }
}

/// Decodes `count` samples into `output[out_offset..out_offset + count]`.
///
/// Reading starts at `input[byte_offset]` and advances `byte_stride` bytes
/// per sample. Values are `integer / 2^(bits - 1)`, so the most negative
/// integer maps to exactly -1.0 and the most positive to just below 1.0.
///
/// The output slice is never resized; it must already be long enough.
pub fn decode(
    input: &[u8],
    byte_offset: usize,
    byte_stride: usize,
    output: &mut [f64],
    out_offset: usize,
    count: usize,
    code: FormatCode,
) -> SampleResult<()> {
    check_sample_range(output.len(), out_offset, count, "decode output")?;
    check_byte_region(
        input.len(),
        byte_offset,
        byte_stride,
        count,
        code.byte_size(),
        "decode input",
    )?;

    let scale = code.width().full_scale();
    let size = code.byte_size();
    let mut in_index = byte_offset;
    for sample in &mut output[out_offset..out_offset + count] {
        *sample = read_sample(&input[in_index..in_index + size], code) as f64 / scale;
        in_index += byte_stride;
    }
    Ok(())
}

/// Decodes interleaved frames into one interleaved sample slice.
///
/// Writes `frame_count * format.channels` samples starting at `out_offset`.
pub fn decode_interleaved(
    input: &[u8],
    byte_offset: usize,
    output: &mut [f64],
    out_offset: usize,
    frame_count: usize,
    format: &AudioFormat,
) -> SampleResult<()> {
    let code = FormatCode::resolve(format)?;
    let count = frame_count
        .checked_mul(format.channels)
        .ok_or_else(|| SampleError::invalid_arg("frame count overflows"))?;
    decode(
        input,
        byte_offset,
        format.bytes_per_sample(),
        output,
        out_offset,
        count,
        code,
    )
}

/// Decodes a single channel out of interleaved frames.
pub fn decode_channel(
    channel: usize,
    input: &[u8],
    byte_offset: usize,
    output: &mut [f64],
    out_offset: usize,
    frame_count: usize,
    format: &AudioFormat,
) -> SampleResult<()> {
    let code = FormatCode::resolve(format)?;
    if channel >= format.channels {
        return Err(SampleError::invalid_arg(format!(
            "channel {} out of bounds for {} channels",
            channel, format.channels
        )));
    }
    let channel_offset = format
        .bytes_per_sample()
        .checked_mul(channel)
        .and_then(|offset| offset.checked_add(byte_offset))
        .ok_or_else(|| SampleError::invalid_arg("channel byte offset overflows"))?;
    decode(
        input,
        channel_offset,
        format.frame_size,
        output,
        out_offset,
        frame_count,
        code,
    )
}
