//! Normalized samples to raw PCM bytes.
//!
//! Encoding scales each sample by `2^(bits - 1)`, adds optional dither noise,
//! rounds half away from zero and saturates to the target range. Byte layouts
//! are the exact inverse of [`crate::decode`].

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::bounds::{check_byte_region, check_sample_range};
use crate::dither::Dither;
use crate::error::{SampleError, SampleResult};
use crate::format::{AudioFormat, FormatCode, SampleWidth};

/// Representable signed range of a width, as floats.
const fn signed_range(width: SampleWidth) -> (f64, f64) {
    match width {
        SampleWidth::Bits8 => (-128.0, 127.0),
        SampleWidth::Bits16 => (-32_768.0, 32_767.0),
        SampleWidth::Bits24Packed | SampleWidth::Bits24Unpacked => (-8_388_608.0, 8_388_607.0),
        SampleWidth::Bits32 => (-2_147_483_648.0, 2_147_483_647.0),
    }
}

/// Rounds a scaled sample to the nearest integer code, saturating at the
/// extremes of `width`.
#[inline]
pub fn quantize(scaled: f64, width: SampleWidth) -> i32 {
    let (min, max) = signed_range(width);
    if scaled >= max {
        max as i32
    } else if scaled <= min {
        min as i32
    } else {
        // f64::round rounds half away from zero; NaN lands on 0.
        scaled.round() as i32
    }
}

/// Stores a quantized integer at the start of `out`.
///
/// `out` must hold at least `code.byte_size()` bytes.
#[inline]
pub(crate) fn write_sample(out: &mut [u8], value: i32, code: FormatCode) {
    match code {
        FormatCode::S8 => out[0] = value as i8 as u8,
        FormatCode::U8 => out[0] = (value + 128) as u8,
        FormatCode::S16Le => LittleEndian::write_i16(out, value as i16),
        FormatCode::S16Be => BigEndian::write_i16(out, value as i16),
        FormatCode::S24Le => LittleEndian::write_i24(out, value),
        FormatCode::S24Be => BigEndian::write_i24(out, value),
        FormatCode::S24In32Le => {
            out[0] = 0;
            LittleEndian::write_i24(&mut out[1..4], value);
        }
        FormatCode::S24In32Be => {
            out[0] = 0;
            BigEndian::write_i24(&mut out[1..4], value);
        }
        FormatCode::S32Le => LittleEndian::write_i32(out, value),
        FormatCode::S32Be => BigEndian::write_i32(out, value),
    }
}

/// Encodes `input[in_offset..in_offset + count]` into `output`.
///
/// Writing starts at `output[byte_offset]` and advances `byte_stride` bytes per
/// sample. Noise from `dither` is added to each scaled sample before rounding.
///
/// Fails with [`SampleError::InvalidArgument`] before touching `output` if the
/// input range, the destination region or the stride is invalid.
#[allow(clippy::too_many_arguments)]
pub fn encode(
    input: &[f64],
    in_offset: usize,
    count: usize,
    output: &mut [u8],
    byte_offset: usize,
    byte_stride: usize,
    code: FormatCode,
    dither: &mut Dither,
) -> SampleResult<()> {
    check_sample_range(input.len(), in_offset, count, "encode input")?;
    check_byte_region(
        output.len(),
        byte_offset,
        byte_stride,
        count,
        code.byte_size(),
        "encode output",
    )?;

    let width = code.width();
    let scale = width.full_scale();
    let size = code.byte_size();
    let mut out_index = byte_offset;
    for &sample in &input[in_offset..in_offset + count] {
        let value = quantize(sample * scale + dither.next_noise(), width);
        write_sample(&mut output[out_index..out_index + size], value, code);
        out_index += byte_stride;
    }
    Ok(())
}

/// Encodes one interleaved sample slice into interleaved frames.
///
/// Reads `frame_count * format.channels` samples starting at `in_offset`.
pub fn encode_interleaved(
    input: &[f64],
    in_offset: usize,
    output: &mut [u8],
    byte_offset: usize,
    frame_count: usize,
    format: &AudioFormat,
    dither: &mut Dither,
) -> SampleResult<()> {
    let code = FormatCode::resolve(format)?;
    let count = frame_count
        .checked_mul(format.channels)
        .ok_or_else(|| SampleError::invalid_arg("frame count overflows"))?;
    encode(
        input,
        in_offset,
        count,
        output,
        byte_offset,
        format.bytes_per_sample(),
        code,
        dither,
    )
}

/// Encodes separate channel slices into interleaved frames.
///
/// Exactly `format.channels` channels are written; `input` must provide at
/// least that many. All channels are validated before the first byte is
/// written.
pub fn encode_channels<C: AsRef<[f64]>>(
    input: &[C],
    in_offset: usize,
    output: &mut [u8],
    byte_offset: usize,
    frame_count: usize,
    format: &AudioFormat,
    dither: &mut Dither,
) -> SampleResult<()> {
    let code = FormatCode::resolve(format)?;
    if input.len() < format.channels {
        return Err(SampleError::invalid_arg(format!(
            "{} input channels for a {}-channel format",
            input.len(),
            format.channels
        )));
    }
    encode_planar(
        &input[..format.channels],
        in_offset,
        output,
        byte_offset,
        frame_count,
        code,
        format.frame_size,
        dither,
    )
}

/// Planar-to-interleaved loop shared with the sample buffer.
#[allow(clippy::too_many_arguments)]
pub(crate) fn encode_planar<C: AsRef<[f64]>>(
    channels: &[C],
    in_offset: usize,
    output: &mut [u8],
    byte_offset: usize,
    frame_count: usize,
    code: FormatCode,
    frame_size: usize,
    dither: &mut Dither,
) -> SampleResult<()> {
    let size = code.byte_size();
    for (ch, data) in channels.iter().enumerate() {
        check_sample_range(data.as_ref().len(), in_offset, frame_count, "encode input")?;
        let channel_offset = byte_offset
            .checked_add(ch * size)
            .ok_or_else(|| SampleError::invalid_arg("channel byte offset overflows"))?;
        check_byte_region(
            output.len(),
            channel_offset,
            frame_size,
            frame_count,
            size,
            "encode output",
        )?;
    }
    let mut offset = byte_offset;
    for data in channels {
        encode(
            data.as_ref(),
            in_offset,
            frame_count,
            output,
            offset,
            frame_size,
            code,
            dither,
        )?;
        offset += size;
    }
    Ok(())
}
