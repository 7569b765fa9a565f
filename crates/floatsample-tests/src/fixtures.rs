//! Shared format descriptors and byte patterns.

use floatsample::{AudioFormat, FormatCode, SampleWidth};

/// Sample rate used by every fixture.
pub const FIXTURE_RATE: f64 = 44100.0;

/// A descriptor that resolves to `code` with `channels` channels.
pub fn format_for(code: FormatCode, channels: usize) -> AudioFormat {
    match code {
        FormatCode::U8 => AudioFormat::pcm_unsigned(FIXTURE_RATE, 8, channels),
        FormatCode::S24In32Le | FormatCode::S24In32Be => {
            AudioFormat::pcm_24_in_32(FIXTURE_RATE, channels, code.is_big_endian())
        }
        _ => AudioFormat::pcm_signed(
            FIXTURE_RATE,
            code.significant_bits(),
            channels,
            code.is_big_endian(),
        ),
    }
}

/// One descriptor per format code.
pub fn all_formats(channels: usize) -> Vec<(FormatCode, AudioFormat)> {
    FormatCode::all()
        .iter()
        .map(|&code| (code, format_for(code, channels)))
        .collect()
}

/// A deterministic byte pattern of `samples` samples in `code`.
///
/// Pad bytes of 24-in-32 samples are zero, so the pattern survives a
/// decode/encode round trip unchanged.
pub fn pattern_bytes(code: FormatCode, samples: usize, seed: u8) -> Vec<u8> {
    let size = code.byte_size();
    let mut bytes: Vec<u8> = (0..samples * size)
        .map(|i| (i as u8).wrapping_mul(73).wrapping_add(seed))
        .collect();
    if code.width() == SampleWidth::Bits24Unpacked {
        for sample in bytes.chunks_mut(size) {
            sample[0] = 0;
        }
    }
    bytes
}
