//! Range checks shared by the decoder, encoder and buffer.

use crate::error::{SampleError, SampleResult};

/// Checks that `[offset, offset + count)` lies within `len` samples.
pub(crate) fn check_sample_range(len: usize, offset: usize, count: usize, what: &str) -> SampleResult<()> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(SampleError::invalid_arg(format!(
            "{} range out of bounds: offset={} count={} length={}",
            what, offset, count, len
        ))),
    }
}

/// Checks that `count` samples of `sample_size` bytes, spaced `stride` bytes
/// apart from `offset`, fit within `len` bytes.
pub(crate) fn check_byte_region(
    len: usize,
    offset: usize,
    stride: usize,
    count: usize,
    sample_size: usize,
    what: &str,
) -> SampleResult<()> {
    if stride < sample_size {
        return Err(SampleError::invalid_arg(format!(
            "{} byte stride {} is smaller than the sample size {}",
            what, stride, sample_size
        )));
    }
    if count == 0 {
        return Ok(());
    }
    let end = (count - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(offset))
        .and_then(|last| last.checked_add(sample_size));
    match end {
        Some(end) if end <= len => Ok(()),
        _ => Err(SampleError::invalid_arg(format!(
            "{} buffer too small: offset={} stride={} count={} length={}",
            what, offset, stride, count, len
        ))),
    }
}
