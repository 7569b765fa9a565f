//! In-place sample editing: silence, fades, copies and mixing.

use crate::bounds::check_sample_range;
use crate::error::{SampleError, SampleResult};

use super::sample_buffer::SampleBuffer;

impl SampleBuffer {
    /// Silences every channel.
    pub fn silence(&mut self) {
        let sample_count = self.sample_count;
        for data in &mut self.channels[..self.channel_count] {
            data[..sample_count].fill(0.0);
        }
    }

    /// Silences `[offset, offset + count)` in every channel.
    pub fn silence_range(&mut self, offset: usize, count: usize) -> SampleResult<()> {
        check_sample_range(self.sample_count, offset, count, "silence")?;
        for data in &mut self.channels[..self.channel_count] {
            data[offset..offset + count].fill(0.0);
        }
        Ok(())
    }

    /// Silences one channel.
    pub fn silence_channel(&mut self, channel: usize) -> SampleResult<()> {
        self.silence_channel_range(channel, 0, self.sample_count)
    }

    /// Silences `[offset, offset + count)` in one channel.
    pub fn silence_channel_range(&mut self, channel: usize, offset: usize, count: usize) -> SampleResult<()> {
        self.check_channel(channel)?;
        check_sample_range(self.sample_count, offset, count, "silence")?;
        self.channels[channel][offset..offset + count].fill(0.0);
        Ok(())
    }

    /// Applies a linear gain ramp from `start_vol` to `end_vol` over every
    /// channel.
    pub fn linear_fade(&mut self, start_vol: f64, end_vol: f64) {
        let sample_count = self.sample_count;
        for data in &mut self.channels[..self.channel_count] {
            fade(&mut data[..sample_count], start_vol, end_vol);
        }
    }

    /// Applies a linear gain ramp over `[offset, offset + count)` of every
    /// channel.
    pub fn linear_fade_range(&mut self, start_vol: f64, end_vol: f64, offset: usize, count: usize) -> SampleResult<()> {
        check_sample_range(self.sample_count, offset, count, "fade")?;
        for data in &mut self.channels[..self.channel_count] {
            fade(&mut data[offset..offset + count], start_vol, end_vol);
        }
        Ok(())
    }

    /// Applies a linear gain ramp over `[offset, offset + count)` of one
    /// channel.
    pub fn linear_fade_channel(
        &mut self,
        channel: usize,
        start_vol: f64,
        end_vol: f64,
        offset: usize,
        count: usize,
    ) -> SampleResult<()> {
        self.check_channel(channel)?;
        check_sample_range(self.sample_count, offset, count, "fade")?;
        fade(&mut self.channels[channel][offset..offset + count], start_vol, end_vol);
        Ok(())
    }

    /// Copies all samples of `source` into `target`.
    pub fn copy_channel(&mut self, source: usize, target: usize) -> SampleResult<()> {
        self.copy_channel_range(source, 0, target, 0, self.sample_count)
    }

    /// Copies `count` samples between two channels, which may be the same.
    pub fn copy_channel_range(
        &mut self,
        source: usize,
        source_offset: usize,
        target: usize,
        target_offset: usize,
        count: usize,
    ) -> SampleResult<()> {
        self.check_channel(source)?;
        self.check_channel(target)?;
        check_sample_range(self.sample_count, source_offset, count, "copy source")?;
        check_sample_range(self.sample_count, target_offset, count, "copy target")?;

        let src = source_offset..source_offset + count;
        if source == target {
            self.channels[source].copy_within(src, target_offset);
            return Ok(());
        }
        let (from, to) = if source < target {
            let (low, high) = self.channels.split_at_mut(target);
            (&low[source], &mut high[0])
        } else {
            let (low, high) = self.channels.split_at_mut(source);
            (&high[0], &mut low[target])
        };
        to[target_offset..target_offset + count].copy_from_slice(&from[src]);
        Ok(())
    }

    /// Moves `length` samples from `source_index` to `dest_index` within every
    /// channel. The ranges may overlap.
    pub fn copy_within(&mut self, source_index: usize, dest_index: usize, length: usize) -> SampleResult<()> {
        check_sample_range(self.sample_count, source_index, length, "copy source")?;
        check_sample_range(self.sample_count, dest_index, length, "copy target")?;
        for data in &mut self.channels[..self.channel_count] {
            data.copy_within(source_index..source_index + length, dest_index);
        }
        Ok(())
    }

    /// Moves `length` samples from `source_index` to `dest_index` within one
    /// channel. The ranges may overlap.
    pub fn copy_within_channel(
        &mut self,
        channel: usize,
        source_index: usize,
        dest_index: usize,
        length: usize,
    ) -> SampleResult<()> {
        self.check_channel(channel)?;
        self.copy_channel_range(channel, source_index, channel, dest_index, length)
    }

    /// Duplicates a mono signal into `target_channel_count` identical
    /// channels.
    pub fn expand_channel(&mut self, target_channel_count: usize) -> SampleResult<()> {
        if self.channel_count != 1 {
            return Err(SampleError::invalid_arg(format!(
                "can only expand mono signals, buffer has {} channels",
                self.channel_count
            )));
        }
        for ch in 1..target_channel_count {
            self.add_channel(false);
            self.copy_channel(0, ch)?;
        }
        Ok(())
    }

    /// Sums every channel into channel 0 and removes the others.
    ///
    /// No scaling is applied, so the result may exceed [-1.0, 1.0].
    pub fn mix_down_channels(&mut self) -> SampleResult<()> {
        if self.channel_count == 0 {
            return Err(SampleError::invalid_arg("cannot mix down a buffer without channels"));
        }
        let sample_count = self.sample_count;
        for ch in (1..self.channel_count).rev() {
            let (first, rest) = self.channels.split_at_mut(1);
            let first = &mut first[0][..sample_count];
            for (dst, src) in first.iter_mut().zip(&rest[ch - 1][..sample_count]) {
                *dst += *src;
            }
            self.remove_channel(ch)?;
        }
        Ok(())
    }

    /// Adds `source` onto this buffer, sample by sample.
    ///
    /// Only the overlapping channels and samples are mixed.
    pub fn mix(&mut self, source: &SampleBuffer) {
        let count = self.sample_count.min(source.sample_count);
        let channels = self.channel_count.min(source.channel_count);
        for (dst, src) in self.channels[..channels].iter_mut().zip(source.channels()) {
            for (d, s) in dst[..count].iter_mut().zip(&src[..count]) {
                *d += *s;
            }
        }
    }

    /// Adds `count` samples of `source`, starting at `source_offset`, onto
    /// this buffer starting at `this_offset`.
    ///
    /// Only the overlapping channels are mixed.
    pub fn mix_range(
        &mut self,
        source: &SampleBuffer,
        source_offset: usize,
        this_offset: usize,
        count: usize,
    ) -> SampleResult<()> {
        check_sample_range(source.sample_count, source_offset, count, "mix source")?;
        check_sample_range(self.sample_count, this_offset, count, "mix target")?;
        let channels = self.channel_count.min(source.channel_count);
        for (dst, src) in self.channels[..channels].iter_mut().zip(source.channels()) {
            let dst = &mut dst[this_offset..this_offset + count];
            for (d, s) in dst.iter_mut().zip(&src[source_offset..source_offset + count]) {
                *d += *s;
            }
        }
        Ok(())
    }

    /// Copies up to `count` samples from the start of this buffer into
    /// `dest` at `dest_offset`. Returns the number of samples copied.
    pub fn copy_to(&self, dest: &mut SampleBuffer, dest_offset: usize, count: usize) -> usize {
        self.copy_to_from(0, dest, dest_offset, count)
    }

    /// Copies up to `count` samples starting at `src_offset` into `dest` at
    /// `dest_offset`.
    ///
    /// The count is clipped to what both buffers hold, and only the
    /// overlapping channels are copied. Offsets past the end of either buffer
    /// copy nothing. Returns the number of samples copied.
    pub fn copy_to_from(&self, src_offset: usize, dest: &mut SampleBuffer, dest_offset: usize, count: usize) -> usize {
        if src_offset >= self.sample_count || dest_offset >= dest.sample_count {
            return 0;
        }
        let count = count
            .min(self.sample_count.saturating_sub(src_offset))
            .min(dest.sample_count.saturating_sub(dest_offset));
        let channels = self.channel_count.min(dest.channel_count);
        for (src, dst) in self.channels().zip(dest.channels[..channels].iter_mut()) {
            dst[dest_offset..dest_offset + count].copy_from_slice(&src[src_offset..src_offset + count]);
        }
        count
    }

    /// Makes this buffer a copy of `source`'s logical content.
    ///
    /// Storage is reused where possible; format and dither settings are kept.
    pub fn init_from(&mut self, source: &SampleBuffer) -> SampleResult<()> {
        self.init(source.channel_count, source.sample_count, source.sample_rate)?;
        let sample_count = self.sample_count;
        for (dst, src) in self.channels[..self.channel_count].iter_mut().zip(source.channels()) {
            dst[..sample_count].copy_from_slice(src);
        }
        Ok(())
    }
}

/// Multiplies `samples` by a gain moving linearly from `start` towards `end`.
fn fade(samples: &mut [f64], start: f64, end: f64) {
    if samples.is_empty() {
        return;
    }
    let inc = (end - start) / samples.len() as f64;
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample *= start + inc * i as f64;
    }
}
