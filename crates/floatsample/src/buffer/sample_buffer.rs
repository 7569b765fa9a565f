//! Sample buffer storage and channel lifecycle.

use log::debug;

use crate::dither::{Dither, DitherMode};
use crate::error::{SampleError, SampleResult};
use crate::format::FormatCode;

use super::cache::FormatCache;

/// Per-channel normalized samples with lazily reused storage.
///
/// `sample_count` and `channel_count` are the logical sizes every operation
/// honors. Physical storage may be larger on both axes: a channel's backing
/// vector may be longer than `sample_count`, and slots at or past
/// `channel_count` hold hidden channels kept for reuse by
/// [`insert_channel`](Self::insert_channel). Only [`reset`](Self::reset) and
/// [`reset_to`](Self::reset_to) drop hidden storage.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Physical channel slots. Slots `channel_count..` are hidden.
    pub(super) channels: Vec<Vec<f64>>,
    pub(super) channel_count: usize,
    pub(super) sample_count: usize,
    pub(super) sample_rate: f64,
    /// Format the samples were decoded from, for automatic dithering.
    pub(super) original_format: Option<FormatCode>,
    pub(super) dither: Dither,
    pub(super) dither_mode: DitherMode,
    pub(super) format_cache: FormatCache,
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            channel_count: 0,
            sample_count: 0,
            sample_rate: 1.0,
            original_format: None,
            dither: Dither::default(),
            dither_mode: DitherMode::Automatic,
            format_cache: FormatCache::default(),
        }
    }
}

impl SampleBuffer {
    /// Creates a buffer with `channel_count` silent channels of
    /// `sample_count` samples.
    ///
    /// # Errors
    /// [`SampleError::InvalidArgument`] if `sample_rate` is not a positive
    /// finite number.
    pub fn new(channel_count: usize, sample_count: usize, sample_rate: f64) -> SampleResult<Self> {
        let mut buffer = Self::default();
        buffer.init(channel_count, sample_count, sample_rate)?;
        Ok(buffer)
    }

    /// Reseeds the dither generator, builder style.
    pub fn with_dither_seed(mut self, seed: u64) -> Self {
        self.dither.reseed(seed);
        self
    }

    /// Re-establishes the logical sizes, reusing existing storage.
    ///
    /// Samples are not cleared: reused storage keeps its old content, so
    /// call [`silence`](Self::silence) when a clean buffer is needed.
    pub fn init(&mut self, channel_count: usize, sample_count: usize, sample_rate: f64) -> SampleResult<()> {
        self.init_impl(channel_count, sample_count, sample_rate, true)
    }

    /// Empties the buffer and frees all storage, hidden channels included.
    pub fn reset(&mut self) {
        // 0 channels at 1 Hz cannot fail validation
        let _ = self.init_impl(0, 0, 1.0, false);
    }

    /// Like [`init`](Self::init), but storage not needed for the new sizes
    /// is freed instead of hidden.
    pub fn reset_to(&mut self, channel_count: usize, sample_count: usize, sample_rate: f64) -> SampleResult<()> {
        self.init_impl(channel_count, sample_count, sample_rate, false)
    }

    fn init_impl(&mut self, channel_count: usize, sample_count: usize, sample_rate: f64, lazy: bool) -> SampleResult<()> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SampleError::invalid_arg(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        self.set_sample_rate_impl(sample_rate);
        if !lazy || self.sample_count != sample_count || self.channel_count != channel_count {
            self.create_channels(channel_count, sample_count, lazy);
        }
        Ok(())
    }

    fn create_channels(&mut self, channel_count: usize, sample_count: usize, lazy: bool) {
        // Shrinking on both axes only moves the logical bounds.
        if lazy && channel_count <= self.channel_count && sample_count <= self.sample_count {
            self.sample_count = sample_count;
            self.set_channel_count_impl(channel_count);
            return;
        }
        self.sample_count = sample_count;
        // Hide every channel, then claim them back one by one.
        self.set_channel_count_impl(0);
        for ch in 0..channel_count {
            self.insert_channel_impl(ch, false, lazy);
        }
        if !lazy {
            self.drop_hidden();
        }
    }

    /// Number of logical samples per channel.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of active channels.
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Changes the sample rate without touching the samples.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> SampleResult<()> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SampleError::invalid_arg(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        self.set_sample_rate_impl(sample_rate);
        Ok(())
    }

    /// Number of physical channel slots, hidden ones included.
    pub fn physical_channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Changes the logical sample count.
    ///
    /// Shrinking only moves the logical bound. When growing with
    /// `keep_old_samples`, existing samples are preserved and the new region
    /// is silenced; otherwise the content of the grown region is unspecified.
    pub fn set_sample_count(&mut self, sample_count: usize, keep_old_samples: bool) {
        let old = self.sample_count;
        if old >= sample_count {
            self.sample_count = sample_count;
            return;
        }
        for data in &mut self.channels[..self.channel_count] {
            if data.len() < sample_count {
                if keep_old_samples {
                    data.truncate(old);
                    data.resize(sample_count, 0.0);
                } else {
                    *data = vec![0.0; sample_count];
                }
            } else if keep_old_samples {
                data[old..sample_count].fill(0.0);
            }
        }
        self.sample_count = sample_count;
    }

    /// Appends a channel at the end.
    pub fn add_channel(&mut self, silent: bool) {
        self.insert_channel_impl(self.channel_count, silent, true);
    }

    /// Inserts a channel at `index`, shifting later channels up by one.
    ///
    /// Hidden storage at least `sample_count` long is claimed before anything
    /// new is allocated. Unless `silent`, the inserted channel's content is
    /// whatever the reused storage held.
    pub fn insert_channel(&mut self, index: usize, silent: bool) -> SampleResult<()> {
        if index > self.channel_count {
            return Err(SampleError::invalid_arg(format!(
                "cannot insert channel at {} into {} channels",
                index, self.channel_count
            )));
        }
        self.insert_channel_impl(index, silent, true);
        Ok(())
    }

    /// Non-lazy insertion only reuses hidden storage of exactly
    /// `sample_count` samples.
    fn insert_channel_impl(&mut self, index: usize, silent: bool, lazy: bool) {
        let sample_count = self.sample_count;
        let fits = |len: usize| {
            if lazy {
                len >= sample_count
            } else {
                len == sample_count
            }
        };
        let hidden = (self.channel_count..self.channels.len()).find(|&slot| fits(self.channels[slot].len()));
        let storage = match hidden {
            Some(slot) => self.channels.remove(slot),
            None if lazy && self.channels.len() > self.channel_count => {
                // Every hidden slot is too short: extend the first one.
                let mut data = self.channels.remove(self.channel_count);
                debug!(
                    "no hidden channel holds {1} samples; growing one from {0} to {1} instead of allocating",
                    data.len(),
                    sample_count
                );
                data.resize(sample_count, 0.0);
                data
            }
            None => {
                debug!("allocating channel storage of {} samples", sample_count);
                vec![0.0; sample_count]
            }
        };
        self.channels.insert(index, storage);
        self.set_channel_count_impl(self.channel_count + 1);
        if silent {
            self.channels[index][..sample_count].fill(0.0);
        }
    }

    /// Removes the channel at `index`, keeping its storage hidden for reuse.
    pub fn remove_channel(&mut self, index: usize) -> SampleResult<()> {
        self.check_channel(index)?;
        self.channels[index..self.channel_count].rotate_left(1);
        self.set_channel_count_impl(self.channel_count - 1);
        Ok(())
    }

    fn drop_hidden(&mut self) {
        if self.channels.len() > self.channel_count {
            debug!(
                "dropping {} hidden channel(s)",
                self.channels.len() - self.channel_count
            );
            self.channels.truncate(self.channel_count);
        }
    }

    /// The logical samples of channel `index`.
    pub fn channel(&self, index: usize) -> SampleResult<&[f64]> {
        self.check_channel(index)?;
        Ok(&self.channels[index][..self.sample_count])
    }

    /// The logical samples of channel `index`, mutably.
    pub fn channel_mut(&mut self, index: usize) -> SampleResult<&mut [f64]> {
        self.check_channel(index)?;
        let sample_count = self.sample_count;
        Ok(&mut self.channels[index][..sample_count])
    }

    /// The whole backing storage of channel `index`.
    ///
    /// The slice may be longer than [`sample_count`](Self::sample_count);
    /// only the first `sample_count` samples are meaningful.
    pub fn borrow_channel(&mut self, index: usize) -> SampleResult<&mut [f64]> {
        self.check_channel(index)?;
        Ok(self.channels[index].as_mut_slice())
    }

    /// Replaces the storage of channel `index`, returning the previous one.
    ///
    /// # Errors
    /// [`SampleError::InvalidArgument`] if `data` is shorter than
    /// [`sample_count`](Self::sample_count).
    pub fn set_raw_channel(&mut self, index: usize, data: Vec<f64>) -> SampleResult<Vec<f64>> {
        self.check_channel(index)?;
        if data.len() < self.sample_count {
            return Err(SampleError::invalid_arg(format!(
                "channel storage of {} samples is shorter than the sample count {}",
                data.len(),
                self.sample_count
            )));
        }
        Ok(std::mem::replace(&mut self.channels[index], data))
    }

    /// Iterates over the logical samples of every active channel.
    pub fn channels(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.channels[..self.channel_count]
            .iter()
            .map(move |data| &data[..self.sample_count])
    }

    /// Copies of the logical samples of every active channel.
    pub fn to_channel_vecs(&self) -> Vec<Vec<f64>> {
        self.channels().map(<[f64]>::to_vec).collect()
    }

    pub(super) fn check_channel(&self, index: usize) -> SampleResult<()> {
        if index >= self.channel_count {
            return Err(SampleError::invalid_arg(format!(
                "invalid channel number {} for {} channels",
                index, self.channel_count
            )));
        }
        Ok(())
    }

    fn set_channel_count_impl(&mut self, channel_count: usize) {
        if self.channel_count != channel_count {
            self.channel_count = channel_count;
            self.format_cache.invalidate();
        }
    }

    fn set_sample_rate_impl(&mut self, sample_rate: f64) {
        if self.sample_rate != sample_rate {
            self.sample_rate = sample_rate;
            self.format_cache.invalidate();
        }
    }
}
