//! Dithering noise for bit-depth reduction.
//!
//! Each encode session draws its noise from an explicitly owned PCG32
//! generator, so two buffers never share a random stream and a fixed seed
//! reproduces the same output bytes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{SampleError, SampleResult};
use crate::format::FormatCode;

/// Default dither magnitude in least significant bits.
pub const DEFAULT_DITHER_BITS: f64 = 0.7;

/// Seed used when a buffer is not given one explicitly.
pub const DEFAULT_DITHER_SEED: u64 = 0x5EED_D17E;

/// When a buffer adds dithering noise during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DitherMode {
    /// Dither only when the target format is narrower than the format the
    /// buffer's samples were originally decoded from.
    #[default]
    Automatic,
    /// Always dither.
    On,
    /// Never dither.
    Off,
}

impl DitherMode {
    /// Decides whether encoding to `target` should be dithered.
    ///
    /// Without a recorded original format, automatic mode never dithers.
    pub fn should_dither(&self, original: Option<FormatCode>, target: FormatCode) -> bool {
        match self {
            DitherMode::Automatic => original
                .is_some_and(|orig| orig.significant_bits() > target.significant_bits()),
            DitherMode::On => true,
            DitherMode::Off => false,
        }
    }
}

/// Creates a PCG32 RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// An owned dither source: noise magnitude plus its generator.
#[derive(Debug, Clone)]
pub struct Dither {
    amount: f64,
    rng: Pcg32,
}

impl Default for Dither {
    /// [`DEFAULT_DITHER_BITS`] of noise from [`DEFAULT_DITHER_SEED`].
    fn default() -> Self {
        Self {
            amount: DEFAULT_DITHER_BITS,
            rng: create_rng(DEFAULT_DITHER_SEED),
        }
    }
}

impl Dither {
    /// Creates a dither source adding uniform noise in `[0, amount)` LSB.
    ///
    /// An amount of `0.0` disables dithering.
    pub fn new(amount: f64, seed: u64) -> SampleResult<Self> {
        let mut dither = Self {
            amount: 0.0,
            rng: create_rng(seed),
        };
        dither.set_amount(amount)?;
        Ok(dither)
    }

    /// Creates a dither source that adds no noise.
    pub fn disabled() -> Self {
        Self {
            amount: 0.0,
            rng: create_rng(DEFAULT_DITHER_SEED),
        }
    }

    /// Noise magnitude in least significant bits.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Changes the noise magnitude, keeping the generator's position.
    pub fn set_amount(&mut self, amount: f64) -> SampleResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(SampleError::invalid_arg(format!(
                "dither amount must be a non-negative number, got {}",
                amount
            )));
        }
        self.amount = amount;
        Ok(())
    }

    /// Restarts the generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = create_rng(seed);
    }

    /// Whether any noise is added.
    pub fn is_enabled(&self) -> bool {
        self.amount != 0.0
    }

    /// Next noise value. Does not advance the generator when disabled.
    #[inline]
    pub fn next_noise(&mut self) -> f64 {
        if self.amount == 0.0 {
            return 0.0;
        }
        self.rng.gen::<f64>() * self.amount
    }
}
