//! Seeded linear-congruential word streams.
//!
//! Each output word consumes three LCG steps. The first step wraps modulo `2^64`; the second and
//! third reduce modulo `2^64 - 1`. The asymmetry is part of the reference recurrence and must not
//! be normalised, otherwise previously published vectors stop matching.

use crate::{BigValue, BigVecError, Result};

pub const ALL_ONES_64: u64 = u64::MAX;

/// Multiplier of the classic 48-bit `drand48` generator, applied here at 64-bit width.
pub const DEFAULT_MULT: u64 = 0x5_DEEC_E66D;
pub const DEFAULT_ADD: u64 = 0xB;

/// Masks for addition vectors: occasionally clear the top nibble so carries do not always ripple.
pub const MASKS_FOR_ADD: [u64; 2] = [ALL_ONES_64, ALL_ONES_64 >> 4];

/// Masks for multiplication vectors: word widths from 64 bits down to 8 bits, so plenty of
/// partial products stay below 64 bits.
pub const MASKS_FOR_MUL: [u64; 8] = [
    ALL_ONES_64,
    ALL_ONES_64 >> 8,
    ALL_ONES_64 >> 16,
    ALL_ONES_64 >> 24,
    ALL_ONES_64 >> 32,
    ALL_ONES_64 >> 40,
    ALL_ONES_64 >> 48,
    ALL_ONES_64 >> 56,
];

/// Tunables of the stream recurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    masks: Vec<u64>,
    mult: u64,
    add: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            masks: vec![ALL_ONES_64],
            mult: DEFAULT_MULT,
            add: DEFAULT_ADD,
        }
    }
}

impl StreamConfig {
    pub fn new(masks: Vec<u64>, mult: u64, add: u64) -> Result<Self> {
        if masks.is_empty() {
            return Err(BigVecError::EmptyMasks);
        }
        Ok(Self { masks, mult, add })
    }

    /// Default multiplier and increment with a custom mask list.
    pub fn with_masks(masks: impl Into<Vec<u64>>) -> Result<Self> {
        Self::new(masks.into(), DEFAULT_MULT, DEFAULT_ADD)
    }

    pub fn with_mult(mut self, mult: u64) -> Self {
        self.mult = mult;
        self
    }

    pub fn with_add(mut self, add: u64) -> Self {
        self.add = add;
        self
    }

    pub fn masks(&self) -> &[u64] {
        &self.masks
    }

    pub fn mult(&self) -> u64 {
        self.mult
    }

    pub fn add(&self) -> u64 {
        self.add
    }

    fn step_wrapping(&self, seed: u64) -> u64 {
        seed.wrapping_mul(self.mult).wrapping_add(self.add)
    }

    fn step_mod_all_ones(&self, seed: u64) -> u64 {
        // seed * mult + add <= (2^64 - 1) * 2^64, so the sum cannot overflow u128.
        let t = u128::from(seed) * u128::from(self.mult) + u128::from(self.add);
        (t % u128::from(ALL_ONES_64)) as u64
    }
}

/// Infinite iterator over stream words for a seed.
#[derive(Debug, Clone)]
pub struct LcgStream<'a> {
    config: &'a StreamConfig,
    seed: u64,
}

impl<'a> LcgStream<'a> {
    pub fn new(seed: u64, config: &'a StreamConfig) -> Self {
        Self { config, seed }
    }

    /// Running seed after the words produced so far.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Iterator for LcgStream<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let cfg = self.config;

        let seed = cfg.step_wrapping(self.seed);
        let mask = cfg.masks[((seed >> 32) % cfg.masks.len() as u64) as usize];

        let seed = cfg.step_mod_all_ones(seed);
        let low = seed >> 32;

        let seed = cfg.step_mod_all_ones(seed);
        let high = seed & 0xFFFF_FFFF_0000_0000;

        self.seed = seed;
        Some((low | high) & mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// The first `count` stream words for `seed`, least-significant first.
pub fn stream_words(seed: u64, count: usize, config: &StreamConfig) -> Vec<u64> {
    tracing::trace!(seed, count, masks = config.masks.len(), "stream words");
    LcgStream::new(seed, config).take(count).collect()
}

/// Big value assembled from the first `count` stream words. A zero top word is not an error; it
/// just shortens the value.
pub fn generate_stream(seed: u64, count: usize, config: &StreamConfig) -> BigValue {
    BigValue::from_words(&stream_words(seed, count, config))
}
