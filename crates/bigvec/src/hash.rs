//! Five-way fingerprint of a [`BigValue`].
//!
//! The digests are cheap, independent and order-sensitive, so two implementations can compare
//! results without exchanging full decimal strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BigValue;

/// Mersenne prime `2^61 - 1`.
pub const M61: u64 = (1 << 61) - 1;

/// Reflected CRC-64/XZ (ECMA-182) polynomial.
pub const CRC64_POLY: u64 = 0xC96C_5795_D787_0F42;

const POLY_HASH_MULT: u64 = 31;

static CRC64_TABLE: [u64; 256] = crc64_table();

const fn crc64_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut r = i as u64;
        let mut bit = 0;
        while bit < 8 {
            r = if r & 1 == 1 { (r >> 1) ^ CRC64_POLY } else { r >> 1 };
            bit += 1;
        }
        table[i] = r;
        i += 1;
    }
    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashTuple {
    pub word_sum: u64,
    pub word_xor: u64,
    pub mod61: u64,
    pub poly_hash: u64,
    pub crc: u64,
}

impl fmt::Display for HashTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.word_sum, self.word_xor, self.mod61, self.poly_hash, self.crc
        )
    }
}

/// Incremental CRC-64/XZ.
#[derive(Debug, Clone, Copy)]
pub struct Crc64 {
    state: u64,
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc64 {
    pub fn new() -> Self {
        Self { state: u64::MAX }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        let mut h = self.state;
        for &x in bytes {
            h = (h >> 8) ^ CRC64_TABLE[((u64::from(x) ^ h) & 0xFF) as usize];
        }
        self.state = h;
    }

    pub fn finish(&self) -> u64 {
        self.state ^ u64::MAX
    }
}

/// Incremental `s = 31 * s + byte (mod 2^64)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyHash {
    state: u64,
}

impl PolyHash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = self
                .state
                .wrapping_mul(POLY_HASH_MULT)
                .wrapping_add(u64::from(b));
        }
    }

    pub fn finish(&self) -> u64 {
        self.state
    }
}

pub fn crc64(bytes: &[u8]) -> u64 {
    let mut crc = Crc64::new();
    crc.update(bytes);
    crc.finish()
}

pub fn poly_hash(bytes: &[u8]) -> u64 {
    let mut poly = PolyHash::new();
    poly.update(bytes);
    poly.finish()
}

/// Full-precision `value mod (2^61 - 1)` of little-endian words.
pub fn mod_m61(words: &[u64]) -> u64 {
    words.iter().rev().fold(0u64, |acc, &word| {
        let t = (u128::from(acc) << 64) | u128::from(word);
        (t % u128::from(M61)) as u64
    })
}

/// Fingerprint `value` as `(wordSum, wordXor, mod61, polyHash, crc)`.
///
/// Word digests run over the canonical words; `polyHash` and `crc` run over the little-endian
/// byte stream (word 0 first, low byte first).
pub fn hash(value: &BigValue) -> HashTuple {
    let words = value.words();
    let mut word_sum = 0u64;
    let mut word_xor = 0u64;
    let mut poly = PolyHash::new();
    let mut crc = Crc64::new();
    for &word in words {
        word_sum = word_sum.wrapping_add(word);
        word_xor ^= word;
        let bytes = word.to_le_bytes();
        poly.update(&bytes);
        crc.update(&bytes);
    }

    HashTuple {
        word_sum,
        word_xor,
        mod61: mod_m61(words),
        poly_hash: poly.finish(),
        crc: crc.finish(),
    }
}
