//! `num-bigint` as the independent reference for conversions, arithmetic and fingerprints.

use bigvec::hash::{crc64, poly_hash, M61};
use bigvec::{HashTuple, RadixOracle};
use num_bigint::BigUint;

#[derive(Debug, Clone, Copy, Default)]
pub struct NumBigintOracle;

impl RadixOracle for NumBigintOracle {
    fn to_string_radix(&self, words: &[u64], radix: u32) -> String {
        to_biguint(words).to_str_radix(radix)
    }
}

pub fn to_biguint(words: &[u64]) -> BigUint {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Fingerprint computed from the reference representation rather than from bigvec's words.
pub fn reference_hash(value: &BigUint) -> HashTuple {
    let mut words = value.to_u64_digits();
    if words.is_empty() {
        words.push(0);
    }
    let mut bytes = value.to_bytes_le();
    bytes.resize(words.len() * 8, 0);

    let mod61 = (value % BigUint::from(M61))
        .to_u64_digits()
        .first()
        .copied()
        .unwrap_or(0);

    HashTuple {
        word_sum: words.iter().fold(0u64, |acc, &w| acc.wrapping_add(w)),
        word_xor: words.iter().fold(0u64, |acc, &w| acc ^ w),
        mod61,
        poly_hash: poly_hash(&bytes),
        crc: crc64(&bytes),
    }
}
