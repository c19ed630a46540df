use std::cmp::Ordering;
use std::fmt;

use crate::radix::{self, LetterCase, Radix};

/// Arbitrary-precision non-negative integer stored as little-endian 64-bit words.
///
/// The buffer is always canonical: index 0 is the least-significant word and there is no
/// high-order zero word, except for zero itself which is exactly `[0]`. Values are never mutated
/// after construction; arithmetic produces new values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigValue {
    words: Box<[u64]>,
}

impl BigValue {
    pub fn zero() -> Self {
        Self {
            words: Box::new([0]),
        }
    }

    /// Assemble a value from little-endian words.
    ///
    /// The input does not need to be canonical: high-order zero words contribute no magnitude and
    /// an empty slice is zero.
    pub fn from_words(words: &[u64]) -> Self {
        Self::from_vec(words.to_vec())
    }

    pub(crate) fn from_vec(mut words: Vec<u64>) -> Self {
        while words.last() == Some(&0) {
            words.pop();
        }
        if words.is_empty() {
            words.push(0);
        }
        Self {
            words: words.into_boxed_slice(),
        }
    }

    /// Canonical little-endian words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn to_words(&self) -> Vec<u64> {
        self.words.to_vec()
    }

    pub fn is_zero(&self) -> bool {
        self.words.len() == 1 && self.words[0] == 0
    }

    /// Little-endian bytes of the magnitude: word 0 first, each word least-significant byte
    /// first. Always a multiple of 8 bytes long (8 zero bytes for zero).
    pub fn byte_stream(&self) -> impl Iterator<Item = u8> + '_ {
        self.words.iter().flat_map(|word| word.to_le_bytes())
    }

    pub fn bit_len(&self) -> u64 {
        let top = self.words[self.words.len() - 1];
        (self.words.len() as u64 - 1) * 64 + u64::from(64 - top.leading_zeros())
    }

    /// Number of digits in the base-10 rendering (`1` for zero).
    pub fn decimal_len(&self) -> usize {
        radix::render(self, Radix::DECIMAL, LetterCase::Lower).len()
    }
}

impl Default for BigValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BigValue {
    fn from(value: u64) -> Self {
        Self {
            words: Box::new([value]),
        }
    }
}

impl Ord for BigValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words
            .len()
            .cmp(&other.words.len())
            .then_with(|| self.words.iter().rev().cmp(other.words.iter().rev()))
    }
}

impl PartialOrd for BigValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&radix::render(self, Radix::DECIMAL, LetterCase::Lower))
    }
}

impl fmt::Debug for BigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigValue(0x")?;
        for (i, word) in self.words.iter().rev().enumerate() {
            if i == 0 {
                write!(f, "{word:x}")?;
            } else {
                write!(f, "_{word:016x}")?;
            }
        }
        write!(f, ")")
    }
}

/// Decompose `value` into its canonical word array (least-significant word first).
pub fn to_words(value: &BigValue) -> Vec<u64> {
    value.to_words()
}

/// Fold `words` (least-significant first) back into a value. Tolerates zero padding.
pub fn from_words(words: &[u64]) -> BigValue {
    BigValue::from_words(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_single_word() {
        assert_eq!(to_words(&BigValue::zero()), vec![0]);
        assert_eq!(to_words(&from_words(&[])), vec![0]);
        assert_eq!(to_words(&from_words(&[0, 0, 0])), vec![0]);
        assert!(from_words(&[0, 0]).is_zero());
    }

    #[test]
    fn high_zero_words_are_dropped() {
        let value = from_words(&[u64::MAX, 0]);
        assert_eq!(value.words(), &[u64::MAX]);
        assert_eq!(value, BigValue::from(u64::MAX));

        let value = from_words(&[0, 1, 0, 0]);
        assert_eq!(value.words(), &[0, 1]);
    }

    #[test]
    fn low_zero_words_are_kept() {
        let value = from_words(&[0, 0, 7]);
        assert_eq!(to_words(&value), vec![0, 0, 7]);
        assert_eq!(value.bit_len(), 128 + 3);
    }

    #[test]
    fn byte_stream_is_little_endian() {
        let value = from_words(&[0x0102_0304_0506_0708, 0xff]);
        let bytes: Vec<u8> = value.byte_stream().collect();
        assert_eq!(
            bytes,
            vec![8, 7, 6, 5, 4, 3, 2, 1, 0xff, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(BigValue::zero().byte_stream().count(), 8);
    }

    #[test]
    fn ordering_follows_magnitude() {
        let small = from_words(&[u64::MAX]);
        let big = from_words(&[0, 1]);
        assert!(small < big);
        assert!(from_words(&[1, 2]) < from_words(&[0, 3]));
        assert_eq!(from_words(&[5, 0]).cmp(&BigValue::from(5)), Ordering::Equal);
    }

    #[test]
    fn bit_len_of_small_values() {
        assert_eq!(BigValue::zero().bit_len(), 0);
        assert_eq!(BigValue::from(1).bit_len(), 1);
        assert_eq!(BigValue::from(u64::MAX).bit_len(), 64);
    }

    #[test]
    fn display_and_debug() {
        let value = from_words(&[0, 1]);
        assert_eq!(value.to_string(), "18446744073709551616");
        assert_eq!(format!("{value:?}"), "BigValue(0x1_0000000000000000)");
        assert_eq!(value.decimal_len(), 20);
        assert_eq!(BigValue::zero().decimal_len(), 1);
    }
}
