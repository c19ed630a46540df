use crate::{
    from_words, hash, parse_radix, stream_words, to_string_radix, to_words, verify, BigValue,
    StreamConfig,
};
use num_bigint::BigUint;
use proptest::prelude::*;

const MAX_WORDS: usize = 12;

fn to_biguint(words: &[u64]) -> BigUint {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

fn from_biguint(value: &BigUint) -> BigValue {
    from_words(&value.to_u64_digits())
}

fn biguint_oracle(words: &[u64], radix: u32) -> String {
    to_biguint(words).to_str_radix(radix)
}

fn word_strategy() -> impl Strategy<Value = u64> {
    // Bias toward the edges where carries and borrows show up.
    prop_oneof![
        4 => any::<u64>(),
        1 => Just(0u64),
        1 => Just(u64::MAX),
        1 => 0u64..=0xFF,
    ]
}

fn words_strategy() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(word_strategy(), 0..=MAX_WORDS)
}

proptest! {
    #[test]
    fn words_round_trip(words in words_strategy()) {
        let value = from_words(&words);
        let canonical = to_words(&value);
        prop_assert_eq!(&from_words(&canonical), &value);
        prop_assert!(!canonical.is_empty());
        prop_assert!(canonical == [0] || *canonical.last().unwrap() != 0);
        prop_assert_eq!(to_biguint(&canonical), to_biguint(&words));
    }

    #[test]
    fn arithmetic_matches_reference(a in words_strategy(), b in words_strategy(), m in any::<u64>()) {
        let (x, y) = (from_words(&a), from_words(&b));
        let (rx, ry) = (to_biguint(&a), to_biguint(&b));
        prop_assert_eq!(&x + &y, from_biguint(&(&rx + &ry)));
        prop_assert_eq!(&x * &y, from_biguint(&(&rx * &ry)));
        prop_assert_eq!(x.mul_small(m), from_biguint(&(&rx * m)));
        prop_assert_eq!(x.add_small(m), from_biguint(&(&rx + m)));
    }

    #[test]
    fn radix_matches_reference_and_parses_back(words in words_strategy(), radix in 2u32..=36) {
        let value = from_words(&words);
        let digits = to_string_radix(&value, radix).unwrap();
        prop_assert_eq!(digits.as_str(), to_biguint(&words).to_str_radix(radix));
        prop_assert_eq!(parse_radix(digits.as_str(), radix).unwrap(), value.clone());
        prop_assert!(verify(&value, radix, &biguint_oracle).is_ok());
        prop_assert!(digits.as_str() == "0" || !digits.as_str().starts_with('0'));
    }

    #[test]
    fn mod61_matches_reference(words in words_strategy()) {
        let expected = to_biguint(&words) % BigUint::from((1u64 << 61) - 1);
        let expected = expected.to_u64_digits().first().copied().unwrap_or(0);
        prop_assert_eq!(hash(&from_words(&words)).mod61, expected);
    }

    #[test]
    fn single_byte_change_moves_byte_digests(
        words in proptest::collection::vec(any::<u64>(), 1..=MAX_WORDS),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=0xFF,
    ) {
        let value = from_words(&words);
        let canonical = to_words(&value);
        let byte = index.index(canonical.len() * 8);
        let mut changed = canonical.clone();
        changed[byte / 8] ^= u64::from(flip) << ((byte % 8) * 8);
        // Only compare streams of equal length; clearing the top word would shorten the value.
        prop_assume!(*changed.last().unwrap() != 0 || changed.len() == 1);

        let before = hash(&value);
        let after = hash(&from_words(&changed));
        prop_assert_ne!(before.crc, after.crc);
        prop_assert_ne!(before.poly_hash, after.poly_hash);
    }

    #[test]
    fn stream_is_pure(seed in any::<u64>(), count in 0usize..=16, mult in any::<u64>(), add in any::<u64>()) {
        let cfg = StreamConfig::new(vec![u64::MAX, 0xFFFF], mult, add).unwrap();
        prop_assert_eq!(stream_words(seed, count, &cfg), stream_words(seed, count, &cfg));
    }
}
