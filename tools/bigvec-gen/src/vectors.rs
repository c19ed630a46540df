//! Golden vector file (`test-vectors/bigvec-vectors-v1.json`).
//!
//! `crates/bigvec/tests/vectors.rs` checks the library against the committed file, and the CLI
//! tests check that `bigvec-gen vectors` still regenerates the same content.

use anyhow::Context;
use bigvec::stream::{ALL_ONES_64, DEFAULT_ADD, DEFAULT_MULT, MASKS_FOR_ADD, MASKS_FOR_MUL};
use bigvec::{
    from_words, generate_sequence, generate_stream, hash, sequence_words, stream_words,
    to_string_radix, BigValue, HashTuple, StreamConfig,
};
use serde::Serialize;

pub const VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct VectorsFile {
    pub version: u32,
    pub stream: Vec<StreamVector>,
    pub sequence: Vec<SequenceVector>,
    pub hash: Vec<HashVector>,
    pub radix: Vec<RadixVector>,
    pub product: ProductVector,
}

#[derive(Debug, Serialize)]
pub struct StreamVector {
    pub name: &'static str,
    pub seed: u64,
    pub count: usize,
    pub masks: Vec<u64>,
    pub mult: u64,
    pub add: u64,
    pub words: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct SequenceVector {
    pub name: &'static str,
    pub lo: i64,
    pub hi: i64,
    pub step: i64,
    pub words: Vec<u64>,
    pub value: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct HashVector {
    pub name: &'static str,
    pub words: Vec<u64>,
    pub hash: HashTuple,
}

#[derive(Debug, Serialize)]
pub struct RadixVector {
    pub name: &'static str,
    pub words: Vec<u64>,
    pub radix: u32,
    pub digits: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVector {
    pub name: &'static str,
    pub seed_a: u64,
    pub seed_b: u64,
    pub count: usize,
    pub masks: Vec<u64>,
    pub decimal_lengths: [usize; 3],
    pub hash: HashTuple,
}

const STREAM_CASES: &[(&str, u64, usize, &[u64], u64, u64)] = &[
    ("seed5-single", 5, 1, &[ALL_ONES_64], DEFAULT_MULT, DEFAULT_ADD),
    ("seed5-four", 5, 4, &[ALL_ONES_64], DEFAULT_MULT, DEFAULT_ADD),
    ("seed7-add-masks", 7, 3, &MASKS_FOR_ADD, DEFAULT_MULT, DEFAULT_ADD),
    ("seed11-mul-masks", 11, 8, &MASKS_FOR_MUL, DEFAULT_MULT, DEFAULT_ADD),
    (
        "seed1-pcg-constants",
        1,
        3,
        &[ALL_ONES_64],
        6_364_136_223_846_793_005,
        1_442_695_040_888_963_407,
    ),
];

const SEQUENCE_CASES: &[(&str, i64, i64, i64)] = &[
    ("ascending", 1, 5, 1),
    ("negative-start", -2, 1, 1),
    ("stride-three", 0, 10, 3),
    ("empty", 0, 0, 1),
    ("trailing-zero", -1, 1, 1),
];

fn factorial(n: u64) -> BigValue {
    (1..=n).fold(BigValue::from(1), |acc, i| acc.mul_small(i))
}

fn hash_cases() -> anyhow::Result<Vec<(&'static str, BigValue)>> {
    Ok(vec![
        ("zero", BigValue::zero()),
        ("one", BigValue::from(1)),
        ("word-max", BigValue::from(ALL_ONES_64)),
        ("two-pow-64", from_words(&[0, 1])),
        ("factorial-20", factorial(20)),
        ("factorial-32", factorial(32)),
        ("factorial-100", factorial(100)),
        ("stride-three", generate_sequence(0, 10, 3)?),
    ])
}

fn radix_cases() -> Vec<(&'static str, BigValue, u32)> {
    let stream = generate_stream(5, 2, &StreamConfig::default());
    vec![
        ("byte-max-hex", BigValue::from(255), 16),
        ("zero-binary", BigValue::zero(), 2),
        ("max-digit", BigValue::from(35), 36),
        ("two-pow-64-base36", from_words(&[0, 1]), 36),
        ("two-pow-64-base7", from_words(&[0, 1]), 7),
        ("word-max-hex", BigValue::from(ALL_ONES_64), 16),
        ("factorial-32-base36", factorial(32), 36),
        ("stream-base36", stream.clone(), 36),
        ("stream-decimal", stream, 10),
    ]
}

fn product_case() -> anyhow::Result<ProductVector> {
    let (seed_a, seed_b, count) = (5, 11, 100);
    let cfg = StreamConfig::with_masks(MASKS_FOR_MUL)?;
    let a = generate_stream(seed_a, count, &cfg);
    let b = generate_stream(seed_b, count, &cfg);
    let product = &a * &b;
    Ok(ProductVector {
        name: "seed5-times-seed11",
        seed_a,
        seed_b,
        count,
        masks: MASKS_FOR_MUL.to_vec(),
        decimal_lengths: [a.decimal_len(), b.decimal_len(), product.decimal_len()],
        hash: hash(&product),
    })
}

pub fn build() -> anyhow::Result<VectorsFile> {
    let stream = STREAM_CASES
        .iter()
        .map(|&(name, seed, count, masks, mult, add)| -> anyhow::Result<StreamVector> {
            let cfg = StreamConfig::new(masks.to_vec(), mult, add)
                .with_context(|| format!("stream case {name}"))?;
            Ok(StreamVector {
                name,
                seed,
                count,
                masks: masks.to_vec(),
                mult,
                add,
                words: stream_words(seed, count, &cfg),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let sequence = SEQUENCE_CASES
        .iter()
        .map(|&(name, lo, hi, step)| -> anyhow::Result<SequenceVector> {
            let (lo128, hi128, step128) = (i128::from(lo), i128::from(hi), i128::from(step));
            let words = sequence_words(lo128, hi128, step128)
                .with_context(|| format!("sequence case {name}"))?;
            let value = from_words(&words).to_words();
            Ok(SequenceVector {
                name,
                lo,
                hi,
                step,
                words,
                value,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let hashes = hash_cases()?
        .into_iter()
        .map(|(name, value)| HashVector {
            name,
            words: value.to_words(),
            hash: hash(&value),
        })
        .collect();

    let radix = radix_cases()
        .into_iter()
        .map(|(name, value, radix)| -> anyhow::Result<RadixVector> {
            let digits = to_string_radix(&value, radix)
                .with_context(|| format!("radix case {name}"))?
                .into_string();
            Ok(RadixVector {
                name,
                words: value.to_words(),
                radix,
                digits,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let product = product_case()?;

    Ok(VectorsFile {
        version: VERSION,
        stream,
        sequence,
        hash: hashes,
        radix,
        product,
    })
}
