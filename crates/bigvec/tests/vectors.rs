#![cfg(not(target_arch = "wasm32"))]

use bigvec::{
    from_words, generate_sequence, generate_stream, hash, sequence_words, stream_words,
    to_string_radix, to_words, HashTuple, StreamConfig,
};
use serde::Deserialize;

const VECTORS_JSON: &str = include_str!("../../../test-vectors/bigvec-vectors-v1.json");

#[derive(Debug, Deserialize)]
struct VectorsFile {
    version: u32,
    stream: Vec<StreamVector>,
    sequence: Vec<SequenceVector>,
    hash: Vec<HashVector>,
    radix: Vec<RadixVector>,
    product: ProductVector,
}

#[derive(Debug, Deserialize)]
struct StreamVector {
    name: String,
    seed: u64,
    count: usize,
    masks: Vec<u64>,
    mult: u64,
    add: u64,
    words: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct SequenceVector {
    name: String,
    lo: i64,
    hi: i64,
    step: i64,
    words: Vec<u64>,
    value: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct HashVector {
    name: String,
    words: Vec<u64>,
    hash: HashTuple,
}

#[derive(Debug, Deserialize)]
struct RadixVector {
    name: String,
    words: Vec<u64>,
    radix: u32,
    digits: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductVector {
    name: String,
    seed_a: u64,
    seed_b: u64,
    count: usize,
    masks: Vec<u64>,
    decimal_lengths: [usize; 3],
    hash: HashTuple,
}

fn load() -> VectorsFile {
    let vf: VectorsFile = serde_json::from_str(VECTORS_JSON).expect("parse vectors json");
    assert_eq!(vf.version, 1, "unexpected vector file version");
    vf
}

#[test]
fn stream_vectors() {
    let vf = load();
    assert!(!vf.stream.is_empty());
    for v in &vf.stream {
        let cfg = StreamConfig::new(v.masks.clone(), v.mult, v.add).expect("stream config");
        assert_eq!(stream_words(v.seed, v.count, &cfg), v.words, "{}", v.name);
        assert_eq!(
            generate_stream(v.seed, v.count, &cfg),
            from_words(&v.words),
            "{}",
            v.name
        );
    }
}

#[test]
fn sequence_vectors() {
    let vf = load();
    for v in &vf.sequence {
        let (lo, hi, step) = (i128::from(v.lo), i128::from(v.hi), i128::from(v.step));
        assert_eq!(sequence_words(lo, hi, step).unwrap(), v.words, "{}", v.name);
        let value = generate_sequence(lo, hi, step).unwrap();
        assert_eq!(to_words(&value), v.value, "{}", v.name);
    }
}

#[test]
fn hash_vectors() {
    let vf = load();
    for v in &vf.hash {
        let value = from_words(&v.words);
        assert_eq!(to_words(&value), v.words, "{}: words must be canonical", v.name);
        assert_eq!(hash(&value), v.hash, "{}", v.name);
    }
}

#[test]
fn radix_vectors() {
    let vf = load();
    for v in &vf.radix {
        let digits = to_string_radix(&from_words(&v.words), v.radix).unwrap();
        assert_eq!(digits.as_str(), v.digits, "{}", v.name);
    }
}

#[test]
fn product_vector() {
    let vf = load();
    let v = &vf.product;
    let cfg = StreamConfig::with_masks(v.masks.clone()).unwrap();
    let a = generate_stream(v.seed_a, v.count, &cfg);
    let b = generate_stream(v.seed_b, v.count, &cfg);
    let product = &a * &b;
    assert_eq!(
        [a.decimal_len(), b.decimal_len(), product.decimal_len()],
        v.decimal_lengths,
        "{}",
        v.name
    );
    assert_eq!(hash(&product), v.hash, "{}", v.name);
}
