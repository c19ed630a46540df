#![forbid(unsafe_code)]

//! Deterministic test vectors for arbitrary-precision unsigned integers.
//!
//! Vectors are synthesised from small seeds using plain 64-bit word arithmetic, so they can be
//! reproduced by any implementation without trusting the big-integer library under test:
//!
//! - [`BigValue`], [`to_words`], [`from_words`]: canonical little-endian 64-bit word encoding
//! - [`generate_sequence`]: words forming an arithmetic progression
//! - [`generate_stream`]: words from a seeded, masked linear-congruential recurrence
//! - [`hash()`]: `(wordSum, wordXor, mod61, polyHash, crc)` fingerprint for cross-checking
//! - [`to_string_radix`], [`parse_radix`]: radix 2..=36 strings, verified via a [`RadixOracle`]
//!
//! A small schoolbook engine (`+`, `*`, [`BigValue::mul_small`]) derives composite vectors such
//! as products of two streams.

mod arith;
mod error;
pub mod hash;
mod oracle;
pub mod radix;
mod sequence;
pub mod stream;
mod value;

pub use error::{BigVecError, Result};
pub use hash::{hash, HashTuple};
pub use oracle::{verify, RadixOracle};
pub use radix::{
    convert, convert_case, parse_radix, to_string_radix, to_string_radix_case, LetterCase,
    Radix, RadixConversion, RadixString,
};
pub use sequence::{generate_sequence, sequence_words};
pub use stream::{generate_stream, stream_words, LcgStream, StreamConfig};
pub use value::{from_words, to_words, BigValue};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests;
