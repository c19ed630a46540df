use crate::radix::{self, RadixConversion};
use crate::{BigValue, BigVecError, Result};

/// An independent base converter used only to cross-check [`radix::convert`].
///
/// Implementations receive the canonical words of the value and a radix already validated to
/// `2..=36`, and return the digits most significant first in either letter case.
pub trait RadixOracle {
    fn to_string_radix(&self, words: &[u64], radix: u32) -> String;
}

impl<F> RadixOracle for F
where
    F: Fn(&[u64], u32) -> String,
{
    fn to_string_radix(&self, words: &[u64], radix: u32) -> String {
        self(words, radix)
    }
}

/// Convert `value` and confirm the oracle produces the same digit sequence.
pub fn verify<O>(value: &BigValue, radix: u32, oracle: &O) -> Result<RadixConversion>
where
    O: RadixOracle + ?Sized,
{
    let conversion = radix::convert(value, radix)?;
    let expected = oracle.to_string_radix(&conversion.words, radix);
    if !conversion.digits.eq_digits(&expected) {
        tracing::warn!(radix, %expected, actual = %conversion.digits, "oracle mismatch");
        return Err(BigVecError::OracleMismatch {
            radix,
            expected,
            actual: conversion.digits.into_string(),
        });
    }
    Ok(conversion)
}
