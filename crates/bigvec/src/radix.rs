//! Positional string conversion for radices 2 through 36.
//!
//! Digits use `0-9` then `a-z`. Letter case is presentation only: parsing accepts either case
//! and [`RadixString::eq_digits`] compares digit values.

use std::fmt;

use crate::{BigValue, BigVecError, Result};

const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A radix in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;
    pub const DECIMAL: Radix = Radix(10);

    pub fn new(radix: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(BigVecError::InvalidRadix { radix })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Largest power of the radix that fits in a word, and its exponent.
    fn chunk(self) -> (u64, usize) {
        let r = u64::from(self.0);
        let mut power = r;
        let mut digits = 1;
        while let Some(next) = power.checked_mul(r) {
            power = next;
            digits += 1;
        }
        (power, digits)
    }
}

impl TryFrom<u32> for Radix {
    type Error = BigVecError;

    fn try_from(radix: u32) -> Result<Self> {
        Self::new(radix)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
}

impl LetterCase {
    fn alphabet(self) -> &'static [u8; 36] {
        match self {
            LetterCase::Lower => DIGITS_LOWER,
            LetterCase::Upper => DIGITS_UPPER,
        }
    }
}

/// Digits of a value, most significant first, with no leading zero except `"0"` itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadixString(String);

impl RadixString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Digit values, most significant first.
    pub fn digit_values(&self) -> impl Iterator<Item = u32> + '_ {
        // Only alphabet characters are ever stored.
        self.0.chars().map(|c| c.to_digit(Radix::MAX).unwrap_or(0))
    }

    /// Compare digit sequences, ignoring letter case.
    pub fn eq_digits(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for RadixString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for RadixString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A radix string together with the canonical words of the value it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixConversion {
    pub radix: Radix,
    pub digits: RadixString,
    pub words: Vec<u64>,
}

pub(crate) fn render(value: &BigValue, radix: Radix, case: LetterCase) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    // Peel one word-sized power of the radix per division; every chunk but the top one is
    // zero-padded to the full chunk width.
    let (chunk, chunk_digits) = radix.chunk();
    let mut chunks = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        let (q, r) = rest.div_rem_small(chunk);
        chunks.push(r);
        rest = q;
    }

    let alphabet = case.alphabet();
    let r = u64::from(radix.get());
    let mut out: Vec<u8> = Vec::with_capacity(chunks.len() * chunk_digits);
    let mut buf = [0u8; 64];
    for (i, &chunk_value) in chunks.iter().rev().enumerate() {
        let mut n = chunk_value;
        let mut len = 0;
        loop {
            buf[len] = alphabet[(n % r) as usize];
            len += 1;
            n /= r;
            if n == 0 {
                break;
            }
        }
        if i > 0 {
            while len < chunk_digits {
                buf[len] = b'0';
                len += 1;
            }
        }
        out.extend(buf[..len].iter().rev());
    }
    out.into_iter().map(char::from).collect()
}

/// Render `value` in `radix` with lowercase letters.
pub fn to_string_radix(value: &BigValue, radix: u32) -> Result<RadixString> {
    to_string_radix_case(value, radix, LetterCase::Lower)
}

pub fn to_string_radix_case(value: &BigValue, radix: u32, case: LetterCase) -> Result<RadixString> {
    let radix = Radix::new(radix)?;
    Ok(RadixString(render(value, radix, case)))
}

/// Render `value` and capture its canonical words alongside the digits.
pub fn convert(value: &BigValue, radix: u32) -> Result<RadixConversion> {
    convert_case(value, radix, LetterCase::Lower)
}

pub fn convert_case(value: &BigValue, radix: u32, case: LetterCase) -> Result<RadixConversion> {
    let radix = Radix::new(radix)?;
    let digits = RadixString(render(value, radix, case));
    tracing::debug!(
        radix = radix.get(),
        digits = digits.as_str().len(),
        words = value.words().len(),
        "radix conversion"
    );
    Ok(RadixConversion {
        radix,
        digits,
        words: value.to_words(),
    })
}

/// Parse a digit string in `radix`. Letters may be either case; leading zeros are allowed.
pub fn parse_radix(digits: &str, radix: u32) -> Result<BigValue> {
    let radix = Radix::new(radix)?;
    if digits.is_empty() {
        return Err(BigVecError::EmptyDigits);
    }

    let (chunk, chunk_digits) = radix.chunk();
    let r = u64::from(radix.get());
    let mut value = BigValue::zero();
    let mut acc = 0u64;
    let mut pending = 0usize;
    for (index, ch) in digits.chars().enumerate() {
        let d = ch.to_digit(radix.get()).ok_or(BigVecError::InvalidDigit {
            ch,
            index,
            radix: radix.get(),
        })?;
        acc = acc * r + u64::from(d);
        pending += 1;
        if pending == chunk_digits {
            value = value.mul_small(chunk).add_small(acc);
            acc = 0;
            pending = 0;
        }
    }
    if pending > 0 {
        value = value.mul_small(r.pow(pending as u32)).add_small(acc);
    }
    Ok(value)
}
