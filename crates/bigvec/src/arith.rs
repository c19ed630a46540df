//! Schoolbook arithmetic over [`BigValue`] words.
//!
//! This is the minimal engine the vector tools need to derive sums and products; it is checked
//! against an independent big-integer implementation in the property tests.

use std::ops::{Add, Mul};

use crate::BigValue;

impl BigValue {
    pub fn add_small(&self, a: u64) -> BigValue {
        let mut out = self.to_words();
        let mut carry = a;
        for word in out.iter_mut() {
            if carry == 0 {
                break;
            }
            let (sum, overflow) = word.overflowing_add(carry);
            *word = sum;
            carry = u64::from(overflow);
        }
        if carry != 0 {
            out.push(carry);
        }
        BigValue::from_vec(out)
    }

    pub fn mul_small(&self, m: u64) -> BigValue {
        let mut out = Vec::with_capacity(self.words().len() + 1);
        let mut carry = 0u64;
        for &word in self.words() {
            let t = u128::from(word) * u128::from(m) + u128::from(carry);
            out.push(t as u64);
            carry = (t >> 64) as u64;
        }
        out.push(carry);
        BigValue::from_vec(out)
    }

    /// Quotient and remainder by a non-zero word.
    pub(crate) fn div_rem_small(&self, d: u64) -> (BigValue, u64) {
        debug_assert!(d != 0, "division by zero");
        let divisor = u128::from(d);
        let mut quotient = vec![0u64; self.words().len()];
        let mut rem = 0u128;
        for (i, &word) in self.words().iter().enumerate().rev() {
            let cur = (rem << 64) | u128::from(word);
            quotient[i] = (cur / divisor) as u64;
            rem = cur % divisor;
        }
        (BigValue::from_vec(quotient), rem as u64)
    }
}

fn add_words(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = false;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (s1, c1) = x.overflowing_add(y);
        let (s2, c2) = s1.overflowing_add(u64::from(carry));
        out.push(s2);
        carry = c1 || c2;
    }
    if carry {
        out.push(1);
    }
    out
}

fn mul_words(a: &[u64], b: &[u64]) -> Vec<u64> {
    // Each row writes out[i..=i + b.len()]; the top slot is still zero when the row starts.
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let t = u128::from(x) * u128::from(y) + u128::from(out[i + j]) + u128::from(carry);
            out[i + j] = t as u64;
            carry = (t >> 64) as u64;
        }
        out[i + b.len()] = carry;
    }
    out
}

impl Add<&BigValue> for &BigValue {
    type Output = BigValue;

    fn add(self, rhs: &BigValue) -> BigValue {
        BigValue::from_vec(add_words(self.words(), rhs.words()))
    }
}

impl Add for BigValue {
    type Output = BigValue;

    fn add(self, rhs: BigValue) -> BigValue {
        &self + &rhs
    }
}

impl Mul<&BigValue> for &BigValue {
    type Output = BigValue;

    fn mul(self, rhs: &BigValue) -> BigValue {
        BigValue::from_vec(mul_words(self.words(), rhs.words()))
    }
}

impl Mul for BigValue {
    type Output = BigValue;

    fn mul(self, rhs: BigValue) -> BigValue {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_words, BigValue};

    const UMAX: u64 = u64::MAX;

    #[test]
    fn add_small_carries_through_words() {
        assert_eq!(BigValue::zero().add_small(1), BigValue::from(1));
        assert_eq!(BigValue::from(UMAX).add_small(1).words(), &[0, 1]);
        assert_eq!(from_words(&[UMAX, UMAX, 7]).add_small(1).words(), &[0, 0, 8]);
        assert_eq!(from_words(&[UMAX, UMAX]).add_small(2).words(), &[1, 0, 1]);
    }

    #[test]
    fn mul_small_grows_by_one_word() {
        assert_eq!(BigValue::from(UMAX).mul_small(UMAX).words(), &[1, UMAX - 1]);
        assert!(from_words(&[5, 6]).mul_small(0).is_zero());
        assert_eq!(from_words(&[5, 6]).mul_small(1).words(), &[5, 6]);
    }

    #[test]
    fn div_rem_small_inverts_mul_small() {
        let value = from_words(&[0x1234_5678_9abc_def0, 0xfeed, 3]);
        let product = value.mul_small(1_000_000_007).add_small(42);
        let (q, r) = product.div_rem_small(1_000_000_007);
        assert_eq!(q, value);
        assert_eq!(r, 42);

        let (q, r) = BigValue::zero().div_rem_small(10);
        assert!(q.is_zero());
        assert_eq!(r, 0);
    }

    #[test]
    fn add_handles_uneven_lengths() {
        let a = from_words(&[UMAX, UMAX, UMAX]);
        let b = BigValue::from(1);
        assert_eq!((&a + &b).words(), &[0, 0, 0, 1]);
        assert_eq!((&b + &a).words(), &[0, 0, 0, 1]);
        assert_eq!(&BigValue::zero() + &b, b);
    }

    #[test]
    fn mul_matches_known_products() {
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let a = from_words(&[UMAX, UMAX]);
        assert_eq!((&a * &a).words(), &[1, 0, UMAX - 1, UMAX]);
        assert!((&a * &BigValue::zero()).is_zero());
        assert_eq!(BigValue::from(3) * BigValue::from(5), BigValue::from(15));
    }

    #[test]
    fn factorial_by_small_products() {
        let mut acc = BigValue::from(1);
        for i in 1..=20u64 {
            acc = acc.mul_small(i);
        }
        assert_eq!(acc, BigValue::from(2_432_902_008_176_640_000));
        assert_eq!(acc.mul_small(21).to_string(), "51090942171709440000");
    }
}
