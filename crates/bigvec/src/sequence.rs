use crate::{BigValue, BigVecError, Result};

/// Words of the arithmetic progression `lo, lo + step, ...` below `hi`, each truncated to its low
/// 64 bits (two's complement for negative terms).
///
/// The list is returned as generated: it may be empty (`lo >= hi`) and may end in zero words.
/// A progression that can never reach `hi` is rejected instead of looping forever.
pub fn sequence_words(lo: i128, hi: i128, step: i128) -> Result<Vec<u64>> {
    if lo < hi && step <= 0 {
        return Err(BigVecError::NonAdvancingSequence { lo, hi, step });
    }

    let mut words = Vec::new();
    let mut cur = lo;
    while cur < hi {
        words.push(cur as u64);
        match cur.checked_add(step) {
            Some(next) => cur = next,
            // Only reachable with step > 0, so the next term is past any i128 bound.
            None => break,
        }
    }
    tracing::trace!(%lo, %hi, %step, len = words.len(), "sequence words");
    Ok(words)
}

/// Big value whose word `i` is `lo + i * step` (truncated to 64 bits).
pub fn generate_sequence(lo: i128, hi: i128, step: i128) -> Result<BigValue> {
    Ok(BigValue::from_words(&sequence_words(lo, hi, step)?))
}
