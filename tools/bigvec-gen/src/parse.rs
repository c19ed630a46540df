use bigvec::stream::{ALL_ONES_64, MASKS_FOR_ADD, MASKS_FOR_MUL};

/// Mask list chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSet(pub Vec<u64>);

/// Parse a `u64` written in decimal or `0x` hex, with optional `_` separators (so constants can
/// be pasted straight from source).
pub fn parse_u64(input: &str) -> Result<u64, String> {
    let cleaned: String = input.trim().chars().filter(|c| *c != '_').collect();
    let (radix, digits) = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(rest) => (16, rest),
        None => (10, cleaned.as_str()),
    };
    if digits.is_empty() {
        return Err(format!("expected a number, got {input:?}"));
    }
    u64::from_str_radix(digits, radix).map_err(|err| format!("invalid number {input:?}: {err}"))
}

/// `all`, `add`, `mul`, or a comma-separated list of numbers.
pub fn parse_masks(input: &str) -> Result<MaskSet, String> {
    let masks = match input.trim().to_ascii_lowercase().as_str() {
        "all" => vec![ALL_ONES_64],
        "add" => MASKS_FOR_ADD.to_vec(),
        "mul" => MASKS_FOR_MUL.to_vec(),
        list => list
            .split(',')
            .map(parse_u64)
            .collect::<Result<Vec<_>, _>>()?,
    };
    if masks.is_empty() {
        return Err("mask list is empty".to_string());
    }
    Ok(MaskSet(masks))
}

pub fn join_words(words: &[u64]) -> String {
    words
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
