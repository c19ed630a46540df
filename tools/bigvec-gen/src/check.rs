//! Seeded conformance sweep against `num-bigint`.
//!
//! ## Environment variables
//!
//! [`CheckConfig::from_env`] recognises:
//!
//! - `BIGVEC_CHECK_CASES` (default: `64`): number of generated cases.
//! - `BIGVEC_CHECK_SEED` (default: `0x5DEE_CE66_D000_000B`): seed for case selection.
//! - `BIGVEC_CHECK_REPORT_PATH` (optional): write a JSON report to this path.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use bigvec::stream::{ALL_ONES_64, MASKS_FOR_ADD, MASKS_FOR_MUL};
use bigvec::{generate_stream, hash, parse_radix, verify, BigValue, StreamConfig};
use serde::Serialize;

use crate::oracle::{reference_hash, to_biguint, NumBigintOracle};
use crate::parse::parse_u64;

pub const DEFAULT_CASES: usize = 64;
pub const DEFAULT_SEED: u64 = 0x5DEE_CE66_D000_000B;
const MAX_STREAM_WORDS: u64 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub cases: usize,
    pub seed: u64,
    pub report_path: Option<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            cases: DEFAULT_CASES,
            seed: DEFAULT_SEED,
            report_path: None,
        }
    }
}

impl CheckConfig {
    pub fn from_env() -> Self {
        let cases = std::env::var("BIGVEC_CHECK_CASES")
            .ok()
            .and_then(|v| parse_u64(&v).ok())
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(DEFAULT_CASES);
        let seed = std::env::var("BIGVEC_CHECK_SEED")
            .ok()
            .and_then(|v| parse_u64(&v).ok())
            .unwrap_or(DEFAULT_SEED);
        let report_path = std::env::var_os("BIGVEC_CHECK_REPORT_PATH").map(PathBuf::from);
        Self {
            cases,
            seed,
            report_path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckFailure {
    pub case: usize,
    pub check: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub seed: u64,
    pub total_cases: usize,
    pub failures: Vec<CheckFailure>,
    pub coverage: BTreeMap<String, usize>,
}

impl CheckReport {
    fn new(seed: u64, total_cases: usize) -> Self {
        Self {
            seed,
            total_cases,
            failures: Vec::new(),
            coverage: BTreeMap::new(),
        }
    }

    fn cover(&mut self, key: impl Into<String>) {
        *self.coverage.entry(key.into()).or_default() += 1;
    }

    fn fail(&mut self, case: usize, check: &'static str, detail: String) {
        tracing::error!(case, check, %detail, "check failed");
        self.failures.push(CheckFailure {
            case,
            check,
            detail,
        });
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, contents)
    }
}

/// xorshift64* used only to pick case parameters; the vectors themselves come from bigvec's
/// stream generator.
struct CaseRng(u64);

impl CaseRng {
    fn new(seed: u64) -> Self {
        // xorshift state must be non-zero.
        Self(if seed == 0 { DEFAULT_SEED } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

fn mask_preset(case: usize) -> (&'static str, Vec<u64>) {
    match case % 3 {
        0 => ("all", vec![ALL_ONES_64]),
        1 => ("add", MASKS_FOR_ADD.to_vec()),
        _ => ("mul", MASKS_FOR_MUL.to_vec()),
    }
}

fn check_value(
    report: &mut CheckReport,
    case: usize,
    label: &'static str,
    value: &BigValue,
    radix: u32,
) {
    let reference = to_biguint(value.words());

    let expected = reference_hash(&reference);
    let actual = hash(value);
    if actual == expected {
        report.cover(format!("hash/{label}"));
    } else {
        report.fail(case, "hash", format!("{label}: expected {expected}, got {actual}"));
    }

    match verify(value, radix, &NumBigintOracle) {
        Ok(conversion) => {
            report.cover(format!("radix/{radix}"));
            match parse_radix(conversion.digits.as_str(), radix) {
                Ok(parsed) if &parsed == value => report.cover("parse"),
                Ok(parsed) => report.fail(
                    case,
                    "parse",
                    format!("{label}: radix {radix} parsed back as {parsed:?}"),
                ),
                Err(err) => report.fail(case, "parse", format!("{label}: {err}")),
            }
        }
        Err(err) => report.fail(case, "radix", format!("{label}: {err}")),
    }
}

pub fn run(config: &CheckConfig) -> anyhow::Result<CheckReport> {
    let mut rng = CaseRng::new(config.seed);
    let mut report = CheckReport::new(config.seed, config.cases);

    for case in 0..config.cases {
        let (preset, masks) = mask_preset(case);
        let stream_config = StreamConfig::with_masks(masks)?;
        let (seed_a, seed_b) = (rng.next_u64(), rng.next_u64());
        let count_a = rng.below(MAX_STREAM_WORDS) as usize;
        let count_b = 1 + rng.below(MAX_STREAM_WORDS) as usize;
        let radix = 2 + rng.below(35) as u32;
        tracing::debug!(case, preset, seed_a, seed_b, count_a, count_b, radix, "case");
        report.cover(format!("masks/{preset}"));

        let a = generate_stream(seed_a, count_a, &stream_config);
        let b = generate_stream(seed_b, count_b, &stream_config);
        let (ra, rb) = (to_biguint(a.words()), to_biguint(b.words()));

        let sum = &a + &b;
        if to_biguint(sum.words()) == &ra + &rb {
            report.cover("add");
        } else {
            report.fail(case, "add", format!("{a:?} + {b:?} gave {sum:?}"));
        }

        let product = &a * &b;
        if to_biguint(product.words()) == &ra * &rb {
            report.cover("mul");
        } else {
            report.fail(case, "mul", format!("{a:?} * {b:?} gave {product:?}"));
        }

        check_value(&mut report, case, "stream", &a, radix);
        check_value(&mut report, case, "sum", &sum, radix);
        check_value(&mut report, case, "product", &product, radix);
    }

    if let Some(path) = &config.report_path {
        report.write_json(path)?;
    }
    tracing::info!(
        cases = report.total_cases,
        failures = report.failures.len(),
        "check finished"
    );
    Ok(report)
}
