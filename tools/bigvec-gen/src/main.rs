use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use bigvec::stream::{DEFAULT_ADD, DEFAULT_MULT};
use bigvec::{
    convert, generate_stream, hash, parse_radix, sequence_words, stream_words,
    to_string_radix_case, verify, BigValue, HashTuple, LetterCase, StreamConfig,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

mod check;
mod oracle;
mod parse;
mod vectors;

use crate::oracle::NumBigintOracle;
use crate::parse::{join_words, parse_masks, parse_u64, MaskSet};

#[derive(Parser, Debug)]
#[command(
    name = "bigvec-gen",
    about = "Generate and cross-check deterministic big-integer test vectors."
)]
struct Args {
    /// Print JSON instead of text
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Value whose words are lo, lo+step, ... below hi
    Seq {
        #[arg(long, allow_hyphen_values = true)]
        lo: i128,

        #[arg(long, allow_hyphen_values = true)]
        hi: i128,

        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        step: i128,
    },

    /// Value built from the seeded LCG word stream
    Lcg {
        #[arg(long, value_parser = parse_u64)]
        seed: u64,

        /// Number of 64-bit words to generate
        #[arg(long)]
        count: usize,

        /// Mask preset (all, add, mul) or comma-separated masks
        #[arg(long, default_value = "all", value_parser = parse_masks)]
        masks: MaskSet,

        #[arg(long, value_parser = parse_u64, default_value_t = DEFAULT_MULT)]
        mult: u64,

        #[arg(long, value_parser = parse_u64, default_value_t = DEFAULT_ADD)]
        add: u64,
    },

    /// Multiply two streams and print decimal lengths and the product fingerprint
    Mul {
        #[arg(long, value_parser = parse_u64, default_value_t = 5)]
        seed_a: u64,

        #[arg(long, value_parser = parse_u64, default_value_t = 11)]
        seed_b: u64,

        #[arg(long, default_value_t = 100)]
        count: usize,

        #[arg(long, default_value = "mul", value_parser = parse_masks)]
        masks: MaskSet,
    },

    /// Render a value in a radix and print its words
    Radix {
        /// Value to convert (digits in --input-radix)
        value: String,

        /// Output radix (2..=36)
        radix: u32,

        #[arg(long, default_value_t = 10)]
        input_radix: u32,

        /// Use uppercase letters
        #[arg(long, action = clap::ArgAction::SetTrue)]
        upper: bool,

        /// Skip the num-bigint cross-check
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_verify: bool,
    },

    /// Seeded sweep comparing bigvec against num-bigint (flags override BIGVEC_CHECK_* env vars)
    Check {
        #[arg(long)]
        cases: Option<usize>,

        #[arg(long, value_parser = parse_u64)]
        seed: Option<u64>,

        /// Write a JSON report to this path
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// Regenerate the golden vector file
    Vectors {
        /// Output path (defaults to stdout)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorOutput {
    words: Vec<u64>,
    value_words: Vec<u64>,
    decimal_len: usize,
    hash: HashTuple,
}

impl VectorOutput {
    fn new(words: Vec<u64>) -> Self {
        let value = BigValue::from_words(&words);
        Self {
            words,
            value_words: value.to_words(),
            decimal_len: value.decimal_len(),
            hash: hash(&value),
        }
    }

    fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            return print_json(self);
        }
        println!("words: {}", join_words(&self.words));
        println!("value words: {}", join_words(&self.value_words));
        println!("decimal length: {}", self.decimal_len);
        println!("hash: {}", self.hash);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductOutput {
    decimal_lengths: [usize; 3],
    hash: HashTuple,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RadixOutput {
    radix: u32,
    digits: String,
    words: Vec<u64>,
    verified: bool,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Seq { lo, hi, step } => {
            let words = sequence_words(lo, hi, step).context("generate sequence")?;
            VectorOutput::new(words).print(args.json)
        }
        Command::Lcg {
            seed,
            count,
            masks,
            mult,
            add,
        } => {
            let cfg = StreamConfig::new(masks.0, mult, add).context("stream config")?;
            VectorOutput::new(stream_words(seed, count, &cfg)).print(args.json)
        }
        Command::Mul {
            seed_a,
            seed_b,
            count,
            masks,
        } => {
            let cfg = StreamConfig::with_masks(masks.0).context("stream config")?;
            let a = generate_stream(seed_a, count, &cfg);
            let b = generate_stream(seed_b, count, &cfg);
            let product = &a * &b;
            let out = ProductOutput {
                decimal_lengths: [a.decimal_len(), b.decimal_len(), product.decimal_len()],
                hash: hash(&product),
            };
            if args.json {
                return print_json(&out);
            }
            let [la, lb, lp] = out.decimal_lengths;
            println!("{la} {lb} {lp}");
            println!("{}", out.hash);
            Ok(())
        }
        Command::Radix {
            value,
            radix,
            input_radix,
            upper,
            no_verify,
        } => run_radix(&value, radix, input_radix, upper, !no_verify, args.json),
        Command::Check {
            cases,
            seed,
            report,
        } => {
            let mut config = check::CheckConfig::from_env();
            if let Some(cases) = cases {
                config.cases = cases;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if report.is_some() {
                config.report_path = report;
            }

            let report = check::run(&config)?;
            if args.json {
                print_json(&report)?;
            } else {
                println!(
                    "check: {} cases, {} failures (seed {:#x})",
                    report.total_cases,
                    report.failures.len(),
                    report.seed
                );
            }
            if !report.passed() {
                bail!("{} check(s) failed", report.failures.len());
            }
            Ok(())
        }
        Command::Vectors { out } => {
            let file = vectors::build()?;
            let json = serde_json::to_string_pretty(&file).context("serialize vectors")?;
            match out {
                Some(path) => fs::write(&path, format!("{json}\n"))
                    .with_context(|| format!("write {}", path.display())),
                None => {
                    println!("{json}");
                    Ok(())
                }
            }
        }
    }
}

fn run_radix(
    value: &str,
    radix: u32,
    input_radix: u32,
    upper: bool,
    verify_oracle: bool,
    json: bool,
) -> anyhow::Result<()> {
    let value = parse_radix(value, input_radix)
        .with_context(|| format!("parse {value:?} in radix {input_radix}"))?;

    // The oracle comparison ignores letter case, so verification and presentation are separate.
    let conversion = if verify_oracle {
        verify(&value, radix, &NumBigintOracle)?
    } else {
        convert(&value, radix)?
    };
    let case = if upper {
        LetterCase::Upper
    } else {
        LetterCase::Lower
    };
    let digits = to_string_radix_case(&value, radix, case)?.into_string();

    if json {
        return print_json(&RadixOutput {
            radix,
            digits,
            words: conversion.words,
            verified: verify_oracle,
        });
    }
    println!("{digits}");
    println!("{}", join_words(&conversion.words));
    Ok(())
}
