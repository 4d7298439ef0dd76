// SPDX-License-Identifier: MIT
//
// legible: make a background/text color pair readable from the command line.
//
// This is the binary that wires the two crates together:
//
//   legible-color    → rgb() parsing, Rgb/Hsv conversion
//   legible-contrast → luminance, contrast, brightness search
//
// Each invocation flows through:
//
//   argv → parse_args → resolve_with → report → stdout
//
// Diagnostics go to stderr through tracing; set RUST_LOG=debug (or trace,
// for every search step) to watch the search.
//
// Exit codes:
//
//   0  pair was already readable, or the search satisfied the threshold
//   1  bad arguments or a malformed color
//   2  search exhausted; the best pair found is still printed

use std::env;
use std::process;

use legible_color::{ColorError, Rgb, parse_css_color};
use legible_contrast::{Outcome, Resolution, ResolverConfig, resolve_with};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: legible <background> <text> [--threshold N] [--step N] [--max-steps N]";

// ─── Arguments ──────────────────────────────────────────────────────────────

/// A fully parsed command line.
#[derive(Debug, PartialEq)]
struct Args {
    background: Rgb,
    text: Rgb,
    config: ResolverConfig,
}

#[derive(Debug, PartialEq, Error)]
enum ArgError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Parse everything after the program name.
///
/// Colors are positional (background first); flags may appear anywhere.
fn parse_args<I>(args: I) -> Result<Args, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = ResolverConfig::default();
    let mut colors = Vec::with_capacity(2);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--threshold" => {
                let threshold: f64 = flag_value(&arg, args.next())?;
                if threshold.is_nan() || threshold < 1.0 {
                    return Err(ArgError::Usage(format!(
                        "threshold must be at least 1, got {threshold}"
                    )));
                }
                config = config.with_threshold(threshold);
            }
            "--step" => config = config.with_step(flag_value(&arg, args.next())?),
            "--max-steps" => config = config.with_max_steps(flag_value(&arg, args.next())?),
            flag if flag.starts_with("--") => {
                return Err(ArgError::Usage(format!("unknown option {flag}")));
            }
            _ => colors.push(parse_css_color(&arg)?),
        }
    }

    match colors.as_slice() {
        [background, text] => Ok(Args {
            background: *background,
            text: *text,
            config,
        }),
        _ => Err(ArgError::Usage(format!(
            "expected 2 colors, got {}",
            colors.len()
        ))),
    }
}

/// Parse the value following a `--flag`.
fn flag_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ArgError> {
    let value = value.ok_or_else(|| ArgError::Usage(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| ArgError::Usage(format!("invalid value for {flag}: {value}")))
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn report(resolution: &Resolution) -> String {
    format!(
        "background: {}\ntext:       {}\nratio:      {:.2} ({}, {} steps)",
        resolution.background,
        resolution.text,
        resolution.ratio,
        resolution.outcome,
        resolution.steps,
    )
}

const fn exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Unchanged | Outcome::Satisfied => 0,
        Outcome::Exhausted => 2,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    init_logging();

    let args = parse_args(env::args().skip(1)).unwrap_or_else(|e| {
        eprintln!("legible: {e}");
        process::exit(1);
    });

    debug!(
        background = %args.background,
        text = %args.text,
        config = ?args.config,
        "parsed arguments"
    );
    let resolution = resolve_with(args.background, args.text, &args.config);
    println!("{}", report(&resolution));
    process::exit(exit_code(resolution.outcome));
}

// ─── Tests ──────────────────────────────────────────────────────────────────
