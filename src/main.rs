//! Command-line entry point: decode, filter, encode, report timing.
//!
//! ```bash
//! filtrarium mp noisy.png clean.png --diameter 7
//! ```
//!
//! The filter code is two characters: family (`i` invert, `m` median) then
//! strategy (`s` scalar, `p` parallel, `v` vectorized). The reported filter
//! duration is observational only - it excludes decode and encode time.

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use filtrarium::{FilterSpec, Image};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIAMETER: usize = 7;

struct Args {
    code: String,
    input: PathBuf,
    output: PathBuf,
    diameter: usize,
}

fn main() -> Result<()> {
    init_tracing();

    let args = parse_args()?;
    tracing::info!("filtrarium {}", env!("CARGO_PKG_VERSION"));

    // Reject bad filter codes before spending time on decode.
    let spec = FilterSpec::parse(&args.code)?;

    let mut image = Image::load(&args.input)?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        "loaded {}",
        args.input.display()
    );

    let start = Instant::now();
    spec.apply(&mut image, args.diameter)?;
    tracing::info!("{spec} completed in {:?}", start.elapsed());

    image.save(&args.output)?;
    tracing::info!("saved {}", args.output.display());

    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut diameter = DEFAULT_DIAMETER;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--diameter" | "-d" => {
                let value = args.next().context("--diameter requires a value")?;
                diameter = value
                    .parse()
                    .with_context(|| format!("invalid diameter '{value}'"))?;
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 3 {
        bail!(
            "usage: filtrarium <filter> <input> <output> [--diameter N]\n  \
             filters: is ip iv (invert), ms mp (median)"
        );
    }

    let output = PathBuf::from(positional.pop().unwrap());
    let input = PathBuf::from(positional.pop().unwrap());
    let code = positional.pop().unwrap();

    Ok(Args {
        code,
        input,
        output,
        diameter,
    })
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
