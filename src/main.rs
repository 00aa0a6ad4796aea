use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

use strrand::pattern::char_class::to_latin1;
use strrand::{CompileOptions, DEFAULT_MAX, DEFAULT_REPEAT_LIMIT, Generator};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Output is UTF-8, one string per line. Bytes from \\x escapes and the legacy \
                  `b` class appear as U+0000..U+00FF; use --raw to write them as single bytes."
)]
struct Args {
    /// Patterns to generate from
    #[arg(value_name = "PATTERN", required = true)]
    patterns: Vec<String>,

    /// Upper bound for `*`, `+` and `{n,}`
    #[arg(short = 'm', long, env = "STRRAND_MAX", default_value_t = DEFAULT_MAX)]
    max: usize,

    /// Largest repeat count any quantifier may request
    #[arg(long, env = "STRRAND_REPEAT_LIMIT", default_value_t = DEFAULT_REPEAT_LIMIT)]
    repeat_limit: usize,

    /// Write each character as one byte instead of UTF-8
    #[arg(short = 'r', long)]
    raw: bool,

    /// Seed for reproducible output
    #[arg(short = 's', long, env = "STRRAND_SEED")]
    seed: Option<u64>,

    /// Strings to generate per pattern
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Treat patterns as legacy single-letter patterns
    #[arg(short = 'l', long)]
    legacy: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress warnings
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logger(args: &Args) {
    let level = match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::Off,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let generator = Generator::with_options(CompileOptions {
        default_max: args.max,
        repeat_limit: args.repeat_limit,
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for pattern in &args.patterns {
        for _ in 0..args.count {
            let s = if args.legacy {
                generator.rand_pattern(pattern, &mut rng)
            } else {
                generator.rand_regex(pattern, &mut rng)
            }
            .with_context(|| format!("Failed to generate from pattern {pattern:?}"))?;
            if args.raw {
                let bytes = to_latin1(&s)
                    .with_context(|| format!("Output of {pattern:?} has characters above U+00FF"))?;
                out.write_all(&bytes)?;
                out.write_all(b"\n")?;
            } else {
                writeln!(out, "{s}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
