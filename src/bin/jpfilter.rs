use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use jpcharset::{
    codepoint::{self, CodepointError},
    jisx0208::JisX0208,
    kanji::{PersonalName, RegularUse},
    Discriminator, Membership,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Domain {
    /// Printable ASCII and JIS X 0208
    Jisx0208,
    /// Regular-use kanji; other scripts pass through
    RegularUse,
    /// Kanji usable in personal names; other scripts pass through
    PersonalName,
}

#[derive(Parser)]
#[command(
    name = "jpfilter",
    about = "Replace runs of characters outside a Japanese character set"
)]
struct Cli {
    /// Text to filter (reads stdin line by line when omitted)
    text: Option<String>,
    /// Character set to filter against
    #[arg(long, value_enum, default_value_t = Domain::Jisx0208)]
    domain: Domain,
    /// Written once for each run of invalid characters
    #[arg(long, default_value = "□")]
    replacement: String,
    /// Characters to always keep, e.g. "髙,U+FA11"
    #[arg(long, default_value = "")]
    allow: String,
    /// Characters to always replace
    #[arg(long, default_value = "")]
    disallow: String,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Codepoint(#[from] CodepointError),
}

fn filter<M: Membership>(cli: &Cli, base: M) -> Result<(), Error> {
    let d = Discriminator::new(
        base,
        codepoint::parse_list(&cli.allow)?,
        codepoint::parse_list(&cli.disallow)?,
    );
    let mut out = io::stdout().lock();

    if let Some(text) = &cli.text {
        writeln!(out, "{}", d.to_valid(text, &cli.replacement))?;
        return Ok(());
    }

    // raw bytes, so that malformed input is replaced rather than rejected
    let mut input = io::stdin().lock();
    let mut line = Vec::new();
    while input.read_until(b'\n', &mut line)? > 0 {
        let trimmed = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
        writeln!(out, "{}", d.to_valid_bytes(trimmed, &cli.replacement))?;
        line.clear();
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.domain {
        Domain::Jisx0208 => filter(&cli, JisX0208),
        Domain::RegularUse => filter(&cli, RegularUse),
        Domain::PersonalName => filter(&cli, PersonalName),
    };

    if let Err(e) = result {
        eprintln!("jpfilter: {e}");
        process::exit(1);
    }
}
