use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use decomment::normalizer::{Normalizer, Options, SYMBOL_DEFAULT};
use decomment::reader::{AsyncLineReader, ReaderConfig};

#[derive(Parser, Debug)]
#[command(name = "decomment")]
#[command(about = "Normalizes block comments from source code into readable prose")]
#[command(version)]
struct Args {
    /// Path of the file holding the comment block
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Comment symbol to strip from the input
    #[arg(short = 's', long = "symbol", default_value = SYMBOL_DEFAULT)]
    symbol: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries exactly the normalized result
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if !args.file.exists() {
        anyhow::bail!("Input file does not exist: {}", args.file.display());
    }

    let reader = AsyncLineReader::new(ReaderConfig::default());
    let (input, stats) = reader.read_to_string(&args.file).await?;
    info!(
        "Read {}: {} lines, {} bytes",
        args.file.display(),
        stats.lines_read,
        stats.bytes_read
    );

    let normalizer = Normalizer::new(Options {
        symbol: args.symbol,
        ..Options::default()
    });
    let output = normalizer.normalize(&input)?;

    println!("{output}");
    Ok(())
}
