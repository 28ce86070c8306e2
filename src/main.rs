use std::fs::File;
use std::io::{stdout, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use rollinghash::{rolling_sums, Algorithm, DEFAULT_WINDOW_CAP};

#[derive(Parser, Debug)]
#[clap(version, about)]
/// Prints the rolling checksum of every window of --window=<WINDOW> bytes in a file
struct Cli {
    #[clap(long, default_value = "adler32")]
    /// The rolling checksum to use: adler32 or bozo32
    algorithm: Algorithm,
    #[clap(long, default_value_t = DEFAULT_WINDOW_CAP)]
    /// The number of bytes in the sliding window
    window: usize,
    #[clap(long)]
    /// The polynomial base, only used by bozo32
    base: Option<u32>,
    #[clap(long, default_value_t = 1)]
    /// Print a checksum only every <EVERY> rolled bytes
    every: usize,
    /// The file to checksum
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli: Cli = Cli::parse();

    ensure!(cli.window > 0, "--window must be at least 1 byte");
    ensure!(cli.every > 0, "--every must be at least 1");

    info!(
        "Rolling {} over {} with a window of {} bytes",
        cli.algorithm,
        cli.file.display(),
        cli.window
    );

    let mut content = Vec::<u8>::new();
    File::open(&cli.file)
        .and_then(|mut file| file.read_to_end(&mut content))
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    if content.len() < cli.window {
        warn!(
            "{} is shorter than the window, checksumming all {} bytes at once",
            cli.file.display(),
            content.len()
        );
    }

    let mut checksum = cli.algorithm.checksum(cli.base);
    let sums = rolling_sums(checksum.as_mut(), &content, cli.window, cli.every);

    let mut out = BufWriter::new(stdout().lock());
    for (offset, sum) in &sums {
        writeln!(out, "{}\t{:08x}", offset, sum)?;
    }
    out.flush()?;

    info!("Printed {} checksums", sums.len());
    Ok(())
}
