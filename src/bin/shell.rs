//! bytemap Shell Binary
//!
//! Interactive read-eval loop over an in-memory ByteMap.

use std::io::{self, BufRead, Write};

use bytemap::shell::{Shell, USAGE};
use bytemap::{ByteMap, Config, HashKind};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

/// bytemap Shell
#[derive(Parser, Debug)]
#[command(name = "bytemap-shell")]
#[command(about = "Interactive shell for the bytemap key-value store")]
#[command(version)]
struct Args {
    /// Number of hash buckets
    #[arg(short, long, default_value = "8")]
    buckets: usize,

    /// Bucket hash function
    #[arg(long, value_enum, default_value = "fold")]
    hash: HashArg,

    /// Seed for the fold hash
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashArg {
    Fold,
    Crc32,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_filter = if args.verbose { "info,bytemap=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("bytemap shell v{}", bytemap::VERSION);

    let hasher = match args.hash {
        HashArg::Fold => HashKind::Fold { seed: args.seed },
        HashArg::Crc32 => HashKind::Crc32,
    };

    let config = Config::builder()
        .bucket_count(args.buckets)
        .hasher(hasher)
        .build();

    let map = match ByteMap::with_config(&config) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("Failed to create map: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(Shell::new(map)) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}

fn run(mut shell: Shell) -> bytemap::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("{}", USAGE);

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nExiting.");
            break;
        }

        let input = line.trim_end_matches(&['\n', '\r'][..]);
        if input.trim().is_empty() {
            continue;
        }

        match shell.execute_line(input) {
            Ok(outcome) if outcome.is_success() => {
                println!("{}", outcome);
                println!("{}", shell.dump_keys());
                println!("{}", shell.dump_buckets());
            }
            Ok(outcome) => eprintln!("{}", outcome),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}
