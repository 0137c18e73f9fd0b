use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use recon::decode_digits;

mod input;

#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// Enables debug output. Multiple occurrences increase its verbosity
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstructs the secret of each given share file.
    Recover {
        /// JSON share files, one secret per file. If none is given, reads a
        /// single document from STDIN.
        #[clap(parse(from_os_str), value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// Decodes a single base-encoded value.
    Decode {
        /// Numeric base the value is written in.
        #[clap(short, long)]
        base: u32,
        /// The digit string to decode.
        value: String,
    },
}

fn read_to_string(path: &Option<PathBuf>) -> Result<String> {
    // Bit dirty but it's only small share files so doesn't really matter
    Ok(match path {
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(f) => fs::read_to_string(f)?,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        _ => log::Level::Debug,
    };
    simple_logger::init_with_level(level).expect("Initializing logger failed!");

    match cli.command {
        Commands::Recover { files } => {
            if files.is_empty() {
                let contents = read_to_string(&None)?;
                let secret = input::recover(&contents)?;
                println!("Secret for <stdin>: {}", secret);
                return Ok(());
            }

            for file in files {
                let contents = read_to_string(&Some(file.clone()))
                    .with_context(|| format!("Can't read share file {:?}!", file))?;
                let secret = input::recover(&contents)
                    .with_context(|| format!("Can't recover the secret of {:?}!", file))?;
                println!("Secret for {}: {}", file.display(), secret);
            }
            Ok(())
        }
        Commands::Decode { base, value } => {
            let decoded = decode_digits(value.trim(), base)?;
            println!("{}", decoded);
            Ok(())
        }
    }
}
