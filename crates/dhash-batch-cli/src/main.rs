use anyhow::Context;
use clap::{Parser, Subcommand};
use dhash_batch_core::{BatchHasher, HashConfig, HashRequest};
use log::{error, info};
use std::path::{Path, PathBuf};

mod config;
mod logging;

#[derive(Parser)]
#[command(name = "dhash-batch")]
#[command(about = "Compute difference hashes for images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash one or more image files
    Hash {
        /// Image files to hash
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Hash requests as kind:length (h, v or d), in output order
        #[arg(short, long = "request", default_value = "d:8")]
        requests: Vec<HashRequest>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Encode requests in parallel
        #[arg(long)]
        parallel: bool,

        /// Verbosity level
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "dhash-batch.json")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash {
            images,
            requests,
            config,
            parallel,
            verbose,
        } => {
            logging::init_logger(verbose);

            let mut config = match config {
                Some(path) => config::load(&path)?,
                None => HashConfig::default(),
            };
            config.parallel |= parallel;

            let hasher = BatchHasher::new(config);
            info!(
                "Hashing {} image(s) with {} request(s)",
                images.len(),
                requests.len()
            );

            let mut failures = 0;
            for path in &images {
                match hash_file(&hasher, path, &requests) {
                    Ok(line) => println!("{}", line),
                    Err(e) => {
                        error!("{:#}", e);
                        failures += 1;
                    }
                }
            }

            if failures > 0 {
                anyhow::bail!("{} of {} image(s) failed", failures, images.len());
            }
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            config::save(&HashConfig::default(), &path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// Decode `path` and format its fingerprints as `<path>\t<hex>...`
fn hash_file(hasher: &BatchHasher, path: &Path, requests: &[HashRequest]) -> anyhow::Result<String> {
    let img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;

    let fingerprints = hasher
        .compute(&img, requests)
        .with_context(|| format!("Failed to hash {}", path.display()))?;

    let mut line = path.display().to_string();
    for fingerprint in &fingerprints {
        line.push('\t');
        line.push_str(&fingerprint.to_hex());
    }
    Ok(line)
}
