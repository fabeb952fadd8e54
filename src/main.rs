//! Entropy Words CLI
//!
//! Prints a wrapped list of randomly chosen dictionary words.

use clap::Parser;
use entropy_words::{output::wrap_words, FileConfig, Overrides, Passphrase, RunConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "entropy-words")]
#[command(about = "Unbiased passphrase word lists from a dictionary and a strong entropy source")]
#[command(version = entropy_words::VERSION)]
struct Cli {
    /// Number of words to print [default: 120]
    count: Option<usize>,

    /// Maximum word length [default: 8]
    max_len: Option<usize>,

    /// Minimum word length [default: 3]
    min_len: Option<usize>,

    /// Dictionary file; searched for in conventional locations if omitted
    dict_path: Option<PathBuf>,

    /// Shuffle the pool once instead of reading entropy for every word
    #[arg(long)]
    simple: bool,

    /// Entropy device [default: /dev/random]
    #[arg(long, conflicts_with = "os_rng")]
    device: Option<PathBuf>,

    /// Use the operating system RNG instead of an entropy device
    #[arg(long)]
    os_rng: bool,

    /// Wrap column [default: 80]
    #[arg(long)]
    width: Option<usize>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            count: self.count,
            max_len: self.max_len,
            min_len: self.min_len,
            // An empty path means "search", as if none were given
            dictionary: self
                .dict_path
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
            device: self.device.clone(),
            os_rng: self.os_rng,
            simple: self.simple,
            width: self.width,
        }
    }

    fn resolve(&self) -> Result<RunConfig, entropy_words::RunError> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(file.resolve(self.overrides())?)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let result = cli
        .resolve()
        .and_then(|config| Passphrase::generate(&config).map(|p| (p, config.width)));

    match result {
        Ok((passphrase, width)) => {
            print!("{}", wrap_words(passphrase.words(), width));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("entropy-words: {}", e);
            ExitCode::FAILURE
        }
    }
}
