use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use num_bigint::BigUint;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use imgrand::source::byte_source::ByteSource;
use imgrand::source::file::FileSource;
use imgrand::source::http::HttpImageSource;
use imgrand::{Config, Derivation, DigestInput, ImageRandom, Range};

/// Generate random integers from image bytes.
#[derive(Debug, Parser)]
#[command(name = "imgrand", version, about)]
struct Cli {
    /// Inclusive lower bound
    #[arg(long, requires = "max")]
    min: Option<BigUint>,

    /// Inclusive upper bound (lower bound defaults to 0)
    #[arg(long)]
    max: Option<BigUint>,

    /// Number of values to generate, each from a fresh fetch
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Read bytes from this file instead of downloading an image
    #[arg(long)]
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "IMGRAND_CONFIG")]
    config: Option<PathBuf>,

    /// Endpoint queried for each image
    #[arg(long, env = "IMGRAND_ENDPOINT")]
    endpoint: Option<String>,

    /// JSON field of the endpoint's response holding the image URL
    #[arg(long, env = "IMGRAND_JSON_FIELD")]
    json_field: Option<String>,

    /// Download the endpoint itself as the image
    #[arg(long)]
    direct: bool,

    /// Request timeout in seconds
    #[arg(long, env = "IMGRAND_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Maximum image size in bytes
    #[arg(long, env = "IMGRAND_MAX_BYTES")]
    max_bytes: Option<u64>,

    /// Hash the binary text expansion of the bytes
    #[arg(long)]
    binary_text: bool,

    /// Print digests and mixed bits along with each value
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(field) = &self.json_field {
            config.source.json_field = field.clone();
        }
        if self.direct {
            config.source.direct = true;
        }
        if let Some(timeout) = self.timeout_secs {
            config.source.timeout_secs = timeout;
        }
        if let Some(max_bytes) = self.max_bytes {
            config.source.max_bytes = max_bytes;
        }
        if self.binary_text {
            config.digest_input = DigestInput::BinaryText;
        }
        config.validate()?;
        Ok(config)
    }

    fn source(&self, config: &Config) -> Result<Box<dyn ByteSource>> {
        Ok(match &self.file {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(HttpImageSource::new(config.source.clone())?),
        })
    }
}

fn print_derivation(d: &Derivation) {
    println!("md5:    {}", hex::encode(d.digests.short));
    println!("sha256: {}", hex::encode(d.digests.long));
    println!("mixed:  {}", d.mixed);
    println!("raw:    {}", d.raw);
    println!("value:  {}", d.value);
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let range = Range::from_bounds(cli.min.clone(), cli.max.clone())?;

    let mut rng = ImageRandom::new(cli.source(&config)?).with_digest_input(config.digest_input);
    tracing::info!(count = cli.count, ?range, "generating");

    for _ in 0..cli.count {
        let derivation = rng.derive_next(&range)?;
        if cli.verbose {
            print_derivation(&derivation);
        } else {
            println!("{}", derivation.value);
        }
    }
    Ok(())
}
