//! `cid-fmt`: convert CIDs between multibases and versions.
//!
//! # Usage
//!
//! ```text
//! cid-fmt <cid>...                     # print each cid unchanged
//! cid-fmt -b base32 <cid>...           # re-encode in base32
//! cid-fmt -v 1 <cid>...                # convert to CID version 1
//! cid-fmt -s prefix <cid>...           # print cidv1-raw-sha2-256-32 style prefixes
//! cid-fmt -c cid-fmt.toml <cid>...     # take defaults from a config file
//! ```
//!
//! A CID that fails to decode prints `!INVALID_CID!`, one that fails to
//! convert prints `!ERROR!`; both are logged and the remaining CIDs are
//! still processed. The exit status is 1 if any CID failed.

mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use cid::Version;
use cidutil_enc::{CidEncoder, Encoder};
use cidutil_types::codec::{codec_name, describe_prefix, hash_name};
use cidutil_types::{Base, Cid, CidError, base_from_name, extract_encoding, to_v0, to_v1};
use clap::{Parser, ValueEnum};
use tracing::{debug, error};

use config::CliConfig;

// -----------------------------------------------------------------------
// CLI definition
// -----------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "cid-fmt",
    version,
    about = "Convert CIDs between multibases and versions"
)]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output multibase, by name (`base32`) or indicator (`b`).
    ///
    /// Defaults to the base each input CID is written in.
    #[arg(short, long)]
    base: Option<String>,

    /// Convert to this CID version.
    #[arg(short = 'v', long = "cid-version", value_enum)]
    cid_version: Option<TargetVersion>,

    /// What to print for each CID.
    #[arg(short, long, value_enum, default_value_t = Show::Cid)]
    show: Show,

    /// CIDs to process.
    #[arg(required = true)]
    cids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TargetVersion {
    #[value(name = "0")]
    V0,
    #[value(name = "1")]
    V1,
}

impl TryFrom<u8> for TargetVersion {
    type Error = anyhow::Error;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1),
            other => bail!("invalid cid version: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Show {
    /// The CID itself.
    Cid,
    /// Version, codec, hash function and digest length.
    Prefix,
    /// Content codec name.
    Codec,
    /// Multihash function name.
    Hash,
    /// CID version number.
    Version,
}

// -----------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------

/// Effective options after merging CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Options {
    base: Option<Base>,
    version: Option<TargetVersion>,
    show: Show,
}

impl Options {
    fn resolve(cli: &Cli, config: &CliConfig) -> Result<Self> {
        let base = cli
            .base
            .as_deref()
            .or(config.output.base.as_deref())
            .map(base_from_name)
            .transpose()
            .context("invalid output base")?;
        let version = match cli.cid_version {
            Some(v) => Some(v),
            None => config.output.version.map(TargetVersion::try_from).transpose()?,
        };
        Ok(Self {
            base,
            version,
            show: cli.show,
        })
    }
}

/// Why a single CID could not be rendered.
#[derive(Debug)]
enum Failure {
    /// The input did not decode.
    Invalid(CidError),
    /// The input decoded but could not be converted.
    Conversion(CidError),
}

impl Failure {
    /// Placeholder printed in place of the CID.
    fn marker(&self) -> &'static str {
        match self {
            Failure::Invalid(_) => "!INVALID_CID!",
            Failure::Conversion(_) => "!ERROR!",
        }
    }

    fn error(&self) -> &CidError {
        match self {
            Failure::Invalid(e) | Failure::Conversion(e) => e,
        }
    }
}

fn render(text: &str, opts: &Options) -> Result<String, Failure> {
    let cid = Cid::try_from(text).map_err(|e| Failure::Invalid(e.into()))?;
    let cid = match opts.version {
        Some(TargetVersion::V0) => to_v0(&cid).map_err(Failure::Conversion)?,
        Some(TargetVersion::V1) => to_v1(&cid),
        None => cid,
    };

    let out = match opts.show {
        Show::Cid => {
            let base = opts
                .base
                .or_else(|| extract_encoding(text).ok())
                .unwrap_or(Encoder::DEFAULT.base);
            Encoder::new(base, false).encode(&cid)
        }
        Show::Prefix => describe_prefix(&cid),
        Show::Codec => codec_name(cid.codec())
            .map(str::to_string)
            .unwrap_or_else(|| format!("0x{:x}", cid.codec())),
        Show::Hash => hash_name(cid.hash().code())
            .map(str::to_string)
            .unwrap_or_else(|| format!("0x{:x}", cid.hash().code())),
        Show::Version => match cid.version() {
            Version::V0 => "0".to_string(),
            Version::V1 => "1".to_string(),
        },
    };
    Ok(out)
}

// -----------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("failed to load config")?;

    setup_tracing(&config.log.level);

    let opts = Options::resolve(&cli, &config)?;
    debug!(?opts, count = cli.cids.len(), "formatting cids");

    let mut out = io::stdout().lock();
    let mut failed = false;
    for text in &cli.cids {
        match render(text, &opts) {
            Ok(line) => writeln!(out, "{line}")?,
            Err(failure) => {
                writeln!(out, "{}", failure.marker())?;
                error!(cid = %text, error = %failure.error(), "cannot format cid");
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn setup_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
