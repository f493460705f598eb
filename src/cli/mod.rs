use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::config::{self, ConfigError, OutputFormat, VercalcConfig};
use crate::versioning::{self, CreationMethod, Version, VersionError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "vercalc", version, about = "Compute the next major.minor version of an artifact")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to ~/.vercalc/vercalc.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version that follows the current one
    Next {
        /// Current version; omit when nothing has been versioned yet
        #[arg(long)]
        current: Option<String>,
        /// Which component to bump (defaults to the configured method)
        #[arg(short, long, value_enum)]
        method: Option<CreationMethod>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply several bumps in order and print each resulting version
    Chain {
        /// Starting version; omit when nothing has been versioned yet
        #[arg(long)]
        current: Option<String>,
        /// Bumps to apply, in order
        #[arg(required = true, value_enum)]
        methods: Vec<CreationMethod>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a version string and print its normalized form
    Check {
        version: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version information
    Version,
}

#[derive(Debug, Serialize)]
struct NextReport<'a> {
    current: Option<&'a str>,
    method: CreationMethod,
    next: String,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    normalized: Version,
    major: u32,
    minor: u32,
}

/// Run the CLI application.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    crate::logging::init_logging(cli.verbose, config::resolve_log_level(&config));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &config, &mut out).inspect_err(|e| {
        if let CliError::Version(err) = e {
            warn!("rejected version input: {}", err);
        }
    })
}

/// Execute a parsed command, writing results to `out`.
pub fn execute<W: Write>(cli: Cli, config: &VercalcConfig, out: &mut W) -> Result<(), CliError> {
    let json_default = config::resolve_output_format(config) == OutputFormat::Json;

    match cli.command {
        Some(Commands::Next { current, method, json }) => {
            let method = method.unwrap_or_else(|| config::resolve_default_method(config));
            let current = current.as_deref();
            let next = versioning::calculate(current, method)?;
            if json || json_default {
                let report = NextReport { current, method, next };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "{}", next)?;
            }
        }
        Some(Commands::Chain { current, methods, json }) => {
            let steps = versioning::calculate_chain(current.as_deref(), &methods)?;
            if json || json_default {
                writeln!(out, "{}", serde_json::to_string(&steps)?)?;
            } else {
                for step in &steps {
                    writeln!(out, "{}", step)?;
                }
            }
        }
        Some(Commands::Check { version, json }) => {
            let parsed: Version = version.parse()?;
            if json || json_default {
                let report = CheckReport {
                    input: &version,
                    normalized: parsed,
                    major: parsed.major,
                    minor: parsed.minor,
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "{}", parsed)?;
            }
        }
        Some(Commands::Version) => {
            writeln!(out, "vercalc {}", crate::VERSION)?;
        }
        None => {
            writeln!(out, "vercalc {} — run with --help for usage", crate::VERSION)?;
        }
    }
    Ok(())
}
