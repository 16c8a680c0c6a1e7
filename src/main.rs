//! Site configuration inspector.
//!
//! Loads, validates, and prints portfolio site configuration files. The
//! configuration is constructed once here and would be handed read-only to
//! the rendering layers that consume it.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_config::config::{load_config, ConfigError, SiteConfig, SystemClock};

#[derive(Parser)]
#[command(name = "site-config")]
#[command(about = "Inspect and validate portfolio site configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Check {
        /// Path to a TOML configuration file
        path: PathBuf,
    },
    /// Print the fully-resolved configuration
    Show {
        /// Path to a TOML configuration file (built-in profile if omitted)
        path: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "toml")]
        format: OutputFormat,
    },
    /// Write the built-in profile as a starter configuration file
    Init {
        /// Destination path
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Toml,
    Json,
}

fn main() -> ExitCode {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { path } => check(&path),
        Commands::Show { path, format } => show(path.as_deref(), format),
        Commands::Init { path } => init(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn check(path: &Path) -> Result<(), Box<dyn Error>> {
    match load_config(path, &SystemClock) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                socials = config.socials.len(),
                navigation = config.navigation.len(),
                skill_categories = config.skills.len(),
                "Configuration loaded"
            );
            println!("{}: OK", path.display());
            Ok(())
        }
        Err(ConfigError::Validation(errors)) => {
            eprintln!("{}: {} invariant violation(s)", path.display(), errors.len());
            for err in &errors {
                eprintln!("  - {err}");
            }
            Err("configuration is invalid".into())
        }
        Err(err) => Err(err.into()),
    }
}

fn show(path: Option<&Path>, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let config = match path {
        Some(path) => load_config(path, &SystemClock)?,
        None => SiteConfig::builtin(&SystemClock),
    };

    let rendered = match format {
        OutputFormat::Toml => toml::to_string_pretty(&config)?,
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
    };
    println!("{rendered}");
    Ok(())
}

fn init(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        return Err(format!("{} already exists, not overwriting", path.display()).into());
    }

    // The starter keeps the {year} placeholder; it is stamped at load time.
    let starter = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, starter)?;

    tracing::info!(path = %path.display(), "Starter configuration written");
    println!("Wrote starter configuration to {}", path.display());
    Ok(())
}
