//! cpe-tools: parse, convert, match and compare CPE names
//!
//! Command-line front end for the `cpe_tools` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cpe_tools::{
    cli::{self, MatchCommand},
    config::{AppConfig, ConfigOverrides, Validatable},
    CpeFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported CPE bindings:",
        "\n  wfn:[...]    Well-Formed Name",
        "\n  cpe:/...     CPE 2.2 URI",
        "\n  cpe:2.3:...  CPE 2.3 formatted string"
    )
}

#[derive(Parser)]
#[command(name = "cpe-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Parse, convert, match and compare CPE names", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  No candidate matched (with --fail-on-no-match)
    2  Error occurred

EXAMPLES:
    # Convert a URI to every binding
    cpe-tools convert 'cpe:/a:microsoft:internet_explorer:8.0.6001:beta' --all

    # Filter a list of CPEs against a pattern
    cpe-tools match 'cpe:2.3:a:apache:*:*:*:*:*:*:*:*:*' --file inventory.txt

    # Compare two versions
    cpe-tools version 1.10 1.9")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long, global = true)]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `match` subcommand
#[derive(Parser)]
struct MatchArgs {
    /// Pattern CPE in any binding
    pattern: String,

    /// Candidate CPEs (read from --file or stdin when omitted)
    candidates: Vec<String>,

    /// File with one candidate CPE per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output binding for matching CPEs
    #[arg(long, value_enum)]
    to: Option<CpeFormat>,

    /// Matching preset (default, strict, lenient)
    #[arg(long)]
    preset: Option<String>,

    /// Treat `version` as a dotted version with a trailing wildcard
    #[arg(long)]
    version_wildcards: bool,

    /// Compare values case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Also compare the `sw_edition` attribute
    #[arg(long)]
    include_sw_edition: bool,

    /// Print the reason for each decision
    #[arg(long)]
    explain: bool,

    /// Exit with code 1 if nothing matched
    #[arg(long)]
    fail_on_no_match: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CPE between bindings
    Convert {
        /// CPE in any binding
        cpe: String,

        /// Target binding (defaults to the configured output format)
        #[arg(short, long, value_enum)]
        to: Option<CpeFormat>,

        /// Print every binding, one per line
        #[arg(long, conflicts_with = "to")]
        all: bool,
    },

    /// Print the candidates that match a pattern
    Match(MatchArgs),

    /// Compare two dotted versions and print <, = or >
    Version {
        /// Left-hand version
        a: String,
        /// Right-hand version
        b: String,
    },

    /// Dump a parsed CPE as JSON
    Inspect {
        /// CPE in any binding
        cpe: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Print an example config file
    Example,
    /// Generate an example .cpe-tools.yaml in the current directory
    Init,
}

/// Overrides from global flags, layered over the file config.
fn cli_overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        output_file: cli.output_file.clone(),
        quiet: cli.quiet,
        ..ConfigOverrides::default()
    }
}

fn load_config(cli: &Cli, overrides: &ConfigOverrides) -> AppConfig {
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    for error in config.validate() {
        tracing::warn!("Invalid configuration: {}", error);
    }
    config
}

fn run(cli: Cli) -> Result<i32> {
    let overrides = cli_overrides(&cli);

    match &cli.command {
        Commands::Convert { cpe, to, all } => {
            let config = load_config(&cli, &overrides);
            cli::run_convert(cpe, *to, *all, &config)
        }

        Commands::Match(args) => {
            let overrides = ConfigOverrides {
                format: args.to,
                preset: args.preset.clone(),
                include_sw_edition: args.include_sw_edition.then_some(true),
                version_wildcards: args.version_wildcards.then_some(true),
                ignore_case: args.ignore_case.then_some(true),
                fail_on_no_match: args.fail_on_no_match,
                ..overrides
            };

            let config = load_config(&cli, &overrides);
            let command = MatchCommand {
                pattern: args.pattern.clone(),
                candidates: args.candidates.clone(),
                file: args.file.clone(),
                explain: args.explain,
            };
            cli::run_match(&command, &config)
        }

        Commands::Version { a, b } => cli::run_version(a, b),

        Commands::Inspect { cpe } => {
            let config = load_config(&cli, &overrides);
            cli::run_inspect(cpe, &config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "cpe-tools", &mut io::stdout());
            Ok(cli::EXIT_OK)
        }

        Commands::ConfigSchema { output } => {
            let schema = cpe_tools::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(cli::EXIT_OK)
        }

        Commands::Config { action } => run_config_action(action, &cli),
    }
}

fn run_config_action(action: &ConfigAction, cli: &Cli) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = cpe_tools::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("cpe-tools").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            match cpe_tools::config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Example => {
            print!("{}", cpe_tools::config::generate_example_config());
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".cpe-tools.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, cpe_tools::config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(cli::EXIT_OK)
}

/// Exit code for any error surfaced to `main`
const EXIT_ERROR: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(0) => Ok(()),
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}
