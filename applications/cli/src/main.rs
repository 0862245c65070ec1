/// Kara - karaoke path pattern tool
use clap::{Parser, Subcommand};
use kara_cli::{commands, render, CliConfig};
use kara_pattern::PatternCache;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kara")]
#[command(about = "Extract karaoke song metadata from file paths", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "KARA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate format specifications
    Check {
        /// Format specifications to validate
        #[arg(required = true)]
        specs: Vec<String>,
    },
    /// Print the regex equivalent of a format specification
    Regex {
        /// Format specification
        spec: String,
    },
    /// Extract metadata from paths (read from stdin when none are given)
    Parse {
        /// Format specification to try, in order (overrides configured formats)
        #[arg(short, long = "format")]
        formats: Vec<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Paths to resolve
        paths: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Check { specs } => {
            let outcomes = commands::check(specs);
            print!("{}", render::render_check(&outcomes));
            Ok(exit_code(outcomes.iter().all(|o| o.is_valid())))
        }
        Commands::Regex { spec } => {
            println!("{}", commands::regex(&spec)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Parse {
            formats,
            json,
            paths,
        } => {
            if !formats.is_empty() {
                config.formats = formats;
            }
            config.validate()?;

            let cache = PatternCache::new(config.cache_capacity);
            let set = config.pattern_set(&cache)?;
            tracing::debug!("Loaded {} format specifications", set.len());

            let paths = if paths.is_empty() {
                read_stdin_paths()?
            } else {
                paths
            };

            let outcomes = commands::parse(&set, paths);
            if json {
                println!("{}", render::render_parse_json(&outcomes));
            } else {
                print!("{}", render::render_parse_human(&outcomes));
            }

            Ok(exit_code(outcomes.iter().all(|o| o.is_match())))
        }
    }
}

/// Only `parse` reads the configuration; the other commands run on defaults
fn load_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    match cli.command {
        Commands::Parse { .. } => Ok(CliConfig::load(cli.config.as_deref())?),
        Commands::Check { .. } | Commands::Regex { .. } => Ok(CliConfig::default()),
    }
}

fn read_stdin_paths() -> anyhow::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
