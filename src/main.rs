//! Lanai - Main entrypoint.
//!
//! Loads word lists into a trie and answers membership and prefix queries
//! against it from the command line.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::data_structures::LanaiTrie;
use lanai_lib::error::{ErrorContext, ErrorReporter, LanaiError, LanaiResult, TracingErrorReporter};
use lanai_lib::wordlist::{LoadReport, WordListLoader};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether keys are stored in the loaded word lists
    Check {
        /// Word-list files or directories to load
        #[clap(short, long = "source", value_parser, required = true)]
        sources: Vec<PathBuf>,

        /// Keys to look up; taken as raw bytes, so need not be UTF-8
        #[clap(required = true)]
        keys: Vec<OsString>,
    },

    /// Print every loaded entry that starts with a prefix
    Complete {
        /// Word-list files or directories to load
        #[clap(short, long = "source", value_parser, required = true)]
        sources: Vec<PathBuf>,

        /// Prefix to complete; taken as raw bytes, so need not be UTF-8
        prefix: OsString,
    },

    /// Print load and trie statistics as JSON
    Stats {
        /// Word-list files or directories to load
        #[clap(short, long = "source", value_parser, required = true)]
        sources: Vec<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Short description of the invocation, attached to reported errors.
    fn details(&self) -> String {
        match self {
            Command::Check { sources, .. } => format!("command: check, sources: {sources:?}"),
            Command::Complete { sources, .. } => format!("command: complete, sources: {sources:?}"),
            Command::Stats { sources } => format!("command: stats, sources: {sources:?}"),
            Command::Validate => "command: validate".to_string(),
            Command::GenConfig { output } => format!("command: gen-config, output: {output:?}"),
        }
    }
}

/// Statistics printed by the `stats` command.
#[derive(Debug, Serialize)]
struct Stats {
    #[serde(flatten)]
    load: LoadReport,
    words: usize,
    nodes: usize,
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let result = match (&log.file, log.json) {
        (Some(path), json) => {
            let file = File::options().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if json {
                tracing::subscriber::set_global_default(builder.json().finish())
            } else {
                tracing::subscriber::set_global_default(builder.finish())
            }
        }
        (None, true) => {
            tracing::subscriber::set_global_default(builder.with_writer(std::io::stderr).json().finish())
        }
        (None, false) => {
            tracing::subscriber::set_global_default(builder.with_writer(std::io::stderr).pretty().finish())
        }
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the given word-list sources.
fn load_trie(config: &LanaiConfig, sources: &[PathBuf]) -> LanaiResult<(LanaiTrie, LoadReport)> {
    let mut trie = LanaiTrie::with_config(config.trie.into());
    let report = WordListLoader::new(config.wordlist.clone()).load_sources(&mut trie, sources)?;
    Ok((trie, report))
}

/// Command-line arguments are looked up by their raw bytes.
fn arg_bytes(arg: &OsStr) -> &[u8] {
    arg.as_encoded_bytes()
}

/// Membership of each key, in argument order.
fn check_keys(trie: &LanaiTrie, keys: &[OsString]) -> Vec<bool> {
    keys.iter().map(|key| trie.contains(arg_bytes(key))).collect()
}

fn run(command: Command, config: &LanaiConfig, config_path: Option<&Path>) -> LanaiResult<ExitCode> {
    match command {
        Command::Check { sources, keys } => {
            let (trie, _) = load_trie(config, &sources)?;
            let mut all_present = true;
            for (key, present) in keys.iter().zip(check_keys(&trie, &keys)) {
                all_present &= present;
                println!(
                    "{}: {}",
                    key.to_string_lossy(),
                    if present { "present" } else { "absent" }
                );
            }
            Ok(if all_present {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Complete { sources, prefix } => {
            let (trie, _) = load_trie(config, &sources)?;
            for key in trie.keys_with_prefix(arg_bytes(&prefix)) {
                println!("{}", String::from_utf8_lossy(&key));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Stats { sources } => {
            let (trie, load) = load_trie(config, &sources)?;
            let stats = Stats {
                load,
                words: trie.len(),
                nodes: trie.node_count(),
            };
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate => {
            // Loading already validated the configuration.
            info!(path = ?config_path, "Configuration validated successfully");
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let config = match ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is configured from this file, so report straight to stderr.
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let details = args.command.details();
    match run(args.command, &config, args.config.as_deref()) {
        Ok(code) => code,
        Err(error) => {
            let context = ErrorContext::new(error, "cli").with_details(details);
            TracingErrorReporter.report(&context);
            eprintln!("{context}");
            ExitCode::FAILURE
        }
    }
}
