#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)
)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use taggit::logging::{default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use taggit::user_config::{self, UserConfig};
use taggit::{Capability, Tag, TagInput, TagStore, XattrStore};
use tracing::{debug, warn, Level};

/// Taggit - read, add and remove macOS Finder tags
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable JSON log format
    #[arg(long, env = "TAGGIT_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "TAGGIT_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.taggit/logs)
    #[arg(long, env = "TAGGIT_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Default log level (the log filter environment variable takes precedence)
    #[arg(long, env = "TAGGIT_LOG_LEVEL", default_value = "warn")]
    log_level: Level,

    /// User config file (default: ~/.taggit/config.toml)
    #[arg(long, env = "TAGGIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tags on a file
    List {
        file: PathBuf,
        /// Print the tags as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Add tags to a file. Each TAG is NAME or NAME:COLOR (color name or code 0-7)
    Add {
        file: PathBuf,
        #[arg(required = true, value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Remove tags from a file. Each TAG is NAME or NAME:COLOR
    Remove {
        file: PathBuf,
        #[arg(required = true, value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Remove every tag from a file
    Clear { file: PathBuf },
}

fn load_config(path: Option<&Path>) -> UserConfig {
    let loaded = match path {
        Some(p) => user_config::load_user_config_from(p),
        None => user_config::load_user_config(),
    };
    loaded.unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    })
}

fn print_tags(tags: &[Tag], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tags)?);
    } else {
        for tag in tags {
            println!("{}\t{}", tag.name(), tag.color_name());
        }
    }
    Ok(())
}

fn run(store: &TagStore<XattrStore>, command: Command) -> Result<()> {
    match command {
        Command::List { file, json } => print_tags(&store.list_tags(&file), json)?,
        Command::Add { file, tags } => {
            store.add_tags(&file, tags.iter().map(|t| TagInput::parse_cli(t)))?;
        }
        Command::Remove { file, tags } => {
            store.remove_tags(&file, tags.iter().map(|t| TagInput::parse_cli(t)))?;
        }
        Command::Clear { file } => store.remove_all_tags(&file)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir.unwrap_or_else(default_log_dir),
        log_level: args.log_level,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_config.log_dir.join(LOG_FILENAME).display());
        return Err(e);
    }

    let user_cfg = load_config(args.config.as_deref());
    let capability = user_cfg.tagging.mode.capability();
    if capability == Capability::Enabled && !XattrStore::platform_supported() {
        warn!("Tagging enabled but extended attributes are not supported on this platform");
    }
    debug!("Tagging capability: {:?}", capability);

    let store = TagStore::new(XattrStore, capability).with_format(user_cfg.tagging.plist_format);
    run(&store, args.command)
}
