// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{Config, ConfigKey, ConfigStore};
use crate::core::git::{GitCli, VcsGateway};
use crate::core::paths::{EnvSource, ProcessEnv};
use crate::core::sync::SyncService;
use crate::models::SyncOptions;
use crate::output::{ConsoleOutput, OutputSink};

pub const CONFIG_ENV_VAR: &str = "CURSYNC_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "cursync", author, version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of ~/.config/cursync.toml
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull rules from the rules directory into this project's .cursor/rules,
    /// deleting extra files in the project
    Pull(SyncArgs),
    /// Push this project's .cursor/rules into the rules directory, deleting
    /// extra files there, then commit the changes
    Push(PushArgs),
    /// Print the version
    Version,
    /// Show or change persisted defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct SyncArgs {
    /// Rules directory (falls back to config, then CURSOR_RULES_DIR)
    #[arg(short = 'd', long)]
    pub rules_dir: Option<String>,

    /// Comma-separated patterns (falls back to config, then CURSOR_RULES_PATTERNS)
    #[arg(short = 'p', long)]
    pub file_patterns: Option<String>,

    /// Replace headers of existing .mdc files instead of keeping them
    #[arg(
        short = 'o',
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub overwrite_headers: Option<bool>,
}

#[derive(clap::Args, Debug, Default)]
pub struct PushArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Commit in the rules directory but don't push
    #[arg(
        short = 'w',
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub git_without_push: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print all configured values
    Show,
    /// Print one value
    Get { key: String },
    /// Set one value (an empty value clears it)
    Set { key: String, value: String },
    /// Print the config file location
    Path,
}

/// Collaborators a command runs against.
pub struct Context<'a> {
    pub output: &'a dyn OutputSink,
    pub vcs: &'a dyn VcsGateway,
    pub env: &'a dyn EnvSource,
    pub working_dir: PathBuf,
}

fn config_store(path: Option<PathBuf>) -> Result<ConfigStore> {
    path.map_or_else(ConfigStore::default_location, |path| {
        Ok(ConfigStore::new(path))
    })
}

/// Config for pull/push: problems are reported and defaults used.
fn load_config_or_default(path: Option<PathBuf>, output: &dyn OutputSink) -> Config {
    match config_store(path).and_then(|store| store.load()) {
        Ok(config) => config,
        Err(err) => {
            output.error(&format!("Error loading config, using defaults: {err:#}"));
            Config::default()
        }
    }
}

fn pick(flag: Option<&str>, configured: Option<&str>) -> String {
    flag.filter(|value| !value.is_empty())
        .or(configured)
        .unwrap_or_default()
        .to_owned()
}

/// Flags win over the config file; empty strings are left for the engine to
/// resolve from the environment.
#[must_use]
pub fn sync_options(
    args: &SyncArgs,
    git_without_push: Option<bool>,
    config: &Config,
) -> SyncOptions {
    SyncOptions {
        rules_dir: pick(args.rules_dir.as_deref(), config.rules_dir.as_deref()),
        file_patterns: pick(args.file_patterns.as_deref(), config.file_patterns.as_deref()),
        overwrite_headers: args.overwrite_headers.unwrap_or(config.overwrite_headers),
        git_without_push: git_without_push.unwrap_or(config.git_without_push),
    }
}

fn run_config(action: ConfigAction, store: &ConfigStore, output: &dyn OutputSink) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = store.load()?;
            let entries = config.entries();
            if entries.is_empty() {
                output.info("No configuration values set.");
            }
            for (key, value) in entries {
                output.info(&format!("{key}: {value}"));
            }
        }
        ConfigAction::Get { key } => {
            let key: ConfigKey = key.parse()?;
            let value = store.load()?.get(key).unwrap_or_default();
            output.info(&value);
        }
        ConfigAction::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            let mut config = store.load()?;
            config.set(key, &value)?;
            store.save(&config)?;
            debug!("saved {key} to {}", store.path().display());
        }
        ConfigAction::Path => output.info(&store.path().display().to_string()),
    }
    Ok(())
}

/// Runs one parsed command.
///
/// # Errors
///
/// Returns setup errors from the sync engine and any config subcommand
/// failure.
pub fn execute(args: Args, ctx: &Context<'_>) -> Result<()> {
    let service = SyncService::new(ctx.output, ctx.vcs, ctx.env, ctx.working_dir.clone());
    match args.command {
        Command::Pull(sync) => {
            let config = load_config_or_default(args.config, ctx.output);
            service.pull(&sync_options(&sync, None, &config))?;
        }
        Command::Push(push) => {
            let config = load_config_or_default(args.config, ctx.output);
            service.push(&sync_options(&push.sync, push.git_without_push, &config))?;
        }
        Command::Version => {
            ctx.output
                .info(&format!("cursync version {}", env!("CARGO_PKG_VERSION")));
        }
        Command::Config { action } => {
            run_config(action, &config_store(args.config)?, ctx.output)?;
        }
    }
    Ok(())
}

/// Runs against the real console, `git` and process environment.
///
/// # Errors
///
/// See [`execute`].
pub fn run(args: Args) -> Result<()> {
    let working_dir = env::current_dir().context("failed to get current directory")?;
    let ctx = Context {
        output: &ConsoleOutput,
        vcs: &GitCli,
        env: &ProcessEnv,
        working_dir,
    };
    execute(args, &ctx)
}
