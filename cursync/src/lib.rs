// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use crate::cli::{Args, Command, Context, execute, run};
pub use crate::config::{Config, ConfigKey, ConfigStore};
pub use crate::core::git::{GitCli, VcsGateway};
pub use crate::core::paths::{EnvSource, ProcessEnv};
pub use crate::core::sync::SyncService;
pub use crate::error::SyncError;
pub use crate::models::{FileOperation, OperationType, PatternStats, SyncOptions, SyncResult};
pub use crate::output::{ConsoleOutput, OutputSink};
