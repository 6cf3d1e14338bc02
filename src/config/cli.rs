use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keep score for a two-player nine-hole round.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// TOML file with defaults for any of the options below.
    #[arg(long, global = true, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    /// Score file, relative to the repository directory unless absolute.
    #[arg(short = 'f', long, global = true, value_name = "DATA_FILE")]
    pub data_file: Option<PathBuf>,
    /// Git repository that holds the score file.
    #[arg(short = 'r', long, global = true, value_name = "REPO_DIR")]
    pub repo_dir: Option<PathBuf>,
    /// Skip git pull/commit/push.
    #[arg(long, global = true)]
    pub no_sync: bool,
    #[arg(long, global = true, value_name = "REMOTE")]
    pub remote: Option<String>,
    #[arg(long, global = true, value_name = "NAME")]
    pub player_a: Option<String>,
    #[arg(long, global = true, value_name = "NAME")]
    pub player_b: Option<String>,
    /// Log filter, e.g. `info` or `rusty_golf_ledger=debug`. `RUST_LOG` wins.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Score rounds interactively (default).
    #[default]
    Play,
    /// Print the all-time win counts.
    Tally,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub data_file: Option<PathBuf>,
    pub repo_dir: Option<PathBuf>,
    pub sync: Option<bool>,
    pub remote: Option<String>,
    #[serde(rename = "player-a")]
    pub player_a: Option<String>,
    #[serde(rename = "player-b")]
    pub player_b: Option<String>,
    pub log: Option<String>,
}
