use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

mod cli;

pub use cli::{Cli, Command, FileConfig};

pub const DEFAULT_DATA_FILE: &str = "game-data.json";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_PLAYER_A: &str = "Player A";
pub const DEFAULT_PLAYER_B: &str = "Player B";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub command: Command,
    pub data_file: PathBuf,
    pub repo_dir: PathBuf,
    pub sync: bool,
    pub remote: String,
    pub player_a: String,
    pub player_b: String,
    pub log_filter: String,
}

impl Settings {
    /// Where the ledger reads and writes the score file.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.repo_dir.join(&self.data_file)
    }

    /// Merge CLI over file config over defaults.
    ///
    /// # Errors
    /// Returns an error if a player name is empty, contains control
    /// characters, or both names are the same.
    pub fn resolve(cli: Cli, file_config: FileConfig) -> Result<Self> {
        let player_a = cli
            .player_a
            .or(file_config.player_a)
            .unwrap_or_else(|| DEFAULT_PLAYER_A.to_string());
        let player_b = cli
            .player_b
            .or(file_config.player_b)
            .unwrap_or_else(|| DEFAULT_PLAYER_B.to_string());
        let player_a = check_player_name(&player_a)?;
        let player_b = check_player_name(&player_b)?;
        if player_a == player_b {
            return Err(anyhow!("player names must differ, both are '{player_a}'"));
        }

        let sync = if cli.no_sync {
            false
        } else {
            file_config.sync.unwrap_or(true)
        };

        Ok(Self {
            command: cli.command.unwrap_or_default(),
            data_file: cli
                .data_file
                .or(file_config.data_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            repo_dir: cli
                .repo_dir
                .or(file_config.repo_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            sync,
            remote: cli
                .remote
                .or(file_config.remote)
                .unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            player_a,
            player_b,
            log_filter: cli
                .log
                .or(file_config.log)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// Load settings from CLI and the optional TOML file it names.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or the
/// resulting settings are invalid.
pub fn load_settings(cli: Cli) -> Result<Settings> {
    let file_config = read_file_config(&cli)?;
    Settings::resolve(cli, file_config)
}

fn read_file_config(cli: &Cli) -> Result<FileConfig> {
    match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(FileConfig::default()),
    }
}

fn check_player_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("player name is empty"));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(anyhow!("player name contains non-printable characters"));
    }
    Ok(trimmed.to_string())
}
