use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_DIR_NAME: &str = "TTD_bot";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No user config directory on this platform")]
    NoConfigDir,

    #[error("Failed to access config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bot token is empty")]
    EmptyToken,

    #[error("Token prompt failed: {0}")]
    Prompt(String),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Persisted bot settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub token: String,
}

/// `<user config dir>/TTD_bot/config.json`
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Read the config file; `Ok(None)` when it does not exist yet.
pub fn load_config(path: &Path) -> Result<Option<BotConfig>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::io(path, err)),
    };
    let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Write the config file, creating parent directories.
pub fn save_config(path: &Path, config: &BotConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| ConfigError::io(parent, err))?;
    }
    let body = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|err| ConfigError::io(path, err))
}

/// Pick the bot token.
///
/// Order: `explicit` (flag or env), then the config file at `path`, then
/// `prompt`. A prompted token is saved to `path` for the next start.
pub fn resolve_token<F>(explicit: Option<String>, path: &Path, prompt: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(token) = explicit.map(|t| t.trim().to_string()) {
        if !token.is_empty() {
            log::debug!("Using bot token from command line/environment");
            return Ok(token);
        }
    }

    if let Some(config) = load_config(path)? {
        let token = config.token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        log::debug!("Using bot token from {}", path.display());
        return Ok(token.to_string());
    }

    let token = prompt()?.trim().to_string();
    if token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }
    save_config(
        path,
        &BotConfig {
            token: token.clone(),
        },
    )?;
    log::info!("Saved bot token to {}", path.display());
    Ok(token)
}

/// Ask for the token on the terminal without echoing it.
pub fn prompt_token() -> Result<String> {
    eprintln!("Config doesn't exist. Creating one. [ctrl+c to cancel]");
    dialoguer::Password::new()
        .with_prompt("Bot token")
        .interact()
        .map_err(|err| ConfigError::Prompt(err.to_string()))
}
