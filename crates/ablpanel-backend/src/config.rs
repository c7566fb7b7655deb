use std::path::PathBuf;

use ablpanel_bridge::config::Config;
use directories::ProjectDirs;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Errors that can occur while loading or resolving application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directories. This
    /// usually occurs when required environment variables are missing (e.g.,
    /// `$HOME` on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the
    /// expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the default configuration to TOML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn config_dir() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "ablpanel", "ablpanel") {
        Some(path) => Ok(path.config_dir().to_path_buf()),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk.
///
/// When no configuration file exists yet, a default one is written so the
/// user has a template to fill in the server URL and API key.
pub async fn load_config() -> Result<Config, ConfigError> {
    let config_path = config_dir()?.join("config.toml");
    log::info!("Loading configuration from {config_path:?}");
    if config_path.exists() {
        let contents = read_to_string(config_path).await?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use ablpanel_bridge::config::Config;

    #[test]
    fn default_config_round_trips_through_toml() {
        let rendered = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.base_url, "http://localhost:5000");
        assert!(parsed.server.api_key.is_empty());
    }

    #[test]
    fn partial_files_are_rejected_with_a_parse_error() {
        // A bare table with an unrelated key is not a valid config.
        assert!(toml::from_str::<Config>("[server]\nhost = 1\n").is_err());
    }
}
