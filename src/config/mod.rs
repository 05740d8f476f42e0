mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable that supplies the Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./playtime.toml",
        "~/.config/playtime/config.toml",
        "/etc/playtime/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

/// A non-empty `YOUTUBE_API_KEY` replaces whatever key the file set.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.youtube.api_key = Some(key);
        }
    }
}

/// Apply `--host` / `--port` from the command line on top of the loaded
/// config. Values the user did not pass leave the file's settings alone.
pub fn apply_server_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    validate_server(&config.server)
}

fn validate_server(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if server.host.trim().is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    validate_server(&config.server)?;

    if config.youtube.request_timeout_secs == 0 {
        anyhow::bail!("YouTube request timeout cannot be 0");
    }

    url::Url::parse(&config.youtube.api_base)
        .with_context(|| format!("Invalid YouTube API base URL: {}", config.youtube.api_base))?;

    if config.youtube.api_key().is_none() {
        tracing::warn!(
            "No YouTube API key configured; set youtube.api_key or {}",
            API_KEY_ENV
        );
    }

    Ok(())
}
