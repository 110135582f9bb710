//! Global configuration loader for Jornada.
//!
//! Reads `config.toml` from the data directory (`~/.jornada/` in production)
//! or an explicit path and deserializes it into [`GlobalConfig`]. Falls back
//! to sensible defaults when the file is missing, malformed, or describes an
//! invalid calendar.

use std::path::{Path, PathBuf};

use jornada_types::config::{GlobalConfig, ServerConfig};

/// File name looked up inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory.
///
/// Priority: `JORNADA_DATA_DIR`, then `~/.jornada`, then `./.jornada`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JORNADA_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".jornada");
    }

    PathBuf::from(".jornada")
}

/// Load global configuration from `{data_dir}/config.toml`.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    load_config_file(&data_dir.join(CONFIG_FILE_NAME)).await
}

/// Load global configuration from an explicit file.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse (including a working-hours window
///   that breaks its ordering), logs a warning and returns the default.
/// - If the calendar offset is out of range, logs a warning and keeps the
///   rest of the file with the default calendar.
pub async fn load_config_file(config_path: &Path) -> GlobalConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    let mut config = match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return GlobalConfig::default();
        }
    };

    if let Err(err) = config.calendar.validate() {
        tracing::warn!(
            "Invalid calendar in {}: {err}, using default calendar",
            config_path.display()
        );
        config.calendar = Default::default();
    }

    config
}

/// Resolve the listen address.
///
/// Command-line overrides win over `[server]` in `config.toml`.
pub fn resolve_listen_addr(
    server: &ServerConfig,
    host_override: Option<&str>,
    port_override: Option<u16>,
) -> String {
    let host = host_override.unwrap_or(&server.host);
    let port = port_override.unwrap_or(server.port);
    format!("{host}:{port}")
}
