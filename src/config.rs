use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::royale::DEFAULT_BASE_URL;
use crate::util::env_optional;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "royaledata.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct FileConfig {
    #[serde(default)]
    pub(crate) token: Option<String>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
}

pub(crate) fn config_file_path(cli: Option<PathBuf>) -> PathBuf {
    cli.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub(crate) fn load_file_config(path: &Path) -> FileConfig {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
        Err(_) => FileConfig::default(),
    }
}

pub(crate) fn save_file_config(
    path: &Path,
    config: &FileConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Token resolution order: --token flag, ROYALE_API_TOKEN, config file.
pub(crate) fn resolve_token(
    cli: Option<String>,
    config: &FileConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(token) = cli {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }
    if let Some(token) = env_optional("ROYALE_API_TOKEN") {
        return Ok(token);
    }
    if let Some(token) = &config.token {
        if !token.trim().is_empty() {
            return Ok(token.clone());
        }
    }
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "No API token (use --token, ROYALE_API_TOKEN, or `royaledata config set --token ...`)",
    )
    .into())
}

pub(crate) fn resolve_base_url(config: &FileConfig) -> String {
    env_optional("ROYALE_API_BASE")
        .or_else(|| {
            config
                .base_url
                .clone()
                .filter(|value| !value.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("royaledata_test");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(format!("config_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = load_file_config(Path::new("/nonexistent/royaledata.json"));
        assert!(config.token.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let config = FileConfig {
            token: Some("secret".to_string()),
            base_url: Some("https://proxy.example/v1".to_string()),
        };
        save_file_config(&path, &config).unwrap();

        let loaded = load_file_config(&path);
        assert_eq!(loaded.token.as_deref(), Some("secret"));
        assert_eq!(loaded.base_url.as_deref(), Some("https://proxy.example/v1"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn cli_token_wins_over_config() {
        let config = FileConfig {
            token: Some("from-config".to_string()),
            base_url: None,
        };
        let token = resolve_token(Some("from-flag".to_string()), &config).unwrap();
        assert_eq!(token, "from-flag");
    }

    #[test]
    fn config_token_used_when_no_flag() {
        let config = FileConfig {
            token: Some("from-config".to_string()),
            base_url: None,
        };
        let token = resolve_token(None, &config).unwrap();
        assert_eq!(token, "from-config");
    }

    #[test]
    fn blank_token_everywhere_is_an_error() {
        let config = FileConfig {
            token: Some("   ".to_string()),
            base_url: None,
        };
        assert!(resolve_token(Some("".to_string()), &config).is_err());
    }

    #[test]
    fn base_url_defaults_to_official_api() {
        assert_eq!(resolve_base_url(&FileConfig::default()), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_from_config() {
        let config = FileConfig {
            token: None,
            base_url: Some("https://proxy.example/v1".to_string()),
        };
        assert_eq!(resolve_base_url(&config), "https://proxy.example/v1");
    }
}
