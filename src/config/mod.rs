use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env::var;
use std::path::Path;
use std::time::Duration;

use crate::error::ClientError;

fn default_connect_timeout() -> u64 {
    5
}

fn default_call_timeout() -> u64 {
    30
}

/// Client configuration: the shard map plus the two timeout knobs.
///
/// Loaded from TOML, e.g.:
///
/// ```toml
/// connect_timeout_secs = 5
/// call_timeout_secs = 30
///
/// [storages.default]
/// address = "http://gitshard-0.internal:9400"
/// ```
///
/// There is no process-wide singleton; the configuration is handed to the
/// transport explicitly so its lifecycle stays visible to the caller.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ClientConfig {
    #[serde(default)]
    pub storages: HashMap<String, StorageConfig>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_call_timeout")]
    pub call_timeout_secs: u64,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct StorageConfig {
    pub address: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            storages: HashMap::new(),
            connect_timeout_secs: default_connect_timeout(),
            call_timeout_secs: default_call_timeout(),
        }
    }
}

impl ClientConfig {
    /// Loads the configuration from the file named by the `CONFIG_FILE`
    /// environment variable, falling back to `gitshard.toml`.
    pub fn load() -> Result<Self, ClientError> {
        let config_file_path = var("CONFIG_FILE").unwrap_or("gitshard.toml".to_string());
        Self::from_file(config_file_path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ClientError::invalid_argument(
                "load_config",
                format!("could not read {}: {}", path.as_ref().display(), e),
            )
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ClientError> {
        toml::from_str(content).map_err(|e| {
            ClientError::invalid_argument("load_config", format!("could not parse config: {}", e))
        })
    }

    /// Writes this configuration as pretty-formatted TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let toml_str = toml::to_string_pretty(self).expect("Could not serialize config");
        std::fs::write(path, toml_str)
    }

    pub fn storage(&self, name: &str) -> Option<&StorageConfig> {
        self.storages.get(name)
    }

    pub fn with_storage(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.storages.insert(
            name.into(),
            StorageConfig {
                address: address.into(),
            },
        );
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.storages.is_empty());
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.call_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_toml() {
        let config = ClientConfig::from_toml(
            r#"
            call_timeout_secs = 10

            [storages.default]
            address = "http://127.0.0.1:9400"

            [storages.archive]
            address = "http://127.0.0.1:9401"
            "#,
        )
        .unwrap();
        assert_eq!(config.call_timeout_secs, 10);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(
            config.storage("default").unwrap().address,
            "http://127.0.0.1:9400"
        );
        assert_eq!(
            config.storage("archive").unwrap().address,
            "http://127.0.0.1:9401"
        );
        assert!(config.storage("missing").is_none());
    }

    #[test]
    fn test_malformed_toml_is_invalid_argument() {
        let err = ClientConfig::from_toml("storages = 3").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert_eq!(err.operation, "load_config");
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("gitshard-config-{}.toml", std::process::id()));
        let config = ClientConfig::default().with_storage("default", "http://127.0.0.1:9400");
        config.save(&path).unwrap();
        let reloaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(
            reloaded.storage("default").unwrap().address,
            "http://127.0.0.1:9400"
        );
        let _ = std::fs::remove_file(&path);
    }
}
