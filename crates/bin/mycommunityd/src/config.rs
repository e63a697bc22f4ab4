//! Daemon settings: an optional `mycommunity.toml`, then `MYCOMMUNITY_*`
//! environment variables on top.
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:3000"
//!
//! [storage]
//! path = "events.json"
//!
//! [cors]
//! allowed_origin = "http://localhost:5173"
//!
//! [logging]
//! filter = "mycommunityd=info,mycommunity=info,tower_http=debug"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "mycommunity.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: Server,
    pub storage: Storage,
    pub cors: Cors,
    pub logging: Logging,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Server {
    pub listen: SocketAddr,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Storage {
    /// JSON document holding every event.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cors {
    /// The one browser origin allowed to call the API.
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logging {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            path: PathBuf::from("events.json"),
        }
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: "mycommunityd=info,mycommunity=info,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Read [`CONFIG_FILE`] if present, apply the process environment and
    /// check the result.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed file, an unparsable
    /// `MYCOMMUNITY_LISTEN`, or an unusable setting.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::read(Path::new(CONFIG_FILE))?;
        config.override_with(|key| std::env::var(key).ok())?;
        config.check()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// `RUST_LOG` wins over `MYCOMMUNITY_LOG`.
    fn override_with<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = var("MYCOMMUNITY_LISTEN") {
            self.server.listen = listen
                .parse()
                .map_err(|_| ConfigError::Env("MYCOMMUNITY_LISTEN", listen))?;
        }
        if let Some(path) = var("MYCOMMUNITY_EVENTS_PATH") {
            self.storage.path = path.into();
        }
        if let Some(origin) = var("MYCOMMUNITY_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("MYCOMMUNITY_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.server.listen.port() == 0 {
            return Err(ConfigError::Invalid("server.listen needs a non-zero port"));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("storage.path is empty"));
        }
        if self.cors.allowed_origin.trim().is_empty() {
            return Err(ConfigError::Invalid("cors.allowed_origin is empty"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[source] std::io::Error),
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("{0} is not a valid value: {1:?}")]
    Env(&'static str, String),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
