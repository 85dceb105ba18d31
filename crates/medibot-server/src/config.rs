//! Server configuration.
//!
//! `ServerConfig` is read from a TOML file. Every key is optional:
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 5055
//! knowledge_path = "knowledge/diseases.toml"
//! ```
//!
//! Without `knowledge_path` the built-in disease table is served.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use medibot_contracts::error::{MedibotError, MedibotResult};
use medibot_knowledge::KnowledgeTable;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5055;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Optional TOML knowledge file replacing the built-in table.
    pub knowledge_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            knowledge_path: None,
        }
    }
}

impl ServerConfig {
    /// Parse `s` as TOML server configuration.
    ///
    /// Returns `MedibotError::ConfigError` if the TOML is malformed, names an
    /// unknown key, or leaves `host` blank.
    pub fn from_toml_str(s: &str) -> MedibotResult<Self> {
        let config: ServerConfig = toml::from_str(s).map_err(|e| MedibotError::ConfigError {
            reason: format!("failed to parse server config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as server configuration.
    pub fn from_file(path: &Path) -> MedibotResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MedibotError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> MedibotResult<()> {
        if self.host.trim().is_empty() {
            return Err(MedibotError::ConfigError {
                reason: "host must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the knowledge table this configuration asks for.
    pub fn load_table(&self) -> MedibotResult<Arc<KnowledgeTable>> {
        match &self.knowledge_path {
            Some(path) => {
                info!(path = %path.display(), "loading knowledge file");
                Ok(Arc::new(KnowledgeTable::from_file(path)?))
            }
            None => Ok(Arc::new(KnowledgeTable::builtin().clone())),
        }
    }
}
