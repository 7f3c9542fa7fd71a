use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://quotes.rest";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Connection settings shared by every tool handler. Never mutated after startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "baseURL")]
    base_url: Option<String>,
    #[serde(rename = "bearerToken")]
    bearer_token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.filter(|token| !token.trim().is_empty()),
        }
    }

    /// Explicit values win; the config file only fills in what is still missing.
    pub fn resolve(
        base_url: Option<String>,
        bearer_token: Option<String>,
        config_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.filter(|value| !value.trim().is_empty());
        let bearer_token = bearer_token.filter(|value| !value.trim().is_empty());

        let file = match (&base_url, &bearer_token, config_path) {
            (Some(_), Some(_), _) | (_, _, None) => ConfigFile::default(),
            (_, _, Some(path)) => read_config_file(path)?,
        };

        let base_url = base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, bearer_token.or(file.bearer_token)))
    }

    pub fn has_token(&self) -> bool {
        self.bearer_token.is_some()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".api").join("config.json"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
