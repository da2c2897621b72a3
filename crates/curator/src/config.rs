use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Serialization format for metadata pushed through the write channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    #[default]
    Json,
    Csv,
}

/// Connection settings for the catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// URL of the application pushing metadata; recorded as the origin of
    /// its writes.
    pub application_url: String,

    /// Base URL of the catalog service API.
    pub catalog_url: String,

    pub username: String,
    pub password: String,

    /// Namespace every model from this client is registered under.
    pub namespace: String,

    /// Parent URI grouping the metadata written by this client.
    pub metadata_parent_uri: String,

    #[serde(default)]
    pub file_format: Format,

    /// Push registered models to the catalog immediately on connect.
    #[serde(default)]
    pub autocommit: bool,

    /// Accept invalid TLS certificates. Only for test clusters.
    #[serde(default)]
    pub disable_ssl_validation: bool,
}

impl ClientConfig {
    /// Loads configuration from `path`, with `CURATOR__`-prefixed
    /// environment variables taking precedence (e.g. `CURATOR__PASSWORD`
    /// overrides the `password` key).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix("CURATOR").separator("__"))
            .build()
            .context("failed to read client configuration")?;

        config
            .try_deserialize()
            .context("failed to deserialize client configuration")
    }
}
