//! Shared helpers for the integration suite.

use curator::config::{ClientConfig, Format};

/// A configuration pointing at a catalog that is never contacted.
pub fn offline_config() -> ClientConfig {
    ClientConfig {
        application_url: "http://etl.example.com".to_string(),
        catalog_url: "http://catalog.example.com/api/v9".to_string(),
        username: "admin".to_string(),
        password: "admin".to_string(),
        namespace: "test".to_string(),
        metadata_parent_uri: "http://etl.example.com/metadata".to_string(),
        file_format: Format::Json,
        autocommit: false,
        disable_ssl_validation: false,
    }
}
