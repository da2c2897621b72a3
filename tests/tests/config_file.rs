use curator::{Catalog, ClientConfig, Format};
use std::{fs, path::PathBuf};

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("curator-{}-{name}.toml", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

const CONFIG: &str = r#"
application_url = "http://etl.example.com"
catalog_url = "https://catalog.example.com:7187/api/v9/"
username = "admin"
password = "admin"
namespace = "acme"
metadata_parent_uri = "http://etl.example.com/metadata"
file_format = "JSON"
autocommit = false
disable_ssl_validation = true
"#;

#[test]
fn config_loads_from_toml_file() {
    let path = write_config("load", CONFIG);

    let config = ClientConfig::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!("acme", config.namespace);
    assert_eq!(Format::Json, config.file_format);
    assert!(config.disable_ssl_validation);
    assert!(!config.autocommit);
}

#[test]
fn missing_required_key_is_an_error() {
    let path = write_config("missing", "application_url = \"http://etl.example.com\"\n");

    let err = ClientConfig::from_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(err.to_string().contains("client configuration"));
}

#[tokio::test]
async fn catalog_connects_from_config_file() {
    let path = write_config("connect", CONFIG);

    let catalog = Catalog::from_config_file(&path).await.unwrap();
    fs::remove_file(&path).unwrap();

    assert!(catalog.models().is_empty());
    assert_eq!("acme", catalog.config().namespace);
}
