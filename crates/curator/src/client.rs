use crate::{
    config::ClientConfig,
    entity::{Source, SourceType},
};
use anyhow::{bail, Context, Result};
use curator_core::Model;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// HTTP client for the catalog service's metadata API.
///
/// Stateless per call: every request authenticates with HTTP basic auth and
/// carries a JSON body or receives one. Failures surface as errors; nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
    username: String,
    password: String,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut base = Url::parse(&config.catalog_url).context("invalid catalog URL")?;

        // Joining relative endpoints drops the last path segment unless the
        // base ends with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.disable_ssl_validation)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Registers one model with the catalog.
    pub async fn register_model(&self, model: &Model) -> Result<()> {
        let url = self.endpoint(&format!("models/{}/{}", model.namespace(), model.name()))?;
        debug!(
            model = model.name(),
            namespace = model.namespace(),
            "registering model"
        );

        let response = self
            .http
            .put(url)
            .basic_auth(&self.username, Some(&self.password))
            .json(model)
            .send()
            .await
            .with_context(|| format!("model registration request for `{}` failed", model.name()))?;

        Self::check(response).await
    }

    /// Registers models one by one, stopping at the first failure.
    pub async fn register_models(&self, models: &[Model]) -> Result<()> {
        for model in models {
            self.register_model(model).await?;
        }
        Ok(())
    }

    /// Writes one entity's metadata.
    pub async fn write<T: Serialize>(&self, entity: &T) -> Result<()> {
        let url = self.endpoint("entities/")?;
        debug!("writing entity metadata");

        let response = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .json(entity)
            .send()
            .await
            .context("entity write request failed")?;

        Self::check(response).await
    }

    /// Lists the metadata sources known to the catalog.
    pub async fn sources(&self) -> Result<Vec<Source>> {
        let url = self.endpoint("sources")?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .context("source listing request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("catalog returned {status} while listing sources");
        }

        response
            .json()
            .await
            .context("failed to deserialize source listing")
    }

    /// Returns the single source of the given type; errors when the catalog
    /// knows none, or more than one.
    pub async fn only_source(&self, source_type: SourceType) -> Result<Source> {
        let mut matches: Vec<_> = self
            .sources()
            .await?
            .into_iter()
            .filter(|source| source.source_type == source_type)
            .collect();

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => bail!("catalog has no source of type {source_type:?}"),
            n => bail!("catalog has {n} sources of type {source_type:?}, expected exactly one"),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("invalid endpoint path `{path}`"))
    }

    async fn check(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("catalog returned {status}: {body}");
        }
        Ok(())
    }
}
