mod builder;
pub use builder::Builder;

use crate::{client::Client, config::ClientConfig, MetaClass};
use anyhow::Result;
use curator_core::Model;
use serde::Serialize;
use std::{path::Path, sync::Arc};

/// Shared state between all `Catalog` clones.
#[derive(Debug)]
struct Shared {
    client: Client,
    config: ClientConfig,
    models: Vec<Model>,
}

/// Handle to the metadata catalog: the models registered through the
/// [`Builder`] plus the transport used to push metadata. Cloning is cheap
/// and clones share the registered models.
#[derive(Debug, Clone)]
pub struct Catalog {
    shared: Arc<Shared>,
}

impl Catalog {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects using the configuration at `path`, with no models
    /// registered.
    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Catalog> {
        Catalog::builder()
            .connect(ClientConfig::from_file(path)?)
            .await
    }

    /// Registered models, in registration order.
    pub fn models(&self) -> &[Model] {
        &self.shared.models
    }

    /// Builds the model this catalog would register for `T`, using the
    /// configured namespace.
    pub fn model_of<T: MetaClass>(&self) -> curator_core::Result<Model> {
        T::model(&self.shared.config.namespace)
    }

    /// Pushes every registered model to the catalog.
    pub async fn register_models(&self) -> Result<()> {
        self.shared.client.register_models(&self.shared.models).await
    }

    /// Writes one entity's metadata.
    pub async fn write<T: Serialize>(&self, entity: &T) -> Result<()> {
        self.shared.client.write(entity).await
    }

    pub fn client(&self) -> &Client {
        &self.shared.client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.shared.config
    }
}
