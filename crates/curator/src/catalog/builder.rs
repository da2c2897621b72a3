use super::{Catalog, Shared};
use crate::{client::Client, config::ClientConfig, MetaClass};
use anyhow::Result;
use curator_core::{build_model, ClassDescriptor};
use std::sync::Arc;
use tracing::info;

/// Collects metadata classes before connecting to the catalog.
#[derive(Default)]
pub struct Builder {
    /// Class descriptors in registration order
    classes: Vec<ClassDescriptor>,
}

impl Builder {
    pub fn register<T: MetaClass>(&mut self) -> &mut Self {
        self.classes.push(T::describe());
        self
    }

    /// Resolves every registered class into a model under the configured
    /// namespace and connects. With `autocommit` set, the models are pushed
    /// to the catalog immediately; any resolution failure aborts the
    /// connect.
    pub async fn connect(&self, config: ClientConfig) -> Result<Catalog> {
        let models = self
            .classes
            .iter()
            .map(|class| build_model(class, &config.namespace))
            .collect::<curator_core::Result<Vec<_>>>()?;

        let client = Client::new(&config)?;
        let catalog = Catalog {
            shared: Arc::new(Shared {
                client,
                config,
                models,
            }),
        };

        if catalog.config().autocommit {
            info!(
                models = catalog.models().len(),
                "registering models on connect"
            );
            catalog.register_models().await?;
        }

        Ok(catalog)
    }
}
