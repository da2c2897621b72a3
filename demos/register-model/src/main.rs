//! Registering a custom metadata model.
//!
//! Declares a model for curated customer datasets and pushes it to the
//! catalog, then prints the resolved schema.

use chrono::{DateTime, Utc};
use curator::{Catalog, ClientConfig, MetaClass, TagChangeSet};

#[derive(Debug, MetaClass)]
#[mclass(model = "customer_dataset")]
#[allow(dead_code)]
struct CustomerDataset {
    #[mproperty]
    owner: String,

    #[mproperty(attribute = "goldenCopy")]
    golden: bool,

    #[mproperty(field_type = "TEXT")]
    quality_notes: String,

    #[mproperty]
    refreshed: DateTime<Utc>,

    #[mproperty]
    upstream_feeds: Vec<String>,

    #[mproperty]
    tags: TagChangeSet,
}

#[tokio::main]
async fn main() -> curator::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .expect("usage: demo-register-model <config-file>");

    let catalog = Catalog::builder()
        .register::<CustomerDataset>()
        .connect(ClientConfig::from_file(config_path)?)
        .await?;

    for model in catalog.models() {
        println!("model {}/{}", model.namespace(), model.name());
        for field in model.fields() {
            println!(
                "  {} {} multi={}",
                field.name(),
                field.field_type(),
                field.is_multi_valued()
            );
        }
    }

    catalog.register_models().await?;

    println!(">>> DONE <<<");

    Ok(())
}
