//! Tagging HDFS files and directories.
//!
//! Tags are a load-bearing piece of business metadata: downstream tooling
//! keys encryption, masking, and permission restrictions off them. This
//! program marks an HDFS directory as sensitive.

use curator::{Catalog, ClientConfig, EntityType, HdfsEntity, SourceType};

#[tokio::main]
async fn main() -> curator::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .expect("usage: demo-set-hdfs-tags <config-file>");

    // set up the catalog handle and api client
    let catalog = Catalog::builder()
        .register::<HdfsEntity>()
        .connect(ClientConfig::from_file(config_path)?)
        .await?;

    let fs = catalog.client().only_source(SourceType::Hdfs).await?;

    // send tags for the directory to the catalog
    let mut dir = HdfsEntity::new("/user/hdfs", EntityType::Directory, fs.identity);
    dir.tags
        .set(["HAS_SENSITIVE_FILES", "CONTAINS_SOME_SUPER_SECRET_STUFF"]);

    catalog.write(&dir).await?;

    println!("tagged {}", dir.file_system_path);

    Ok(())
}
