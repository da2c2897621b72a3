//! Built-in entity vocabulary for the assets the catalog tracks.

use crate::MetaClass;
use chrono::{DateTime, Utc};
use curator_core::{TagChangeSet, UdpChangeSet};
use serde::{Deserialize, Serialize};

/// Kinds of data assets metadata can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Cluster,
    Dataset,
    Directory,
    Field,
    File,
    Message,
    Operation,
    OperationExecution,
    SubOperation,
    Table,
    View,
}

/// Kinds of cluster services a metadata source can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Hdfs,
    Hive,
    Impala,
    MapReduce,
    Oozie,
    Pig,
    Spark,
    Sqoop,
    Yarn,
}

/// One metadata source registered with the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Catalog identity of the source; entities reference it as their
    /// `sourceId`.
    pub identity: String,
    pub source_type: SourceType,
    pub url: String,
}

/// An HDFS file or directory, addressed by file system path within one HDFS
/// source.
#[derive(Debug, Clone, Serialize, MetaClass)]
#[serde(rename_all = "camelCase")]
#[mclass(model = "hdfs_entity")]
pub struct HdfsEntity {
    // attribute overrides keep the published names aligned with the
    // camelCase entity JSON
    #[mproperty(attribute = "fileSystemPath")]
    pub file_system_path: String,

    #[mproperty(attribute = "entityType")]
    pub entity_type: EntityType,

    #[mproperty(attribute = "sourceId")]
    pub source_id: String,

    #[mproperty]
    pub name: Option<String>,

    #[mproperty]
    pub description: Option<String>,

    #[mproperty]
    pub created: Option<DateTime<Utc>>,

    #[mproperty]
    pub tags: TagChangeSet,

    #[mproperty]
    pub properties: UdpChangeSet,
}

impl HdfsEntity {
    pub fn new(
        file_system_path: impl Into<String>,
        entity_type: EntityType,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            file_system_path: file_system_path.into(),
            entity_type,
            source_id: source_id.into(),
            name: None,
            description: None,
            created: None,
            tags: TagChangeSet::new(),
            properties: UdpChangeSet::new(),
        }
    }
}
