use curator::{EntityType, HdfsEntity};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn hdfs_entity_serializes_as_camel_case_document() {
    let mut dir = HdfsEntity::new("/user/hdfs", EntityType::Directory, "a09b0233cc58ff7d601eaa68673a20c6");
    dir.name = Some("warehouse".to_string());
    dir.tags.set(["HAS_SENSITIVE_FILES"]);
    dir.properties.put("steward", "jsmith");

    let doc = serde_json::to_value(&dir).unwrap();
    assert_eq!(
        json!({
            "fileSystemPath": "/user/hdfs",
            "entityType": "DIRECTORY",
            "sourceId": "a09b0233cc58ff7d601eaa68673a20c6",
            "name": "warehouse",
            "description": null,
            "created": null,
            "tags": {
                "add": ["HAS_SENSITIVE_FILES"],
                "remove": [],
                "reset": true,
            },
            "properties": {
                "add": {"steward": "jsmith"},
                "remove": [],
                "reset": false,
            },
        }),
        doc
    );
}

#[test]
fn source_listing_deserializes() {
    let raw = json!([
        {
            "identity": "a09b0233cc58ff7d601eaa68673a20c6",
            "sourceType": "HDFS",
            "url": "hdfs://name-node:8020",
        },
        {
            "identity": "efdcbb99f0a84d80b1b4b5a3d4b1b2f5",
            "sourceType": "HIVE",
            "url": "thrift://hive-metastore:9083",
        },
    ]);

    let sources: Vec<curator::Source> = serde_json::from_value(raw).unwrap();
    assert_eq!(2, sources.len());
    assert_eq!(curator::SourceType::Hdfs, sources[0].source_type);
    assert_eq!("hdfs://name-node:8020", sources[0].url);
}

#[test]
fn registered_model_document_matches_the_wire_contract() {
    use curator::MetaClass;

    let model = HdfsEntity::model("acme").unwrap();
    let doc = serde_json::to_value(&model).unwrap();

    assert_eq!(
        json!({
            "name": "hdfs_entity",
            "namespace": "acme",
            "fields": [
                {"name": "fileSystemPath", "type": "STRING", "multiValued": false},
                {"name": "entityType", "type": "STRING", "multiValued": false},
                {"name": "sourceId", "type": "STRING", "multiValued": false},
                {"name": "name", "type": "STRING", "multiValued": false},
                {"name": "description", "type": "STRING", "multiValued": false},
                {"name": "created", "type": "DATE", "multiValued": false},
            ],
        }),
        doc
    );
}
