use curator::{Catalog, FieldType, HdfsEntity, MetaClass, TagChangeSet};
use pretty_assertions::assert_eq;
use tests::offline_config;

#[derive(MetaClass)]
#[mclass(model = "customer_dataset")]
#[allow(dead_code)]
struct CustomerDataset {
    #[mproperty]
    owner: String,

    #[mproperty]
    record_count: i64,

    #[mproperty]
    tags: TagChangeSet,
}

#[tokio::test]
async fn connect_builds_models_in_registration_order() {
    let catalog = Catalog::builder()
        .register::<HdfsEntity>()
        .register::<CustomerDataset>()
        .connect(offline_config())
        .await
        .unwrap();

    let names: Vec<_> = catalog
        .models()
        .iter()
        .map(|model| model.name())
        .collect();
    assert_eq!(vec!["hdfs_entity", "customer_dataset"], names);

    for model in catalog.models() {
        assert_eq!("test", model.namespace());
    }
}

#[tokio::test]
async fn hdfs_entity_model_keeps_change_sets_private() {
    let catalog = Catalog::builder()
        .register::<HdfsEntity>()
        .connect(offline_config())
        .await
        .unwrap();

    let model = &catalog.models()[0];
    let names: Vec<_> = model.fields().iter().map(|field| field.name()).collect();

    assert_eq!(
        vec![
            "fileSystemPath",
            "entityType",
            "sourceId",
            "name",
            "description",
            "created"
        ],
        names
    );
    assert!(!names.contains(&"tags"));
}

#[tokio::test]
async fn model_of_matches_registered_model() {
    let catalog = Catalog::builder()
        .register::<CustomerDataset>()
        .connect(offline_config())
        .await
        .unwrap();

    let model = catalog.model_of::<CustomerDataset>().unwrap();
    assert_eq!(catalog.models()[0].fields(), model.fields());

    let owner = &model.fields()[0];
    assert_eq!("owner", owner.name());
    assert_eq!(FieldType::String, owner.field_type());
}

#[tokio::test]
async fn connect_fails_when_a_class_cannot_resolve() {
    #[derive(MetaClass)]
    #[allow(dead_code)]
    struct Broken {
        #[mproperty(field_type = "DOUBLE")]
        comment: String,
    }

    let err = Catalog::builder()
        .register::<Broken>()
        .connect(offline_config())
        .await
        .unwrap_err();

    let root = err.downcast_ref::<curator_core::Error>().unwrap();
    assert!(root.is_invalid_argument());
}
