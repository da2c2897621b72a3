use chrono::{DateTime, Utc};
use curator::{FieldType, MetaClass, TagChangeSet, UdpChangeSet};
use pretty_assertions::assert_eq;

#[derive(MetaClass)]
#[allow(dead_code)]
struct Asset {
    #[mproperty]
    name: String,

    #[mproperty]
    description: String,
}

#[derive(MetaClass)]
#[mclass(model = "dataset")]
#[allow(dead_code)]
struct Dataset {
    #[mproperty(flatten)]
    asset: Asset,

    #[mproperty]
    created: DateTime<Utc>,

    #[mproperty]
    record_count: i64,

    #[mproperty]
    tags: TagChangeSet,

    // not metadata-participating
    scratch: Vec<u8>,
}

#[test]
fn model_name_defaults_to_snake_case() {
    assert_eq!("asset", Asset::model_name());
}

#[test]
fn mclass_model_argument_wins() {
    assert_eq!("dataset", Dataset::model_name());
}

#[test]
fn flattened_ancestor_fields_come_first() {
    let class = Dataset::describe();

    let idents: Vec<_> = class.fields.iter().map(|field| field.ident).collect();
    assert_eq!(
        vec!["name", "description", "created", "record_count", "tags"],
        idents
    );
}

#[test]
fn hierarchy_model_excludes_reserved_fields() {
    // Two inherited fields plus three own ones, one of which is a reserved
    // change-set tracker: the published model has exactly four.
    let model = Dataset::model("test").unwrap();

    assert_eq!("dataset", model.name());
    assert_eq!("test", model.namespace());
    assert_eq!(4, model.fields().len());

    let names: Vec<_> = model.fields().iter().map(|field| field.name()).collect();
    assert_eq!(vec!["name", "description", "created", "record_count"], names);
}

#[derive(MetaClass)]
#[allow(dead_code)]
struct Inventory {
    #[mproperty(attribute = "displayName")]
    name: String,

    #[mproperty(field_type = "TEXT")]
    notes: String,

    #[mproperty]
    active: bool,

    #[mproperty]
    audited: Vec<DateTime<Utc>>,

    #[mproperty]
    state: LifecycleState,

    #[mproperty]
    region_codes: Option<Vec<String>>,

    #[mproperty]
    properties: UdpChangeSet,
}

#[derive(Debug)]
#[allow(dead_code)]
enum LifecycleState {
    Active,
    Retired,
}

#[test]
fn derive_resolves_the_full_field_mix() {
    let model = Inventory::model("test").unwrap();

    let fields: Vec<_> = model
        .fields()
        .iter()
        .map(|field| (field.name(), field.field_type(), field.is_multi_valued()))
        .collect();

    assert_eq!(
        vec![
            ("displayName", FieldType::String, false),
            ("notes", FieldType::Text, false),
            ("active", FieldType::Boolean, false),
            ("audited", FieldType::Date, true),
            ("state", FieldType::String, false),
            ("region_codes", FieldType::String, true),
        ],
        fields
    );
}

#[test]
fn incompatible_override_fails_the_model() {
    #[derive(MetaClass)]
    #[allow(dead_code)]
    struct Broken {
        #[mproperty(field_type = "INTEGER")]
        comment: String,
    }

    let err = Broken::model("test").unwrap_err();
    assert!(err.is_invalid_argument());
}
