mod field;
pub use field::{FieldType, ModelField};

use crate::{describe::ClassDescriptor, Result};
use serde::Serialize;

/// The schema describing the custom metadata fields published for one entity
/// type, scoped by namespace.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    name: String,
    namespace: String,
    fields: Vec<ModelField>,
}

impl Model {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            fields: Vec::new(),
        }
    }

    /// Name of the model. The combination of name and namespace is expected
    /// to be unique within the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace grouping key supplied by the caller.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolved custom fields, in insertion order.
    pub fn fields(&self) -> &[ModelField] {
        &self.fields
    }

    /// Appends a custom field.
    ///
    /// Fields with duplicate names are not deduplicated; that is the
    /// caller's responsibility. Must not be called concurrently with
    /// iteration over [`fields`](Self::fields).
    pub fn add_field(&mut self, field: ModelField) {
        self.fields.push(field);
    }
}

/// Builds the [`Model`] for a flattened class description.
///
/// Fields of the reserved change-set marker types track tag and property
/// edits on write and are not part of the published schema; they are
/// skipped. Every other field resolves through
/// [`ModelField::from_descriptor`], and the first resolution failure aborts
/// the build. No partial model is ever returned.
pub fn build_model(class: &ClassDescriptor, namespace: impl Into<String>) -> Result<Model> {
    let mut model = Model::new(class.model_name.clone(), namespace);

    for descriptor in &class.fields {
        if descriptor.value_ty.scalar_ty().is_change_set() {
            continue;
        }
        model.add_field(ModelField::from_descriptor(descriptor)?);
    }

    Ok(model)
}
