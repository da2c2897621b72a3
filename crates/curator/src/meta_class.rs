use curator_core::{build_model, ClassDescriptor, Model};

/// Types that publish a custom metadata model.
///
/// Normally implemented with `#[derive(MetaClass)]`; the derive walks the
/// struct's `#[mproperty]` fields (flattening embedded ancestors) into an
/// ordered descriptor list.
pub trait MetaClass {
    /// Logical model name. Combined with the namespace it identifies the
    /// model within the catalog.
    fn model_name() -> &'static str;

    /// The flattened, ordered description of every metadata-participating
    /// field, embedded ancestors included.
    fn describe() -> ClassDescriptor;

    /// Builds the model registered for this type under `namespace`.
    fn model(namespace: &str) -> curator_core::Result<Model> {
        build_model(&Self::describe(), namespace)
    }
}
