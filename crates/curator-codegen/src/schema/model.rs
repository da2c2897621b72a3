use super::{ErrorSet, Field, ModelAttr};

use heck::ToSnakeCase;

#[derive(Debug)]
pub(crate) struct Model {
    /// The struct identifier
    pub(crate) ident: syn::Ident,

    /// Model name registered with the catalog
    pub(crate) model_name: String,

    /// Metadata-participating fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(item: &syn::ItemStruct) -> syn::Result<Model> {
        let attr = ModelAttr::from_ast(&item.attrs)?;

        let syn::Fields::Named(named) = &item.fields else {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "metadata classes must be structs with named fields",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = Vec::new();

        for field in &named.named {
            match Field::from_ast(field) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if fields.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "metadata classes need at least one #[mproperty] field",
            ));
        }

        let model_name = attr
            .model
            .unwrap_or_else(|| item.ident.to_string().to_snake_case());

        Ok(Model {
            ident: item.ident.clone(),
            model_name,
            fields,
        })
    }
}
