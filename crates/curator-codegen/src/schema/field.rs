use super::ValueTy;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// How the field participates in the model
    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Contributes one field descriptor
    Descriptor(Descriptor),

    /// The field's type contributes its own descriptor list inline at this
    /// position (embedded ancestor)
    Flatten(syn::Type),
}

#[derive(Debug)]
pub(crate) struct Descriptor {
    pub(crate) value_ty: ValueTy,

    /// Explicit wire-name override from `attribute = "..."`
    pub(crate) attribute: Option<String>,

    /// Explicit wire-type override token from `field_type = "..."`
    pub(crate) field_type: Option<String>,
}

impl Field {
    /// Parses one struct field. Returns `Ok(None)` for fields without
    /// `#[mproperty]`; they do not participate in the metadata model.
    pub(crate) fn from_ast(field: &syn::Field) -> syn::Result<Option<Field>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "metadata fields must be named",
            ));
        };

        let mut marked = false;
        let mut flatten = false;
        let mut attribute = None;
        let mut field_type = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("mproperty") {
                continue;
            }

            if marked {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[mproperty] attribute",
                ));
            }
            marked = true;

            // bare `#[mproperty]` has no arguments to parse
            if matches!(attr.meta, syn::Meta::Path(_)) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("attribute") {
                    if attribute.is_some() {
                        return Err(meta.error("duplicate `attribute` argument"));
                    }
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    attribute = Some(lit.value());
                } else if meta.path.is_ident("field_type") {
                    if field_type.is_some() {
                        return Err(meta.error("duplicate `field_type` argument"));
                    }
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    field_type = Some(lit.value());
                } else if meta.path.is_ident("flatten") {
                    if flatten {
                        return Err(meta.error("duplicate `flatten` argument"));
                    }
                    flatten = true;
                } else {
                    return Err(meta.error("unexpected mproperty argument"));
                }

                Ok(())
            })?;
        }

        if !marked {
            return Ok(None);
        }

        let ty = if flatten {
            if attribute.is_some() || field_type.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "`flatten` does not combine with `attribute` or `field_type`",
                ));
            }
            FieldTy::Flatten(field.ty.clone())
        } else {
            FieldTy::Descriptor(Descriptor {
                value_ty: ValueTy::from_ast(&field.ty)?,
                attribute,
                field_type,
            })
        };

        Ok(Some(Field {
            ident: ident.clone(),
            ty,
        }))
    }
}
