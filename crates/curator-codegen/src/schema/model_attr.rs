/// Struct-level `#[mclass(...)]` arguments.
#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Explicit model name; defaults to the snake_case struct identifier.
    pub(crate) model: Option<String>,
}

impl ModelAttr {
    pub(crate) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<ModelAttr> {
        let mut ret = ModelAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("mclass") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("model") {
                    if ret.model.is_some() {
                        return Err(meta.error("duplicate `model` argument"));
                    }
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    ret.model = Some(lit.value());
                } else {
                    return Err(meta.error("unexpected mclass argument"));
                }

                Ok(())
            })?;
        }

        Ok(ret)
    }
}
