/// Declared shape of a field's value, as read from the struct definition.
///
/// Mirrors the runtime descriptor vocabulary; expansion turns these into the
/// corresponding runtime values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueTy {
    Scalar(ScalarTy),
    Collection(ScalarTy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScalarTy {
    Bool,
    Instant,
    F64,
    F32,
    I32,
    I64,
    Str,
    TagChangeSet,
    UdpChangeSet,
    Opaque(String),
}

/// Type idents recognized as multi-valued containers. The first generic
/// argument is the element type.
const COLLECTIONS: [&str; 5] = ["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet"];

impl ValueTy {
    pub(crate) fn from_ast(ty: &syn::Type) -> syn::Result<Self> {
        let ty = strip_option(ty);

        let Some(segment) = last_segment(ty) else {
            return Err(syn::Error::new_spanned(
                ty,
                "unsupported metadata field type",
            ));
        };

        if is_collection(segment) {
            let Some(elem) = generic_arg(segment) else {
                return Err(syn::Error::new_spanned(
                    ty,
                    "collection is missing an element type",
                ));
            };

            let elem = strip_option(elem);
            if last_segment(elem).is_some_and(is_collection) {
                return Err(syn::Error::new_spanned(
                    elem,
                    "nested collections cannot be published as metadata",
                ));
            }

            return Ok(ValueTy::Collection(ScalarTy::from_ast(elem)?));
        }

        Ok(ValueTy::Scalar(ScalarTy::from_ast(ty)?))
    }
}

impl ScalarTy {
    fn from_ast(ty: &syn::Type) -> syn::Result<Self> {
        let Some(segment) = last_segment(ty) else {
            return Err(syn::Error::new_spanned(
                ty,
                "unsupported metadata field type",
            ));
        };

        let name = segment.ident.to_string();
        Ok(match name.as_str() {
            "bool" => Self::Bool,
            "DateTime" => Self::Instant,
            "f64" => Self::F64,
            "f32" => Self::F32,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "String" => Self::Str,
            "TagChangeSet" => Self::TagChangeSet,
            "UdpChangeSet" => Self::UdpChangeSet,
            _ => Self::Opaque(name),
        })
    }
}

fn last_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None,
    }
}

fn is_collection(segment: &syn::PathSegment) -> bool {
    COLLECTIONS.iter().any(|name| segment.ident == name)
}

fn generic_arg(segment: &syn::PathSegment) -> Option<&syn::Type> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        syn::GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// Peels `Option` wrappers; nullability does not affect the wire schema.
fn strip_option(ty: &syn::Type) -> &syn::Type {
    if let Some(segment) = last_segment(ty) {
        if segment.ident == "Option" {
            if let Some(inner) = generic_arg(segment) {
                return strip_option(inner);
            }
        }
    }
    ty
}
