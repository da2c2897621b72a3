use crate::schema::{Field, FieldTy, Model, ScalarTy, ValueTy};

use proc_macro2::TokenStream;
use quote::quote;

/// Path the generated code reaches runtime types through.
fn support() -> TokenStream {
    quote!(::curator::codegen_support)
}

pub(crate) fn model(model: &Model) -> TokenStream {
    let ident = &model.ident;
    let model_name = &model.model_name;
    let support = support();
    let pushes = model.fields.iter().map(expand_field);

    quote! {
        impl ::curator::MetaClass for #ident {
            fn model_name() -> &'static str {
                #model_name
            }

            fn describe() -> #support::ClassDescriptor {
                let mut fields = Vec::new();
                #(#pushes)*

                #support::ClassDescriptor {
                    model_name: #model_name.to_string(),
                    fields,
                }
            }
        }
    }
}

fn expand_field(field: &Field) -> TokenStream {
    let support = support();

    match &field.ty {
        FieldTy::Flatten(ty) => quote! {
            fields.extend(<#ty as #support::MetaClass>::describe().fields);
        },
        FieldTy::Descriptor(descriptor) => {
            let ident = field.ident.to_string();
            let value_ty = expand_value_ty(&descriptor.value_ty);
            let attribute = expand_opt_str(descriptor.attribute.as_deref());
            let field_type = expand_opt_str(descriptor.field_type.as_deref());

            quote! {
                fields.push(#support::FieldDescriptor {
                    ident: #ident,
                    value_ty: #value_ty,
                    attribute: #attribute,
                    field_type: #field_type,
                });
            }
        }
    }
}

fn expand_value_ty(value_ty: &ValueTy) -> TokenStream {
    let support = support();

    match value_ty {
        ValueTy::Scalar(scalar) => {
            let scalar = expand_scalar_ty(scalar);
            quote!(#support::ValueTy::Scalar(#scalar))
        }
        ValueTy::Collection(scalar) => {
            let scalar = expand_scalar_ty(scalar);
            quote!(#support::ValueTy::Collection(#scalar))
        }
    }
}

fn expand_scalar_ty(scalar: &ScalarTy) -> TokenStream {
    let support = support();

    match scalar {
        ScalarTy::Bool => quote!(#support::ScalarTy::Bool),
        ScalarTy::Instant => quote!(#support::ScalarTy::Instant),
        ScalarTy::F64 => quote!(#support::ScalarTy::F64),
        ScalarTy::F32 => quote!(#support::ScalarTy::F32),
        ScalarTy::I32 => quote!(#support::ScalarTy::I32),
        ScalarTy::I64 => quote!(#support::ScalarTy::I64),
        ScalarTy::Str => quote!(#support::ScalarTy::Str),
        ScalarTy::TagChangeSet => quote!(#support::ScalarTy::TagChangeSet),
        ScalarTy::UdpChangeSet => quote!(#support::ScalarTy::UdpChangeSet),
        ScalarTy::Opaque(name) => quote!(#support::ScalarTy::Opaque(#name)),
    }
}

fn expand_opt_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(Some(#value)),
        None => quote!(None),
    }
}
