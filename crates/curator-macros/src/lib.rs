extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(MetaClass, attributes(mclass, mproperty))]
pub fn derive_meta_class(input: TokenStream) -> TokenStream {
    match curator_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
