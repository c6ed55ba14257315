use proc_macro::TokenStream;
use syn::DeriveInput;
use quote::quote;

/// Systems derived this way only track membership; override `run` by hand for behaviour.
pub fn impl_system(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let (impl_generics, type_generics, where_clause) = ast.generics.split_for_impl();

    let gen = quote! {
        impl #impl_generics diamond_ecs::systems::System for #name #type_generics #where_clause {}
    };
    gen.into()
}
