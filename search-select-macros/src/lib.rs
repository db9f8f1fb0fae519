//! Procedural macros for search-select

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<ActionVariant, ()>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,

    /// Category this variant belongs to
    #[darling(default)]
    category: Option<String>,
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method that returns the variant name as a static string.
///
/// Also implements `ActionCategory`: variants marked with
/// `#[action(category = "...")]` return that category, the rest return `None`.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum OwnerAction {
///     #[action(category = "selection")]
///     SelectionChanged(Option<serde_json::Value>),
///     #[action(category = "search")]
///     SearchChanged(Option<String>),
///     Quit,
/// }
///
/// assert_eq!(OwnerAction::Quit.name(), "Quit");
/// assert_eq!(OwnerAction::SearchChanged(None).category(), Some("search"));
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    // `{ .. }` matches unit, tuple and struct variants alike
    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();
        quote! { #name::#variant_name { .. } => #variant_str }
    });

    let mut expanded: proc_macro2::TokenStream = quote! {
        impl #impl_generics search_select::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    let category_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let category = match &v.category {
            Some(c) => quote! { ::core::option::Option::Some(#c) },
            None => quote! { ::core::option::Option::None },
        };
        quote! { #name::#variant_name { .. } => #category }
    });

    expanded.extend(quote! {
        impl #impl_generics search_select::ActionCategory for #name #ty_generics #where_clause {
            fn category(&self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#category_arms),*
                }
            }
        }
    });

    TokenStream::from(expanded)
}
