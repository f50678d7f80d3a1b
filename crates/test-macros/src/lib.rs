//! `#[db_test]`: run an async database test on the shared test runtime.
//!
//! The attribute rewrites
//!
//! ```ignore
//! #[db_test]
//! async fn reads_senators() { /* ... */ }
//! ```
//!
//! into a plain `#[test]` whose body is driven by
//! `crate::common::test_db::run_test`, so every test shares the runtime that
//! owns the Postgres container and pool.
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, ItemFn};

fn reject(span: proc_macro2::Span, message: &str) -> TokenStream {
    syn::Error::new(span, message).to_compile_error().into()
}

/// Marks an async, argument-free function as a database test.
#[proc_macro_attribute]
pub fn db_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    parse_macro_input!(attr as syn::parse::Nothing);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(item as ItemFn);

    if sig.asyncness.is_none() {
        return reject(sig.fn_token.span(), "#[db_test] requires an async fn");
    }
    if !sig.inputs.is_empty() {
        return reject(sig.inputs.span(), "#[db_test] functions take no arguments");
    }
    if !sig.generics.params.is_empty() {
        return reject(sig.generics.span(), "#[db_test] functions cannot be generic");
    }

    let name = &sig.ident;
    let output = &sig.output;

    TokenStream::from(quote! {
        #(#attrs)*
        #[test]
        #vis fn #name() #output {
            crate::common::test_db::run_test(async #block)
        }
    })
}
