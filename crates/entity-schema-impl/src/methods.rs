// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[entity_methods]` attribute implementation.
//!
//! Records the public accessor methods of an inherent impl block so that
//! getter discovery can see them. The impl block itself is emitted
//! unchanged.
//!
//! # Recorded Methods
//!
//! A method is recorded when it is `pub` and takes only a receiver:
//!
//! ```rust,ignore
//! #[entity_methods]
//! impl Article {
//!     pub fn get_slug(&self) -> String { ... }       // recorded as "getSlug"
//!
//!     /// @internal
//!     pub fn get_cache_key(&self) -> String { ... }  // recorded with tag "internal"
//!
//!     pub fn rename(&mut self, title: &str) { ... }  // skipped: takes an argument
//!     fn get_secret(&self) -> String { ... }         // skipped: private
//!     pub fn create() -> Self { ... }                // skipped: no receiver
//! }
//! ```
//!
//! Snake-case names are recorded in lowerCamelCase so the derived getter
//! keys line up with `$camelCase` property names.

use convert_case::{Case, Casing};
use darling::{FromMeta, ast::NestedMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Visibility, ext::IdentExt, parse_macro_input};

use crate::{entity::parse::default_crate_path, utils::docs::extract_annotations};

/// Options accepted by `#[entity_methods(...)]`.
#[derive(Debug, FromMeta)]
struct MethodsArgs {
    /// Runtime crate path.
    #[darling(default = "default_crate_path", rename = "crate")]
    krate: syn::Path
}

/// A method selected for the declaration.
#[derive(Debug, PartialEq, Eq)]
struct MethodDef {
    /// Reflected method name (lowerCamelCase).
    name: String,
    /// Annotation kinds from the method's doc comment.
    tags: Vec<String>
}

/// Main entry point for the `entity_methods` attribute.
pub fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(list) => list,
        Err(err) => return darling::Error::from(err).write_errors().into()
    };
    let args = match MethodsArgs::from_list(&args) {
        Ok(args) => args,
        Err(err) => return err.write_errors().into()
    };
    let item = parse_macro_input!(item as ItemImpl);

    match generate(&args.krate, &item) {
        Ok(tokens) => quote! { #item #tokens }.into(),
        Err(err) => {
            let err = err.to_compile_error();
            quote! { #item #err }.into()
        }
    }
}

/// Generate the `EntityMethods` implementation.
fn generate(krate: &syn::Path, item: &ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "entity_methods must be applied to an inherent impl block"
        ));
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    let declarations = collect_methods(item).into_iter().map(|method| {
        let name = method.name;
        let tags = method.tags;
        quote! {
            #krate::MethodDeclaration::new(#name)#(.annotate(#tags))*
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::EntityMethods for #self_ty #where_clause {
            fn public_methods() -> ::std::vec::Vec<#krate::MethodDeclaration> {
                ::std::vec![#(#declarations),*]
            }
        }
    })
}

/// Public receiver-only methods of the impl block, in source order.
fn collect_methods(item: &ItemImpl) -> Vec<MethodDef> {
    item.items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Fn(method) if is_accessor(method) => Some(MethodDef {
                name: reflected_name(method),
                tags: extract_annotations(&method.attrs)
                    .into_iter()
                    .map(|a| a.kind)
                    .collect()
            }),
            _ => None
        })
        .collect()
}

fn is_accessor(method: &ImplItemFn) -> bool {
    let inputs = &method.sig.inputs;
    matches!(method.vis, Visibility::Public(_))
        && inputs.len() == 1
        && matches!(inputs.first(), Some(FnArg::Receiver(_)))
}

fn reflected_name(method: &ImplItemFn) -> String {
    method.sig.ident.unraw().to_string().to_case(Case::Camel)
}
