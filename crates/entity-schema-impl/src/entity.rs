// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive macro implementation.
//!
//! Generates an `EntityClass` implementation that describes the struct to a
//! `ClassRegistry`: its class name, its parent, the annotations from its doc
//! comment and, with `#[entity(methods)]`, its recorded public methods.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::entity_schema::EntityClass for Article {
//!     const NAME: &'static str = "Article";
//!
//!     fn declaration() -> ::entity_schema::ClassDeclaration {
//!         ::entity_schema::ClassDeclaration::new(Self::NAME)
//!             .extends(<::entity_schema::BaseEntity as ::entity_schema::EntityClass>::NAME)
//!             .annotate("property", "string $title")
//!     }
//!
//!     fn register_ancestors(registry: &::entity_schema::ClassRegistry) {
//!         registry.register::<::entity_schema::BaseEntity>();
//!     }
//! }
//! ```

pub mod parse;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: &EntityDef) -> TokenStream2 {
    let krate = &entity.krate;
    let ident = &entity.ident;
    let name = &entity.name;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    let parent = match &entity.extends {
        Some(path) => quote! { #path },
        None => quote! { #krate::BaseEntity }
    };

    let kinds = entity.annotations.iter().map(|a| &a.kind);
    let values = entity.annotations.iter().map(|a| &a.value);

    let methods = if entity.methods {
        quote! {
            .methods(<Self as #krate::EntityMethods>::public_methods())
        }
    } else {
        TokenStream2::new()
    };

    quote! {
        impl #impl_generics #krate::EntityClass for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;

            fn declaration() -> #krate::ClassDeclaration {
                #krate::ClassDeclaration::new(<Self as #krate::EntityClass>::NAME)
                    .extends(<#parent as #krate::EntityClass>::NAME)
                    #(.annotate(#kinds, #values))*
                    #methods
            }

            fn register_ancestors(registry: &#krate::ClassRegistry) {
                registry.register::<#parent>();
            }
        }
    }
}
