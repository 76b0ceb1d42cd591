// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Entity derive macro.
//!
//! Entity-level options come from `#[entity(...)]` and are parsed with
//! darling. Property annotations come from the struct's doc comment.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct name | Class name used as the reflection key |
//! | `extends` | No | `BaseEntity` | Parent entity type |
//! | `methods` | No | `false` | Include methods recorded by `#[entity_methods]` |
//! | `crate` | No | `::entity_schema` | Path to the runtime crate |
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident                   (struct name, e.g., "Article")
//! ├── generics: Generics
//! ├── name: String                   (class name)
//! ├── extends: Option<Path>          (parent entity type)
//! ├── methods: bool
//! ├── krate: Path
//! └── annotations: Vec<DocAnnotation>
//! ```

use darling::FromDeriveInput;
use syn::{Attribute, Data, DeriveInput, Generics, Ident};

use crate::utils::docs::{DocAnnotation, extract_annotations};

/// Default path of the runtime crate in generated code.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::entity_schema)
}

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[entity(name = "Article", extends = "Publication", methods)]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_any), forward_attrs(doc))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Forwarded `#[doc]` attributes.
    pub attrs: Vec<Attribute>,

    /// Class name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Parent entity type.
    #[darling(default)]
    pub extends: Option<syn::Path>,

    /// Pull public methods from `EntityMethods`.
    #[darling(default)]
    pub methods: bool,

    /// Runtime crate path.
    #[darling(default = "default_crate_path", rename = "crate")]
    pub krate: syn::Path
}

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier (e.g., `Article`).
    pub ident: Ident,

    /// Struct generics, carried over to the generated impl.
    pub generics: Generics,

    /// Class name used as the reflection key.
    pub name: String,

    /// Parent entity type, `None` for the root entity.
    pub extends: Option<syn::Path>,

    /// Whether methods recorded by `#[entity_methods]` are part of the
    /// declaration.
    pub methods: bool,

    /// Runtime crate path.
    pub krate: syn::Path,

    /// `@kind value` lines from the struct's doc comment.
    pub annotations: Vec<DocAnnotation>
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum or union
    /// - Unknown or malformed `#[entity(...)]` options
    /// - Empty `name`
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        if !matches!(input.data, Data::Struct(_)) {
            return Err(
                darling::Error::custom("Entity can only be derived for structs")
                    .with_span(&input.ident)
            );
        }

        let attrs = EntityAttrs::from_derive_input(input)?;

        let name = match attrs.name {
            Some(name) if name.trim().is_empty() => {
                return Err(darling::Error::custom("entity name must not be empty")
                    .with_span(&attrs.ident));
            }
            Some(name) => name,
            None => attrs.ident.to_string()
        };

        let annotations = extract_annotations(&attrs.attrs);

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            name,
            extends: attrs.extends,
            methods: attrs.methods,
            krate: attrs.krate,
            annotations
        })
    }
}
