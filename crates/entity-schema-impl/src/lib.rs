// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Internal proc-macro implementation for entity-schema.
//!
//! Use the `entity-schema` crate instead; it re-exports these macros together
//! with the runtime types the generated code refers to.
//!
//! # Attribute Quick Reference
//!
//! ## Entity-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! /// @property string $title
//! /// @property-read int|null $viewCount -> view_count
//! #[derive(Entity)]
//! #[entity(
//!     name = "Article",          // Optional: class name (default: struct name)
//!     extends = "Publication",   // Optional: parent entity (default: BaseEntity)
//!     methods,                   // Optional: include #[entity_methods] accessors
//!     crate = "::entity_schema"  // Optional: runtime crate path
//! )]
//! pub struct Article { /* ... */ }
//! ```
//!
//! ## Impl-Level `#[entity_methods]`
//!
//! ```rust,ignore
//! #[entity_methods]
//! impl Article {
//!     pub fn get_slug(&self) -> String { /* ... */ }
//!
//!     /// @internal
//!     pub fn get_cache_key(&self) -> String { /* ... */ }
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod entity;
mod methods;
mod utils;

use proc_macro::TokenStream;

/// Derive macro describing an entity class to a `ClassRegistry`.
///
/// # Overview
///
/// Property annotations are read from the struct's doc comment, one per line:
///
/// | Line | Meaning |
/// |------|---------|
/// | `@property <type> $<name>` | Read-write property |
/// | `@property-read <type> $<name>` | Read-only property |
/// | `... -> <column>` | Explicit storage column |
/// | `<type>\|null` | Nullable property |
///
/// Other `@tags` are recorded as annotations too and ignored by the schema.
///
/// # Entity Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `name` | No | struct name | Class name |
/// | `extends` | No | `BaseEntity` | Parent entity type |
/// | `methods` | No | `false` | Include methods from `#[entity_methods]` |
/// | `crate` | No | `::entity_schema` | Runtime crate path |
///
/// # Example
///
/// ```rust,ignore
/// use entity_schema::{ClassRegistry, Entity, Reflector, entity_methods};
///
/// /// @property string $title
/// /// @property-read int|null $viewCount
/// #[derive(Entity)]
/// #[entity(methods)]
/// pub struct Article {
///     title: String,
///     view_count: Option<i64>,
/// }
///
/// #[entity_methods]
/// impl Article {
///     pub fn get_slug(&self) -> String {
///         self.title.to_lowercase().replace(' ', "-")
///     }
/// }
///
/// let registry = ClassRegistry::new();
/// registry.register::<Article>();
///
/// let reflector = Reflector::new(registry);
/// let article = reflector.entity::<Article>();
/// assert!(article.has_property("title")?);
/// assert!(article.getters()?.contains_key("slug"));
/// ```
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}

/// Record the public accessor methods of an inherent impl block.
///
/// Generates an `EntityMethods` implementation listing every `pub` method
/// that takes only a receiver. Names are converted to lowerCamelCase
/// (`get_view_count` becomes `getViewCount`); `@tag` lines in a method's doc
/// comment become its annotations, so `/// @internal` hides it from getter
/// discovery.
///
/// Combine with `#[entity(methods)]` on the entity struct. Apply it to one
/// impl block per type.
///
/// # Options
///
/// | Option | Default | Description |
/// |--------|---------|-------------|
/// | `crate` | `::entity_schema` | Runtime crate path |
#[proc_macro_attribute]
pub fn entity_methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    methods::expand(attr, item)
}
