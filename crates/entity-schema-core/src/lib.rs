// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for entity-schema.
//!
//! Reads the property schema of entity classes from their documentation
//! annotations and finds their accessor methods. The ORM layer uses the
//! result to learn which properties exist, their type, nullability, column
//! and whether they are read-only, without touching an instance.
//!
//! # Overview
//!
//! - [`annotation`] — Parser for `@property` / `@property-read` values
//! - [`Reflection`] — Capability that lists annotations, parents and methods
//! - [`ClassRegistry`] — Build-time [`Reflection`] backend fed by
//!   `#[derive(Entity)]`
//! - [`Reflector`] — Owns the backend, the [`AnnotationCache`] and the
//!   [`SchemaConfig`]
//! - [`EntityType`] — Lazy per-class facade: merged schema and getters
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `entity-schema`, which adds the derive macros.
//! Without them:
//!
//! ```rust
//! use entity_schema_core::prelude::*;
//!
//! let registry = ClassRegistry::new();
//! registry.insert(
//!     ClassDeclaration::new("Article")
//!         .extends(ROOT_ENTITY)
//!         .annotate("property", "string $title")
//!         .annotate("property-read", "int|null $viewCount")
//!         .method(MethodDeclaration::new("getSlug"))
//!         .method(MethodDeclaration::new("getInternal").annotate("internal"))
//! );
//!
//! let reflector = Reflector::new(registry);
//! let article = reflector.entity_type("Article");
//!
//! let views = article.property("viewCount")?.expect("declared");
//! assert_eq!(views.type_name(), "integer");
//! assert!(views.is_nullable() && views.is_read_only());
//!
//! assert!(article.getters()?.contains_key("slug"));
//! assert!(!article.getters()?.contains_key("internal"));
//! # Ok::<(), ReflectionError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
mod cache;
mod config;
pub mod entity_type;
mod error;
pub mod prelude;
mod property;
mod reflection;
mod registry;

pub use annotation::{Annotations, MarkerKind};
pub use cache::AnnotationCache;
pub use config::{
    EXCLUSION_MARKER, GETTER_PREFIX, READ_ONLY_MARKER, READ_WRITE_MARKER, ROOT_ENTITY,
    SchemaConfig
};
pub use entity_type::{EntityType, GetterMap, Reflector};
pub use error::ReflectionError;
pub use property::{ClassSchema, PropertyDescriptor, PropertyMap};
pub use reflection::{MethodHandle, Reflection};
pub use registry::{
    BaseEntity, ClassDeclaration, ClassRegistry, EntityClass, EntityMethods, MethodDeclaration
};
