// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property schemas and accessor discovery for ORM entities.
//!
//! Entities declare their properties in doc-comment annotations; this crate
//! turns them into an inheritance-aware schema the ORM layer can query
//! without an instance.
//!
//! # Quick Start
//!
//! ```rust
//! use entity_schema::{ClassRegistry, Entity, Reflector, entity_methods};
//!
//! /// A published article.
//! ///
//! /// @property string $title
//! /// @property-read int|null $viewCount -> view_count
//! #[derive(Entity)]
//! #[entity(methods)]
//! pub struct Article {
//!     title: String,
//!     view_count: Option<i64>,
//! }
//!
//! #[entity_methods]
//! impl Article {
//!     pub fn get_slug(&self) -> String {
//!         self.title.to_lowercase().replace(' ', "-")
//!     }
//! }
//!
//! let registry = ClassRegistry::new();
//! registry.register::<Article>();
//!
//! let reflector = Reflector::new(registry);
//! let article = reflector.entity::<Article>();
//!
//! let views = article.property("viewCount")?.expect("declared");
//! assert_eq!(views.type_name(), "integer");
//! assert_eq!(views.column(), "view_count");
//! assert!(views.is_nullable() && views.is_read_only());
//!
//! assert!(article.getters()?.contains_key("slug"));
//! # Ok::<(), entity_schema::ReflectionError>(())
//! ```
//!
//! # Inheritance
//!
//! `#[entity(extends = "Parent")]` links an entity to its parent. The schema
//! of a class includes every ancestor's properties up to the root
//! [`BaseEntity`]; a descendant redeclaring a property replaces the
//! ancestor's descriptor.
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`PropertyDescriptor`] and
//!   [`SchemaConfig`]

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Re-export all core types
pub use entity_schema_core::*;
// Re-export macros
pub use entity_schema_impl::{Entity, entity_methods};
