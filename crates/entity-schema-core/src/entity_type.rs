// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-class metadata facade.
//!
//! # Architecture
//!
//! ```text
//! Reflector (one per application)
//! ├── reflection: R          (the Reflection backend)
//! ├── cache: AnnotationCache (per-class parse results, shared)
//! └── config: SchemaConfig
//!
//! EntityType (one per class query)
//! ├── properties: OnceLock<ClassSchema> (merged over ancestors)
//! └── getters:    OnceLock<GetterMap>
//! ```
//!
//! # Schema Merging
//!
//! The ancestor chain runs from the class up to, but not including, the root
//! entity class. It is processed most-ancestral first, so a descendant's
//! declaration of a name replaces the ancestor's.
//!
//! # Getter Discovery
//!
//! A public method is a getter when it is not declared on the root entity
//! class, its name is longer than the prefix and starts with it, and it does
//! not carry the exclusion annotation. `getViewCount` maps to `viewCount`.

use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    cache::AnnotationCache,
    config::SchemaConfig,
    error::ReflectionError,
    property::{ClassSchema, PropertyDescriptor},
    reflection::{MethodHandle, Reflection},
    registry::EntityClass
};

/// Derived property name to accessor method.
pub type GetterMap = IndexMap<String, MethodHandle>;

/// Owner of the reflection backend, the annotation cache and the
/// configuration.
///
/// Keep one for the lifetime of the application and create an
/// [`EntityType`] per class from it.
///
/// # Example
///
/// ```rust
/// use entity_schema_core::{ClassDeclaration, ClassRegistry, Reflector, ROOT_ENTITY};
///
/// let registry = ClassRegistry::new();
/// registry.insert(
///     ClassDeclaration::new("Book")
///         .extends(ROOT_ENTITY)
///         .annotate("property", "string $title")
/// );
///
/// let reflector = Reflector::new(registry);
/// let book = reflector.entity_type("Book");
///
/// assert!(book.has_property("title")?);
/// assert!(!book.has_property("author")?);
/// # Ok::<(), entity_schema_core::ReflectionError>(())
/// ```
#[derive(Debug)]
pub struct Reflector<R> {
    reflection: R,
    cache:      AnnotationCache,
    config:     SchemaConfig
}

impl<R: Reflection> Reflector<R> {
    /// Create a reflector with the default [`SchemaConfig`].
    pub fn new(reflection: R) -> Self {
        Self::with_config(reflection, SchemaConfig::default())
    }

    /// Create a reflector with a custom configuration.
    pub fn with_config(reflection: R, config: SchemaConfig) -> Self {
        Self {
            reflection,
            cache: AnnotationCache::new(),
            config
        }
    }

    /// Metadata facade for `class`.
    ///
    /// Nothing is resolved until the first query, so an unknown class only
    /// fails once it is asked about.
    pub fn entity_type(&self, class: impl Into<String>) -> EntityType<'_, R> {
        EntityType {
            class:      class.into(),
            reflector:  self,
            properties: OnceLock::new(),
            getters:    OnceLock::new()
        }
    }

    /// Metadata facade for the entity type `T`.
    pub fn entity<T: EntityClass>(&self) -> EntityType<'_, R> {
        self.entity_type(T::NAME)
    }

    /// The reflection backend.
    pub fn reflection(&self) -> &R {
        &self.reflection
    }

    /// The shared annotation cache.
    pub fn cache(&self) -> &AnnotationCache {
        &self.cache
    }

    /// The active configuration.
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }
}

/// Lazily computed metadata of one class.
///
/// The merged schema and the getter map are each computed on first use and
/// kept for the lifetime of this value.
#[derive(Debug)]
pub struct EntityType<'r, R> {
    class:      String,
    reflector:  &'r Reflector<R>,
    properties: OnceLock<ClassSchema>,
    getters:    OnceLock<GetterMap>
}

impl<R: Reflection> EntityType<'_, R> {
    /// Class this facade describes.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The class followed by its ancestors, stopping before the root entity
    /// class.
    ///
    /// # Errors
    ///
    /// [`ReflectionError::ClassNotFound`] if any class on the way is unknown.
    pub fn ancestors(&self) -> Result<Vec<String>, ReflectionError> {
        let root = self.reflector.config.root_class();
        let mut chain = vec![self.class.clone()];
        let mut current = self.class.clone();

        while let Some(parent) = self.reflector.reflection.parent(&current)? {
            if parent == root || chain.contains(&parent) {
                break;
            }
            chain.push(parent.clone());
            current = parent;
        }

        Ok(chain)
    }

    /// All properties, ancestors' first.
    ///
    /// # Errors
    ///
    /// [`ReflectionError::ClassNotFound`] if the class or an ancestor is
    /// unknown.
    pub fn properties(&self) -> Result<&ClassSchema, ReflectionError> {
        if let Some(schema) = self.properties.get() {
            return Ok(schema);
        }
        let schema = self.load_properties()?;
        Ok(self.properties.get_or_init(|| schema))
    }

    /// Descriptor for `name`, if declared.
    pub fn property(&self, name: &str) -> Result<Option<&PropertyDescriptor>, ReflectionError> {
        Ok(self.properties()?.get(name))
    }

    /// Descriptor for `name`, or `default` if it is not declared.
    pub fn property_or<'a>(
        &'a self,
        name: &str,
        default: &'a PropertyDescriptor
    ) -> Result<&'a PropertyDescriptor, ReflectionError> {
        Ok(self.property(name)?.unwrap_or(default))
    }

    /// Whether `name` is declared on the class or an ancestor.
    pub fn has_property(&self, name: &str) -> Result<bool, ReflectionError> {
        Ok(self.properties()?.contains_key(name))
    }

    /// Property names in schema order.
    pub fn property_names(&self) -> Result<impl Iterator<Item = &str>, ReflectionError> {
        Ok(self.properties()?.keys().map(String::as_str))
    }

    /// Properties declared with the read-write marker.
    pub fn writable_properties(
        &self
    ) -> Result<impl Iterator<Item = &PropertyDescriptor>, ReflectionError> {
        Ok(self.properties()?.values().filter(|p| p.is_writable()))
    }

    /// Properties declared with the read-only marker.
    pub fn read_only_properties(
        &self
    ) -> Result<impl Iterator<Item = &PropertyDescriptor>, ReflectionError> {
        Ok(self.properties()?.values().filter(|p| p.is_read_only()))
    }

    /// Accessor methods keyed by derived property name.
    ///
    /// # Errors
    ///
    /// [`ReflectionError::ClassNotFound`] if the class is unknown.
    pub fn getters(&self) -> Result<&GetterMap, ReflectionError> {
        if let Some(getters) = self.getters.get() {
            return Ok(getters);
        }
        let getters = self.load_getters()?;
        Ok(self.getters.get_or_init(|| getters))
    }

    /// Accessor for the property `name`, if any.
    pub fn getter(&self, name: &str) -> Result<Option<&MethodHandle>, ReflectionError> {
        Ok(self.getters()?.get(name))
    }

    fn load_properties(&self) -> Result<ClassSchema, ReflectionError> {
        let reflector = self.reflector;
        let chain = self.ancestors()?;
        let mut schema = ClassSchema::new();

        for class in chain.iter().rev() {
            let declared =
                reflector
                    .cache
                    .get_or_parse(class, &reflector.reflection, &reflector.config)?;
            for (name, property) in declared.iter() {
                schema.insert(name.clone(), property.clone());
            }
        }

        debug!(
            class = %self.class,
            depth = chain.len(),
            properties = schema.len(),
            "merged entity schema"
        );
        Ok(schema)
    }

    fn load_getters(&self) -> Result<GetterMap, ReflectionError> {
        let config = &self.reflector.config;
        let mut getters = GetterMap::new();

        for method in self.reflector.reflection.public_methods(&self.class)? {
            if method.declaring_class() == config.root_class() {
                continue;
            }
            let Some(property) = getter_property_name(method.name(), config.getter_prefix())
            else {
                continue;
            };
            if method.has_annotation(config.exclusion_marker()) {
                continue;
            }
            getters.insert(property, method);
        }

        debug!(class = %self.class, getters = getters.len(), "discovered getters");
        Ok(getters)
    }
}

/// Property name for an accessor named `method`, or `None` when the name
/// does not follow the `<prefix><Name>` convention.
///
/// ```rust
/// use entity_schema_core::entity_type::getter_property_name;
///
/// assert_eq!(getter_property_name("getViewCount", "get").as_deref(), Some("viewCount"));
/// assert_eq!(getter_property_name("get", "get"), None);
/// assert_eq!(getter_property_name("fetchAll", "get"), None);
/// ```
pub fn getter_property_name(method: &str, prefix: &str) -> Option<String> {
    let rest = method.strip_prefix(prefix)?;
    let mut chars = rest.chars();
    let first = chars.next()?;

    let mut name = String::with_capacity(rest.len());
    name.push(first.to_ascii_lowercase());
    name.push_str(chars.as_str());
    Some(name)
}
