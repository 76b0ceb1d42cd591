// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-class annotation cache.
//!
//! Holds the non-inherited parse result of every class seen so far. Classes
//! are assumed immutable for the lifetime of the cache, so entries are never
//! invalidated.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::{
    annotation::parse_class_annotations, config::SchemaConfig, error::ReflectionError,
    property::PropertyMap, reflection::Reflection
};

/// Class name to its own parsed properties.
///
/// Population goes through the map's entry API, so concurrent first requests
/// for one class query the reflection backend once.
#[derive(Debug, Default)]
pub struct AnnotationCache {
    entries: DashMap<String, Arc<PropertyMap>>
}

impl AnnotationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties declared directly on `class`, parsing on first request.
    ///
    /// # Errors
    ///
    /// Propagates [`ReflectionError`] from the backend. Failed lookups are
    /// not cached.
    pub fn get_or_parse<R: Reflection + ?Sized>(
        &self,
        class: &str,
        reflection: &R,
        config: &SchemaConfig
    ) -> Result<Arc<PropertyMap>, ReflectionError> {
        if let Some(hit) = self.entries.get(class) {
            trace!(class, "annotation cache hit");
            return Ok(Arc::clone(hit.value()));
        }

        let entry = self
            .entries
            .entry(class.to_string())
            .or_try_insert_with(|| {
                let annotations = reflection.annotations(class)?;
                let properties = parse_class_annotations(class, &annotations, config);
                debug!(class, properties = properties.len(), "parsed class annotations");
                Ok::<_, ReflectionError>(Arc::new(properties))
            })?;

        Ok(Arc::clone(entry.value()))
    }

    /// Whether `class` has been parsed.
    pub fn contains(&self, class: &str) -> bool {
        self.entries.contains_key(class)
    }

    /// Number of cached classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ClassDeclaration, ClassRegistry};

    #[test]
    fn parses_once_and_shares_result() {
        let registry = ClassRegistry::new();
        registry.insert(ClassDeclaration::new("Book").annotate("property", "string $title"));
        let cache = AnnotationCache::new();
        let config = SchemaConfig::default();

        assert!(cache.is_empty());
        let first = cache.get_or_parse("Book", &registry, &config).unwrap();
        let second = cache.get_or_parse("Book", &registry, &config).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains("Book"));
        assert_eq!(cache.len(), 1);
        assert_eq!(first["title"].type_name(), "string");
    }

    #[test]
    fn failures_are_not_cached() {
        let registry = ClassRegistry::new();
        let cache = AnnotationCache::new();
        let config = SchemaConfig::default();

        let err = cache.get_or_parse("Book", &registry, &config).unwrap_err();
        assert_eq!(err.class(), "Book");
        assert!(!cache.contains("Book"));

        registry.insert(ClassDeclaration::new("Book"));
        let props = cache.get_or_parse("Book", &registry, &config).unwrap();
        assert!(props.is_empty());
        assert!(cache.contains("Book"));
    }
}
