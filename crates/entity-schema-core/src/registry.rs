// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Build-time reflection backend.
//!
//! Entities declare themselves through [`EntityClass`], normally generated by
//! `#[derive(Entity)]`, and are collected in a [`ClassRegistry`] which then
//! answers [`Reflection`] queries.
//!
//! # Example
//!
//! ```rust
//! use entity_schema_core::{
//!     ClassDeclaration, ClassRegistry, MethodDeclaration, Reflection, ROOT_ENTITY
//! };
//!
//! let registry = ClassRegistry::new();
//! registry.insert(
//!     ClassDeclaration::new("Book")
//!         .extends(ROOT_ENTITY)
//!         .annotate("property", "string $title")
//!         .method(MethodDeclaration::new("getSlug"))
//! );
//!
//! assert_eq!(registry.parent("Book").unwrap().as_deref(), Some(ROOT_ENTITY));
//! assert_eq!(registry.annotations("Book").unwrap()["property"], ["string $title"]);
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    annotation::Annotations,
    config::ROOT_ENTITY,
    error::ReflectionError,
    reflection::{MethodHandle, Reflection}
};

/// A type that can describe itself to a [`ClassRegistry`].
///
/// Implemented by `#[derive(Entity)]`. Hand-written implementations only
/// need [`NAME`](Self::NAME) and [`declaration`](Self::declaration).
pub trait EntityClass {
    /// Class name used as the reflection key.
    const NAME: &'static str;

    /// Annotations, parent and methods of this class alone.
    fn declaration() -> ClassDeclaration;

    /// Register every ancestor of this class.
    ///
    /// Called by [`ClassRegistry::register`] before the class itself is
    /// inserted.
    fn register_ancestors(_registry: &ClassRegistry) {}
}

/// Public accessor methods of a type, as recorded by `#[entity_methods]`.
///
/// Included in the class declaration when the entity is derived with
/// `#[entity(methods)]`.
pub trait EntityMethods {
    /// Public no-argument methods declared on the type.
    fn public_methods() -> Vec<MethodDeclaration>;
}

/// The root entity class.
///
/// Its own accessors are not entity properties and are skipped during getter
/// discovery. Every [`ClassRegistry`] starts with it registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseEntity;

impl EntityClass for BaseEntity {
    const NAME: &'static str = ROOT_ENTITY;

    fn declaration() -> ClassDeclaration {
        ClassDeclaration::new(Self::NAME).method(MethodDeclaration::new("getReflection"))
    }
}

/// Static description of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    name:        String,
    parent:      Option<String>,
    annotations: Annotations,
    methods:     Vec<MethodDeclaration>
}

impl ClassDeclaration {
    /// Start a declaration with no parent, annotations or methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            parent:      None,
            annotations: Annotations::new(),
            methods:     Vec::new()
        }
    }

    /// Set the direct parent class.
    #[must_use]
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append an annotation value under `kind`.
    #[must_use]
    pub fn annotate(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations
            .entry(kind.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Append a public method.
    #[must_use]
    pub fn method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    /// Append several public methods.
    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodDeclaration>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct parent, if any.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Annotations declared on this class.
    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// Public methods declared on this class.
    pub fn declared_methods(&self) -> &[MethodDeclaration] {
        &self.methods
    }
}

/// Static description of one public method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    name:        String,
    annotations: Vec<String>
}

impl MethodDeclaration {
    /// Declare a method named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            annotations: Vec::new()
        }
    }

    /// Attach an annotation tag.
    #[must_use]
    pub fn annotate(mut self, tag: impl Into<String>) -> Self {
        self.annotations.push(tag.into());
        self
    }

    /// Method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, declaring_class: &str) -> MethodHandle {
        self.annotations.iter().fold(
            MethodHandle::new(self.name.as_str(), declaring_class),
            |handle, tag| handle.with_annotation(tag.as_str())
        )
    }
}

/// In-memory [`Reflection`] backend.
#[derive(Debug)]
pub struct ClassRegistry {
    classes: RwLock<IndexMap<String, ClassDeclaration>>
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Create a registry holding only [`BaseEntity`].
    pub fn new() -> Self {
        let registry = Self {
            classes: RwLock::new(IndexMap::new())
        };
        registry.insert(BaseEntity::declaration());
        registry
    }

    /// Register `T` and its ancestors.
    ///
    /// Registering the same class again replaces its declaration with an
    /// identical one.
    pub fn register<T: EntityClass>(&self) -> &Self {
        T::register_ancestors(self);
        self.insert(T::declaration());
        self
    }

    /// Register a hand-written declaration.
    pub fn insert(&self, declaration: ClassDeclaration) -> &Self {
        debug!(
            class = declaration.name(),
            parent = declaration.parent(),
            "registering class"
        );
        self.classes
            .write()
            .insert(declaration.name.clone(), declaration);
        self
    }

    /// Whether `class` is registered.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.read().contains_key(class)
    }

    /// Number of registered classes, [`BaseEntity`] included.
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    /// Whether the registry holds no classes at all.
    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }

    /// Copy of the declaration registered for `class`.
    pub fn declaration(&self, class: &str) -> Result<ClassDeclaration, ReflectionError> {
        self.classes
            .read()
            .get(class)
            .cloned()
            .ok_or_else(|| ReflectionError::ClassNotFound(class.to_string()))
    }
}

impl Reflection for ClassRegistry {
    fn annotations(&self, class: &str) -> Result<Annotations, ReflectionError> {
        let classes = self.classes.read();
        let declaration = lookup(&classes, class)?;
        Ok(declaration.annotations.clone())
    }

    fn parent(&self, class: &str) -> Result<Option<String>, ReflectionError> {
        let classes = self.classes.read();
        let declaration = lookup(&classes, class)?;
        Ok(declaration.parent.clone())
    }

    /// Own methods first, then inherited ones that were not overridden.
    fn public_methods(&self, class: &str) -> Result<Vec<MethodHandle>, ReflectionError> {
        let classes = self.classes.read();
        let mut methods = Vec::new();
        let mut seen_methods = HashSet::new();
        let mut visited = HashSet::new();
        let mut current = Some(class);

        while let Some(name) = current {
            if !visited.insert(name) {
                break;
            }
            let declaration = lookup(&classes, name)?;
            for method in &declaration.methods {
                if seen_methods.insert(method.name.as_str()) {
                    methods.push(method.handle(&declaration.name));
                }
            }
            current = declaration.parent.as_deref();
        }

        Ok(methods)
    }
}

fn lookup<'a>(
    classes: &'a IndexMap<String, ClassDeclaration>,
    class: &str
) -> Result<&'a ClassDeclaration, ReflectionError> {
    classes
        .get(class)
        .ok_or_else(|| ReflectionError::ClassNotFound(class.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Book;

    impl EntityClass for Book {
        const NAME: &'static str = "Book";

        fn declaration() -> ClassDeclaration {
            ClassDeclaration::new(Self::NAME)
                .extends(BaseEntity::NAME)
                .annotate("property", "string $title")
                .method(MethodDeclaration::new("getTitle"))
        }

        fn register_ancestors(registry: &ClassRegistry) {
            registry.register::<BaseEntity>();
        }
    }

    struct Novel;

    impl EntityClass for Novel {
        const NAME: &'static str = "Novel";

        fn declaration() -> ClassDeclaration {
            ClassDeclaration::new(Self::NAME)
                .extends(Book::NAME)
                .annotate("property", "string $genre")
                .method(MethodDeclaration::new("getTitle").annotate("internal"))
                .method(MethodDeclaration::new("getGenre"))
        }

        fn register_ancestors(registry: &ClassRegistry) {
            registry.register::<Book>();
        }
    }

    #[test]
    fn new_registry_holds_base_entity() {
        let registry = ClassRegistry::new();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert!(registry.contains(ROOT_ENTITY));
        assert_eq!(registry.parent(ROOT_ENTITY).unwrap(), None);
    }

    #[test]
    fn register_pulls_in_ancestors() {
        let registry = ClassRegistry::new();
        registry.register::<Novel>();

        assert!(registry.contains("Novel"));
        assert!(registry.contains("Book"));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.parent("Novel").unwrap().as_deref(), Some("Book"));
    }

    #[test]
    fn annotations_are_own_only() {
        let registry = ClassRegistry::new();
        registry.register::<Novel>();

        let annotations = registry.annotations("Novel").unwrap();
        assert_eq!(annotations["property"], ["string $genre"]);
    }

    #[test]
    fn public_methods_include_inherited_and_respect_overrides() {
        let registry = ClassRegistry::new();
        registry.register::<Novel>();

        let methods = registry.public_methods("Novel").unwrap();
        let summary: Vec<(&str, &str)> = methods
            .iter()
            .map(|m| (m.name(), m.declaring_class()))
            .collect();

        assert_eq!(
            summary,
            [
                ("getTitle", "Novel"),
                ("getGenre", "Novel"),
                ("getReflection", ROOT_ENTITY)
            ]
        );
        assert!(methods[0].has_annotation("internal"));
    }

    #[test]
    fn unknown_class_is_an_error() {
        let registry = ClassRegistry::new();
        let err = registry.annotations("Missing").unwrap_err();
        assert_eq!(err, ReflectionError::ClassNotFound("Missing".to_string()));
        assert!(registry.parent("Missing").is_err());
        assert!(registry.public_methods("Missing").is_err());
        assert!(registry.declaration("Missing").is_err());
    }

    #[test]
    fn unregistered_parent_fails_method_listing() {
        let registry = ClassRegistry::new();
        registry.insert(ClassDeclaration::new("Orphan").extends("Ghost"));

        let err = registry.public_methods("Orphan").unwrap_err();
        assert_eq!(err.class(), "Ghost");
    }

    #[test]
    fn cyclic_parents_terminate() {
        let registry = ClassRegistry::new();
        registry.insert(
            ClassDeclaration::new("A")
                .extends("B")
                .method(MethodDeclaration::new("getA"))
        );
        registry.insert(
            ClassDeclaration::new("B")
                .extends("A")
                .method(MethodDeclaration::new("getB"))
        );

        let methods = registry.public_methods("A").unwrap();
        assert_eq!(methods.len(), 2);
    }
}
