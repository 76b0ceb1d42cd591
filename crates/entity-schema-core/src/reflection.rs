// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The reflection capability.
//!
//! Everything this crate knows about classes comes through [`Reflection`].
//! Rust has no runtime class metadata, so the bundled backend is
//! [`ClassRegistry`](crate::ClassRegistry), filled at build time by the
//! `Entity` derive. Any other source (generated code, a foreign runtime, a
//! test double) can implement the trait instead.

use std::sync::Arc;

use crate::{annotation::Annotations, error::ReflectionError};

/// Read-only access to class declarations.
///
/// Every method returns [`ReflectionError::ClassNotFound`] for a class the
/// backend cannot resolve.
pub trait Reflection {
    /// Annotations declared on the class itself, grouped by kind.
    fn annotations(&self, class: &str) -> Result<Annotations, ReflectionError>;

    /// Direct parent class, `None` for a class without one.
    fn parent(&self, class: &str) -> Result<Option<String>, ReflectionError>;

    /// Public methods including inherited ones.
    fn public_methods(&self, class: &str) -> Result<Vec<MethodHandle>, ReflectionError>;
}

impl<R: Reflection + ?Sized> Reflection for &R {
    fn annotations(&self, class: &str) -> Result<Annotations, ReflectionError> {
        (**self).annotations(class)
    }

    fn parent(&self, class: &str) -> Result<Option<String>, ReflectionError> {
        (**self).parent(class)
    }

    fn public_methods(&self, class: &str) -> Result<Vec<MethodHandle>, ReflectionError> {
        (**self).public_methods(class)
    }
}

impl<R: Reflection + ?Sized> Reflection for Arc<R> {
    fn annotations(&self, class: &str) -> Result<Annotations, ReflectionError> {
        (**self).annotations(class)
    }

    fn parent(&self, class: &str) -> Result<Option<String>, ReflectionError> {
        (**self).parent(class)
    }

    fn public_methods(&self, class: &str) -> Result<Vec<MethodHandle>, ReflectionError> {
        (**self).public_methods(class)
    }
}

/// A public method as seen through [`Reflection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHandle {
    name:            String,
    declaring_class: String,
    annotations:     Vec<String>
}

impl MethodHandle {
    /// Create a handle for `name` declared on `declaring_class`.
    pub fn new(name: impl Into<String>, declaring_class: impl Into<String>) -> Self {
        Self {
            name:            name.into(),
            declaring_class: declaring_class.into(),
            annotations:     Vec::new()
        }
    }

    /// Attach an annotation tag (e.g. `internal`).
    #[must_use]
    pub fn with_annotation(mut self, tag: impl Into<String>) -> Self {
        self.annotations.push(tag.into());
        self
    }

    /// Method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class the method is declared on.
    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    /// Whether the method carries the annotation `tag`.
    pub fn has_annotation(&self, tag: &str) -> bool {
        self.annotations.iter().any(|a| a == tag)
    }

    /// All annotation tags on the method.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }
}
