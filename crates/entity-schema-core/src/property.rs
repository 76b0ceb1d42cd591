// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property descriptors and the maps that hold them.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    annotation::MarkerKind,
    config::{READ_ONLY_MARKER, READ_WRITE_MARKER, SchemaConfig}
};

/// Properties keyed by name, in declaration order.
///
/// Used both for the per-class parse result and for the merged,
/// inheritance-aware schema.
pub type PropertyMap = IndexMap<String, PropertyDescriptor>;

/// The merged property schema of one class.
///
/// Ancestor-declared keys come first. A key redeclared by a descendant keeps
/// its position and carries the descendant's descriptor.
pub type ClassSchema = PropertyMap;

/// One declared property of an entity class.
///
/// Built by the annotation parser from a line such as
/// `@property-read int|null $viewCount -> view_count`. Immutable once built.
///
/// # Example
///
/// ```rust
/// use entity_schema_core::PropertyDescriptor;
///
/// let prop = PropertyDescriptor::new("Article", "viewCount", "integer")
///     .with_column("view_count")
///     .nullable(true)
///     .read_only(true);
///
/// assert_eq!(prop.column(), "view_count");
/// assert!(!prop.is_writable());
/// assert_eq!(
///     prop.to_string(),
///     "@property-read integer|null $viewCount -> view_count"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDescriptor {
    owning_class: String,
    name:         String,
    column:       String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    type_name:    String,
    nullable:     bool,
    read_only:    bool
}

impl PropertyDescriptor {
    /// Create a writable, non-nullable property stored in a column of the
    /// same name.
    pub fn new(
        owning_class: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>
    ) -> Self {
        let name = name.into();
        Self {
            owning_class: owning_class.into(),
            column: name.clone(),
            name,
            type_name: type_name.into(),
            nullable: false,
            read_only: false
        }
    }

    /// Override the backing column name.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Set nullability.
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the read-only flag.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Class whose annotations declared this property.
    pub fn owning_class(&self) -> &str {
        &self.owning_class
    }

    /// Property name as used by callers.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing storage column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Normalized type name (`boolean`, `integer`, `string`, class names...).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the declared type was a union with `null`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the property was declared with the read-only marker.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Inverse of [`is_read_only`](Self::is_read_only).
    pub fn is_writable(&self) -> bool {
        !self.read_only
    }

    /// Marker the property was declared with.
    pub fn marker(&self) -> MarkerKind {
        if self.read_only {
            MarkerKind::ReadOnly
        } else {
            MarkerKind::ReadWrite
        }
    }

    /// Render as an annotation line using the markers of `config`.
    ///
    /// [`Display`](fmt::Display) always uses the default `@property` and
    /// `@property-read` markers.
    ///
    /// ```rust
    /// use entity_schema_core::{PropertyDescriptor, SchemaConfig};
    ///
    /// let config = SchemaConfig::default().with_property_markers("field", "field-read");
    /// let prop = PropertyDescriptor::new("Article", "id", "integer").read_only(true);
    /// assert_eq!(prop.display_with(&config).to_string(), "@field-read integer $id");
    /// ```
    pub fn display_with<'a>(&'a self, config: &'a SchemaConfig) -> impl fmt::Display + 'a {
        AnnotationLine {
            property: self,
            marker:   config.marker_name(self.marker())
        }
    }
}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.marker() {
            MarkerKind::ReadOnly => READ_ONLY_MARKER,
            MarkerKind::ReadWrite => READ_WRITE_MARKER
        };
        let line = AnnotationLine {
            property: self,
            marker
        };
        fmt::Display::fmt(&line, f)
    }
}

struct AnnotationLine<'a> {
    property: &'a PropertyDescriptor,
    marker:   &'a str
}

impl fmt::Display for AnnotationLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prop = self.property;
        write!(f, "@{} {}", self.marker, prop.type_name)?;
        if prop.nullable {
            f.write_str("|null")?;
        }
        write!(f, " ${}", prop.name)?;
        if prop.column != prop.name {
            write!(f, " -> {}", prop.column)?;
        }
        Ok(())
    }
}
