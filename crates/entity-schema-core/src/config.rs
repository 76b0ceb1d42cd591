// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conventions used while reading entity metadata.
//!
//! | Setting | Default | Meaning |
//! |---------|---------|---------|
//! | `root_class` | `"BaseEntity"` | Root entity class, excluded from ancestor walks and getter discovery |
//! | `getter_prefix` | `"get"` | Prefix that marks an accessor method |
//! | `exclusion_marker` | `"internal"` | Method annotation that opts out of getter discovery |
//! | `read_write_marker` | `"property"` | Annotation kind declaring a writable property |
//! | `read_only_marker` | `"property-read"` | Annotation kind declaring a read-only property |

use crate::annotation::MarkerKind;

/// Name of the root entity class every derived entity extends.
pub const ROOT_ENTITY: &str = "BaseEntity";

/// Default accessor prefix.
pub const GETTER_PREFIX: &str = "get";

/// Default method annotation that hides a getter.
pub const EXCLUSION_MARKER: &str = "internal";

/// Default annotation kind for read-write properties.
pub const READ_WRITE_MARKER: &str = "property";

/// Default annotation kind for read-only properties.
pub const READ_ONLY_MARKER: &str = "property-read";

/// Configuration shared by every [`EntityType`](crate::EntityType) created
/// from one [`Reflector`](crate::Reflector).
///
/// # Example
///
/// ```rust
/// use entity_schema_core::SchemaConfig;
///
/// let config = SchemaConfig::default().with_root_class("Model");
/// assert_eq!(config.root_class(), "Model");
/// assert_eq!(config.getter_prefix(), "get");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SchemaConfig {
    root_class:        String,
    getter_prefix:     String,
    exclusion_marker:  String,
    read_write_marker: String,
    read_only_marker:  String
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            root_class:        ROOT_ENTITY.to_string(),
            getter_prefix:     GETTER_PREFIX.to_string(),
            exclusion_marker:  EXCLUSION_MARKER.to_string(),
            read_write_marker: READ_WRITE_MARKER.to_string(),
            read_only_marker:  READ_ONLY_MARKER.to_string()
        }
    }
}

impl SchemaConfig {
    /// Replace the root entity class name.
    #[must_use]
    pub fn with_root_class(mut self, class: impl Into<String>) -> Self {
        self.root_class = class.into();
        self
    }

    /// Replace the accessor prefix.
    #[must_use]
    pub fn with_getter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.getter_prefix = prefix.into();
        self
    }

    /// Replace the getter opt-out annotation.
    #[must_use]
    pub fn with_exclusion_marker(mut self, marker: impl Into<String>) -> Self {
        self.exclusion_marker = marker.into();
        self
    }

    /// Replace both property annotation kinds.
    #[must_use]
    pub fn with_property_markers(
        mut self,
        read_write: impl Into<String>,
        read_only: impl Into<String>
    ) -> Self {
        self.read_write_marker = read_write.into();
        self.read_only_marker = read_only.into();
        self
    }

    /// Root entity class name.
    pub fn root_class(&self) -> &str {
        &self.root_class
    }

    /// Accessor prefix.
    pub fn getter_prefix(&self) -> &str {
        &self.getter_prefix
    }

    /// Getter opt-out annotation.
    pub fn exclusion_marker(&self) -> &str {
        &self.exclusion_marker
    }

    /// Annotation kind declaring read-write properties.
    pub fn read_write_marker(&self) -> &str {
        &self.read_write_marker
    }

    /// Annotation kind declaring read-only properties.
    pub fn read_only_marker(&self) -> &str {
        &self.read_only_marker
    }

    /// Classify an annotation kind, `None` for anything but the two
    /// property markers.
    pub fn marker_kind(&self, kind: &str) -> Option<MarkerKind> {
        if kind == self.read_write_marker {
            Some(MarkerKind::ReadWrite)
        } else if kind == self.read_only_marker {
            Some(MarkerKind::ReadOnly)
        } else {
            None
        }
    }

    /// Annotation kind for a marker.
    pub fn marker_name(&self, marker: MarkerKind) -> &str {
        match marker {
            MarkerKind::ReadWrite => &self.read_write_marker,
            MarkerKind::ReadOnly => &self.read_only_marker
        }
    }
}
