// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property annotation parsing.
//!
//! Turns the raw values of one class's property annotations into
//! [`PropertyDescriptor`]s. Only that class is looked at; inheritance is
//! handled by [`EntityType`](crate::EntityType).
//!
//! # Grammar
//!
//! ```text
//! <type> $<name> [-> <column>]
//!
//! type   := name | name '|' 'null' | 'null' '|' name
//! ```
//!
//! Tokens are separated by runs of whitespace. Anything after the column is
//! ignored.
//!
//! # Tolerance
//!
//! Documentation comments are free-form, so nothing here fails. A value with
//! fewer than two tokens, or whose second token is not a `$variable`, is
//! dropped.
//!
//! # Example
//!
//! ```rust
//! use entity_schema_core::annotation::{MarkerKind, parse_property};
//!
//! let prop = parse_property("Article", "int|null $viewCount -> views", MarkerKind::ReadOnly)
//!     .expect("well-formed");
//!
//! assert_eq!(prop.type_name(), "integer");
//! assert!(prop.is_nullable());
//! assert_eq!(prop.column(), "views");
//! assert!(prop.is_read_only());
//! ```

use indexmap::IndexMap;
use tracing::trace;

use crate::{
    config::SchemaConfig,
    property::{PropertyDescriptor, PropertyMap}
};

/// Raw annotations of one class: annotation kind to its values, in
/// declaration order.
pub type Annotations = IndexMap<String, Vec<String>>;

/// Marks the variable token of a property annotation.
pub const VARIABLE_SIGIL: char = '$';

/// Separates the property name from an explicit column name.
pub const COLUMN_ARROW: &str = "->";

const NULL_TYPE: &str = "null";

/// Which of the two property annotations a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `@property`
    ReadWrite,
    /// `@property-read`
    ReadOnly
}

impl MarkerKind {
    /// Whether properties declared with this marker are read-only.
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// Parse every property annotation of `class`.
///
/// Annotation kinds other than the configured property markers are ignored.
/// A later declaration of the same name replaces an earlier one.
pub fn parse_class_annotations(
    class: &str,
    annotations: &Annotations,
    config: &SchemaConfig
) -> PropertyMap {
    let mut properties = PropertyMap::new();

    for (kind, values) in annotations {
        let Some(marker) = config.marker_kind(kind) else {
            continue;
        };

        for raw in values {
            if let Some(property) = parse_property(class, raw, marker) {
                properties.insert(property.name().to_string(), property);
            }
        }
    }

    properties
}

/// Parse a single annotation value.
///
/// Tokens are separated by ASCII whitespace only. Returns `None` when the
/// value is malformed.
pub fn parse_property(class: &str, raw: &str, marker: MarkerKind) -> Option<PropertyDescriptor> {
    let tokens: Vec<&str> = raw.split_ascii_whitespace().collect();

    let [type_expr, variable, rest @ ..] = tokens.as_slice() else {
        trace!(class, raw, "dropping annotation with fewer than two tokens");
        return None;
    };

    let name = match variable.strip_prefix(VARIABLE_SIGIL) {
        Some(name) if !name.is_empty() => name,
        _ => {
            trace!(class, raw, "dropping annotation without a variable name");
            return None;
        }
    };

    let (type_name, nullable) = split_nullable(type_expr);

    let column = match rest {
        [arrow, column, ..] if *arrow == COLUMN_ARROW => *column,
        _ => name
    };

    Some(
        PropertyDescriptor::new(class, name, normalize_type(type_name))
            .with_column(column)
            .nullable(nullable)
            .read_only(marker.is_read_only())
    )
}

/// Strip a `null` member from a two-member union.
///
/// Only the first `|` splits, so `int|string|null` yields `int` and
/// `string|null`, neither of which is `null`; the expression is then kept
/// whole and reported as not nullable.
///
/// ```rust
/// use entity_schema_core::annotation::split_nullable;
///
/// assert_eq!(split_nullable("string|null"), ("string", true));
/// assert_eq!(split_nullable("NULL|Author"), ("Author", true));
/// assert_eq!(split_nullable("int|string"), ("int|string", false));
/// ```
pub fn split_nullable(type_expr: &str) -> (&str, bool) {
    match type_expr.split_once('|') {
        Some((first, second)) if first.eq_ignore_ascii_case(NULL_TYPE) => (second, true),
        Some((first, second)) if second.eq_ignore_ascii_case(NULL_TYPE) => (first, true),
        _ => (type_expr, false)
    }
}

/// Collapse short type aliases to their long form.
///
/// `bool` becomes `boolean` and `int` becomes `integer`; everything else is
/// returned unchanged.
pub fn normalize_type(type_name: &str) -> &str {
    match type_name {
        "bool" => "boolean",
        "int" => "integer",
        other => other
    }
}
