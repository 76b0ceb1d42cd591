// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors surfaced by the reflection capability.

/// Error returned when class metadata cannot be resolved.
///
/// Parsing and merging never fail on their own: malformed annotations are
/// dropped and unknown property names yield `None`. The only condition that
/// reaches callers is a class the reflection backend does not know about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectionError {
    /// The reflection backend has no declaration for this class.
    #[error("class not found: {0}")]
    ClassNotFound(String)
}

impl ReflectionError {
    /// Name of the class that failed to resolve.
    pub fn class(&self) -> &str {
        match self {
            Self::ClassNotFound(class) => class
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_not_found_display() {
        let err = ReflectionError::ClassNotFound("Article".to_string());
        assert_eq!(err.to_string(), "class not found: Article");
        assert_eq!(err.class(), "Article");
    }
}
