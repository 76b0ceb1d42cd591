// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation annotation extraction.
//!
//! # Doc Comment Format
//!
//! In Rust, doc comments (`///` and `/** */`) are stored as `#[doc = "..."]`
//! attributes. Every doc line whose text starts with `@` is an annotation:
//! the word after `@` is its kind, the rest of the line its value.
//!
//! # Example
//!
//! ```rust,ignore
//! /// A published article.
//! ///
//! /// @property string $title
//! /// @property-read int|null $viewCount
//! #[derive(Entity)]
//! pub struct Article { ... }
//!
//! // Extracts to:
//! // [("property", "string $title"), ("property-read", "int|null $viewCount")]
//! ```

use syn::Attribute;

/// One `@kind value` line from a doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocAnnotation {
    /// Annotation kind without the `@` (e.g. `property-read`).
    pub kind:  String,
    /// Everything after the kind, trimmed. May be empty.
    pub value: String
}

/// Collect doc comment lines from attributes.
///
/// Block comments are split into lines and the conventional leading `*` of
/// each line is dropped. Lines are trimmed.
pub fn extract_doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .flat_map(|doc| {
            doc.lines()
                .map(|line| {
                    let line = line.trim();
                    line.strip_prefix('*').map_or(line, str::trim_start).to_string()
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Extract `@kind value` annotations from doc comments, in order.
pub fn extract_annotations(attrs: &[Attribute]) -> Vec<DocAnnotation> {
    extract_doc_lines(attrs)
        .iter()
        .filter_map(|line| parse_annotation_line(line))
        .collect()
}

/// Parse one trimmed doc line.
///
/// The kind runs up to the first whitespace and must start with a letter,
/// which keeps e-mail addresses and stray `@` signs out.
fn parse_annotation_line(line: &str) -> Option<DocAnnotation> {
    let rest = line.strip_prefix('@')?;
    let (kind, value) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));

    let valid = kind.starts_with(|c: char| c.is_ascii_alphabetic())
        && kind
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '\\'));
    if !valid {
        return None;
    }

    Some(DocAnnotation {
        kind:  kind.to_string(),
        value: value.trim().to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_attrs(input: &str) -> Vec<Attribute> {
        let item: syn::ItemStruct = syn::parse_str(input).unwrap();
        item.attrs
    }

    fn annotation(kind: &str, value: &str) -> DocAnnotation {
        DocAnnotation {
            kind:  kind.to_string(),
            value: value.to_string()
        }
    }

    #[test]
    fn extract_property_lines() {
        let attrs = parse_attrs(
            r#"
            /// Article entity.
            ///
            /// @property string $title
            /// @property-read int|null $viewCount
            struct Foo;
        "#
        );
        assert_eq!(
            extract_annotations(&attrs),
            [
                annotation("property", "string $title"),
                annotation("property-read", "int|null $viewCount")
            ]
        );
    }

    #[test]
    fn extract_from_block_comment() {
        let attrs = parse_attrs(
            r#"
            /**
             * Article entity.
             *
             * @property string $title -> headline
             */
            struct Foo;
        "#
        );
        assert_eq!(
            extract_annotations(&attrs),
            [annotation("property", "string $title -> headline")]
        );
    }

    #[test]
    fn bare_tag_has_empty_value() {
        let attrs = parse_attrs(
            r#"
            /// @internal
            struct Foo;
        "#
        );
        assert_eq!(extract_annotations(&attrs), [annotation("internal", "")]);
    }

    #[test]
    fn prose_and_invalid_tags_are_ignored() {
        let attrs = parse_attrs(
            r#"
            /// Contact admin@example.com for access.
            /// @ property string $spaced
            /// @1st thing
            #[derive(Debug)]
            struct Foo;
        "#
        );
        assert!(extract_annotations(&attrs).is_empty());
    }

    #[test]
    fn extract_no_docs() {
        let attrs = parse_attrs(
            r#"
            #[derive(Debug)]
            struct Foo;
        "#
        );
        assert!(extract_doc_lines(&attrs).is_empty());
        assert!(extract_annotations(&attrs).is_empty());
    }

    #[test]
    fn doc_lines_are_trimmed() {
        let attrs = parse_attrs(
            r#"
            ///    Indented.
            /// Second line.
            struct Foo;
        "#
        );
        assert_eq!(extract_doc_lines(&attrs), ["Indented.", "Second line."]);
    }
}
