// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema merging across derived entity hierarchies.

use entity_schema::{ClassDeclaration, ClassRegistry, Entity, Reflector, entity_methods};

/// @property-read int $id
/// @property X $code
/// @property string $title -> headline
#[derive(Entity)]
#[entity(methods)]
pub struct Publication;

#[entity_methods]
impl Publication {
    pub fn get_label(&self) -> &'static str {
        "publication"
    }

    pub fn get_title(&self) -> &'static str {
        "untitled"
    }
}

/**
 * A printed book.
 *
 * @property-read Y $code
 * @property bool|null $hardcover
 */
#[derive(Entity)]
#[entity(extends = "Publication", methods)]
pub struct Book;

#[entity_methods]
impl Book {
    /// @internal
    pub fn get_title(&self) -> &'static str {
        "book"
    }

    pub fn get_isbn(&self) -> &'static str {
        ""
    }
}

/// @property string $series
#[derive(Entity)]
#[entity(name = "library.Novel", extends = "Book")]
pub struct Novel;

fn reflector() -> Reflector<ClassRegistry> {
    let registry = ClassRegistry::new();
    registry.register::<Novel>();
    Reflector::new(registry)
}

#[test]
fn registering_a_leaf_registers_its_ancestors() {
    let reflector = reflector();
    let registry = reflector.reflection();

    assert!(registry.contains("library.Novel"));
    assert!(registry.contains("Book"));
    assert!(registry.contains("Publication"));
    assert!(registry.contains("BaseEntity"));
    assert_eq!(registry.len(), 4);
}

#[test]
fn ancestor_chain_stops_before_base_entity() {
    let reflector = reflector();
    let novel = reflector.entity_type("library.Novel");
    assert_eq!(
        novel.ancestors().unwrap(),
        ["library.Novel", "Book", "Publication"]
    );
}

#[test]
fn derived_declaration_overrides_base() {
    let reflector = reflector();
    let book = reflector.entity::<Book>();

    let code = book.property("code").unwrap().unwrap();
    assert_eq!(code.type_name(), "Y");
    assert!(code.is_read_only());
    assert_eq!(code.owning_class(), "Book");

    let publication = reflector.entity::<Publication>();
    let code = publication.property("code").unwrap().unwrap();
    assert_eq!(code.type_name(), "X");
    assert!(!code.is_read_only());
}

#[test]
fn merged_schema_keeps_ancestor_order() {
    let reflector = reflector();
    let novel = reflector.entity::<Novel>();

    let names: Vec<&str> = novel.property_names().unwrap().collect();
    assert_eq!(names, ["id", "code", "title", "hardcover", "series"]);

    let title = novel.property("title").unwrap().unwrap();
    assert_eq!(title.column(), "headline");
    assert_eq!(title.owning_class(), "Publication");

    let hardcover = novel.property("hardcover").unwrap().unwrap();
    assert_eq!(hardcover.type_name(), "boolean");
    assert!(hardcover.is_nullable());
}

#[test]
fn getters_include_inherited_accessors() {
    let reflector = reflector();
    let novel = reflector.entity::<Novel>();
    let getters = novel.getters().unwrap();

    let keys: Vec<&str> = getters.keys().map(String::as_str).collect();
    assert_eq!(keys, ["isbn", "label"]);
    assert_eq!(getters["label"].declaring_class(), "Publication");
}

#[test]
fn overridden_getter_hides_ancestor_version() {
    let reflector = reflector();
    let publication = reflector.entity::<Publication>();
    assert!(publication.getter("title").unwrap().is_some());

    let book = reflector.entity::<Book>();
    assert!(book.getter("title").unwrap().is_none());
}

#[test]
fn hand_written_subclass_of_derived_entity() {
    let registry = ClassRegistry::new();
    registry.register::<Book>();
    registry.insert(
        ClassDeclaration::new("Ebook")
            .extends("Book")
            .annotate("property", "string|null $format")
    );
    let reflector = Reflector::new(registry);
    let ebook = reflector.entity_type("Ebook");

    assert!(ebook.has_property("id").unwrap());
    assert!(ebook.has_property("format").unwrap());
    assert_eq!(ebook.properties().unwrap().len(), 5);
}
