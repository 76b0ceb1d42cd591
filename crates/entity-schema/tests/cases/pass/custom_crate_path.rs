mod schema {
    pub use entity_schema::*;
}

/// @property string $title
#[derive(entity_schema::Entity)]
#[entity(crate = "schema", methods)]
pub struct Page {
    title: String
}

#[entity_schema::entity_methods(crate = "schema")]
impl Page {
    pub fn get_title(&self) -> &str {
        &self.title
    }
}

fn main() {
    let registry = schema::ClassRegistry::new();
    registry.register::<Page>();

    let reflector = schema::Reflector::new(registry);
    let page = reflector.entity::<Page>();
    assert!(page.getters().unwrap().contains_key("title"));
}
