use entity_schema::{ClassRegistry, Entity, EntityClass, Reflector};

/// @property string $name
/// @property-read int $id
#[derive(Entity)]
pub struct User {
    pub id:   i64,
    pub name: String
}

fn main() {
    assert_eq!(User::NAME, "User");

    let registry = ClassRegistry::new();
    registry.register::<User>();

    let reflector = Reflector::new(registry);
    let user = reflector.entity::<User>();
    assert!(user.has_property("name").unwrap());
    assert!(user.property("id").unwrap().unwrap().is_read_only());
}
