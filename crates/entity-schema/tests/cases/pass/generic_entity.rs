use entity_schema::{ClassRegistry, Entity, Reflector, entity_methods};

/// @property mixed $value
#[derive(Entity)]
#[entity(name = "Boxed", methods)]
pub struct Boxed<T: Clone> {
    value: T
}

#[entity_methods]
impl<T: Clone> Boxed<T> {
    pub fn get_value(&self) -> T {
        self.value.clone()
    }
}

fn main() {
    let registry = ClassRegistry::new();
    registry.register::<Boxed<String>>();

    let reflector = Reflector::new(registry);
    let boxed = reflector.entity_type("Boxed");
    assert!(boxed.has_property("value").unwrap());
    assert!(boxed.getters().unwrap().contains_key("value"));

    let _ = Boxed { value: 1_u8 }.get_value();
}
