use entity_schema::{Entity, EntityClass};

/// @property string $label
#[derive(Entity)]
pub struct Marker;

/// @property-read int $value
#[derive(Entity)]
pub struct Counter(pub u64);

fn main() {
    assert_eq!(Marker::NAME, "Marker");
    assert_eq!(Counter::NAME, "Counter");
    assert_eq!(Counter::declaration().parent(), Some("BaseEntity"));
}
