use crate::components::{Component, ComponentId, ComponentRegistry, ComponentStore};
use crate::error::{CapacityKind, EcsError, RegistryKind};
use crate::config::MAXIMUM_COMPONENT_TYPES;
use crate::data_structures::Signature;
use crate::entities::Entity;

#[derive(Debug, Clone, PartialEq, Component)]
struct Position {
	x: i32,
	y: i32,
}

#[derive(Debug, Clone, PartialEq, Component)]
struct Name(String);

struct Manual;
impl Component for Manual {}

fn entity(index: u32) -> Entity {
	Entity::from_index(index)
}

#[test]
pub fn store_keeps_values_dense_after_removal() {
	let mut store = ComponentStore::<Name>::new(ComponentId::new(0));
	for i in 0..4 {
		store.insert(entity(i), Name(format!("e{i}"))).unwrap();
	}

	assert_eq!(store.remove(entity(1)).unwrap(), Name("e1".into()));
	assert_eq!(store.len(), 3);
	assert_eq!(store.get(entity(3)).unwrap(), &Name("e3".into()), "Moved value must stay reachable");
	assert!(!store.contains(entity(1)));

	let mut pairs = store.iter().map(|(e, n)| (e.index(), n.0.clone())).collect::<Vec<_>>();
	pairs.sort();
	assert_eq!(pairs, [(0, "e0".to_string()), (2, "e2".to_string()), (3, "e3".to_string())]);
}

#[test]
pub fn store_rejects_duplicates_and_missing() {
	let mut store = ComponentStore::<Position>::new(ComponentId::new(0));
	store.insert(entity(5), Position { x: 1, y: 2 }).unwrap();

	assert!(matches!(
		store.insert(entity(5), Position { x: 0, y: 0 }),
		Err(EcsError::DuplicateComponent { entity: e, .. }) if e == entity(5)
	));
	assert_eq!(store.get(entity(5)).unwrap(), &Position { x: 1, y: 2 }, "A rejected insert must not overwrite");

	store.remove(entity(5)).unwrap();
	assert!(matches!(store.remove(entity(5)), Err(EcsError::MissingComponent { .. })));
	assert!(store.is_empty());
}

#[test]
pub fn registry_assigns_bits_in_order() {
	let mut registry = ComponentRegistry::new();

	assert_eq!(registry.register::<Position>().unwrap().value(), 0);
	assert_eq!(registry.register::<Name>().unwrap().value(), 1);
	assert_eq!(registry.register::<Manual>().unwrap().value(), 2);

	assert_eq!(registry.signature_of::<Name>().unwrap(), Signature::with_bit(1));
	assert_eq!(registry.len(), 3);
	assert!(registry.type_names().nth(1).unwrap().ends_with("Name"));
}

#[test]
pub fn registry_rejects_duplicate_and_unknown_types() {
	let mut registry = ComponentRegistry::new();
	registry.register::<Position>().unwrap();

	assert!(matches!(
		registry.register::<Position>(),
		Err(EcsError::DuplicateRegistration { kind: RegistryKind::Component, .. })
	));
	assert!(matches!(
		registry.signature_of::<Name>(),
		Err(EcsError::NotRegistered { kind: RegistryKind::Component, .. })
	));
	assert!(matches!(
		registry.add_component(entity(1), Name("a".into())),
		Err(EcsError::NotRegistered { .. })
	));
}

#[test]
pub fn entity_destroyed_ignores_absent_components() {
	let mut registry = ComponentRegistry::new();
	registry.register::<Position>().unwrap();
	registry.register::<Name>().unwrap();

	registry.add_component(entity(1), Position { x: 3, y: 4 }).unwrap();
	registry.add_component(entity(2), Name("kept".into())).unwrap();

	registry.entity_destroyed(entity(1));
	registry.entity_destroyed(entity(1));

	assert!(matches!(registry.get_component::<Position>(entity(1)), Err(EcsError::MissingComponent { .. })));
	assert_eq!(registry.get_component::<Name>(entity(2)).unwrap(), &Name("kept".into()));
}

#[test]
pub fn registry_caps_component_types() {
	struct Kind<const N: usize>;
	impl<const N: usize> Component for Kind<N> {}

	macro_rules! register_all {
		($registry: expr, $($n: literal)*) => {
			$($registry.register::<Kind<$n>>().unwrap();)*
		};
	}

	let mut registry = ComponentRegistry::new();
	register_all!(registry,
		0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
		32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
	);
	assert_eq!(registry.len(), MAXIMUM_COMPONENT_TYPES);
	assert_eq!(registry.signature_of::<Kind<63>>().unwrap(), Signature::with_bit(63));

	assert_eq!(
		registry.register::<Kind<64>>(),
		Err(EcsError::CapacityExceeded { kind: CapacityKind::ComponentTypes, limit: 64 })
	);
	assert!(!registry.is_registered::<Kind<64>>());
}
