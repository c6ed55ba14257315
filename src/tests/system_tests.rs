use crate::error::{EcsError, EcsResult, RegistryKind};
use crate::systems::{System, SystemRegistry};
use crate::data_structures::Signature;
use crate::entities::Entity;
use crate::agent::Agent;

#[derive(Default, System)]
struct Movers {
	label: &'static str,
}

#[derive(Default, System)]
struct Renderers;

#[derive(Default)]
struct Counter {
	runs: usize,
	seen: Vec<Entity>,
}

impl System for Counter {
	fn run(&mut self, _: &mut Agent, entities: &[Entity]) -> EcsResult<()> {
		self.runs += 1;
		self.seen = entities.to_vec();
		Ok(())
	}
}

fn entity(index: u32) -> Entity {
	Entity::from_index(index)
}

#[test]
pub fn register_returns_the_instance() {
	let mut registry = SystemRegistry::new();

	let movers = registry.register::<Movers>().unwrap();
	movers.label = "movers";

	assert_eq!(registry.get::<Movers>().unwrap().label, "movers");
	assert!(registry.signature::<Movers>().unwrap().is_empty());
	assert!(registry.entities::<Movers>().unwrap().is_empty());
	assert!(matches!(
		registry.register::<Movers>(),
		Err(EcsError::DuplicateRegistration { kind: RegistryKind::System, .. })
	));
}

#[test]
pub fn unregistered_systems_are_rejected() {
	let mut registry = SystemRegistry::new();

	assert!(matches!(
		registry.set_signature::<Movers>(Signature::with_bit(0)),
		Err(EcsError::NotRegistered { kind: RegistryKind::System, .. })
	));
	assert!(registry.entities::<Movers>().is_err());
	assert!(registry.get::<Movers>().is_err());
}

#[test]
pub fn set_signature_overwrites() {
	let mut registry = SystemRegistry::new();
	registry.register::<Movers>().unwrap();

	registry.set_signature::<Movers>(Signature::with_bit(0) | Signature::with_bit(1)).unwrap();
	registry.set_signature::<Movers>(Signature::with_bit(2)).unwrap();
	assert_eq!(registry.signature::<Movers>().unwrap(), Signature::with_bit(2));
}

#[test]
pub fn membership_follows_signature_changes() {
	let mut registry = SystemRegistry::new();
	registry.register::<Movers>().unwrap();
	registry.register::<Renderers>().unwrap();
	registry.set_signature::<Movers>(Signature::with_bit(0)).unwrap();
	registry.set_signature::<Renderers>(Signature::with_bit(0) | Signature::with_bit(1)).unwrap();

	registry.entity_signature_changed(entity(1), Signature::with_bit(0));
	assert!(registry.entities::<Movers>().unwrap().contains(&entity(1)));
	assert!(!registry.entities::<Renderers>().unwrap().contains(&entity(1)));

	registry.entity_signature_changed(entity(1), Signature::from(0b11u64));
	assert!(registry.entities::<Movers>().unwrap().contains(&entity(1)));
	assert!(registry.entities::<Renderers>().unwrap().contains(&entity(1)));

	registry.entity_signature_changed(entity(1), Signature::with_bit(1));
	assert!(registry.entities::<Movers>().unwrap().is_empty());
	assert!(registry.entities::<Renderers>().unwrap().is_empty());
}

#[test]
pub fn entity_destroyed_leaves_every_system() {
	let mut registry = SystemRegistry::new();
	registry.register::<Movers>().unwrap();
	registry.register::<Renderers>().unwrap();

	registry.entity_signature_changed(entity(2), Signature::from(0b101u64));
	assert_eq!(registry.entities::<Renderers>().unwrap().len(), 1);

	registry.entity_destroyed(entity(2));
	registry.entity_destroyed(entity(3));
	assert!(registry.entities::<Movers>().unwrap().is_empty());
	assert!(registry.entities::<Renderers>().unwrap().is_empty());
}

#[test]
pub fn check_out_takes_a_sorted_snapshot() {
	let mut agent = Agent::new();
	let mut registry = SystemRegistry::new();
	registry.register::<Counter>().unwrap();
	for i in [9, 3, 5] {
		registry.entity_signature_changed(entity(i), Signature::new());
	}

	let mut system = registry.check_out(0).unwrap();
	assert!(matches!(registry.get::<Counter>(), Err(EcsError::SystemRunning { .. })));
	assert!(matches!(registry.check_out(0), Err(EcsError::SystemRunning { .. })));

	system.run(&mut agent).unwrap();
	registry.check_in(system);

	let counter = registry.get::<Counter>().unwrap();
	assert_eq!(counter.runs, 1);
	assert_eq!(counter.seen, [entity(3), entity(5), entity(9)]);
}
