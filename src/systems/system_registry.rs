use crate::error::{EcsError, EcsResult, RegistryKind};
use crate::data_structures::Signature;
use std::hash::BuildHasherDefault;
use std::collections::{HashMap, HashSet};
use nohash_hasher::NoHashHasher;
use crate::entities::Entity;
use crate::systems::System;
use crate::agent::Agent;
use tracing::{debug, trace};
use std::any::{Any, TypeId};

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// The set of entities tracked by a [System].
pub type EntitySet = HashSet<Entity, BuildHasherDefault<NoHashHasher<u32>>>;

/// Owns one instance of every registered [System] together with its
/// required [Signature] and tracked [EntitySet].
#[derive(Default)]
pub(crate) struct SystemRegistry {
	ids: HashMap<TypeId, usize, Hasher>,
	systems: Vec<SystemEntry>,
}

struct SystemEntry {
	type_name: &'static str,
	signature: Signature,
	entities: EntitySet,
	// Empty while the system is checked out for its own run.
	instance: Option<Box<dyn AnySystem>>,
}

trait AnySystem: Send {
	fn run(&mut self, agent: &mut Agent, entities: &[Entity]) -> EcsResult<()>;
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: System> AnySystem for T {
	fn run(&mut self, agent: &mut Agent, entities: &[Entity]) -> EcsResult<()> {
		System::run(self, agent, entities)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

/// A system instance taken out of the registry for the duration of its run.
pub(crate) struct CheckedOutSystem {
	index: usize,
	instance: Box<dyn AnySystem>,
	entities: Vec<Entity>,
}

impl SystemRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Construct an instance of `T` with an empty signature and no tracked entities.
	pub fn register<T: System + Default>(&mut self) -> EcsResult<&mut T> {
		let key = TypeId::of::<T>();
		if self.ids.contains_key(&key) {
			return Err(EcsError::DuplicateRegistration {
				kind: RegistryKind::System,
				type_name: std::any::type_name::<T>(),
			});
		}

		let index = self.systems.len();
		self.ids.insert(key, index);
		self.systems.push(SystemEntry {
			type_name: std::any::type_name::<T>(),
			signature: Signature::new(),
			entities: EntitySet::default(),
			instance: Some(Box::new(T::default())),
		});

		debug!(system = std::any::type_name::<T>(), "system registered");
		self.get_mut::<T>()
	}

	pub fn index_of<T: System>(&self) -> EcsResult<usize> {
		self.ids.get(&TypeId::of::<T>()).copied().ok_or(EcsError::NotRegistered {
			kind: RegistryKind::System,
			type_name: std::any::type_name::<T>(),
		})
	}

	/// Overwrite the required [Signature] of `T`.
	/// Tracked entities are left as they are until their own signature changes.
	pub fn set_signature<T: System>(&mut self, signature: Signature) -> EcsResult<()> {
		let index = self.index_of::<T>()?;
		let entry = &mut self.systems[index];
		entry.signature.set(signature);

		debug!(system = entry.type_name, %signature, "system signature set");
		Ok(())
	}

	pub fn signature<T: System>(&self) -> EcsResult<Signature> {
		Ok(self.systems[self.index_of::<T>()?].signature)
	}

	pub fn entities<T: System>(&self) -> EcsResult<&EntitySet> {
		Ok(&self.systems[self.index_of::<T>()?].entities)
	}

	pub fn get<T: System>(&self) -> EcsResult<&T> {
		let entry = &self.systems[self.index_of::<T>()?];
		let instance = entry.instance.as_ref().ok_or(EcsError::SystemRunning {
			type_name: entry.type_name,
		})?;

		instance.as_any().downcast_ref::<T>().ok_or(EcsError::NotRegistered {
			kind: RegistryKind::System,
			type_name: entry.type_name,
		})
	}

	pub fn get_mut<T: System>(&mut self) -> EcsResult<&mut T> {
		let index = self.index_of::<T>()?;
		let entry = &mut self.systems[index];
		let type_name = entry.type_name;
		let instance = entry.instance.as_mut().ok_or(EcsError::SystemRunning { type_name })?;

		instance.as_any_mut().downcast_mut::<T>().ok_or(EcsError::NotRegistered {
			kind: RegistryKind::System,
			type_name,
		})
	}

	/// Add `entity` to every system whose signature it matches and remove it from all others.
	pub fn entity_signature_changed(&mut self, entity: Entity, signature: Signature) {
		for entry in self.systems.iter_mut() {
			if signature.matches_signature(entry.signature) {
				if entry.entities.insert(entity) {
					trace!(%entity, system = entry.type_name, "entity added to system");
				}
			} else if entry.entities.remove(&entity) {
				trace!(%entity, system = entry.type_name, "entity removed from system");
			}
		}
	}

	/// Remove `entity` from every system.
	pub fn entity_destroyed(&mut self, entity: Entity) {
		for entry in self.systems.iter_mut() {
			entry.entities.remove(&entity);
		}
	}

	/// Take the instance at `index` out of the registry along with a sorted
	/// snapshot of its tracked entities.
	pub fn check_out(&mut self, index: usize) -> EcsResult<CheckedOutSystem> {
		let entry = &mut self.systems[index];
		let instance = entry.instance.take().ok_or(EcsError::SystemRunning {
			type_name: entry.type_name,
		})?;

		let mut entities: Vec<Entity> = entry.entities.iter().copied().collect();
		entities.sort_unstable();

		Ok(CheckedOutSystem {
			index,
			instance,
			entities,
		})
	}

	pub fn check_in(&mut self, system: CheckedOutSystem) {
		self.systems[system.index].instance = Some(system.instance);
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}
}

impl CheckedOutSystem {
	pub fn run(&mut self, agent: &mut Agent) -> EcsResult<()> {
		self.instance.run(agent, &self.entities)
	}
}
