use crate::error::{CapacityKind, EcsError, EcsResult, RegistryKind};
use crate::components::{AnyComponentStore, Component, ComponentId, ComponentStore};
use crate::config::MAXIMUM_COMPONENT_TYPES;
use crate::data_structures::Signature;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::entities::Entity;
use std::any::TypeId;
use tracing::{debug, trace};

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Owns one [ComponentStore] per registered [Component] type.
///
/// Stores are indexed by [ComponentId]; the [TypeId] map is only consulted
/// to translate a type parameter into its id.
#[derive(Default)]
pub struct ComponentRegistry {
	ids: HashMap<TypeId, ComponentId, Hasher>,
	stores: Vec<Box<dyn AnyComponentStore>>,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create the store for `T` and assign it the next free signature bit.
	pub fn register<T: Component>(&mut self) -> EcsResult<ComponentId> {
		self.ensure_unregistered::<T>()?;
		self.ensure_room(1)?;

		let id = ComponentId::new(self.stores.len());
		self.ids.insert(TypeId::of::<T>(), id);
		self.stores.push(Box::new(ComponentStore::<T>::new(id)));

		debug!(component = std::any::type_name::<T>(), %id, "component registered");
		Ok(id)
	}

	pub(crate) fn ensure_unregistered<T: Component>(&self) -> EcsResult<()> {
		match self.ids.contains_key(&TypeId::of::<T>()) {
			true => Err(EcsError::DuplicateRegistration {
				kind: RegistryKind::Component,
				type_name: std::any::type_name::<T>(),
			}),
			false => Ok(()),
		}
	}

	/// Fails with [EcsError::CapacityExceeded] unless `count` more types fit in a [Signature].
	pub(crate) fn ensure_room(&self, count: usize) -> EcsResult<()> {
		match self.stores.len() + count <= MAXIMUM_COMPONENT_TYPES {
			true => Ok(()),
			false => Err(EcsError::CapacityExceeded {
				kind: CapacityKind::ComponentTypes,
				limit: MAXIMUM_COMPONENT_TYPES,
			}),
		}
	}

	pub fn id_of<T: Component>(&self) -> EcsResult<ComponentId> {
		self.ids.get(&TypeId::of::<T>()).copied().ok_or_else(not_registered::<T>)
	}

	/// The single-bit [Signature] assigned to `T`.
	pub fn signature_of<T: Component>(&self) -> EcsResult<Signature> {
		Ok(self.id_of::<T>()?.signature())
	}

	pub fn is_registered<T: Component>(&self) -> bool {
		self.ids.contains_key(&TypeId::of::<T>())
	}

	pub fn store<T: Component>(&self) -> EcsResult<&ComponentStore<T>> {
		let id = self.id_of::<T>()?;
		self.stores[id.value()]
			.as_any()
			.downcast_ref::<ComponentStore<T>>()
			.ok_or_else(not_registered::<T>)
	}

	pub fn store_mut<T: Component>(&mut self) -> EcsResult<&mut ComponentStore<T>> {
		let id = self.id_of::<T>()?;
		self.stores[id.value()]
			.as_any_mut()
			.downcast_mut::<ComponentStore<T>>()
			.ok_or_else(not_registered::<T>)
	}

	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> EcsResult<()> {
		self.store_mut::<T>()?.insert(entity, value)
	}

	pub fn get_component<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
		self.store::<T>()?.get(entity)
	}

	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
		self.store_mut::<T>()?.get_mut(entity)
	}

	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
		self.store_mut::<T>()?.remove(entity)
	}

	/// Drop whatever components `entity` carries. Absent components are skipped silently.
	pub fn entity_destroyed(&mut self, entity: Entity) {
		for store in self.stores.iter_mut() {
			if store.entity_destroyed(entity) {
				trace!(%entity, component = store.type_name(), "component dropped");
			}
		}
	}

	/// The number of registered component types.
	pub fn len(&self) -> usize {
		self.stores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stores.is_empty()
	}

	/// Names of the registered types in registration (bit) order.
	pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.stores.iter().map(|s| s.type_name())
	}
}

fn not_registered<T: Component>() -> EcsError {
	EcsError::NotRegistered {
		kind: RegistryKind::Component,
		type_name: std::any::type_name::<T>(),
	}
}
