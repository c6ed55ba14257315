use crate::error::{EcsError, EcsResult};
use crate::components::{Component, ComponentId};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::entities::Entity;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<u32>>;

/// Densely packed storage for every instance of one [Component] type.
///
/// Values live in a contiguous buffer; a sparse map from [Entity] to buffer index
/// keeps lookups O(1). Removal swaps the last value into the freed position.
pub struct ComponentStore<T: Component> {
	id: ComponentId,
	indices: HashMap<Entity, usize, Hasher>,
	entities: Vec<Entity>,
	values: Vec<T>,
}

impl<T: Component> ComponentStore<T> {
	pub(crate) fn new(id: ComponentId) -> Self {
		Self {
			id,
			indices: HashMap::default(),
			entities: Vec::new(),
			values: Vec::new(),
		}
	}

	pub fn id(&self) -> ComponentId {
		self.id
	}

	/// Attach `value` to `entity`.
	/// Fails with [EcsError::DuplicateComponent] if the entity already has one.
	pub fn insert(&mut self, entity: Entity, value: T) -> EcsResult<()> {
		if self.indices.contains_key(&entity) {
			return Err(EcsError::DuplicateComponent {
				entity,
				component: std::any::type_name::<T>(),
			});
		}

		self.indices.insert(entity, self.values.len());
		self.entities.push(entity);
		self.values.push(value);
		Ok(())
	}

	pub fn get(&self, entity: Entity) -> EcsResult<&T> {
		let index = self.index_of(entity)?;
		Ok(&self.values[index])
	}

	pub fn get_mut(&mut self, entity: Entity) -> EcsResult<&mut T> {
		let index = self.index_of(entity)?;
		Ok(&mut self.values[index])
	}

	/// Detach and return the value bound to `entity`.
	pub fn remove(&mut self, entity: Entity) -> EcsResult<T> {
		let index = self.index_of(entity)?;
		self.indices.remove(&entity);

		let value = self.values.swap_remove(index);
		self.entities.swap_remove(index);
		if let Some(moved) = self.entities.get(index) {
			self.indices.insert(*moved, index);
		}

		Ok(value)
	}

	pub fn contains(&self, entity: Entity) -> bool {
		self.indices.contains_key(&entity)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterate over every `(entity, value)` pair in storage order.
	pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
		self.entities.iter().copied().zip(self.values.iter())
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> + '_ {
		self.entities.iter().copied().zip(self.values.iter_mut())
	}

	fn index_of(&self, entity: Entity) -> EcsResult<usize> {
		self.indices.get(&entity).copied().ok_or(EcsError::MissingComponent {
			entity,
			component: std::any::type_name::<T>(),
		})
	}
}

/// Type-erased access to a [ComponentStore], used for registry-wide fan-out.
pub(crate) trait AnyComponentStore: Send {
	/// Drop the entity's value if present. Returns whether anything was removed.
	fn entity_destroyed(&mut self, entity: Entity) -> bool;
	fn type_name(&self) -> &'static str;
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> AnyComponentStore for ComponentStore<T> {
	fn entity_destroyed(&mut self, entity: Entity) -> bool {
		self.remove(entity).is_ok()
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
