use crate::error::{CapacityKind, EcsError, EcsResult};
use crate::data_structures::{BitField, Signature};
use crate::entities::Entity;
use std::collections::VecDeque;
use tracing::trace;

/// A fixed set of entity slots handed out in FIFO order.
///
/// Every slot owns one [Signature], which is reset whenever the slot returns to the pool.
pub struct EntityPool {
	available: VecDeque<Entity>,
	active: BitField,
	signatures: Vec<Signature>,
}

impl EntityPool {
	/// Create a pool holding `capacity` free slots.
	pub fn with_capacity(capacity: usize) -> Self {
		let capacity = usize::min(capacity, u32::MAX as usize);
		Self {
			available: (0..capacity as u32).map(Entity::from_index).collect(),
			active: BitField::with_capacity(capacity),
			signatures: vec![Signature::new(); capacity],
		}
	}

	/// Take the oldest free slot.
	pub fn create_entity(&mut self) -> EcsResult<Entity> {
		let entity = self.available.pop_front().ok_or(EcsError::CapacityExceeded {
			kind: CapacityKind::Entities,
			limit: self.capacity(),
		})?;

		self.active.replace(entity.index(), true);
		trace!(%entity, "entity created");
		Ok(entity)
	}

	/// Reset the slot's [Signature] and return it to the back of the queue.
	/// Fails with [EcsError::DoubleFree] if the slot is not currently active.
	pub fn destroy_entity(&mut self, entity: Entity) -> EcsResult<()> {
		match self.active.replace(entity.index(), false) {
			Some(true) => {},
			Some(false) | None => return Err(EcsError::DoubleFree { entity }),
		}

		self.signatures[entity.index()].reset();
		self.available.push_back(entity);
		trace!(%entity, "entity destroyed");
		Ok(())
	}

	pub fn is_active(&self, entity: Entity) -> bool {
		self.active.get(entity.index())
	}

	/// Fails with [EcsError::InactiveEntity] unless `entity` is checked out of the pool.
	pub fn ensure_active(&self, entity: Entity) -> EcsResult<()> {
		match self.is_active(entity) {
			true => Ok(()),
			false => Err(EcsError::InactiveEntity { entity }),
		}
	}

	/// The [Signature] of an entity slot; free and out-of-range slots read as empty.
	pub fn signature(&self, entity: Entity) -> Signature {
		self.signatures.get(entity.index()).copied().unwrap_or_default()
	}

	pub(crate) fn signature_mut(&mut self, entity: Entity) -> EcsResult<&mut Signature> {
		self.ensure_active(entity)?;
		Ok(&mut self.signatures[entity.index()])
	}

	/// Iterate over all active entities in slot order.
	pub fn active_entities(&self) -> impl Iterator<Item = Entity> + '_ {
		self.active.iter_ranges().flatten().map(|i| Entity::from_index(i as u32))
	}

	pub fn active_count(&self) -> usize {
		self.active.count_ones()
	}

	pub fn available(&self) -> usize {
		self.available.len()
	}

	pub fn capacity(&self) -> usize {
		self.signatures.len()
	}
}
