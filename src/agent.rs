use crate::components::{Component, ComponentId, ComponentRegistry, ComponentSet};
use crate::error::{EcsError, EcsResult};
use crate::systems::{EntitySet, System, SystemRegistry};
use crate::entities::{Entity, EntityPool};
use crate::data_structures::Signature;
use crate::config::AgentConfig;
use tracing::debug;

/// A world containing [entities](Entity), their [components](Component) and the [systems](System) tracking them.
///
/// Every operation goes through the agent, which keeps three things in step:
/// the component stores, each entity's [Signature], and each system's tracked entities.
/// One entity slot is reserved at construction for singleton components.
///
/// An agent performs no internal synchronization.
/// Independent agents share nothing and can live on different threads.
pub struct Agent {
	entity_pool: EntityPool,
	component_registry: ComponentRegistry,
	system_registry: SystemRegistry,
	singleton: Entity,
}

impl Agent {
	/// Creates an agent with the default [AgentConfig].
	pub fn new() -> Self {
		Self::with_config(AgentConfig::default())
			.expect("the default configuration leaves room for the singleton entity")
	}

	/// Creates an agent with `config.maximum_entities` entity slots, one of which is
	/// taken by the singleton entity.
	pub fn with_config(config: AgentConfig) -> EcsResult<Self> {
		let mut entity_pool = EntityPool::with_capacity(config.maximum_entities);
		let singleton = entity_pool.create_entity()?;

		debug!(maximum_entities = config.maximum_entities, %singleton, "agent created");
		Ok(Self {
			entity_pool,
			component_registry: ComponentRegistry::new(),
			system_registry: SystemRegistry::new(),
			singleton,
		})
	}

	/// Checks out an [entity](Entity) with no [components](Component) attached.
	/// When done with it, pass it to [Agent::destroy_entity].
	pub fn create_entity(&mut self) -> EcsResult<Entity> {
		self.entity_pool.create_entity()
	}

	/// Drops every [component](Component) of `entity`, removes it from every [system](System)
	/// and returns its slot to the pool, in that order.
	pub fn destroy_entity(&mut self, entity: Entity) -> EcsResult<()> {
		if entity == self.singleton {
			return Err(EcsError::SingletonEntity { entity });
		}
		if !self.entity_pool.is_active(entity) {
			return Err(EcsError::DoubleFree { entity });
		}

		self.component_registry.entity_destroyed(entity);
		self.system_registry.entity_destroyed(entity);
		self.entity_pool.destroy_entity(entity)
	}

	/// Makes the agent aware of the [component](Component) type `T`
	/// and assigns it the next free [Signature] bit.
	pub fn register_component<T: Component>(&mut self) -> EcsResult<ComponentId> {
		self.component_registry.register::<T>()
	}

	/// Registers every type of a [ComponentSet] and returns their combined [Signature].
	pub fn register_components<S: ComponentSet>(&mut self) -> EcsResult<Signature> {
		S::register(&mut self.component_registry)
	}

	/// Attaches `component` to `entity`, then updates the entity's [Signature]
	/// and the membership of every [system](System).
	pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> EcsResult<()> {
		self.entity_pool.ensure_active(entity)?;
		self.component_registry.add_component(entity, component)?;

		let component_signature = self.component_registry.signature_of::<T>()?;
		let signature = self.entity_pool.signature_mut(entity)?;
		signature.add_signature(component_signature);

		let signature = *signature;
		self.system_registry.entity_signature_changed(entity, signature);
		Ok(())
	}

	pub fn get_component<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
		self.component_registry.get_component(entity)
	}

	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
		self.component_registry.get_component_mut(entity)
	}

	/// Returns *false* for unregistered types as well as for absent components.
	pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
		self.component_registry.store::<T>().map(|s| s.contains(entity)).unwrap_or(false)
	}

	/// Detaches the `T` component of `entity` and returns it, then updates the entity's
	/// [Signature] and the membership of every [system](System).
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
		let component = self.component_registry.remove_component::<T>(entity)?;

		let component_signature = self.component_registry.signature_of::<T>()?;
		let signature = self.entity_pool.signature_mut(entity)?;
		signature.remove_signature(component_signature);

		let signature = *signature;
		self.system_registry.entity_signature_changed(entity, signature);
		Ok(component)
	}

	/// Adds a singleton component, i.e. a component of the reserved singleton entity.
	pub fn add_singleton<T: Component>(&mut self, component: T) -> EcsResult<()> {
		self.add_component(self.singleton, component)
	}

	pub fn singleton<T: Component>(&self) -> EcsResult<&T> {
		self.get_component(self.singleton)
	}

	pub fn singleton_mut<T: Component>(&mut self) -> EcsResult<&mut T> {
		self.get_component_mut(self.singleton)
	}

	pub fn remove_singleton<T: Component>(&mut self) -> EcsResult<T> {
		self.remove_component(self.singleton)
	}

	/// The entity reserved for singleton components.
	pub fn singleton_entity(&self) -> Entity {
		self.singleton
	}

	/// The single-bit [Signature] of the component type `T`.
	/// Combine these to build the signature of a [system](System).
	pub fn component_signature<T: Component>(&self) -> EcsResult<Signature> {
		self.component_registry.signature_of::<T>()
	}

	/// The combined [Signature] of every type of a [ComponentSet].
	pub fn signature_of<S: ComponentSet>(&self) -> EcsResult<Signature> {
		S::signature(&self.component_registry)
	}

	/// Iterates over every `T` component and the entity it belongs to.
	pub fn components<T: Component>(&self) -> EcsResult<impl Iterator<Item = (Entity, &T)> + '_> {
		Ok(self.component_registry.store::<T>()?.iter())
	}

	pub fn components_mut<T: Component>(&mut self) -> EcsResult<impl Iterator<Item = (Entity, &mut T)> + '_> {
		Ok(self.component_registry.store_mut::<T>()?.iter_mut())
	}

	/// Registers the [system](System) `T` and returns its instance.
	///
	/// New systems have an empty signature; until [Agent::set_system_signature] is called
	/// they track every entity whose signature changes.
	pub fn register_system<T: System + Default>(&mut self) -> EcsResult<&mut T> {
		self.system_registry.register::<T>()
	}

	/// Overwrites the required [Signature] of the [system](System) `T`.
	///
	/// Entities already active are not re-evaluated here;
	/// they join or leave the system the next time their own signature changes.
	pub fn set_system_signature<T: System>(&mut self, signature: Signature) -> EcsResult<()> {
		self.system_registry.set_signature::<T>(signature)
	}

	pub fn system_signature<T: System>(&self) -> EcsResult<Signature> {
		self.system_registry.signature::<T>()
	}

	/// The entities currently tracked by the [system](System) `T`.
	pub fn system_entities<T: System>(&self) -> EcsResult<&EntitySet> {
		self.system_registry.entities::<T>()
	}

	pub fn system<T: System>(&self) -> EcsResult<&T> {
		self.system_registry.get::<T>()
	}

	pub fn system_mut<T: System>(&mut self) -> EcsResult<&mut T> {
		self.system_registry.get_mut::<T>()
	}

	/// Executes the [system](System) `T` over the entities it tracks.
	pub fn run_system<T: System>(&mut self) -> EcsResult<()> {
		let index = self.system_registry.index_of::<T>()?;
		self.run_system_at(index)
	}

	/// Executes every [system](System) in registration order, stopping at the first error.
	pub fn run_systems(&mut self) -> EcsResult<()> {
		for index in 0..self.system_registry.len() {
			self.run_system_at(index)?;
		}
		Ok(())
	}

	fn run_system_at(&mut self, index: usize) -> EcsResult<()> {
		let mut system = self.system_registry.check_out(index)?;
		let result = system.run(self);
		self.system_registry.check_in(system);
		result
	}

	/// The [Signature] of `entity`; free slots read as empty.
	pub fn entity_signature(&self, entity: Entity) -> Signature {
		self.entity_pool.signature(entity)
	}

	pub fn is_alive(&self, entity: Entity) -> bool {
		self.entity_pool.is_active(entity)
	}

	/// Iterates over every active entity, the singleton entity included.
	pub fn active_entities(&self) -> impl Iterator<Item = Entity> + '_ {
		self.entity_pool.active_entities()
	}

	/// The number of entities that can still be created.
	pub fn available_entities(&self) -> usize {
		self.entity_pool.available()
	}

	/// The total number of entity slots, the singleton entity included.
	pub fn capacity(&self) -> usize {
		self.entity_pool.capacity()
	}

	pub fn component_count(&self) -> usize {
		self.component_registry.len()
	}

	pub fn system_count(&self) -> usize {
		self.system_registry.len()
	}
}

impl Default for Agent {
	fn default() -> Self {
		Self::new()
	}
}
