use crate::entities::Entity;
use crate::error::EcsResult;
use crate::agent::Agent;

/// Provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
///
/// Each registered system keeps a live set of the entities whose signature contains the
/// system's required [Signature](crate::data_structures::Signature).
pub trait System: 'static + Send {
	/// Executes the system.
	///
	/// # Arguments
	/// * `agent` - The [Agent] that registered the system
	/// * `entities` - The entities tracked by the system when the run started, in slot order
	fn run(&mut self, agent: &mut Agent, entities: &[Entity]) -> EcsResult<()> {
		let _ = (agent, entities);
		Ok(())
	}
}
