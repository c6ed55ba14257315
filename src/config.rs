use crate::data_structures::Signature;

/// The default number of entity slots in an [Agent](crate::agent::Agent).
///
/// One slot is reserved for singleton components;
/// callers can create at most `MAXIMUM_ENTITIES - 1` entities of their own.
pub const MAXIMUM_ENTITIES: usize = 5000;

/// The number of distinct component types one [Agent](crate::agent::Agent) can register.
pub const MAXIMUM_COMPONENT_TYPES: usize = Signature::BITS;

/// Construction parameters for an [Agent](crate::agent::Agent).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AgentConfig {
	/// Total entity slots, including the reserved singleton entity.
	pub maximum_entities: usize,
}

impl AgentConfig {
	pub fn with_maximum_entities(mut self, maximum_entities: usize) -> Self {
		self.maximum_entities = maximum_entities;
		self
	}
}

impl Default for AgentConfig {
	fn default() -> Self {
		Self {
			maximum_entities: MAXIMUM_ENTITIES,
		}
	}
}
