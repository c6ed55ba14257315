//! An entity-component-system core.
//!
//! Entities are handles from a fixed-size pool, components are plain data stored per type,
//! and systems keep a live set of the entities whose components match their required [Signature](data_structures::Signature).
//! Everything lives inside an [Agent](agent::Agent).

extern crate self as diamond_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod config;
pub mod error;
pub mod agent;

pub use agent::Agent;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::agent::Agent;
	pub use crate::data_structures::Signature;
	pub use crate::entities::Entity;
	pub use crate::config::{AgentConfig, MAXIMUM_COMPONENT_TYPES, MAXIMUM_ENTITIES};
	pub use crate::error::{EcsError, EcsResult};
}

#[cfg(test)]
mod tests;
