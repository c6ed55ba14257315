//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be registered with an [Agent](crate::agent::Agent) and given a required
//! [Signature](crate::data_structures::Signature) before it starts tracking entities.

mod system;
mod system_registry;

pub use system::*;
pub use system_registry::EntitySet;
pub use diamond_ecs_derive::System;

pub(crate) use system_registry::*;
