//! [Components](Component) are the plain data attached to [entities](crate::entities::Entity).
//!
//! Every component type must be registered with an [Agent](crate::agent::Agent) before use;
//! registration assigns the type a [ComponentId] and with it one bit of the [Signature](crate::data_structures::Signature).

mod component_type;
mod component_set;
mod component_store;
mod component_registry;

pub use component_type::*;
pub use component_set::*;
pub use component_store::ComponentStore;
pub use component_registry::*;
pub use diamond_ecs_derive::Component;

pub(crate) use component_store::AnyComponentStore;
