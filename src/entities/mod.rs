//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! Handles come from a fixed-size [EntityPool] and are recycled after being destroyed.

mod entity;
mod entity_pool;

pub use entity::*;
pub use entity_pool::*;
