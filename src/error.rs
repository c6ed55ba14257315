//! Errors returned by every fallible [Agent](crate::agent::Agent) operation.
//!
//! Each variant describes a misuse of the API rather than a transient fault,
//! so nothing in the crate retries. The checks run in every build configuration.

use crate::entities::Entity;
use thiserror::Error;

/// What kind of type a registration error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegistryKind {
	Component,
	System,
}

/// The resource that ran out in a [EcsError::CapacityExceeded].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CapacityKind {
	Entities,
	ComponentTypes,
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EcsError {
	#[error("{kind} capacity exceeded (limit {limit})")]
	CapacityExceeded { kind: CapacityKind, limit: usize },

	#[error("{kind} type `{type_name}` was used before being registered")]
	NotRegistered { kind: RegistryKind, type_name: &'static str },

	#[error("{kind} type `{type_name}` is already registered")]
	DuplicateRegistration { kind: RegistryKind, type_name: &'static str },

	#[error("{entity} already has a `{component}` component")]
	DuplicateComponent { entity: Entity, component: &'static str },

	#[error("{entity} has no `{component}` component")]
	MissingComponent { entity: Entity, component: &'static str },

	#[error("{entity} was destroyed while not active")]
	DoubleFree { entity: Entity },

	#[error("{entity} is not an active entity")]
	InactiveEntity { entity: Entity },

	#[error("{entity} is the reserved singleton entity and cannot be destroyed")]
	SingletonEntity { entity: Entity },

	#[error("system `{type_name}` is currently running")]
	SystemRunning { type_name: &'static str },
}

pub type EcsResult<T> = Result<T, EcsError>;

impl std::fmt::Display for RegistryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RegistryKind::Component => f.write_str("component"),
			RegistryKind::System => f.write_str("system"),
		}
	}
}

impl std::fmt::Display for CapacityKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CapacityKind::Entities => f.write_str("entity"),
			CapacityKind::ComponentTypes => f.write_str("component type"),
		}
	}
}
