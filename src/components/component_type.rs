use crate::data_structures::Signature;
use std::fmt;

/// Plain data that can be attached to an [Entity](crate::entities::Entity).
///
/// Usually implemented through #\[derive([`Component`](diamond_ecs_derive::Component))].
pub trait Component: 'static + Send {}

/// The identifier assigned to a [Component] type when it is registered.
///
/// Identifiers are handed out in registration order starting at 0 and are local to one
/// [Agent](crate::agent::Agent); the same type can have different ids in different agents.
/// A component's id is also the position of its bit in a [Signature].
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	pub(crate) const fn new(value: usize) -> Self {
		Self { value }
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}

	/// The single-bit [Signature] of this component type.
	#[inline(always)]
	pub const fn signature(&self) -> Signature {
		Signature::with_bit(self.value)
	}
}

impl fmt::Display for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.value)
	}
}
