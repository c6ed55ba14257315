use std::fmt;

/// A handle to an entity slot.
///
/// Handles carry no data of their own and are recycled once the entity is destroyed;
/// a handle must not be kept past the call that destroys it.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) index: u32,
}

impl Entity {
	pub(crate) const fn from_index(index: u32) -> Self {
		Self { index }
	}

	/// The slot this handle refers to.
	pub const fn index(&self) -> usize {
		self.index as usize
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Entity({})", self.index)
	}
}
