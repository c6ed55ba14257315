use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub, SubAssign};
use std::fmt;

/// A fixed-width bit-set recording which component types an entity carries,
/// or which component types a [System](crate::systems::System) requires.
///
/// Bit `k` corresponds to the component type that was registered `k`-th.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Signature {
	bits: u64,
}

impl Signature {
	/// Width of the signature in bits.
	pub const BITS: usize = u64::BITS as usize;

	/// An empty signature.
	pub const fn new() -> Self {
		Self { bits: 0 }
	}

	/// A signature with only the bit at `position` set.
	///
	/// # Arguments
	/// * `position` - The bit to set, in range from 0 to [Signature::BITS]
	pub const fn with_bit(position: usize) -> Self {
		debug_assert!(position < Self::BITS);
		Self { bits: 1u64 << position }
	}

	/// Adds every bit of `other` to this signature.
	#[inline(always)]
	pub fn add_signature(&mut self, other: Signature) {
		self.bits |= other.bits;
	}

	/// Removes every bit of `other` from this signature.
	#[inline(always)]
	pub fn remove_signature(&mut self, other: Signature) {
		self.bits &= !other.bits;
	}

	#[inline(always)]
	pub fn enable_bit(&mut self, position: usize) {
		debug_assert!(position < Self::BITS);
		self.bits |= 1u64 << position;
	}

	#[inline(always)]
	pub fn disable_bit(&mut self, position: usize) {
		debug_assert!(position < Self::BITS);
		self.bits &= !(1u64 << position);
	}

	#[inline(always)]
	pub fn get(&self, position: usize) -> bool {
		position < Self::BITS && self.bits & (1u64 << position) != 0
	}

	/// Check if this signature is a superset of `required`.
	/// An empty requirement is matched by every signature.
	#[inline(always)]
	pub fn matches_signature(&self, required: Signature) -> bool {
		(self.bits & required.bits) == required.bits
	}

	/// Clear every bit.
	#[inline(always)]
	pub fn reset(&mut self) {
		self.bits = 0;
	}

	/// Overwrite this signature with `other`.
	#[inline(always)]
	pub fn set(&mut self, other: Signature) {
		self.bits = other.bits;
	}

	pub fn is_empty(&self) -> bool {
		self.bits == 0
	}

	pub fn count(&self) -> usize {
		self.bits.count_ones() as usize
	}

	/// Iterate over the positions of the set bits, lowest first.
	pub fn iter_bits(&self) -> impl Iterator<Item = usize> + '_ {
		let bits = self.bits;
		(0..Self::BITS).filter(move |i| bits & (1u64 << i) != 0)
	}

	pub const fn bits(&self) -> u64 {
		self.bits
	}
}

impl From<u64> for Signature {
	fn from(bits: u64) -> Self {
		Self { bits }
	}
}

impl BitOr for Signature {
	type Output = Signature;

	fn bitor(self, rhs: Self) -> Self::Output {
		Self { bits: self.bits | rhs.bits }
	}
}

impl BitOrAssign for Signature {
	fn bitor_assign(&mut self, rhs: Self) {
		self.add_signature(rhs)
	}
}

impl BitAnd for Signature {
	type Output = Signature;

	fn bitand(self, rhs: Self) -> Self::Output {
		Self { bits: self.bits & rhs.bits }
	}
}

impl Sub for Signature {
	type Output = Signature;

	fn sub(self, rhs: Self) -> Self::Output {
		Self { bits: self.bits & !rhs.bits }
	}
}

impl SubAssign for Signature {
	fn sub_assign(&mut self, rhs: Self) {
		self.remove_signature(rhs)
	}
}

impl Not for Signature {
	type Output = Signature;

	fn not(self) -> Self::Output {
		Self { bits: !self.bits }
	}
}

impl fmt::Debug for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Signature({:#066b})", self.bits)
	}
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:b}", self.bits)
	}
}
