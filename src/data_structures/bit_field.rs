use std::iter::repeat;
use std::ops::Range;

const BITS: usize = 32;
const ALL_BITS_SET: u32 = u32::MAX;
const FIRST_BIT: u32 = 1 << (BITS - 1);

/// A bit-field with a capacity fixed at construction.
///
/// Reads past the capacity return `false`; writes past it are rejected.
#[derive(Default, Clone, Debug)]
pub struct BitField {
	values: Vec<u32>,
	capacity: usize,
}

impl BitField {
	/// Create a new [BitField] with every bit cleared.
	///
	/// # Arguments
	/// * `capacity` - The number of addressable bits
	pub fn with_capacity(capacity: usize) -> Self {
		let (mut count, rest) = Self::pos_shift(capacity);
		if rest != 0 {
			count += 1;
		}

		Self {
			values: repeat(0).take(count).collect(),
			capacity,
		}
	}

	/// Get the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the element to retrieve
	#[inline(always)]
	pub fn get(&self, i: usize) -> bool {
		if i >= self.capacity {
			return false;
		}
		let (position, shift) = Self::pos_shift(i);
		(self.values[position] & (FIRST_BIT >> shift)) != 0
	}

	/// Set the value of the bit at index `i` and return its previous value,
	/// or `None` if `i` is out of range.
	///
	/// # Arguments
	/// * `i` - The index of the element to modify
	#[inline(always)]
	pub fn replace(&mut self, i: usize, value: bool) -> Option<bool> {
		if i >= self.capacity {
			return None;
		}
		let (position, shift) = Self::pos_shift(i);
		let bit = FIRST_BIT >> shift;
		let word = &mut self.values[position];
		let previous = (*word & bit) != 0;

		match value {
			true => *word |= bit,
			false => *word &= !bit,
		}
		Some(previous)
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.values.fill(0);
	}

	/// Get the [BitField]'s capacity in bits.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Count the bits that are set.
	pub fn count_ones(&self) -> usize {
		self.values.iter().map(|v| v.count_ones() as usize).sum()
	}

	/// Iterate over the ranges of set bits.
	pub fn iter_ranges(&self) -> BitFieldRangeIterator {
		BitFieldRangeIterator {
			index: 0,
			values: &self.values,
		}
	}

	#[inline(always)]
	fn pos_shift(a: usize) -> (usize, usize) {
		(a / BITS, a % BITS)
	}
}

/// Iterates over the ranges of set bits of a [BitField].
pub struct BitFieldRangeIterator<'l> {
	index: usize,
	values: &'l [u32],
}

impl BitFieldRangeIterator<'_> {
	#[inline(always)]
	fn bit(&self, i: usize) -> bool {
		(self.values[i / BITS] & (FIRST_BIT >> (i % BITS))) != 0
	}
}

impl Iterator for BitFieldRangeIterator<'_> {
	type Item = Range<usize>;

	fn next(&mut self) -> Option<Self::Item> {
		let end = self.values.len() * BITS;

		// Skip cleared words whole, then cleared bits one at a time.
		while self.index < end {
			if self.index % BITS == 0 && self.values[self.index / BITS] == 0 {
				self.index += BITS;
			} else if !self.bit(self.index) {
				self.index += 1;
			} else {
				break;
			}
		}
		if self.index >= end {
			return None;
		}

		let start = self.index;
		while self.index < end {
			if self.index % BITS == 0 && self.values[self.index / BITS] == ALL_BITS_SET {
				self.index += BITS;
			} else if self.bit(self.index) {
				self.index += 1;
			} else {
				break;
			}
		}

		Some(start..self.index)
	}
}
