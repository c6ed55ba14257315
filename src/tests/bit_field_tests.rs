use crate::data_structures::BitField;
use rand::prelude::SliceRandom;
use rand::thread_rng;

#[test]
pub fn replace_reports_previous_value() {
	let mut bitfield = BitField::with_capacity(40);

	assert_eq!(bitfield.replace(33, true), Some(false));
	assert_eq!(bitfield.replace(33, true), Some(true));
	assert_eq!(bitfield.replace(33, false), Some(true));
	assert_eq!(bitfield.replace(40, true), None, "Writes past the capacity must be rejected");
	assert!(!bitfield.get(40));
	assert_eq!(bitfield.capacity(), 40);
}

#[test]
pub fn ranges_span_word_boundaries() {
	let mut bitfield = BitField::with_capacity(200);
	for i in (3..5).chain(30..100).chain(150..151) {
		bitfield.set_for_test(i);
	}

	assert_eq!(
		bitfield.iter_ranges().collect::<Vec<_>>(),
		[3..5, 30..100, 150..151],
		"Set ranges do not match the expected ranges"
	);
	assert_eq!(bitfield.count_ones(), 2 + 70 + 1);

	bitfield.clear();
	assert_eq!(bitfield.iter_ranges().next(), None);
}

#[test]
pub fn fragmented_clearing() {
	let count = 1024;
	let mut bitfield = BitField::with_capacity(count);
	for i in 0..count {
		bitfield.set_for_test(i);
	}
	assert_eq!(bitfield.iter_ranges().collect::<Vec<_>>(), [0..count]);

	let mut indices = (0..count).collect::<Vec<_>>();
	indices.shuffle(&mut thread_rng());

	for (i, index) in indices.iter().enumerate() {
		bitfield.replace(*index, false);
		assert_eq!(count - i - 1, bitfield.count_ones(), "Set bits do not match expected count");

		let from_ranges: usize = bitfield.iter_ranges().map(|r| r.len()).sum();
		assert_eq!(from_ranges, bitfield.count_ones());
	}
}

impl BitField {
	fn set_for_test(&mut self, i: usize) {
		assert_eq!(self.replace(i, true), Some(false));
	}
}
