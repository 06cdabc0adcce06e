// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, input};


/// Whether the decimal string of `n` is two identical halves.
fn is_strictly_repetitive(n: u64) -> bool {
	let s = n.to_string();
	let bytes = s.as_bytes();
	bytes.len() % 2 == 0 && bytes[..bytes.len() / 2] == bytes[bytes.len() / 2..]
}

/// Whether the decimal string of `n` is some prefix repeated two or more
/// times to exactly fill its length.
fn is_approximately_repetitive(n: u64) -> bool {
	if is_strictly_repetitive(n) { return true }
	let s = n.to_string();
	let bytes = s.as_bytes();
	(1..=bytes.len() / 2).any(|k|
		bytes.len() % k == 0 && bytes.chunks(k).all(|chunk| chunk == &bytes[..k]))
}


fn sum_repetitive(s: &str, is_repetitive: fn(u64) -> bool) -> Result<u64, Error> {
	let ranges = parsing::try_ranges_from_str(s).map_err(Error::malformed)?;

	// Ranges are puzzle-sized, so a scan over every candidate is fine.
	Ok(ranges.into_iter()
		.flat_map(|range| range.lower..=range.upper)
		.filter(|&n| is_repetitive(n))
		.sum())
}


fn part1_impl(s: &str) -> Result<u64, Error> {
	sum_repetitive(s, is_strictly_repetitive)
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(2)?)
}


fn part2_impl(s: &str) -> Result<u64, Error> {
	sum_repetitive(s, is_approximately_repetitive)
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(2)?)
}


mod parsing {
	use std::num::ParseIntError;

	pub(super) struct ProductRange {
		pub(super) lower: u64,
		pub(super) upper: u64,
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RangeError {
		#[error("range {pos}: missing ‘-’ delimiter")]
		Format { pos: usize },
		#[error("range {pos}: invalid lower bound: {source}")]
		Lower { pos: usize, source: ParseIntError },
		#[error("range {pos}: invalid upper bound: {source}")]
		Upper { pos: usize, source: ParseIntError },
		#[error("range {pos}: bounds out of order ({lower} > {upper})")]
		Order { pos: usize, lower: u64, upper: u64 },
	}

	/// The ranges come comma-separated, possibly wrapped over several lines.
	pub(super) fn try_ranges_from_str(s: &str) -> Result<Vec<ProductRange>, RangeError> {
		s.replace('\n', "")
			.split(',')
			.enumerate()
			.map(|(i, range)| {
				let pos = i + 1;
				let (lower, upper) = range.split_once('-')
					.ok_or(RangeError::Format { pos })?;
				let lower = lower.parse()
					.map_err(|source| RangeError::Lower { pos, source })?;
				let upper = upper.parse()
					.map_err(|source| RangeError::Upper { pos, source })?;
				if lower > upper { return Err(RangeError::Order { pos, lower, upper }) }
				Ok(ProductRange { lower, upper })
			})
			.collect()
	}

	#[test]
	fn tests() {
		let ranges = try_ranges_from_str("11-22,95-\n115").unwrap();
		assert_eq!(ranges.len(), 2);
		assert_eq!((ranges[1].lower, ranges[1].upper), (95, 115));
		assert!(matches!(try_ranges_from_str("1122"),
			Err(RangeError::Format { pos: 1 })));
		assert!(matches!(try_ranges_from_str("22-11"),
			Err(RangeError::Order { pos: 1, lower: 22, upper: 11 })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	#[test]
	fn predicates() {
		assert!(is_strictly_repetitive(1212));
		assert!(!is_strictly_repetitive(123));
		assert!(!is_strictly_repetitive(1221));
		assert!(is_approximately_repetitive(121212));
		assert!(is_approximately_repetitive(123123123));
		assert!(is_approximately_repetitive(999));
		assert!(!is_approximately_repetitive(1234));
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl("11-22").unwrap(), 33);
		assert_eq!(part2_impl("95-115").unwrap(), 210);
		assert_eq!(part2_impl("11-22,95-115").unwrap(), 243);
	}
}
