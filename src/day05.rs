// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, input};


/// An inclusive range of fresh ingredient IDs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct FreshRange {
	lower: u64,
	upper: u64,
}

impl FreshRange {
	fn contains(&self, id: u64) -> bool {
		self.lower <= id && id <= self.upper
	}

	fn overlaps(&self, other: &FreshRange) -> bool {
		self.lower <= other.upper && other.lower <= self.upper
	}

	fn len(&self) -> u64 {
		self.upper - self.lower + 1
	}
}


/// Pairwise-disjoint ranges, maintained across insertions.
#[derive(Default)]
struct MergedRanges(Vec<FreshRange>);

impl MergedRanges {
	fn insert(&mut self, range: FreshRange) {
		if self.0.iter().any(|existing|
			existing.lower <= range.lower && range.upper <= existing.upper) { return }

		// Absorb every stored range the new one overlaps, then store the span.
		let mut merged = range;
		self.0.retain(|existing| {
			if !existing.overlaps(&range) { return true }
			merged.lower = merged.lower.min(existing.lower);
			merged.upper = merged.upper.max(existing.upper);
			false
		});
		self.0.push(merged);
	}

	fn covered(&self) -> u64 {
		self.0.iter().map(FreshRange::len).sum()
	}
}


fn part1_impl(s: &str) -> Result<u64, Error> {
	let (ranges, ids) = parsing::try_input_from_str(s).map_err(Error::malformed)?;
	Ok(ids.into_iter()
		.filter(|&id| ranges.iter().any(|range| range.contains(id)))
		.count() as u64)
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(5)?)
}


fn part2_impl(s: &str) -> Result<u64, Error> {
	let (ranges, _) = parsing::try_input_from_str(s).map_err(Error::malformed)?;
	let mut merged = MergedRanges::default();
	for range in ranges {
		merged.insert(range);
	}
	Ok(merged.covered())
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(5)?)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::FreshRange;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RangeError {
		#[error("missing ‘-’ delimiter")]
		Format,
		#[error("invalid lower bound: {0}")]
		Lower(ParseIntError),
		#[error("invalid upper bound: {0}")]
		Upper(ParseIntError),
		#[error("bounds out of order ({lower} > {upper})")]
		Order { lower: u64, upper: u64 },
	}

	impl FromStr for FreshRange {
		type Err = RangeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (lower, upper) = s.split_once('-')
				.ok_or(RangeError::Format)?;
			let lower = lower.parse()
				.map_err(RangeError::Lower)?;
			let upper = upper.parse()
				.map_err(RangeError::Upper)?;
			if lower > upper { return Err(RangeError::Order { lower, upper }) }
			Ok(FreshRange { lower, upper })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InputError {
		#[error("missing blank line between fresh ranges and ingredient list")]
		Format,
		#[error("line {line}: {source}")]
		Range { line: usize, source: RangeError },
		#[error("line {line}: invalid ingredient id: {source}")]
		Id { line: usize, source: ParseIntError },
	}

	pub(super) fn try_input_from_str(s: &str) -> Result<(Vec<FreshRange>, Vec<u64>), InputError> {
		let (ranges, ids) = s.split_once("\n\n")
			.ok_or(InputError::Format)?;
		let ranges = ranges.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|source| InputError::Range { line: l + 1, source }))
			.collect::<Result<_, _>>()?;
		let line_offset = s.len() - ids.len();
		let line_offset = s[..line_offset].matches('\n').count();
		let ids = ids.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|source| InputError::Id { line: line_offset + l + 1, source }))
			.collect::<Result<_, _>>()?;
		Ok((ranges, ids))
	}

	#[test]
	fn tests() {
		assert_eq!("3-5".parse::<FreshRange>().unwrap(), FreshRange { lower: 3, upper: 5 });
		assert!(matches!("5-3".parse::<FreshRange>(),
			Err(RangeError::Order { lower: 5, upper: 3 })));
		assert!(matches!(try_input_from_str("1-2\n3-4"), Err(InputError::Format)));
		assert!(matches!(try_input_from_str("1-2\n\n3\nx"),
			Err(InputError::Id { line: 4, .. })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;


	const INPUT: &str = indoc! { "
		1-5
		10-15
		4-11

		3
		7
		20
	" };

	fn range(lower: u64, upper: u64) -> FreshRange {
		FreshRange { lower, upper }
	}

	#[test]
	fn merging() {
		let mut merged = MergedRanges::default();
		merged.insert(range(1, 5));
		merged.insert(range(10, 15));
		merged.insert(range(4, 11));
		assert_eq!(merged.0, [range(1, 15)]);
		assert_eq!(merged.covered(), 15);

		let mut disjoint = MergedRanges::default();
		disjoint.insert(range(1, 2));
		disjoint.insert(range(5, 6));
		assert_eq!(disjoint.covered(), 4);

		// Fully-contained ranges leave the set untouched.
		let mut contained = MergedRanges::default();
		contained.insert(range(1, 10));
		contained.insert(range(3, 7));
		assert_eq!(contained.0, [range(1, 10)]);
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(INPUT).unwrap(), 2);
		assert_eq!(part2_impl(INPUT).unwrap(), 15);
	}
}
