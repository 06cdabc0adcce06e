// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, input};


/// The dial starts at 50 before any rotation is applied.
const STARTING_POSITION: i64 = 50;


/// Number of multiples of 100 strictly between `a` and `b`, in either order.
fn hundreds_between(a: i64, b: i64) -> u64 {
	if a == b { return 0 }
	let (a, b) = if a < b { (a, b) } else { (b, a) };
	let first = (num_integer::div_floor(a, 100) + 1) * 100;
	let last = num_integer::div_floor(b - 1, 100) * 100;
	if first > last { 0 } else { ((last - first) / 100 + 1) as u64 }
}


fn part1_impl(s: &str) -> Result<u64, Error> {
	let rotations = parsing::try_rotations_from_str(s).map_err(Error::malformed)?;

	// The starting position counts as the first prefix sum.
	let mut position = STARTING_POSITION;
	let mut count = u64::from(position % 100 == 0);
	for rotation in rotations {
		position += rotation;
		if position % 100 == 0 { count += 1 }
	}
	Ok(count)
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(1)?)
}


fn part2_impl(s: &str) -> Result<u64, Error> {
	let rotations = parsing::try_rotations_from_str(s).map_err(Error::malformed)?;

	let mut position = STARTING_POSITION;
	let mut count = 0;
	for rotation in rotations {
		let previous = position;
		position += rotation;
		if position % 100 == 0 { count += 1 }
		count += hundreds_between(previous, position);
	}
	Ok(count)
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(1)?)
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RotationError {
		#[error("line {line}: empty rotation")]
		Empty { line: usize },
		#[error("line {line}: invalid direction {found:?} (expected ‘L’ or ‘R’)")]
		Direction { line: usize, found: char },
		#[error("line {line}: invalid magnitude: {source}")]
		Magnitude { line: usize, source: ParseIntError },
	}

	pub(super) fn try_rotations_from_str(s: &str) -> Result<Vec<i64>, RotationError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				let line_no = l + 1;
				let mut chars = line.chars();
				let sign = match chars.next() {
					Some('L') => -1,
					Some('R') => 1,
					Some(found) => return Err(RotationError::Direction { line: line_no, found }),
					None => return Err(RotationError::Empty { line: line_no }),
				};
				let magnitude: i64 = chars.as_str().parse()
					.map_err(|source| RotationError::Magnitude { line: line_no, source })?;
				Ok(sign * magnitude)
			})
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(try_rotations_from_str("L30\nR48").unwrap(), [-30, 48]);
		assert!(matches!(try_rotations_from_str("U7"),
			Err(RotationError::Direction { line: 1, found: 'U' })));
		assert!(matches!(try_rotations_from_str("L30\nR"),
			Err(RotationError::Magnitude { line: 2, .. })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;


	const INPUT: &str = indoc! { "
		R50
		R50
		R50
	" };

	#[test]
	fn hundreds() {
		assert_eq!(hundreds_between(120, 280), 1);
		assert_eq!(hundreds_between(280, 120), 1);
		assert_eq!(hundreds_between(120, 120), 0);
		assert_eq!(hundreds_between(-50, 150), 2);
		assert_eq!(hundreds_between(100, 200), 0);
	}

	#[test]
	fn tests() {
		assert_eq!(part1_impl(INPUT).unwrap(), 2);
		assert_eq!(part2_impl(INPUT).unwrap(), 2);
		assert_eq!(part2_impl("L250\n").unwrap(), 3);
	}
}
