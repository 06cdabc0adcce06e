// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::BTreeSet;

use crate::{error::Error, input};

use parsing::Splitters;


/// Walks the beams down the grid row by row, returning the number of split
/// events. `on_split` runs once per event, before the active-column set is
/// updated. Within a row, removals apply before additions, so a column both
/// split away and fed by a neighboring split stays active.
fn simulate(splitters: &Splitters, mut on_split: impl FnMut(usize)) -> Result<u64, Error> {
	let mut beams: BTreeSet<usize> = splitters.starts.iter().copied().collect();
	let mut splits = 0;

	for row in &splitters.rows[1..] {
		let mut to_add = BTreeSet::new();
		let mut to_remove = BTreeSet::new();
		for &beam in &beams {
			if !row[beam] { continue }
			if beam == 0 || beam + 1 == splitters.width {
				return Err(Error::out_of_range(format!(
					"split at column {} of a {}-wide grid", beam + 1, splitters.width)));
			}
			splits += 1;
			to_remove.insert(beam);
			to_add.insert(beam - 1);
			to_add.insert(beam + 1);
			on_split(beam);
		}
		for beam in to_remove {
			beams.remove(&beam);
		}
		beams.extend(to_add);
	}
	Ok(splits)
}


fn part1_impl(s: &str) -> Result<u64, Error> {
	let splitters: Splitters = s.parse().map_err(Error::malformed)?;
	simulate(&splitters, |_| ())
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(7)?)
}


fn part2_impl(s: &str) -> Result<u64, Error> {
	let splitters: Splitters = s.parse().map_err(Error::malformed)?;

	// Each column carries the number of distinct paths reaching it; a split
	// hands its count to both children.
	let mut paths = vec![0u64; splitters.width];
	for &start in &splitters.starts {
		paths[start] = 1;
	}
	simulate(&splitters, |beam| {
		paths[beam - 1] += paths[beam];
		paths[beam + 1] += paths[beam];
		paths[beam] = 0;
	})?;
	Ok(paths.iter().sum())
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(7)?)
}


mod parsing {
	use std::str::FromStr;

	pub(super) struct Splitters {
		/// Per row, whether each column holds a splitter.
		pub(super) rows: Vec<Vec<bool>>,
		/// Columns marked ‘S’ in row 0.
		pub(super) starts: Vec<usize>,
		pub(super) width: usize,
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GridError {
		#[error("empty grid")]
		Empty,
		#[error("line {line}: ragged row of {len} cells (expected {width})")]
		Len { line: usize, len: usize, width: usize },
	}

	impl FromStr for Splitters {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let first = s.lines().next().ok_or(GridError::Empty)?;
			let width = first.chars().count();
			let starts = first.chars()
				.enumerate()
				.filter(|&(_, c)| c == 'S')
				.map(|(column, _)| column)
				.collect();

			let rows = s.lines()
				.enumerate()
				.map(|(l, line)| {
					let row: Vec<bool> = line.chars().map(|c| c == '^').collect();
					if row.len() != width {
						return Err(GridError::Len { line: l + 1, len: row.len(), width });
					}
					Ok(row)
				})
				.collect::<Result<_, _>>()?;

			Ok(Splitters { rows, starts, width })
		}
	}

	#[test]
	fn tests() {
		let splitters: Splitters = ".S.S.\n..^..".parse().unwrap();
		assert_eq!(splitters.starts, [1, 3]);
		assert_eq!(splitters.rows[1], [false, false, true, false, false]);
		assert!(matches!(".S.\n.^".parse::<Splitters>(),
			Err(GridError::Len { line: 2, len: 2, width: 3 })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;


	const INPUT: &str = indoc! { "
		.......S.......
		...............
		.......^.......
		......^.^......
		.....^...^.....
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl(".S.\n.^.").unwrap(), 1);
		assert_eq!(part2_impl(".S.\n.^.").unwrap(), 2);
		assert_eq!(part1_impl(INPUT).unwrap(), 5);
		assert_eq!(part2_impl(INPUT).unwrap(), 6);
		// A split on the grid edge has nowhere to send its left child.
		assert!(matches!(part1_impl("S\n^"), Err(Error::OutOfRange(_))));
	}
}
