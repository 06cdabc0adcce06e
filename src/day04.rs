// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, input};


struct Grid {
	rolls: Vec<bool>,
	width: usize,
}

impl Grid {
	/// Number of rolls among the 8 Moore neighbors; off-grid counts as empty.
	fn neighbor_count(&self, idx: usize) -> usize {
		let x = (idx % self.width) as isize;
		let y = (idx / self.width) as isize;
		let height = (self.rolls.len() / self.width) as isize;
		itertools::iproduct!(-1isize..=1, -1isize..=1)
			.filter(|&(dx, dy)| (dx, dy) != (0, 0))
			.filter(|&(dx, dy)| {
				let (nx, ny) = (x + dx, y + dy);
				(0..self.width as isize).contains(&nx)
					&& (0..height).contains(&ny)
					&& self.rolls[ny as usize * self.width + nx as usize]
			})
			.count()
	}

	/// Indices of rolls with fewer than 4 neighboring rolls, based on the
	/// current state only.
	fn removable(&self) -> Vec<usize> {
		self.rolls.iter()
			.enumerate()
			.filter(|&(idx, &roll)| roll && self.neighbor_count(idx) < 4)
			.map(|(idx, _)| idx)
			.collect()
	}
}


fn part1_impl(s: &str) -> Result<u64, Error> {
	let grid: Grid = s.parse().map_err(Error::malformed)?;
	Ok(grid.removable().len() as u64)
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(4)?)
}


fn part2_impl(s: &str) -> Result<u64, Error> {
	let mut grid: Grid = s.parse().map_err(Error::malformed)?;

	// Each pass removes all qualifying rolls at once; neighbor counts are
	// taken from the grid as it stood before the pass.
	let mut removed = 0;
	loop {
		let removable = grid.removable();
		if removable.is_empty() { break }
		removed += removable.len() as u64;
		for idx in removable {
			grid.rolls[idx] = false;
		}
	}
	Ok(removed)
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(4)?)
}


mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GridError {
		#[error("empty grid")]
		Empty,
		#[error("line {line}: ragged row of {len} cells (expected {width})")]
		Len { line: usize, len: usize, width: usize },
		#[error("line {line}, column {column}: invalid cell {found:?}")]
		Invalid { line: usize, column: usize, found: char },
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let width = s.lines().next().ok_or(GridError::Empty)?.chars().count();

			let mut rolls = Vec::new();
			for (l, line) in s.lines().enumerate() {
				let len = line.chars().count();
				if len != width { return Err(GridError::Len { line: l + 1, len, width }) }
				for (c, found) in line.chars().enumerate() {
					rolls.push(match found {
						'.' => false,
						'@' => true,
						found => return Err(GridError::Invalid {
							line: l + 1, column: c + 1, found })
					});
				}
			}

			Ok(Grid { rolls, width })
		}
	}

	#[test]
	fn tests() {
		let grid: Grid = "@.\n.@".parse().unwrap();
		assert_eq!(grid.width, 2);
		assert_eq!(grid.rolls, [true, false, false, true]);
		assert!(matches!("@.\n@".parse::<Grid>(),
			Err(GridError::Len { line: 2, len: 1, width: 2 })));
		assert!(matches!("@#".parse::<Grid>(),
			Err(GridError::Invalid { line: 1, column: 2, found: '#' })));
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;


	const FULL_3X3: &str = indoc! { "
		@@@
		@@@
		@@@
	" };

	const FULL_4X4: &str = indoc! { "
		@@@@
		@@@@
		@@@@
		@@@@
	" };

	#[test]
	fn neighbor_counts() {
		let grid: Grid = FULL_3X3.parse().unwrap();
		assert_eq!(grid.neighbor_count(4), 8);
		assert_eq!(grid.neighbor_count(0), 3);
		assert_eq!(grid.neighbor_count(1), 5);
	}

	#[test]
	fn tests() {
		// Only the four corners fall short of 4 neighbors at first.
		assert_eq!(part1_impl(FULL_3X3).unwrap(), 4);
		// Corners, then edges, then the lone center.
		assert_eq!(part2_impl(FULL_3X3).unwrap(), 9);
		// The 12 interior-adjacent cells keep each other at 4 neighbors.
		assert_eq!(part1_impl(FULL_4X4).unwrap(), 4);
		assert_eq!(part2_impl(FULL_4X4).unwrap(), 4);
	}
}
