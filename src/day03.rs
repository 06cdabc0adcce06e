// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;

use crate::{error::Error, input};


/// Maximum two-digit joltage, by trying every ordered pair of batteries.
fn max_joltage_pair(bank: &[u8]) -> Option<u64> {
	bank.iter()
		.tuple_combinations()
		.map(|(&tens, &ones)| u64::from(tens) * 10 + u64::from(ones))
		.max()
}

/// Maximum `k`-digit joltage, picking greedily left to right. Each pick
/// takes the highest digit (first occurrence on ties) from the window
/// that still leaves enough batteries to finish the selection.
fn max_joltage_greedy(bank: &[u8], k: usize) -> Option<u64> {
	if bank.len() < k { return None }

	let mut joltage = 0;
	let mut start = 0;
	for remaining in (1..=k).rev() {
		let end = bank.len() - remaining + 1;
		let mut pick = start;
		for i in start + 1..end {
			if bank[i] > bank[pick] { pick = i }
		}
		joltage = joltage * 10 + u64::from(bank[pick]);
		start = pick + 1;
	}
	Some(joltage)
}


fn sum_joltages(s: &str, max_joltage: impl Fn(&[u8]) -> Option<u64>) -> Result<u64, Error> {
	let banks = parsing::try_banks_from_str(s).map_err(Error::malformed)?;
	banks.iter()
		.enumerate()
		.map(|(l, bank)| max_joltage(bank)
			.ok_or_else(|| Error::malformed(format!(
				"line {}: battery bank of {} batteries is too short", l + 1, bank.len()))))
		.try_fold(0, |acc, joltage| joltage.map(|j| acc + j))
}


fn part1_impl(s: &str) -> Result<u64, Error> {
	sum_joltages(s, max_joltage_pair)
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(3)?)
}


fn part2_impl(s: &str) -> Result<u64, Error> {
	sum_joltages(s, |bank| max_joltage_greedy(bank, 12))
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(3)?)
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	pub(super) enum BankError {
		#[error("line {line}: empty battery bank")]
		Empty { line: usize },
		#[error("line {line}, column {column}: invalid battery {found:?}")]
		Battery { line: usize, column: usize, found: char },
	}

	pub(super) fn try_banks_from_str(s: &str) -> Result<Vec<Vec<u8>>, BankError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				if line.is_empty() { return Err(BankError::Empty { line: l + 1 }) }
				line.chars()
					.enumerate()
					.map(|(c, found)| found.to_digit(10)
						.map(|digit| digit as u8)
						.ok_or(BankError::Battery { line: l + 1, column: c + 1, found }))
					.collect()
			})
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!(try_banks_from_str("987\n111").unwrap(), [[9, 8, 7], [1, 1, 1]]);
		assert!(matches!(try_banks_from_str("98x"),
			Err(BankError::Battery { line: 1, column: 3, found: 'x' })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	fn bank(s: &str) -> Vec<u8> {
		s.bytes().map(|b| b - b'0').collect()
	}

	/// Reference search over every order-preserving selection of `k` digits.
	fn max_joltage_brute_force(bank: &[u8], k: usize) -> Option<u64> {
		use itertools::Itertools as _;
		(0..bank.len())
			.combinations(k)
			.map(|picks| picks.into_iter().fold(0, |acc, i| acc * 10 + u64::from(bank[i])))
			.max()
	}

	#[test]
	fn greedy_matches_brute_force() {
		for s in ["9413111111213", "98765432101234", "31111111111173", "5555555555555"] {
			let bank = bank(s);
			assert_eq!(max_joltage_greedy(&bank, 12), max_joltage_brute_force(&bank, 12), "{s}");
			assert_eq!(max_joltage_greedy(&bank, 2), max_joltage_pair(&bank), "{s}");
		}
	}

	#[test]
	fn tests() {
		assert_eq!(max_joltage_pair(&bank("1932")), Some(93));
		assert_eq!(max_joltage_greedy(&bank("9413111111213"), 12), Some(943111111213));
		assert_eq!(part1_impl("1932\n811").unwrap(), 174);
		assert_eq!(part2_impl("9413111111213").unwrap(), 943111111213);
		assert!(part2_impl("12345").is_err());
	}
}
