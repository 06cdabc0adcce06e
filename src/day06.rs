// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, input};

use parsing::Operator;


fn part1_impl(s: &str) -> Result<u64, Error> {
	let (operators, rows) = parsing::try_worksheet_from_str(s).map_err(Error::malformed)?;

	// Column i of the number rows is reduced by operator i.
	Ok(operators.iter()
		.enumerate()
		.map(|(i, operator)| operator.apply(rows.iter().map(|row| row[i])))
		.sum())
}

pub(crate) fn part1() -> Result<u64, Error> {
	part1_impl(&input::read(6)?)
}


/// Columns are scanned right to left over the raw character grid: each
/// non-blank column is one number read top to bottom, and a non-space
/// operator character closes the block accumulated so far.
fn part2_impl(s: &str) -> Result<u64, Error> {
	let rows: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
	let Some((operators, numbers)) = rows.split_last()
		else { return Err(Error::malformed("empty worksheet")) };
	for (l, row) in numbers.iter().enumerate() {
		if row.len() != operators.len() {
			return Err(Error::out_of_range(format!(
				"line {}: row of {} cells (operator row has {})",
				l + 1, row.len(), operators.len())));
		}
	}

	let mut result = 0;
	let mut values = Vec::new();
	for i in (0..operators.len()).rev() {
		let digits: String = numbers.iter()
			.map(|row| row[i])
			.filter(|&c| c != ' ')
			.collect();
		if digits.is_empty() { continue }

		values.push(digits.parse::<u64>()
			.map_err(|source| Error::malformed(format!(
				"column {}: invalid number {digits:?}: {source}", i + 1)))?);

		if operators[i] == ' ' { continue }
		let operator = Operator::try_from(operators[i]).map_err(Error::malformed)?;
		result += operator.apply(values.drain(..));
	}
	Ok(result)
}

pub(crate) fn part2() -> Result<u64, Error> {
	part2_impl(&input::read(6)?)
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Clone, Copy, Debug)]
	pub(super) enum Operator {
		Add,
		Multiply,
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid operator {0:?}")]
	pub(super) struct OperatorError(char);

	impl TryFrom<char> for Operator {
		type Error = OperatorError;
		fn try_from(c: char) -> Result<Self, Self::Error> {
			match c {
				'+' => Ok(Operator::Add),
				'*' => Ok(Operator::Multiply),
				found => Err(OperatorError(found)),
			}
		}
	}

	impl Operator {
		pub(super) fn apply(self, values: impl Iterator<Item = u64>) -> u64 {
			match self {
				Operator::Add => values.sum(),
				Operator::Multiply => values.product(),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum WorksheetError {
		#[error("empty worksheet")]
		Empty,
		#[error("operator {pos}: {source}")]
		Operator { pos: usize, source: OperatorError },
		#[error("line {line}: {len} numbers under {expected} operators")]
		RowLen { line: usize, len: usize, expected: usize },
		#[error("line {line}, number {pos}: {source}")]
		Number { line: usize, pos: usize, source: ParseIntError },
	}

	pub(super) fn try_worksheet_from_str(s: &str)
	-> Result<(Vec<Operator>, Vec<Vec<u64>>), WorksheetError> {
		let lines: Vec<&str> = s.lines().collect();
		let (operators, number_lines) = lines.split_last()
			.ok_or(WorksheetError::Empty)?;
		let operators = operators.split_whitespace()
			.enumerate()
			.map(|(i, op)| {
				let mut chars = op.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => Operator::try_from(c),
					_ => Err(OperatorError(op.chars().next().unwrap_or(' '))),
				}
				.map_err(|source| WorksheetError::Operator { pos: i + 1, source })
			})
			.collect::<Result<Vec<_>, _>>()?;

		let rows = number_lines.iter()
			.enumerate()
			.map(|(l, line)| {
				let row = line.split_whitespace()
					.enumerate()
					.map(|(i, number)| number.parse()
						.map_err(|source| WorksheetError::Number {
							line: l + 1, pos: i + 1, source }))
					.collect::<Result<Vec<u64>, _>>()?;
				if row.len() != operators.len() {
					return Err(WorksheetError::RowLen {
						line: l + 1, len: row.len(), expected: operators.len() });
				}
				Ok(row)
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok((operators, rows))
	}

	#[test]
	fn tests() {
		let (operators, rows) = try_worksheet_from_str("1 2\n3 4\n+ *").unwrap();
		assert!(matches!(operators[..], [Operator::Add, Operator::Multiply]));
		assert_eq!(rows, [[1, 2], [3, 4]]);
		assert!(matches!(try_worksheet_from_str("1 2\n+ /"),
			Err(WorksheetError::Operator { pos: 2, .. })));
		assert!(matches!(try_worksheet_from_str("1 2 3\n+ *"),
			Err(WorksheetError::RowLen { line: 1, len: 3, expected: 2 })));
	}
}


#[cfg(test)]
mod tests {
	use super::*;


	// Trailing spaces pad every row to the operator row's width.
	const INPUT: &str = concat!(
		"123 328  51 64 \n",
		" 45 64  387 23 \n",
		"  6 98  215 314\n",
		"*   +   *   +  \n",
	);

	#[test]
	fn tests() {
		assert_eq!(part1_impl(INPUT).unwrap(), 4277556);
		assert_eq!(part2_impl(INPUT).unwrap(), 3263827);
		assert!(part2_impl("12\n345\n+  ").is_err());
	}
}
