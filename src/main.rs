// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod error;
mod input;
mod logging;

use error::Error;


type Part = fn() -> Result<u64, Error>;

fn run_day(day: u8, part1: Part, part2: Part) -> Result<(), Error> {
	tracing::info!("Solved day {day} part 1! The answer is: {}.", part1()?);
	tracing::info!("Solved day {day} part 2! The answer is: {}.", part2()?);
	Ok(())
}

fn main() {
	logging::init();
	tracing::info!("Start of run.");

	let days: [(u8, Part, Part); 7] = [
		(1, day01::part1, day01::part2),
		(2, day02::part1, day02::part2),
		(3, day03::part1, day03::part2),
		(4, day04::part1, day04::part2),
		(5, day05::part1, day05::part2),
		(6, day06::part1, day06::part2),
		(7, day07::part1, day07::part2),
	];

	for (day, part1, part2) in days {
		if let Err(err) = run_day(day, part1, part2) {
			tracing::error!("Day {day} failed: {err}");
			std::process::exit(1);
		}
	}

	tracing::info!("End of run.");
}
