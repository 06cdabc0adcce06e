// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Display, io, path::PathBuf};


/// Crate-wide failure modes. Every solver fails fast: the first
/// unreadable file, unparseable token, or out-of-grid access ends the run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("failed to read input {}: {source}", path.display())]
	Input { path: PathBuf, source: io::Error },
	#[error("malformed input: {0}")]
	MalformedInput(String),
	#[error("out of range: {0}")]
	OutOfRange(String),
}

impl Error {
	pub(crate) fn malformed(source: impl Display) -> Self {
		Error::MalformedInput(source.to_string())
	}

	pub(crate) fn out_of_range(source: impl Display) -> Self {
		Error::OutOfRange(source.to_string())
	}
}
