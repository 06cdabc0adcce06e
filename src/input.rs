// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fs, path::PathBuf};

use crate::error::Error;


/// Reads `../inputs/day<N>.txt` relative to the working directory,
/// mirroring where the puzzle inputs live next to this crate.
pub(crate) fn read(day: u8) -> Result<String, Error> {
	let path = PathBuf::from(format!("../inputs/day{day}.txt"));
	fs::read_to_string(&path).map_err(|source| Error::Input { path, source })
}
