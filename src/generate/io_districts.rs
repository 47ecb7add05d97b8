// Primitives for reading the list of districts.

use std::fs;

use crate::generate::*;

/// Reads the district names, one per line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. They are trimmed and blank lines are dropped.
/// The order of the file is kept, including repeated names.
pub fn read_districts(path: &str) -> GenResult<Vec<String>> {
    info!("Attempting to read districts file {:?}", path);
    let contents = fs::read_to_string(path).context(ReadingDistrictsSnafu { path })?;
    let districts = parse_districts(&contents);
    debug!("read_districts: {:?}", districts);
    Ok(districts)
}

pub fn parse_districts(contents: &str) -> Vec<String> {
    contents
        .split(['\n', '\r'])
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}
