//! TSPLIB coordinate reader.
//!
//! Only the `NODE_COORD_SECTION` is read. Header lines before it are ignored
//! and `EOF` ends it. Each node line is `<name> <x> <y>`; trailing tokens are
//! ignored and lines that fail to parse are skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::City;
use crate::{Error, Result};

const SECTION: &str = "NODE_COORD_SECTION";
const END: &str = "EOF";

/// Reads cities from TSPLIB text, preserving declaration order.
///
/// # Errors
///
/// [`Error::Io`] if reading fails, [`Error::EmptyInput`] if no node line
/// could be parsed.
///
/// # Examples
///
/// ```
/// use u_tour::io::read_cities;
///
/// let text = "NAME: demo\nNODE_COORD_SECTION\n1 0 0\n2 3.5 4\nEOF\n";
/// let cities = read_cities(text.as_bytes()).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].name(), "2");
/// assert_eq!(cities[1].x(), 3.5);
/// ```
pub fn read_cities<R: BufRead>(reader: R) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    let mut in_section = false;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == SECTION {
            in_section = true;
            continue;
        }
        if line == END {
            break;
        }
        if !in_section {
            continue;
        }

        match parse_node(line) {
            Some(city) => cities.push(city),
            None => log::warn!("skipping unparsable node line {}: '{line}'", number + 1),
        }
    }

    if cities.is_empty() {
        return Err(Error::EmptyInput);
    }
    log::debug!("read {} cities", cities.len());

    Ok(cities)
}

/// Opens `path` and reads its cities.
///
/// # Errors
///
/// See [`read_cities`]; a missing file is [`Error::Io`].
pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    log::info!("loading cities from {}", path.display());
    read_cities(BufReader::new(file))
}

fn parse_node(line: &str) -> Option<City> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let x = tokens.next()?.parse::<f64>().ok()?;
    let y = tokens.next()?.parse::<f64>().ok()?;
    Some(City::new(name, x, y))
}
