//! The map text format: one city per line with optional directional links.
//!
//! ```text
//! <name> north=<other> south=<other> east=<other> west=<other>
//! ```
//!
//! Every direction token is optional but they always appear in that order.
//! City names may contain spaces and even literal `key=` text, so the split
//! is resolved lazily: the name is the shortest prefix that still lets the
//! rest of the line parse as direction groups, and each link value is the
//! shortest text that lets the groups after it parse. Anything that cannot
//! start a later group is swallowed into the preceding value.
//!
//! Link names resolve against every city declared in the file (forward
//! references allowed); names that never resolve become absent links, not
//! errors. No geographic validation is done — maps are trusted to link
//! cities reciprocally.

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::InvasionError;
use crate::model::{Board, Direction};

fn token(dir: Direction) -> &'static str {
    match dir {
        Direction::North => " north=",
        Direction::South => " south=",
        Direction::East => " east=",
        Direction::West => " west=",
    }
}

/// One parsed line before link names are resolved to city ids.
#[derive(Debug, PartialEq, Eq)]
struct RawCity {
    name: String,
    links: [Option<String>; 4],
}

/// Every `(byte offset, direction)` at which a direction token occurs in
/// `text`, in line order. Offset zero is excluded: a token there would
/// leave an empty name or link value, which the format does not allow.
fn token_positions(text: &str) -> Vec<(usize, Direction)> {
    let mut positions = Vec::new();
    for dir in Direction::ALL {
        let mut from = 0;
        while let Some(at) = text[from..].find(token(dir)) {
            let pos = from + at;
            if pos > 0 {
                positions.push((pos, dir));
            }
            from = pos + 1;
        }
    }
    positions.sort_unstable();
    positions
}

/// Try to consume `tail` entirely as direction groups for directions
/// `from..`, filling `links` with the shortest values that work.
fn parse_groups(tail: &str, from: usize, links: &mut [Option<String>; 4]) -> bool {
    if tail.is_empty() {
        return true;
    }
    let Some(dir) = Direction::ALL.get(from).copied() else {
        return false;
    };

    if let Some(rest) = tail.strip_prefix(token(dir)) {
        // Group present: its value runs to the first spot where the
        // remaining (strictly later) groups can take over, or to the end
        // of the line.
        for (pos, next) in token_positions(rest) {
            if next > dir && parse_groups(&rest[pos..], next.index(), links) {
                links[dir.index()] = Some(rest[..pos].to_string());
                return true;
            }
        }
        if !rest.is_empty() {
            links[dir.index()] = Some(rest.to_string());
            return true;
        }
        // A bare ` dir=` with nothing behind it is not a group; fall
        // through and treat the token as literal name text.
    }

    parse_groups(tail, from + 1, links)
}

/// Split one line into a city name and its link values.
fn parse_line(line: &str) -> RawCity {
    for (pos, dir) in token_positions(line) {
        let mut links: [Option<String>; 4] = [const { None }; 4];
        if parse_groups(&line[pos..], dir.index(), &mut links) {
            return RawCity {
                name: line[..pos].to_string(),
                links,
            };
        }
    }
    RawCity {
        name: line.to_string(),
        links: [const { None }; 4],
    }
}

/// Parse map text into a fully linked board. Cities are created in file
/// order; link names are resolved in a second pass so forward references
/// work. For duplicate names, the later declaration wins as a link target.
pub fn parse_board(text: &str) -> Board {
    let raw: Vec<RawCity> = text.lines().filter(|l| !l.is_empty()).map(parse_line).collect();

    let mut board = Board::new();
    let ids: Vec<u64> = raw
        .iter()
        .map(|city| board.add_city(city.name.clone(), [None; 4]))
        .collect();

    let by_name: HashMap<&str, u64> = raw
        .iter()
        .zip(&ids)
        .map(|(city, id)| (city.name.as_str(), *id))
        .collect();

    for (city, id) in raw.iter().zip(&ids) {
        for dir in Direction::ALL {
            let target = city.links[dir.index()]
                .as_deref()
                .and_then(|name| by_name.get(name))
                .copied();
            board.city_mut(*id).set_link(dir, target);
        }
    }

    board
}

/// Read and parse a map file.
pub fn load_board(path: &Path) -> Result<Board, InvasionError> {
    Ok(parse_board(&fs::read_to_string(path)?))
}

/// Write the living cities, one per line, with only the links that still
/// exist. Destroyed cities and pruned links never appear in the output.
pub fn write_board<W: Write>(writer: &mut W, board: &Board) -> io::Result<()> {
    for id in &board.living_cities {
        let city = board.city(*id);
        write!(writer, "{}", city.name)?;
        for dir in Direction::ALL {
            if let Some(target) = city.link(dir) {
                write!(writer, " {dir}={}", board.city(target).name)?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the surviving cities to `-` (stdout) or to the named file.
pub fn save_board(location: &str, board: &Board) -> Result<(), InvasionError> {
    if location == "-" {
        let stdout = io::stdout();
        write_board(&mut stdout.lock(), board)?;
    } else {
        let mut writer = BufWriter::new(fs::File::create(location)?);
        write_board(&mut writer, board)?;
        writer.flush()?;
    }
    Ok(())
}
