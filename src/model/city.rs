use std::collections::BTreeSet;
use std::fmt;

/// The four link slots a city can carry, in map-file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in the order the map format declares them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The reciprocal direction: a link `A north=B` implies `B south=A`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        })
    }
}

/// A graph node: a named city with up to four directional links and the set
/// of aliens currently standing in it.
///
/// Links are city ids resolved through the owning `Board`. They are
/// bidirectional by convention only — nothing checks reciprocity when a
/// link is set; `Board::destroy_city` is where both ends of an edge get
/// cleaned up together.
#[derive(Debug, Clone)]
pub struct City {
    pub id: u64,
    pub name: String,
    links: [Option<u64>; 4],
    pub occupants: BTreeSet<u64>,
}

impl City {
    pub(crate) fn new(id: u64, name: String, links: [Option<u64>; 4]) -> Self {
        Self {
            id,
            name,
            links,
            occupants: BTreeSet::new(),
        }
    }

    /// The city on the other end of `dir`, if the link still exists.
    pub fn link(&self, dir: Direction) -> Option<u64> {
        self.links[dir.index()]
    }

    /// Point a link slot at another city (or clear it). Reciprocity is the
    /// caller's business.
    pub fn set_link(&mut self, dir: Direction, target: Option<u64>) {
        self.links[dir.index()] = target;
    }

    /// Directions that currently lead somewhere, in north/south/east/west order.
    pub fn linked_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.links[dir.index()].is_some())
            .collect()
    }
}
