use serde::{Deserialize, Serialize};

use crate::dims::Coord;

/// One side of a cell, doubling as the direction towards the neighbor behind it.
///
/// Discriminants index [`Cell`] walls and the [`WALL_TABLE`], so the declaration order is also
/// the order in which neighbors are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellWall {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
}

/// Displacement towards the neighbor and the wall the neighbor shares with us.
#[derive(Debug, Clone, Copy)]
pub struct WallEntry {
    pub offset: Coord,
    pub reverse: CellWall,
}

pub const WALL_TABLE: [WallEntry; 4] = [
    WallEntry {
        offset: Coord(-1, 0),
        reverse: CellWall::Bottom,
    },
    WallEntry {
        offset: Coord(1, 0),
        reverse: CellWall::Top,
    },
    WallEntry {
        offset: Coord(0, -1),
        reverse: CellWall::Right,
    },
    WallEntry {
        offset: Coord(0, 1),
        reverse: CellWall::Left,
    },
];

impl CellWall {
    pub const ALL: [CellWall; 4] = [
        CellWall::Top,
        CellWall::Bottom,
        CellWall::Left,
        CellWall::Right,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn to_coord(self) -> Coord {
        WALL_TABLE[self.index()].offset
    }

    pub fn reverse_wall(self) -> CellWall {
        WALL_TABLE[self.index()].reverse
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, CellWall::Top | CellWall::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) visited: bool,
    /// Wall flags indexed by [`CellWall`], `true` while the wall stands.
    pub(crate) walls: [bool; 4],
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            visited: false,
            walls: [true; 4],
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        self.walls[wall.index()] = false;
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        self.walls[wall.index()]
    }

    pub fn open_walls(&self) -> impl Iterator<Item = CellWall> + '_ {
        CellWall::ALL.into_iter().filter(|&w| !self.get_wall(w))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
