use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{GenError, MazeConfig, RandomSource};
use crate::{
    dims::Coord,
    gameboard::{CellWall, Grid},
};

/// Cells closest to each corner that never receive an opening.
pub const CORNER_MARGIN: usize = 2;

/// Opening in the outer wall of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exit {
    /// Side of the maze the opening is on.
    pub side: CellWall,
    /// Column for the top and bottom sides, row for the left and right ones.
    pub index: usize,
}

impl Exit {
    /// The boundary cell whose wall is opened.
    pub fn cell(&self, rows: usize, columns: usize) -> Coord {
        let index = self.index as i32;
        match self.side {
            CellWall::Top => Coord(0, index),
            CellWall::Bottom => Coord(rows as i32 - 1, index),
            CellWall::Left => Coord(index, 0),
            CellWall::Right => Coord(index, columns as i32 - 1),
        }
    }
}

/// Opens the entry and the exit on two different sides of a carved grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExitPlacer;

impl ExitPlacer {
    pub fn place(
        &self,
        grid: &mut Grid,
        rng: &mut dyn RandomSource,
    ) -> Result<(Exit, Exit), GenError> {
        MazeConfig::new(grid.rows(), grid.columns()).validate()?;

        let mut sides: SmallVec<[CellWall; 4]> = CellWall::ALL.into_iter().collect();
        let entry_side = sides.remove(rng.pick_index(sides.len()));
        let exit_side = sides[rng.pick_index(sides.len())];

        let entry = self.open(grid, entry_side, rng)?;
        let exit = self.open(grid, exit_side, rng)?;
        log::debug!("entry {:?}, exit {:?}", entry, exit);

        Ok((entry, exit))
    }

    fn open(
        &self,
        grid: &mut Grid,
        side: CellWall,
        rng: &mut dyn RandomSource,
    ) -> Result<Exit, GenError> {
        let along = if side.is_horizontal() {
            grid.columns()
        } else {
            grid.rows()
        };
        let index = rng.range_inclusive(CORNER_MARGIN, along - 1 - CORNER_MARGIN);

        let exit = Exit { side, index };
        if !grid.open_boundary_wall(exit.cell(grid.rows(), grid.columns()), side) {
            return Err(GenError::InternalInvariant("exit is not on the boundary"));
        }

        Ok(exit)
    }
}
