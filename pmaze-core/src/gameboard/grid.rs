use serde::{Deserialize, Serialize};

use crate::{
    array::Array2D,
    dims::Coord,
    gameboard::cell::{Cell, CellWall},
};

/// Rectangular board of cells, the thing the carver works on and renderers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    /// Builds a grid with every wall standing and nothing visited.
    ///
    /// Both dimensions are expected to be at least 1, callers go through
    /// [`MazeConfig::validate`](crate::algorithms::MazeConfig::validate) first.
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            cells: Array2D::new(Cell::new(), rows, columns),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn get_cell(&self, pos: Coord) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub(crate) fn get_cell_mut(&mut self, pos: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter_pos()
    }

    /// Returns `true` when the wall on the given side of `pos` faces outside of the grid.
    pub fn is_boundary(&self, pos: Coord, wall: CellWall) -> bool {
        self.is_in_bounds(pos) && !self.is_in_bounds(pos + wall.to_coord())
    }

    /// Carves a passage, clearing the wall of `cell` and the matching wall of its neighbor.
    ///
    /// Returns `false` and leaves the grid untouched when the neighbor is not in the grid.
    pub(crate) fn remove_wall(&mut self, cell: Coord, wall: CellWall) -> bool {
        let neighbor = cell + wall.to_coord();
        if !self.is_in_bounds(cell) || !self.is_in_bounds(neighbor) {
            return false;
        }

        self.cells[cell].remove_wall(wall);
        self.cells[neighbor].remove_wall(wall.reverse_wall());
        true
    }

    /// Clears a wall facing the exterior. Only boundary walls can be opened this way.
    pub(crate) fn open_boundary_wall(&mut self, cell: Coord, wall: CellWall) -> bool {
        if !self.is_boundary(cell, wall) {
            return false;
        }

        self.cells[cell].remove_wall(wall);
        true
    }

    pub(crate) fn mark_visited(&mut self, pos: Coord) {
        if let Some(cell) = self.get_cell_mut(pos) {
            cell.visited = true;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    pub(crate) fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }
}
