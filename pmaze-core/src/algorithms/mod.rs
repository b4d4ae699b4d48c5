pub mod depth_first_search;
pub mod exits;
pub mod random;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{dims::Coord, gameboard::Grid};
pub use depth_first_search::DepthFirstSearch;
pub use exits::{Exit, ExitPlacer, CORNER_MARGIN};
pub use random::{Random, RandomSource, ScriptedRandom};

/// Smallest number of rows and columns that still leaves room for an exit away from corners.
pub const MIN_SIZE: usize = 2 * CORNER_MARGIN + 1;

/// Largest number of cells a maze may have. Positions are `i32`, so neither axis nor the
/// row-major index may go past `i32::MAX`.
pub const MAX_CELLS: usize = i32::MAX as usize;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(
        "maze must be at least {min}x{min} and at most {max} cells, got {rows}x{columns}",
        min = MIN_SIZE,
        max = MAX_CELLS
    )]
    Configuration { rows: usize, columns: usize },
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

/// Dimensions of the maze to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
}

impl MazeConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn validate(&self) -> Result<(), GenError> {
        let cells = self.rows.checked_mul(self.columns);
        if self.rows < MIN_SIZE
            || self.columns < MIN_SIZE
            || cells.map_or(true, |cells| cells > MAX_CELLS)
        {
            return Err(GenError::Configuration {
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(())
    }
}

/// Carves passages into a closed grid.
pub trait MazeCarver: fmt::Debug {
    /// Turns a grid with all walls standing into a spanning tree of passages, returning the cell
    /// the carving started from.
    fn carve(&self, grid: &mut Grid, rng: &mut dyn RandomSource) -> Result<Coord, GenError>;
}

/// Finished maze, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    pub grid: Grid,
    pub entry: Exit,
    pub exit: Exit,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn entry_cell(&self) -> Coord {
        self.entry.cell(self.rows(), self.columns())
    }

    pub fn exit_cell(&self) -> Coord {
        self.exit.cell(self.rows(), self.columns())
    }
}

/// Runs the whole pipeline: validation, grid construction, carving and exit placement.
#[derive(Debug)]
pub struct Generator {
    carver: Box<dyn MazeCarver>,
    exits: ExitPlacer,
}

impl Generator {
    pub fn new(carver: Box<dyn MazeCarver>) -> Self {
        Self {
            carver,
            exits: ExitPlacer,
        }
    }

    pub fn generate(
        &self,
        config: &MazeConfig,
        rng: &mut dyn RandomSource,
    ) -> Result<Maze, GenError> {
        config.validate()?;

        let mut grid = Grid::new(config.rows, config.columns);
        self.carver.carve(&mut grid, rng)?;
        let (entry, exit) = self.exits.place(&mut grid, rng)?;
        grid.reset_visited();

        Ok(Maze { grid, entry, exit })
    }

    /// Generates from a seed, or from a fresh random one when `seed` is `None`.
    ///
    /// The seed used is returned alongside the maze, so the run can be reproduced.
    pub fn generate_seeded(
        &self,
        config: &MazeConfig,
        seed: Option<u64>,
    ) -> Result<(Maze, u64), GenError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);
        log::debug!("generating {}x{} maze, seed {}", config.rows, config.columns, seed);

        Ok((self.generate(config, &mut rng)?, seed))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Box::new(DepthFirstSearch))
    }
}
