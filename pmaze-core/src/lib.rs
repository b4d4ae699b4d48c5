pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;

pub use algorithms::{Exit, GenError, Generator, Maze, MazeConfig};
pub use dims::Coord;
pub use gameboard::{Cell, CellWall, Grid};
