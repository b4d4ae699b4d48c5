pub mod cell;
pub mod grid;
pub mod neighbors;
pub mod validate;

pub use cell::{Cell, CellWall};
pub use grid::Grid;
pub use neighbors::Directions;
pub use validate::BoundaryOpening;
