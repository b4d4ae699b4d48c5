mod ascii;
mod json;
mod svg;

use clap::ValueEnum;
use pmaze_core::Maze;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

/// Turns a finished maze into text. Renderers only ever read the maze.
pub trait Render {
    fn render(&self, maze: &Maze) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Format {
    #[default]
    Ascii,
    Svg,
    Json,
}

impl Format {
    pub fn renderer(self, cell_size: u32) -> Box<dyn Render> {
        match self {
            Format::Ascii => Box::new(AsciiRenderer),
            Format::Svg => Box::new(SvgRenderer { cell_size }),
            Format::Json => Box::new(JsonRenderer),
        }
    }
}
