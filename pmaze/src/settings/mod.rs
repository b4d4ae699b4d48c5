use std::{fs, io, path::Path, path::PathBuf};

use pmaze_core::MazeConfig;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::{constants, error::AppError, renderer::Format, viewport};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

fn default_cell_size() -> u32 {
    viewport::DEFAULT_CELL_SIZE
}

fn default_char_width() -> u32 {
    viewport::DEFAULT_CHAR_WIDTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_char_width")]
    pub char_width: u32,
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: None,
            columns: None,
            cell_size: default_cell_size(),
            char_width: default_char_width(),
            format: Format::default(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        constants::base_path().map(|dir| dir.join("settings.ron"))
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> Result<Self, AppError> {
        Ok(Self::options().from_str(text)?)
    }

    pub fn builtin() -> Result<Self, AppError> {
        Self::from_ron(DEFAULT_SETTINGS)
    }

    /// Loads settings from `path`, falling back to the built-in defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                log::debug!("loading settings from {:?}", path);
                Self::from_ron(&text)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {:?}, using defaults", path);
                Self::builtin()
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Picks the maze dimensions.
    ///
    /// Explicit values win over the settings file, anything still missing comes from the
    /// viewport width.
    pub fn maze_config(
        &self,
        rows: Option<usize>,
        columns: Option<usize>,
        viewport_width: u32,
    ) -> MazeConfig {
        let fitted = viewport::fit_to_width(viewport_width);
        MazeConfig::new(
            rows.or(self.rows).unwrap_or(fitted.rows),
            columns.or(self.columns).unwrap_or(fitted.columns),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_settings_parse() {
        assert_eq!(Settings::builtin().unwrap(), Settings::default());
    }

    #[test]
    fn implicit_some() {
        let settings = Settings::from_ron("(rows: 9, seed: 3, format: Svg)").unwrap();
        assert_eq!(settings.rows, Some(9));
        assert_eq!(settings.columns, None);
        assert_eq!(settings.seed, Some(3));
        assert_eq!(settings.format, Format::Svg);
        assert_eq!(settings.cell_size, 32);
    }

    #[test]
    fn invalid_settings_are_an_error() {
        assert!(matches!(
            Settings::from_ron("(rows: \"many\")"),
            Err(AppError::Settings(_))
        ));
    }

    #[test]
    fn missing_file_uses_builtin() {
        let path = std::env::temp_dir().join("pmaze-settings-that-does-not-exist.ron");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn dimension_precedence() {
        let settings = Settings {
            rows: Some(7),
            ..Default::default()
        };
        assert_eq!(settings.maze_config(None, None, 1024), MazeConfig::new(7, 20));
        assert_eq!(settings.maze_config(Some(30), None, 500), MazeConfig::new(30, 12));
        assert_eq!(settings.maze_config(None, Some(8), 300), MazeConfig::new(7, 8));
        assert_eq!(
            Settings::default().maze_config(None, None, 300),
            MazeConfig::new(10, 6)
        );
    }
}
