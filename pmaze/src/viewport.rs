use crossterm::terminal;
use pmaze_core::MazeConfig;

pub const DEFAULT_CELL_SIZE: u32 = 32;
pub const DEFAULT_CHAR_WIDTH: u32 = 8;
/// Used when there is no terminal to measure, e.g. when the output is piped.
pub const FALLBACK_WIDTH: u32 = 1024;

/// Maze dimensions for a viewport `width` pixels wide.
///
/// Narrow screens get a 10x6 maze, medium ones 12x12 and everything else 12x20.
pub fn fit_to_width(width: u32) -> MazeConfig {
    match width {
        0..=320 => MazeConfig::new(10, 6),
        321..=599 => MazeConfig::new(12, 12),
        _ => MazeConfig::new(12, 20),
    }
}

/// Canvas size in pixels, `(width, height)`.
pub fn canvas_size(config: &MazeConfig, cell_size: u32) -> (u32, u32) {
    (
        config.columns as u32 * cell_size,
        config.rows as u32 * cell_size,
    )
}

/// Width of the attached terminal in pixels, estimated from its column count.
pub fn terminal_width(char_width: u32) -> Option<u32> {
    match terminal::size() {
        Ok((columns, _)) => Some(columns as u32 * char_width),
        Err(err) => {
            log::debug!("cannot query terminal size: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(fit_to_width(0), MazeConfig::new(10, 6));
        assert_eq!(fit_to_width(320), MazeConfig::new(10, 6));
        assert_eq!(fit_to_width(321), MazeConfig::new(12, 12));
        assert_eq!(fit_to_width(599), MazeConfig::new(12, 12));
        assert_eq!(fit_to_width(600), MazeConfig::new(12, 20));
        assert_eq!(fit_to_width(FALLBACK_WIDTH), MazeConfig::new(12, 20));
    }

    #[test]
    fn fitted_sizes_are_valid() {
        for width in [100, 400, 1920] {
            assert!(fit_to_width(width).validate().is_ok());
        }
    }

    #[test]
    fn canvas() {
        assert_eq!(
            canvas_size(&MazeConfig::new(12, 20), DEFAULT_CELL_SIZE),
            (640, 384)
        );
    }
}
