//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{io::grid_to_string, Grid};
use anyhow::{Context, Result};

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Render a grid in the requested format.
    pub fn format(grid: &Grid, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Compact => Self::format_grid_compact(grid),
            OutputFormat::Coords => Self::format_grid_with_coords(grid),
            OutputFormat::Debug => grid.debug_dump(),
            OutputFormat::Text => grid_to_string(grid),
            OutputFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(grid).context("Failed to serialize grid")?;
                json.push('\n');
                json
            }
        })
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in grid.iter_rows() {
            output.extend(row.iter().map(|cell| if cell.is_alive() { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.cols() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line population summary for a generation.
    pub fn format_summary(generation: usize, grid: &Grid) -> String {
        format!(
            "Generation {} ({}x{}, living: {})",
            generation,
            grid.rows(),
            grid.cols(),
            grid.living_count()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_bools(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = sample();

        assert_eq!(GridFormatter::format_grid_compact(&grid), "█·█\n·█·\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··\n"));
    }

    #[test]
    fn test_format_dispatch() {
        let grid = sample();
        assert_eq!(GridFormatter::format(&grid, OutputFormat::Text).unwrap(), "101\n010\n");
        assert_eq!(
            GridFormatter::format(&grid, OutputFormat::Debug).unwrap(),
            "------\n[1,0,1]\n[0,1,0]\n"
        );

        let json = GridFormatter::format(&grid, OutputFormat::Json).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            GridFormatter::format_summary(2, &sample()),
            "Generation 2 (2x3, living: 3)"
        );
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
        assert!(ColorOutput::error("boom").contains("boom"));
        assert!(ColorOutput::warning("careful").contains("careful"));
    }
}
