//! Conway's Game of Life generation engine
//!
//! Pure functions over immutable, rectangular grids of dead/live cells:
//! dead-by-default lookups, Moore-neighbourhood counting and the B3/S23
//! transition rule, plus grid file I/O and terminal formatting.

pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, GameOfLifeRules, Grid, GridError};

use anyhow::Result;

/// Build the starting grid described by `settings`: the seed file if one is
/// configured, otherwise an empty grid of the configured size.
pub fn initial_grid(settings: &Settings) -> Result<Grid> {
    match &settings.input.seed_file {
        Some(path) => game_of_life::load_grid_from_file(path),
        None => Ok(Grid::build_empty(settings.grid.rows, settings.grid.cols)),
    }
}

/// Run the configured number of generations, returning every snapshot
/// including the initial one.
pub fn run_simulation(settings: &Settings) -> Result<Vec<Grid>> {
    let start = initial_grid(settings)?;
    Ok(GameOfLifeRules::evolution_path(start, settings.simulation.generations))
}
