//! Game of Life rules implementation (B3/S23)

use super::{Cell, Grid};
use rayon::prelude::*;
use tracing::debug;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply Game of Life rules to evolve the grid one generation forward.
    ///
    /// The input is only read; every neighbour count is taken against
    /// `current` and results go into a freshly allocated grid.
    pub fn evolve(current: &Grid) -> Grid {
        let (rows, cols) = (current.rows(), current.cols());

        let cells: Vec<Cell> = (0..rows * cols)
            .into_par_iter()
            .map(|idx| {
                let (row, col) = ((idx / cols) as isize, (idx % cols) as isize);
                let cell = current.get_cell(row, col);
                let neighbors = current.live_neighbor_count(row, col);
                Cell::from(Self::should_be_alive(cell, neighbors))
            })
            .collect();

        let next = Grid::from_parts(rows, cols, cells);
        debug!(rows, cols, living = next.living_count(), "evolved generation");
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Every generation from `grid` (inclusive) through `generations` steps.
    pub fn evolution_path(grid: Grid, generations: usize) -> Vec<Grid> {
        let mut path = Vec::with_capacity(generations + 1);
        path.push(grid);
        for i in 0..generations {
            let next = Self::evolve(&path[i]);
            path.push(next);
        }
        path
    }

    /// Any dead cell with exactly three live neighbours becomes live.
    pub fn should_dead_cell_revive(cell: Cell, live_neighbors: u8) -> bool {
        cell.is_dead() && live_neighbors == 3
    }

    /// Any live cell with two or three live neighbours survives.
    pub fn should_live_cell_survive(cell: Cell, live_neighbors: u8) -> bool {
        cell.is_alive() && matches!(live_neighbors, 2 | 3)
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(cell: Cell, live_neighbors: u8) -> bool {
        Self::should_dead_cell_revive(cell, live_neighbors)
            || Self::should_live_cell_survive(cell, live_neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_life_block() {
        let grid = Grid::from_bools(vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ])
        .unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = Grid::from_bools(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        let expected = Grid::from_bools(vec![
            vec![false, true, false],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();

        assert_eq!(evolved, expected);

        // Evolve again should return to original
        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(grid, evolved_twice);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(Cell::Live, 2));
        assert!(GameOfLifeRules::should_be_alive(Cell::Live, 3));
        assert!(GameOfLifeRules::should_be_alive(Cell::Dead, 3));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Live, 1));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Live, 4));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Dead, 2));
        assert!(!GameOfLifeRules::should_be_alive(Cell::Dead, 4));
    }

    #[test]
    fn test_rule_branches_are_exclusive() {
        for count in 0..=8u8 {
            for cell in [Cell::Dead, Cell::Live] {
                assert!(
                    !(GameOfLifeRules::should_dead_cell_revive(cell, count)
                        && GameOfLifeRules::should_live_cell_survive(cell, count))
                );
            }
        }
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = Grid::build_empty(3, 3).revive_cell(1, 1).unwrap();
        assert!(GameOfLifeRules::evolve(&grid).is_empty());
    }

    #[test]
    fn test_overpopulation() {
        // Plus sign: the centre has four live neighbours
        let grid = Grid::from_bools(vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ])
        .unwrap();
        let next = GameOfLifeRules::evolve(&grid);
        assert!(next.get_cell(1, 1).is_dead());
    }

    #[test]
    fn test_degenerate_grid_evolves_to_itself() {
        for (rows, cols) in [(0, 0), (0, 4), (4, 0)] {
            let grid = Grid::build_empty(rows, cols);
            assert_eq!(GameOfLifeRules::evolve(&grid), grid);
        }
    }

    #[test]
    fn test_evolution_path() {
        let blinker = Grid::from_bools(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();
        let path = GameOfLifeRules::evolution_path(blinker.clone(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], blinker);
        assert_eq!(path[2], blinker);
        assert_eq!(path[2], GameOfLifeRules::evolve_generations(blinker, 2));
    }
}
