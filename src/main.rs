//! Command-line driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gol::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, save_grid_to_file},
    utils::{ColorOutput, GridFormatter},
    Grid,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gol")]
#[command(about = "Conway's Game of Life generation engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty grid
    New {
        /// Number of rows
        #[arg(short, long, default_value_t = 50)]
        rows: usize,

        /// Number of columns
        #[arg(short, long, default_value_t = 50)]
        cols: usize,

        /// Write the grid here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Advance a grid by one or more generations
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed grid file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Grid rows when no seed file is given (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns when no seed file is given (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the final generation to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every intermediate generation
        #[arg(long)]
        show_all: bool,
    },

    /// Flip a single cell between dead and live
    Toggle {
        /// Grid file to edit
        #[arg(short, long)]
        input: PathBuf,

        /// Row of the cell
        #[arg(short, long, allow_negative_numbers = true)]
        row: isize,

        /// Column of the cell
        #[arg(short, long, allow_negative_numbers = true)]
        col: isize,

        /// Destination file (defaults to editing the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a grid file
    Show {
        /// Grid file to print
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "coords")]
        format: OutputFormat,
    },

    /// Create example configuration and grid files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", error_report(&e));
        std::process::exit(1);
    }
}

/// Coloured one-line report of an error and its context chain.
fn error_report(error: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {:#}", error))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New { rows, cols, output } => new_command(rows, cols, output),
        Commands::Step {
            config,
            input,
            generations,
            rows,
            cols,
            format,
            output,
            show_all,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                generations,
                seed_file: input,
                format,
            };
            step_command(&config, &overrides, output, show_all)
        }
        Commands::Toggle {
            input,
            row,
            col,
            output,
        } => toggle_command(&input, row, col, output),
        Commands::Show { input, format } => show_command(&input, format),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn new_command(rows: usize, cols: usize, output: Option<PathBuf>) -> Result<()> {
    // A zero size counts as 1, same as for `step`
    let (rows, cols) = (rows.max(1), cols.max(1));
    let grid = Grid::build_empty(rows, cols);

    match output {
        Some(path) => {
            save_grid_to_file(&grid, &path)?;
            println!(
                "{}",
                ColorOutput::success(&format!("Created {}x{} grid at {}", rows, cols, path.display()))
            );
        }
        None => print!("{}", GridFormatter::format(&grid, OutputFormat::Text)?),
    }

    Ok(())
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn step_command(
    config_path: &Path,
    overrides: &CliOverrides,
    output: Option<PathBuf>,
    show_all: bool,
) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let path = gol::run_simulation(&settings).context("Failed to run simulation")?;
    info!(generations = settings.simulation.generations, "simulation finished");

    print!("{}", render_generations(&path, settings.output.format, show_all)?);

    if let Some(out) = output {
        if let Some(last) = path.last() {
            save_grid_to_file(last, &out)?;
            println!("{}", ColorOutput::success(&format!("Saved final generation to {}", out.display())));
        }
    }

    Ok(())
}

/// Render the final generation, or every generation with `show_all`.
///
/// JSON output is a single grid, or an array of grids with `show_all`.
fn render_generations(path: &[Grid], format: OutputFormat, show_all: bool) -> Result<String> {
    let shown = if show_all { 0 } else { path.len().saturating_sub(1) };

    if format == OutputFormat::Json {
        let mut json = match path.last() {
            Some(last) if !show_all => serde_json::to_string_pretty(last),
            _ => serde_json::to_string_pretty(path),
        }
        .context("Failed to serialize generations")?;
        json.push('\n');
        return Ok(json);
    }

    let mut output = String::new();
    for (generation, grid) in path.iter().enumerate().skip(shown) {
        if format != OutputFormat::Text {
            output.push_str(&ColorOutput::info(&GridFormatter::format_summary(generation, grid)));
            output.push('\n');
        }
        output.push_str(&GridFormatter::format(grid, format)?);
    }
    Ok(output)
}

fn toggle_command(input: &Path, row: isize, col: isize, output: Option<PathBuf>) -> Result<()> {
    let grid = load_grid_from_file(input)?;
    let toggled = grid
        .toggle_cell(row, col)
        .with_context(|| format!("Cannot toggle cell in {}", input.display()))?;

    let destination = output.unwrap_or_else(|| input.to_path_buf());
    save_grid_to_file(&toggled, &destination)?;

    let state = if toggled.get_cell(row, col).is_alive() { "live" } else { "dead" };
    println!(
        "{}",
        ColorOutput::success(&format!("Cell ({}, {}) is now {}", row, col, state))
    );
    Ok(())
}

fn show_command(input: &Path, format: OutputFormat) -> Result<()> {
    let grid = load_grid_from_file(input)?;
    print!("{}", GridFormatter::format(&grid, format)?);
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    let grids_dir = directory.join("grids");

    for dir in [&config_dir, &grids_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&grids_dir).context("Failed to create example grids")?;
    println!("Created example grids in: {}", grids_dir.display());

    println!("{}", ColorOutput::success("Setup complete!"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "gol",
            "step",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--format",
            "debug",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["gol", "toggle", "-i", "g.txt", "-r", "-1", "-c", "0"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("grids/glider.txt").exists());
    }

    #[test]
    fn test_new_zero_size_is_readable() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("g.txt");

        new_command(0, 3, Some(path.clone())).unwrap();
        let grid = load_grid_from_file(&path).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (1, 3));
        assert!(grid.is_empty());

        show_command(&path, OutputFormat::Coords).unwrap();
    }

    #[test]
    fn test_render_show_all() {
        let blinker = gol::game_of_life::io::parse_grid_from_string("000\n111\n000\n").unwrap();
        let path = gol::GameOfLifeRules::evolution_path(blinker, 2);

        let last_only = render_generations(&path, OutputFormat::Text, false).unwrap();
        assert_eq!(last_only, "000\n111\n000\n");

        let all = render_generations(&path, OutputFormat::Text, true).unwrap();
        assert_eq!(all, "000\n111\n000\n010\n010\n010\n000\n111\n000\n");

        let debug = render_generations(&path, OutputFormat::Debug, true).unwrap();
        for generation in 0..3 {
            assert!(debug.contains(&format!("Generation {} (3x3, living: 3)", generation)));
        }
    }

    #[test]
    fn test_render_json() {
        let grid = Grid::build_empty(2, 2).revive_cell(0, 1).unwrap();
        let path = vec![grid.clone(), grid.next_gen()];

        let single = render_generations(&path, OutputFormat::Json, false).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&single).unwrap(), path[1]);

        let all = render_generations(&path, OutputFormat::Json, true).unwrap();
        assert_eq!(serde_json::from_str::<Vec<Grid>>(&all).unwrap(), path);
    }

    #[test]
    fn test_error_report_includes_context() {
        let err = anyhow::anyhow!("Grid file is empty").context("Failed to parse grid");
        let report = error_report(&err);
        assert!(report.contains("Error: Failed to parse grid: Grid file is empty"));
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(&temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_toggle_command() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("grid.txt");
        save_grid_to_file(&Grid::build_empty(2, 2), &path).unwrap();

        toggle_command(&path, 1, 0, None).unwrap();
        assert!(load_grid_from_file(&path).unwrap().get_cell(1, 0).is_alive());

        assert!(toggle_command(&path, 5, 0, None).is_err());
    }

    #[test]
    fn test_step_command_writes_output() {
        let temp_dir = tempdir().unwrap();
        let seed = temp_dir.path().join("blinker.txt");
        std::fs::write(&seed, "000\n111\n000\n").unwrap();
        let out = temp_dir.path().join("out.txt");

        let overrides = CliOverrides {
            seed_file: Some(seed),
            generations: Some(1),
            format: Some(OutputFormat::Text),
            ..Default::default()
        };
        step_command(&temp_dir.path().join("missing.yaml"), &overrides, Some(out.clone()), false)
            .unwrap();

        assert_eq!(std::fs::read_to_string(out).unwrap(), "010\n010\n010\n");
    }
}
