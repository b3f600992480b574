//! Configuration management for the Game of Life engine

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
