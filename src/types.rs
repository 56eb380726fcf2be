//! # Gridworld Types Module
//!
//! This module defines the core data types used throughout the gridworld
//! scenario generator. These types represent the fundamental building blocks
//! of a generated rescue scenario.
//!
//! ## Key Components
//!
//! - **CellType**: Represents the category occupying a grid cell
//! - **Position**: A (row, column) coordinate on the grid
//! - **GridError**: All the ways a run can fail
//! - **DEFAULT_GRID_SIZE / DEFAULT_NUM_OBSTACLES**: Default scenario shape

use thiserror::Error;

/// NOTE - Enum for all possible cell categories on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellType {
    Empty,    // NOTE - Free traversable cell
    Robot,    // NOTE - Starting position of the robot
    Goal,     // NOTE - Rescue target
    Obstacle, // NOTE - Impassable cell
}

impl CellType {
    /// Integer encoding used by the grid matrix (0 / 1 / 2 / -1).
    pub fn value(self) -> i8 {
        match self {
            CellType::Empty => 0,
            CellType::Robot => 1,
            CellType::Goal => 2,
            CellType::Obstacle => -1,
        }
    }
}

/// NOTE - Grid coordinate as (row, column), both in [0, grid_size)
pub type Position = (usize, usize);

/// NOTE - Default side length of the square grid
pub const DEFAULT_GRID_SIZE: usize = 5;

/// NOTE - Default number of obstacles placed on the grid
pub const DEFAULT_NUM_OBSTACLES: usize = 2;

/// Errors raised while generating, saving or rendering a scenario.
///
/// Every variant is terminal: the run aborts on the first error, no retry.
#[derive(Debug, Error)]
pub enum GridError {
    /// The grid must hold at least a robot and a goal.
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),

    /// Requested obstacle count can never fit alongside the robot and goal.
    #[error("cannot place {requested} obstacles on a {grid_size}x{grid_size} grid (max {max})")]
    TooManyObstacles {
        requested: usize,
        grid_size: usize,
        max: usize,
    },

    /// A saved coordinates file did not match the expected layout.
    #[error("malformed coordinates file: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
