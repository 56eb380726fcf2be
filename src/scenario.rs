use crate::types::{CellType, GridError, Position};
use rand::Rng;
use std::collections::HashSet;

/// A generated rescue scenario: one robot, one goal, a set of obstacles.
///
/// Immutable after generation. The persister and the renderers only take
/// shared references to it.
#[derive(Debug)]
pub struct Scenario {
    pub grid_size: usize,
    pub robot: Position,
    pub goal: Position,
    pub obstacles: HashSet<Position>,
}

impl Scenario {
    /// Sample a scenario on a `grid_size` x `grid_size` grid.
    ///
    /// The robot is drawn uniformly, the goal is redrawn until it differs
    /// from the robot, and obstacles are accepted by rejection sampling
    /// until the set holds `num_obstacles` distinct free cells.
    ///
    /// Capacity is checked up front so the sampling loop always terminates:
    /// a grid of N² cells can hold at most N² - 2 obstacles.
    pub fn generate(
        grid_size: usize,
        num_obstacles: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GridError> {
        if grid_size < 2 {
            return Err(GridError::GridTooSmall(grid_size));
        }
        let max = grid_size * grid_size - 2;
        if num_obstacles > max {
            return Err(GridError::TooManyObstacles {
                requested: num_obstacles,
                grid_size,
                max,
            });
        }

        let robot = random_position(grid_size, rng);

        let mut goal = robot;
        while goal == robot {
            goal = random_position(grid_size, rng);
        }

        let mut obstacles = HashSet::with_capacity(num_obstacles);
        while obstacles.len() < num_obstacles {
            let pos = random_position(grid_size, rng);
            if pos != robot && pos != goal {
                obstacles.insert(pos);
            }
        }

        Ok(Self {
            grid_size,
            robot,
            goal,
            obstacles,
        })
    }

    /// Category of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> CellType {
        let pos = (row, col);
        if pos == self.robot {
            CellType::Robot
        } else if pos == self.goal {
            CellType::Goal
        } else if self.obstacles.contains(&pos) {
            CellType::Obstacle
        } else {
            CellType::Empty
        }
    }

    /// Materialize the full N x N matrix of cell categories.
    pub fn grid(&self) -> Vec<Vec<CellType>> {
        let mut tiles = vec![vec![CellType::Empty; self.grid_size]; self.grid_size];
        tiles[self.robot.0][self.robot.1] = CellType::Robot;
        tiles[self.goal.0][self.goal.1] = CellType::Goal;
        for &(row, col) in &self.obstacles {
            tiles[row][col] = CellType::Obstacle;
        }
        tiles
    }
}

fn random_position(grid_size: usize, rng: &mut impl Rng) -> Position {
    (rng.gen_range(0..grid_size), rng.gen_range(0..grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn in_bounds(pos: Position, grid_size: usize) -> bool {
        pos.0 < grid_size && pos.1 < grid_size
    }

    #[test]
    fn generated_positions_are_disjoint_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for &(grid_size, num_obstacles) in &[(5, 2), (3, 0), (4, 5), (10, 30)] {
            let scenario = Scenario::generate(grid_size, num_obstacles, &mut rng).unwrap();

            assert_ne!(scenario.robot, scenario.goal);
            assert!(in_bounds(scenario.robot, grid_size));
            assert!(in_bounds(scenario.goal, grid_size));
            assert_eq!(scenario.obstacles.len(), num_obstacles);
            for &pos in &scenario.obstacles {
                assert!(in_bounds(pos, grid_size));
                assert_ne!(pos, scenario.robot);
                assert_ne!(pos, scenario.goal);
            }
        }
    }

    #[test]
    fn default_shape_grid_has_expected_cell_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let scenario = Scenario::generate(5, 2, &mut rng).unwrap();
        let grid = scenario.grid();

        let values: Vec<i8> = grid
            .iter()
            .flat_map(|row| row.iter().map(|cell| cell.value()))
            .collect();
        assert_eq!(values.len(), 25);
        assert_eq!(values.iter().filter(|&&v| v == 1).count(), 1);
        assert_eq!(values.iter().filter(|&&v| v == 2).count(), 1);
        assert_eq!(values.iter().filter(|&&v| v == -1).count(), 2);
        assert_eq!(values.iter().filter(|&&v| v == 0).count(), 21);
    }

    #[test]
    fn zero_obstacles_leaves_the_set_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let scenario = Scenario::generate(5, 0, &mut rng).unwrap();
        assert!(scenario.obstacles.is_empty());
    }

    #[test]
    fn saturated_grid_fills_every_free_cell() {
        // 3x3 grid with 7 obstacles: only the robot and goal cells stay free.
        let mut rng = StdRng::seed_from_u64(99);
        let scenario = Scenario::generate(3, 7, &mut rng).unwrap();

        assert_eq!(scenario.obstacles.len(), 7);
        for row in 0..3 {
            for col in 0..3 {
                let pos = (row, col);
                if pos != scenario.robot && pos != scenario.goal {
                    assert!(scenario.obstacles.contains(&pos));
                }
            }
        }
    }

    #[test]
    fn too_many_obstacles_is_rejected_up_front() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Scenario::generate(3, 8, &mut rng).unwrap_err();
        match err {
            GridError::TooManyObstacles {
                requested,
                grid_size,
                max,
            } => {
                assert_eq!(requested, 8);
                assert_eq!(grid_size, 3);
                assert_eq!(max, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Scenario::generate(1, 0, &mut rng),
            Err(GridError::GridTooSmall(1))
        ));
        assert!(matches!(
            Scenario::generate(0, 0, &mut rng),
            Err(GridError::GridTooSmall(0))
        ));
    }

    #[test]
    fn same_seed_reproduces_the_same_scenario() {
        let mut first = StdRng::seed_from_u64(1234);
        let mut second = StdRng::seed_from_u64(1234);
        let a = Scenario::generate(6, 4, &mut first).unwrap();
        let b = Scenario::generate(6, 4, &mut second).unwrap();

        assert_eq!(a.robot, b.robot);
        assert_eq!(a.goal, b.goal);
        assert_eq!(a.obstacles, b.obstacles);
    }
}
