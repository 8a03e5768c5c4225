//! Path planning over an occupancy grid.
//!
//! This module provides:
//! - [`PathPlan`] - Planned path result with its exploration trace
//! - [`plan_path`] - Main entry point for computing paths
//!
//! # Example
//!
//! ```ignore
//! use gridpath_lib::{plan_path, GridCoord, OccupancyGrid, DEFAULT_THRESHOLD};
//!
//! let grid = OccupancyGrid::from_image(&map, DEFAULT_THRESHOLD)?;
//! let plan = plan_path(&grid, GridCoord::new(10, 10), GridCoord::new(60, 60))?;
//! println!("Path: {} moves", plan.move_count());
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{GridCoord, OccupancyGrid};
use crate::search::{search, Direction};

/// Planned path returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct PathPlan {
    pub start: GridCoord,
    pub goal: GridCoord,
    /// Path coordinates in start→goal order, endpoints included.
    pub steps: Vec<GridCoord>,
    /// Sum of the step costs along `steps`.
    pub total_cost: f64,
    /// Every coordinate finalized by the search, in pop order.
    pub explored: Vec<GridCoord>,
}

impl PathPlan {
    /// Number of moves in the path.
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Path coordinates where the heading changes, endpoints included.
    ///
    /// Collapses straight runs so long paths can be displayed compactly.
    pub fn waypoints(&self) -> Vec<GridCoord> {
        if self.steps.len() < 3 {
            return self.steps.clone();
        }

        let mut waypoints = vec![self.steps[0]];
        for window in self.steps.windows(3) {
            let incoming = Direction::between(window[0], window[1]);
            let outgoing = Direction::between(window[1], window[2]);
            if incoming != outgoing {
                waypoints.push(window[1]);
            }
        }
        if let Some(&last) = self.steps.last() {
            waypoints.push(last);
        }
        waypoints
    }
}

/// Compute the minimum-cost path between two grid cells.
///
/// This is the main entry point for planning. It:
/// 1. Validates both endpoints (bounds and blocked-cell checks)
/// 2. Runs the uniform-cost search
/// 3. Reconstructs the parent chain into a start→goal path
/// 4. Reports an exhausted frontier as [`Error::GoalUnreachable`]
pub fn plan_path(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Result<PathPlan> {
    let outcome = search(grid, start, goal)?;

    let (steps, total_cost) = match (outcome.path(), outcome.total_cost()) {
        (Some(steps), Some(total_cost)) => (steps, total_cost),
        _ => return Err(Error::GoalUnreachable { start, goal }),
    };

    tracing::debug!(
        "planned {} moves (cost {:.1}) after exploring {} cells",
        steps.len().saturating_sub(1),
        total_cost,
        outcome.explored.len()
    );

    Ok(PathPlan {
        start,
        goal,
        steps,
        total_cost,
        explored: outcome.explored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with_steps(steps: Vec<GridCoord>) -> PathPlan {
        PathPlan {
            start: steps[0],
            goal: steps[steps.len() - 1],
            steps,
            total_cost: 0.0,
            explored: Vec::new(),
        }
    }

    #[test]
    fn path_plan_move_count() {
        let plan = plan_with_steps(vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 0),
            GridCoord::new(2, 0),
        ]);
        assert_eq!(plan.move_count(), 2);
    }

    #[test]
    fn path_plan_trivial_move_count() {
        let plan = plan_with_steps(vec![GridCoord::new(1, 1)]);
        assert_eq!(plan.move_count(), 0);
    }

    #[test]
    fn waypoints_collapse_straight_runs() {
        let plan = plan_with_steps(vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 0),
            GridCoord::new(2, 0),
            GridCoord::new(3, 0),
        ]);
        assert_eq!(
            plan.waypoints(),
            vec![GridCoord::new(0, 0), GridCoord::new(3, 0)]
        );
    }

    #[test]
    fn waypoints_keep_heading_changes() {
        let plan = plan_with_steps(vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 1),
            GridCoord::new(2, 2),
            GridCoord::new(3, 2),
            GridCoord::new(4, 2),
        ]);
        assert_eq!(
            plan.waypoints(),
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(2, 2),
                GridCoord::new(4, 2),
            ]
        );
    }

    #[test]
    fn waypoints_of_short_paths_are_the_path() {
        let plan = plan_with_steps(vec![GridCoord::new(2, 2)]);
        assert_eq!(plan.waypoints(), vec![GridCoord::new(2, 2)]);
    }
}
