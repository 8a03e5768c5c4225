use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::GridCoord;
use crate::plan::PathPlan;
use crate::search::Direction;

/// Step taken during traversal of a planned path.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PathStep {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    /// Move that led to this cell; `None` for the starting cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Structured representation of a planned path that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub start: GridCoord,
    pub goal: GridCoord,
    pub moves: usize,
    pub total_cost: f64,
    pub explored_cells: usize,
    pub waypoints: Vec<GridCoord>,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`PathPlan`] into a structured summary with per-step move
    /// labels.
    pub fn from_plan(plan: &PathPlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyPathPlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, coord)| PathStep {
                index,
                x: coord.x,
                y: coord.y,
                direction: index
                    .checked_sub(1)
                    .and_then(|previous| Direction::between(plan.steps[previous], *coord)),
            })
            .collect::<Vec<_>>();

        Ok(Self {
            start: plan.start,
            goal: plan.goal,
            moves: plan.move_count(),
            total_cost: plan.total_cost,
            explored_cells: plan.explored.len(),
            waypoints: plan.waypoints(),
            steps,
        })
    }

    /// Render the summary as plain text: a header, the exploration count and
    /// the turning points of the path.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path: {} -> {} ({} moves, cost {:.1})",
            self.start, self.goal, self.moves, self.total_cost
        );
        let _ = writeln!(buffer, "Explored {} cells", self.explored_cells);
        let joined = self
            .waypoints
            .iter()
            .map(|coord| coord.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(buffer, "Waypoints: {joined}");
        buffer
    }
}
