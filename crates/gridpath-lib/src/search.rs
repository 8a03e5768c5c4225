use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::{Endpoint, Error, Result};
use crate::grid::{GridCoord, OccupancyGrid};

/// Cost of a single horizontal or vertical step.
pub const ORTHOGONAL_STEP_COST: f64 = 1.0;
/// Cost of a single diagonal step, a fixed approximation of √2.
pub const DIAGONAL_STEP_COST: f64 = 1.4;

/// One of the eight legal moves of the point robot.
///
/// Directions are named in raster convention: `y` grows downward, so north
/// is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions in expansion order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset of this move.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Step cost of this move.
    pub const fn step_cost(self) -> f64 {
        match self {
            Direction::North | Direction::East | Direction::South | Direction::West => {
                ORTHOGONAL_STEP_COST
            }
            _ => DIAGONAL_STEP_COST,
        }
    }

    /// Apply the move to a coordinate. Never inspects any grid; validity is
    /// the caller's concern.
    pub fn apply(self, coord: GridCoord) -> GridCoord {
        let (dx, dy) = self.offset();
        GridCoord::new(coord.x + dx, coord.y + dy)
    }

    /// The move leading from `from` to `to`, if the two coordinates are
    /// exactly one legal step apart.
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Direction> {
        let delta = (to.x - from.x, to.y - from.y);
        Direction::ALL
            .into_iter()
            .find(|direction| direction.offset() == delta)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::North => "north",
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::South => "south",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        };
        f.write_str(value)
    }
}

/// Node record in the search arena. `parent` is `None` for the start node.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    coord: GridCoord,
    cost: f64,
    parent: Option<usize>,
}

/// Result of one search invocation: the exploration trace plus, on success,
/// the goal node and the arena holding its parent chain.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Coordinates in the order their cost was finalized.
    pub explored: Vec<GridCoord>,
    nodes: Vec<SearchNode>,
    goal: Option<usize>,
}

impl SearchOutcome {
    /// `true` when the goal was reached.
    pub fn reached_goal(&self) -> bool {
        self.goal.is_some()
    }

    /// Accumulated cost of the found path, if one exists.
    pub fn total_cost(&self) -> Option<f64> {
        self.goal.map(|index| self.nodes[index].cost)
    }

    /// Reconstruct the start→goal path by walking parent links back from the
    /// goal and reversing the collected coordinates.
    pub fn path(&self) -> Option<Vec<GridCoord>> {
        let goal = self.goal?;
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(index) = current {
            let node = &self.nodes[index];
            path.push(node.coord);
            current = node.parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Run uniform-cost search over the grid from `start` to `goal`.
///
/// Both endpoints are validated before the search starts: out-of-bounds
/// coordinates and blocked cells are rejected as errors, never discovered
/// mid-search. An exhausted frontier is a normal outcome reported through
/// [`SearchOutcome::reached_goal`], not an error.
pub fn search(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Result<SearchOutcome> {
    validate_endpoint(grid, Endpoint::Start, start)?;
    validate_endpoint(grid, Endpoint::Goal, goal)?;

    if start == goal {
        return Ok(SearchOutcome {
            explored: Vec::new(),
            nodes: vec![SearchNode {
                coord: start,
                cost: 0.0,
                parent: None,
            }],
            goal: Some(0),
        });
    }

    let mut nodes = vec![SearchNode {
        coord: start,
        cost: 0.0,
        parent: None,
    }];
    let mut open: HashMap<GridCoord, usize> = HashMap::new();
    let mut closed: HashSet<GridCoord> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut explored = Vec::new();
    let mut seq = 0u64;

    open.insert(start, 0);
    frontier.push(FrontierEntry::new(0, 0.0, seq));

    while let Some(entry) = frontier.pop() {
        let coord = nodes[entry.node].coord;
        if closed.contains(&coord) {
            // Stale entry superseded by a cheaper push for the same cell.
            continue;
        }

        explored.push(coord);
        closed.insert(coord);

        if coord == goal {
            tracing::debug!(
                "goal reached after {} expansions (cost {:.1})",
                explored.len(),
                nodes[entry.node].cost
            );
            return Ok(SearchOutcome {
                explored,
                nodes,
                goal: Some(entry.node),
            });
        }

        let current_cost = nodes[entry.node].cost;
        for direction in Direction::ALL {
            let next = direction.apply(coord);
            if !grid.is_free(next) || closed.contains(&next) {
                continue;
            }

            let next_cost = current_cost + direction.step_cost();
            match open.get(&next).copied() {
                Some(index) => {
                    if next_cost < nodes[index].cost {
                        nodes[index].cost = next_cost;
                        nodes[index].parent = Some(entry.node);
                        seq += 1;
                        frontier.push(FrontierEntry::new(index, next_cost, seq));
                    }
                }
                None => {
                    let index = nodes.len();
                    nodes.push(SearchNode {
                        coord: next,
                        cost: next_cost,
                        parent: Some(entry.node),
                    });
                    open.insert(next, index);
                    seq += 1;
                    frontier.push(FrontierEntry::new(index, next_cost, seq));
                }
            }
        }
    }

    tracing::debug!(
        "frontier exhausted after {} expansions without reaching goal",
        explored.len()
    );
    Ok(SearchOutcome {
        explored,
        nodes,
        goal: None,
    })
}

fn validate_endpoint(grid: &OccupancyGrid, endpoint: Endpoint, coord: GridCoord) -> Result<()> {
    if !grid.contains(coord) {
        return Err(Error::InvalidCoordinate {
            endpoint,
            coord,
            width: grid.width(),
            height: grid.height(),
        });
    }
    if grid.is_blocked(coord) {
        return Err(Error::BlockedStartOrGoal { endpoint, coord });
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    node: usize,
    cost: FloatOrd,
    seq: u64,
}

impl FrontierEntry {
    fn new(node: usize, cost: f64, seq: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            seq,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in insertion order.
        other.cost.cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
