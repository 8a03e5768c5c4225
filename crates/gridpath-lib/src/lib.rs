//! Occupancy-grid pathfinding library entry points.
//!
//! This crate exposes helpers to rasterize obstacle maps, build binary
//! occupancy grids from map pixels, run uniform-cost searches over them, and
//! render the results. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod overlay;
pub mod output;
pub mod plan;
pub mod raster;
pub mod search;

pub use error::{Endpoint, Error, Result};
pub use grid::{GridCoord, OccupancyGrid, DEFAULT_THRESHOLD};
pub use overlay::render_overlay;
pub use output::{PathStep, PathSummary};
pub use plan::{plan_path, PathPlan};
pub use raster::{load_map, sample_map, save_map, MapCanvas};
pub use search::{search, Direction, SearchOutcome, DIAGONAL_STEP_COST, ORTHOGONAL_STEP_COST};
