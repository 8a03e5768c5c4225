use std::fmt;

use image::RgbImage;
use serde::Serialize;

use crate::error::{Error, Result};

/// Default intensity threshold below which a pixel counts as an obstacle.
pub const DEFAULT_THRESHOLD: u8 = 50;

/// Integer cell coordinate within an occupancy grid.
///
/// Coordinates follow raster convention: the origin is the top-left cell of
/// the source map and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable boolean occupancy grid; `true` marks a blocked cell.
///
/// Built once from a map image or from explicit rows, read-only thereafter.
/// A single grid may be shared across independent searches.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// Build a grid from an RGB map image.
    ///
    /// A cell is blocked if and only if every channel of its pixel is
    /// strictly below `threshold` (a near-black pixel). Any single channel at
    /// or above the threshold keeps the cell free.
    pub fn from_image(map: &RgbImage, threshold: u8) -> Result<Self> {
        let (width, height) = map.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::InvalidMap {
                message: format!("map has degenerate dimensions {width}x{height}"),
            });
        }

        let mut blocked = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let pixel = map.get_pixel(x, y);
                blocked.push(pixel.0.iter().all(|&channel| channel < threshold));
            }
        }

        Ok(Self {
            width: width as usize,
            height: height as usize,
            blocked,
        })
    }

    /// Build a grid directly from rows of blocked flags.
    ///
    /// Rows must be non-empty and of equal length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(Error::InvalidMap {
                message: "rows must be non-empty".to_string(),
            });
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidMap {
                message: "rows have unequal lengths".to_string(),
            });
        }

        let blocked = rows.iter().flatten().copied().collect();
        Ok(Self {
            width,
            height,
            blocked,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when the coordinate lies within grid bounds.
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// `true` when the cell is blocked. Out-of-bounds coordinates count as
    /// blocked.
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        !self.is_free(coord)
    }

    /// `true` when the coordinate is in bounds and not blocked.
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.contains(coord) && !self.blocked[coord.y as usize * self.width + coord.x as usize]
    }
}
