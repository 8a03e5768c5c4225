//! Obstacle map rasterization and map image I/O.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::error::Result;

/// Background fill; every channel clears the default threshold, so cells
/// stay free.
pub const BACKGROUND: Rgb<u8> = Rgb([230, 120, 130]);
/// Obstacle core fill; also clears the threshold, so only the shell blocks.
pub const OBSTACLE_FILL: Rgb<u8> = Rgb([120, 120, 120]);
/// Blocked silhouette color.
pub const OBSTACLE_SHELL: Rgb<u8> = Rgb([0, 0, 0]);

/// Shell width around obstacle cores in the sample map.
const SHELL_PADDING: i32 = 5;
/// Frame thickness of the sample map.
const BORDER_THICKNESS: u32 = 5;

/// Drawing surface for composing obstacle maps.
///
/// Obstacles are drawn as a blocked silhouette inflated by a padding,
/// overlaid with a core fill that stays free under the threshold rule, so
/// every obstacle ends up wrapped in a blocked shell around a visually
/// distinct interior.
#[derive(Debug)]
pub struct MapCanvas {
    image: RgbImage,
}

impl MapCanvas {
    /// Create a canvas filled with the background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    /// Frame the canvas with a blocked border.
    ///
    /// Thickness is clamped to half the canvas size, so oversized borders
    /// fill the canvas instead of overflowing it. A zero thickness leaves
    /// the canvas untouched.
    pub fn border(&mut self, thickness: u32) {
        let width = self.image.width();
        let height = self.image.height();
        let thickness = thickness.min(width / 2).min(height / 2);
        if thickness == 0 {
            return;
        }
        let bottom = (height - thickness) as i32;
        let right = (width - thickness) as i32;

        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(0, 0).of_size(width, thickness),
            OBSTACLE_SHELL,
        );
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(0, bottom).of_size(width, thickness),
            OBSTACLE_SHELL,
        );
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(0, 0).of_size(thickness, height),
            OBSTACLE_SHELL,
        );
        draw_filled_rect_mut(
            &mut self.image,
            Rect::at(right, 0).of_size(thickness, height),
            OBSTACLE_SHELL,
        );
    }

    /// Draw one axis-aligned obstacle with inclusive corners `(x0, y0)` to
    /// `(x1, y1)`, `x0 <= x1` and `y0 <= y1`. Parts extending past the
    /// canvas are clipped.
    pub fn padded_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, padding: i32) {
        self.padded_rect_cluster(&[(x0, y0, x1, y1)], padding);
    }

    /// Draw a cluster of axis-aligned obstacles whose blocked shells merge
    /// seamlessly: all silhouettes first, then all cores.
    pub fn padded_rect_cluster(&mut self, corners: &[(i32, i32, i32, i32)], padding: i32) {
        for &(x0, y0, x1, y1) in corners {
            draw_filled_rect_mut(
                &mut self.image,
                inclusive_rect(x0 - padding, y0 - padding, x1 + padding, y1 + padding),
                OBSTACLE_SHELL,
            );
        }
        for &(x0, y0, x1, y1) in corners {
            draw_filled_rect_mut(
                &mut self.image,
                inclusive_rect(x0, y0, x1, y1),
                OBSTACLE_FILL,
            );
        }
    }

    /// Draw a regular polygon obstacle centred at `center`, with the first
    /// vertex pointing straight down the canvas. `radius` must be large
    /// enough that the rounded vertices stay distinct.
    pub fn padded_polygon(&mut self, center: (i32, i32), sides: u32, radius: f64, padding: i32) {
        let silhouette = regular_polygon_vertices(center, sides, radius + f64::from(padding));
        draw_polygon_mut(&mut self.image, &silhouette, OBSTACLE_SHELL);

        let core = regular_polygon_vertices(center, sides, radius);
        draw_polygon_mut(&mut self.image, &core, OBSTACLE_FILL);
    }

    /// Finish drawing and take the image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

fn inclusive_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32)
}

fn regular_polygon_vertices(center: (i32, i32), sides: u32, radius: f64) -> Vec<Point<i32>> {
    let step = 360.0 / f64::from(sides);
    (0..sides)
        .map(|side| {
            let angle = (step * f64::from(side) + 90.0).to_radians();
            Point::new(
                center.0 + (radius * angle.cos()).round() as i32,
                center.1 + (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Rasterize the sample floor plan: a bordered 1200x500 arena with two
/// rectangular pillars, a hexagonal island and a U-shaped pocket.
pub fn sample_map() -> RgbImage {
    let mut canvas = MapCanvas::new(1200, 500);
    canvas.border(BORDER_THICKNESS);
    canvas.padded_rect(100, 0, 175, 400, SHELL_PADDING);
    canvas.padded_rect(275, 100, 350, 500, SHELL_PADDING);
    canvas.padded_polygon((650, 250), 6, 150.0, SHELL_PADDING);
    canvas.padded_rect_cluster(
        &[
            (1020, 50, 1100, 450),
            (900, 50, 1100, 125),
            (900, 375, 1100, 450),
        ],
        SHELL_PADDING,
    );
    canvas.into_image()
}

/// Load a map image from disk as RGB.
pub fn load_map(path: &Path) -> Result<RgbImage> {
    let map = image::open(path)?.into_rgb8();
    tracing::debug!(
        "loaded {}x{} map from {}",
        map.width(),
        map.height(),
        path.display()
    );
    Ok(map)
}

/// Save a map image to disk; the format follows the file extension.
pub fn save_map(path: &Path, map: &RgbImage) -> Result<()> {
    map.save(path)?;
    tracing::debug!("saved {}x{} map to {}", map.width(), map.height(), path.display());
    Ok(())
}
