//! Exploration and path overlay rendering.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::plan::PathPlan;

/// Color painted over explored cells.
pub const EXPLORED_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Color of the final path stroke.
pub const PATH_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Paint the exploration trace and the final path onto a copy of the map.
///
/// Explored cells are painted pixel by pixel in exploration order, then the
/// path is drawn over them as roughly 2 px wide segments between consecutive
/// steps. Coordinates outside the map are skipped.
pub fn render_overlay(map: &RgbImage, plan: &PathPlan) -> RgbImage {
    let mut canvas = map.clone();

    for coord in &plan.explored {
        if coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < canvas.width()
            && (coord.y as u32) < canvas.height()
        {
            canvas.put_pixel(coord.x as u32, coord.y as u32, EXPLORED_COLOR);
        }
    }

    for pair in plan.steps.windows(2) {
        for (dx, dy) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            draw_line_segment_mut(
                &mut canvas,
                (pair[0].x as f32 + dx, pair[0].y as f32 + dy),
                (pair[1].x as f32 + dx, pair[1].y as f32 + dy),
                PATH_COLOR,
            );
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridCoord;
    use crate::raster::BACKGROUND;

    #[test]
    fn overlay_paints_trace_and_path() {
        let map = RgbImage::from_pixel(5, 5, BACKGROUND);
        let plan = PathPlan {
            start: GridCoord::new(0, 0),
            goal: GridCoord::new(0, 1),
            steps: vec![GridCoord::new(0, 0), GridCoord::new(0, 1)],
            total_cost: 1.0,
            explored: vec![GridCoord::new(4, 4)],
        };

        let overlay = render_overlay(&map, &plan);

        assert_eq!(*overlay.get_pixel(4, 4), EXPLORED_COLOR);
        assert_eq!(*overlay.get_pixel(0, 0), PATH_COLOR);
        assert_eq!(*overlay.get_pixel(0, 1), PATH_COLOR);
        assert_eq!(*overlay.get_pixel(3, 1), BACKGROUND, "untouched pixels keep the map color");
        assert_eq!(*map.get_pixel(0, 0), BACKGROUND, "source map is not mutated");
    }

    #[test]
    fn out_of_bounds_trace_entries_are_skipped() {
        let map = RgbImage::from_pixel(2, 2, BACKGROUND);
        let plan = PathPlan {
            start: GridCoord::new(0, 0),
            goal: GridCoord::new(0, 0),
            steps: vec![GridCoord::new(0, 0)],
            total_cost: 0.0,
            explored: vec![GridCoord::new(-1, 0), GridCoord::new(5, 5)],
        };

        let overlay = render_overlay(&map, &plan);
        assert_eq!(*overlay.get_pixel(0, 0), BACKGROUND);
    }
}
