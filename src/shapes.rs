use eframe::egui::{Pos2, pos2};
use image::Rgba;
use tiny_skia::{Path, Pixmap};

use crate::brush::ShapeType;
use crate::canvas::raster::{self, LineCap, LineJoin, Paint};

/// Third corner of the triangle tool: the start point reflected through the
/// end point's column, on the end point's row.
pub fn triangle_points(start: Pos2, end: Pos2) -> [Pos2; 3] {
    [start, end, pos2(start.x - (end.x - start.x), end.y)]
}

/// Outline of `shape` dragged from `start` to `end`, with the join it is
/// stroked with.
fn outline(shape: ShapeType, start: Pos2, end: Pos2) -> Option<(Path, LineJoin)> {
    match shape {
        ShapeType::None => None,
        ShapeType::Rectangle => Some((raster::box_path(start, end)?, LineJoin::Miter)),
        ShapeType::Circle => Some((raster::circle_path(start, start.distance(end))?, LineJoin::Round)),
        ShapeType::Line => Some((raster::polyline_path(&[start, end], false)?, LineJoin::Round)),
        ShapeType::Triangle => Some((
            raster::polyline_path(&triangle_points(start, end), true)?,
            LineJoin::Round,
        )),
    }
}

/// Draw `shape` dragged from `start` to `end`.
pub fn draw_shape(
    layer: &mut Pixmap,
    shape: ShapeType,
    start: Pos2,
    end: Pos2,
    color: Rgba<u8>,
    width: f32,
) {
    if let Some((path, join)) = outline(shape, start, end) {
        let stroke = raster::stroke_style(width, LineCap::Round, join);
        raster::stroke_path(layer, &path, &stroke, Paint::Color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::raster::alpha_at;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn blank() -> Pixmap {
        Pixmap::new(100, 100).unwrap()
    }

    #[test]
    fn test_triangle_third_corner() {
        let [_, _, third] = triangle_points(pos2(50.0, 10.0), pos2(70.0, 60.0));
        assert_eq!(third, pos2(30.0, 60.0));
    }

    #[test]
    fn test_circle_radius_is_drag_distance() {
        let mut layer = blank();
        draw_shape(&mut layer, ShapeType::Circle, pos2(50.0, 50.0), pos2(80.0, 50.0), RED, 4.0);
        assert_eq!(alpha_at(&layer, 79, 49), 255);
        assert_eq!(alpha_at(&layer, 49, 20), 255);
        assert_eq!(alpha_at(&layer, 50, 50), 0);
    }

    #[test]
    fn test_rectangle_from_any_corner() {
        let mut layer = blank();
        draw_shape(&mut layer, ShapeType::Rectangle, pos2(80.0, 80.0), pos2(20.0, 20.0), RED, 4.0);
        assert_eq!(alpha_at(&layer, 20, 50), 255);
        assert_eq!(alpha_at(&layer, 50, 50), 0);
    }

    #[test]
    fn test_triangle_edges() {
        let mut layer = blank();
        draw_shape(&mut layer, ShapeType::Triangle, pos2(50.0, 10.0), pos2(80.0, 70.0), RED, 4.0);
        // base runs along y = 70 from x = 20 to x = 80
        assert_eq!(alpha_at(&layer, 50, 69), 255);
        assert_eq!(alpha_at(&layer, 50, 40), 0);
    }

    #[test]
    fn test_none_draws_nothing() {
        let mut layer = blank();
        draw_shape(&mut layer, ShapeType::None, pos2(10.0, 10.0), pos2(90.0, 90.0), RED, 5.0);
        assert!(layer.pixels().iter().all(|p| p.alpha() == 0));
    }
}
