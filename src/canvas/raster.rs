//! Thin layer over `tiny_skia` for the marks the studio makes: brush
//! strokes, shape outlines, spray dots, fill squares and guides.
//!
//! Brush marks made of several pieces (mirrored segments, spray dots) are
//! built into one path and drawn with a single call, so the pieces never
//! darken where they overlap.

use eframe::egui::{Pos2, Vec2};
use image::{Rgba, RgbaImage};
use tiny_skia::{BlendMode, FillRule, Path, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};

pub use tiny_skia::{LineCap, LineJoin};

/// A line segment in canvas pixel coordinates.
pub type Segment = (Pos2, Pos2);

/// What a mark does to the pixels it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Source-over with a straight-alpha colour
    Color(Rgba<u8>),
    /// Destination-out
    Erase,
}

impl Paint {
    fn to_skia(self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        match self {
            Paint::Color(Rgba([r, g, b, a])) => paint.set_color_rgba8(r, g, b, a),
            Paint::Erase => {
                paint.set_color_rgba8(0, 0, 0, 255);
                paint.blend_mode = BlendMode::DestinationOut;
            }
        }
        paint
    }
}

/// A stroke of the given width, cap and join.
pub fn stroke_style(width: f32, cap: LineCap, join: LineJoin) -> Stroke {
    Stroke {
        width,
        line_cap: cap,
        line_join: join,
        ..Stroke::default()
    }
}

/// `[on, off]` dash pattern starting at the beginning of the path.
pub fn dash(on: f32, off: f32) -> Option<StrokeDash> {
    StrokeDash::new(vec![on, off], 0.0)
}

/// One path holding every segment as its own sub-path.
pub fn segments_path(segments: &[Segment]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for &(a, b) in segments {
        pb.move_to(a.x, a.y);
        pb.line_to(b.x, b.y);
    }
    pb.finish()
}

/// Path through `points`, closed back to the first when `closed` is set.
pub fn polyline_path(points: &[Pos2], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Outline of the axis-aligned box spanned by two corners.
pub fn box_path(a: Pos2, b: Pos2) -> Option<Path> {
    let (min, max) = (a.min(b), a.max(b));
    polyline_path(
        &[min, Pos2::new(max.x, min.y), max, Pos2::new(min.x, max.y)],
        true,
    )
}

pub fn circle_path(center: Pos2, radius: f32) -> Option<Path> {
    PathBuilder::from_circle(center.x, center.y, radius)
}

/// Stroke `path` onto `pixmap`.
pub fn stroke_path(pixmap: &mut Pixmap, path: &Path, stroke: &Stroke, paint: Paint) {
    if stroke.width <= 0.0 {
        return;
    }
    pixmap.stroke_path(path, &paint.to_skia(), stroke, Transform::identity(), None);
}

/// Stroke the union of `segments`, as a brush does when mirrored.
pub fn stroke_segments(
    pixmap: &mut Pixmap,
    segments: &[Segment],
    width: f32,
    cap: LineCap,
    paint: Paint,
) {
    if let Some(path) = segments_path(segments) {
        stroke_path(pixmap, &path, &stroke_style(width, cap, LineJoin::Round), paint);
    }
}

/// Fill a disc at every centre.
pub fn fill_discs(pixmap: &mut Pixmap, centers: &[Pos2], radius: f32, paint: Paint) {
    let mut pb = PathBuilder::new();
    for c in centers {
        pb.push_circle(c.x, c.y, radius);
    }
    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &paint.to_skia(), FillRule::Winding, Transform::identity(), None);
    }
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect(pixmap: &mut Pixmap, origin: Pos2, size: Vec2, paint: Paint) {
    if let Some(rect) = Rect::from_xywh(origin.x, origin.y, size.x, size.y) {
        pixmap.fill_rect(rect, &paint.to_skia(), Transform::identity(), None);
    }
}

/// A pixmap of the given size filled with one colour.
pub fn filled_pixmap(width: u32, height: u32, color: Rgba<u8>) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    let Rgba([r, g, b, a]) = color;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    Some(pixmap)
}

/// Straight-alpha copy of a (premultiplied) pixmap.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

/// Alpha at `(x, y)`, or 0 outside the pixmap.
pub fn alpha_at(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
    pixmap.pixel(x, y).map_or(0, |p| p.alpha())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    const BLACK: Paint = Paint::Color(Rgba([0, 0, 0, 255]));

    fn blank(w: u32, h: u32) -> Pixmap {
        Pixmap::new(w, h).unwrap()
    }

    #[test]
    fn test_round_segment_covers_its_path() {
        let mut pixmap = blank(20, 20);
        stroke_segments(&mut pixmap, &[(pos2(2.0, 10.0), pos2(18.0, 10.0))], 4.0, LineCap::Round, BLACK);
        assert_eq!(alpha_at(&pixmap, 10, 9), 255);
        assert_eq!(alpha_at(&pixmap, 10, 2), 0);
    }

    #[test]
    fn test_butt_cap_stops_at_endpoint() {
        let mut pixmap = blank(30, 10);
        stroke_segments(&mut pixmap, &[(pos2(5.0, 5.0), pos2(20.0, 5.0))], 6.0, LineCap::Butt, BLACK);
        assert_eq!(alpha_at(&pixmap, 10, 4), 255);
        assert_eq!(alpha_at(&pixmap, 22, 4), 0);
        assert_eq!(alpha_at(&pixmap, 2, 4), 0);
    }

    #[test]
    fn test_erase_clears_alpha() {
        let mut pixmap = filled_pixmap(10, 10, Rgba([255, 0, 0, 255])).unwrap();
        stroke_segments(&mut pixmap, &[(pos2(0.0, 5.0), pos2(10.0, 5.0))], 4.0, LineCap::Round, Paint::Erase);
        assert_eq!(alpha_at(&pixmap, 5, 4), 0);
        assert_eq!(alpha_at(&pixmap, 5, 0), 255);
    }

    #[test]
    fn test_box_outline_leaves_interior() {
        let mut pixmap = blank(40, 40);
        let path = box_path(pos2(30.0, 30.0), pos2(10.0, 10.0)).unwrap();
        stroke_path(&mut pixmap, &path, &stroke_style(4.0, LineCap::Butt, LineJoin::Miter), BLACK);
        assert_eq!(alpha_at(&pixmap, 10, 20), 255);
        assert_eq!(alpha_at(&pixmap, 20, 20), 0);
        // mitred corner
        assert_eq!(alpha_at(&pixmap, 8, 8), 255);
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut pixmap = blank(30, 10);
        let path = polyline_path(&[pos2(0.0, 5.0), pos2(30.0, 5.0)], false).unwrap();
        let stroke = Stroke {
            dash: dash(5.0, 5.0),
            ..stroke_style(4.0, LineCap::Butt, LineJoin::Miter)
        };
        stroke_path(&mut pixmap, &path, &stroke, BLACK);
        assert_eq!(alpha_at(&pixmap, 2, 5), 255);
        assert_eq!(alpha_at(&pixmap, 7, 5), 0);
        assert_eq!(alpha_at(&pixmap, 12, 5), 255);
    }

    #[test]
    fn test_fill_rect_and_discs() {
        let mut pixmap = blank(40, 20);
        fill_rect(&mut pixmap, pos2(2.0, 2.0), Vec2::splat(10.0), BLACK);
        fill_discs(&mut pixmap, &[pos2(30.0, 10.0)], 3.0, BLACK);
        assert_eq!(alpha_at(&pixmap, 5, 5), 255);
        assert_eq!(alpha_at(&pixmap, 13, 5), 0);
        assert_eq!(alpha_at(&pixmap, 30, 10), 255);
        assert_eq!(alpha_at(&pixmap, 30, 16), 0);
    }

    #[test]
    fn test_rgba_conversion_is_straight_alpha() {
        let pixmap = filled_pixmap(2, 2, Rgba([255, 0, 0, 128])).unwrap();
        let image = to_rgba_image(&pixmap);
        let px = image.get_pixel(0, 0);
        assert_eq!(px[3], 128);
        assert!(px[0] >= 254);
    }

    #[test]
    fn test_out_of_bounds_marks_are_ignored() {
        let mut pixmap = blank(10, 10);
        stroke_segments(&mut pixmap, &[(pos2(50.0, 50.0), pos2(60.0, 60.0))], 2.0, LineCap::Round, BLACK);
        fill_discs(&mut pixmap, &[pos2(-20.0, -20.0)], 3.0, BLACK);
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
        assert_eq!(alpha_at(&pixmap, 50, 50), 0);
    }
}
