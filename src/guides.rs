//! Faint per-mode guides painted onto the canvas's guide layer.

use std::f32::consts::PI;

use eframe::egui::{Pos2, Vec2, pos2};
use image::Rgba;
use tiny_skia::{Path, Pixmap, Stroke};

use crate::canvas::raster::{self, LineCap, LineJoin, Paint, Segment};
use crate::config::StudioConfig;
use crate::mode::ArtMode;

pub const MANDALA_GUIDE_COLOR: Rgba<u8> = Rgba([0xe0, 0xe0, 0xe0, 0xff]);
pub const GRID_COLOR: Rgba<u8> = Rgba([0xf0, 0xf0, 0xf0, 0xff]);
pub const STENCIL_COLOR: Rgba<u8> = Rgba([0xe0, 0xe0, 0xe0, 0xff]);

const GUIDE_WIDTH: f32 = 0.5;
const STENCIL_WIDTH: f32 = 1.0;
const STENCIL_DASH: [f32; 2] = [5.0, 5.0];

pub const MANDALA_RINGS: u32 = 6;
pub const MANDALA_SPOKES: u32 = 12;

/// A dashed template outline used by stencil mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StencilTemplate {
    Rect { origin: Pos2, size: Vec2 },
    Circle { center: Pos2, radius: f32 },
    Triangle([Pos2; 3]),
}

impl StencilTemplate {
    fn outline(&self) -> Option<Path> {
        match *self {
            StencilTemplate::Rect { origin, size } => raster::box_path(origin, origin + size),
            StencilTemplate::Circle { center, radius } => raster::circle_path(center, radius),
            StencilTemplate::Triangle(points) => raster::polyline_path(&points, true),
        }
    }
}

pub fn stencil_templates() -> [StencilTemplate; 4] {
    [
        StencilTemplate::Rect {
            origin: pos2(50.0, 50.0),
            size: Vec2::new(150.0, 100.0),
        },
        StencilTemplate::Rect {
            origin: pos2(250.0, 50.0),
            size: Vec2::new(120.0, 120.0),
        },
        StencilTemplate::Circle {
            center: pos2(500.0, 100.0),
            radius: 60.0,
        },
        StencilTemplate::Triangle([pos2(650.0, 50.0), pos2(600.0, 150.0), pos2(700.0, 150.0)]),
    ]
}

/// Paint the guides for `mode` onto `layer`.
pub fn draw_guides(layer: &mut Pixmap, mode: ArtMode, show_grid: bool, config: &StudioConfig) {
    match mode {
        ArtMode::Mandala => draw_mandala_guides(layer),
        ArtMode::Zentangle if show_grid => draw_zentangle_grid(layer, config.grid_spacing),
        ArtMode::Stencil => draw_stencil_templates(layer),
        ArtMode::Zentangle | ArtMode::Plain | ArtMode::Home => {}
    }
}

/// Centre and outermost ring radius of the mandala guides.
pub fn mandala_geometry(width: u32, height: u32) -> (Pos2, f32) {
    let center = pos2(width as f32 / 2.0, height as f32 / 2.0);
    let max_radius = (center.x.min(center.y) - 20.0).max(0.0);
    (center, max_radius)
}

/// Six concentric rings and twelve spokes around the canvas centre.
pub fn draw_mandala_guides(layer: &mut Pixmap) {
    let (center, max_radius) = mandala_geometry(layer.width(), layer.height());
    let paint = Paint::Color(MANDALA_GUIDE_COLOR);
    let ring = raster::stroke_style(GUIDE_WIDTH, LineCap::Butt, LineJoin::Miter);

    for i in 1..=MANDALA_RINGS {
        let radius = max_radius / MANDALA_RINGS as f32 * i as f32;
        if let Some(circle) = raster::circle_path(center, radius) {
            raster::stroke_path(layer, &circle, &ring, paint);
        }
    }

    let spokes: Vec<Segment> = (0..MANDALA_SPOKES)
        .map(|i| {
            let angle = i as f32 * PI / 6.0;
            (center, center + Vec2::angled(angle) * max_radius)
        })
        .collect();
    raster::stroke_segments(layer, &spokes, GUIDE_WIDTH, LineCap::Butt, paint);
}

/// Vertical and horizontal lines every `spacing` pixels, starting at 0.
pub fn draw_zentangle_grid(layer: &mut Pixmap, spacing: u32) {
    let spacing = spacing.max(1);
    let (w, h) = (layer.width() as f32, layer.height() as f32);
    let mut lines: Vec<Segment> = Vec::new();
    for x in (0..=layer.width()).step_by(spacing as usize) {
        lines.push((pos2(x as f32, 0.0), pos2(x as f32, h)));
    }
    for y in (0..=layer.height()).step_by(spacing as usize) {
        lines.push((pos2(0.0, y as f32), pos2(w, y as f32)));
    }
    raster::stroke_segments(layer, &lines, GUIDE_WIDTH, LineCap::Butt, Paint::Color(GRID_COLOR));
}

/// Dashed outlines of the stencil templates.
pub fn draw_stencil_templates(layer: &mut Pixmap) {
    let [on, off] = STENCIL_DASH;
    let stroke = Stroke {
        dash: raster::dash(on, off),
        ..raster::stroke_style(STENCIL_WIDTH, LineCap::Butt, LineJoin::Miter)
    };
    for template in stencil_templates() {
        if let Some(outline) = template.outline() {
            raster::stroke_path(layer, &outline, &stroke, Paint::Color(STENCIL_COLOR));
        }
    }
}
