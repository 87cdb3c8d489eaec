pub mod raster;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui::ColorImage;
use image::{Rgba, RgbaImage};
use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::guides;
use crate::mode::ArtMode;

pub use raster::{LineCap, Paint, Segment};

// Versions are unique across canvases so a texture never mistakes a fresh
// canvas for the one it last uploaded.
static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pixel dimensions of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Size the canvas for a viewport: narrow viewports get a canvas 32 px
    /// narrower than the viewport and a shorter fixed height.
    pub fn for_viewport(viewport_width: f32, config: &StudioConfig) -> Self {
        if viewport_width < config.narrow_breakpoint as f32 {
            let width = (viewport_width - 32.0).max(1.0) as u32;
            Self::new(width, config.narrow_canvas_height)
        } else {
            Self::new(config.wide_canvas[0], config.wide_canvas[1])
        }
    }
}

/// An immutable copy of a canvas's ink layer.
#[derive(Clone)]
pub struct Snapshot {
    ink: Arc<Pixmap>,
}

impl Snapshot {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.ink.width(), self.ink.height())
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.ink
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

/// The drawing surface: a guide layer (background and mode guides) under an
/// ink layer holding everything the user draws.
pub struct Canvas {
    size: CanvasSize,
    guides: Pixmap,
    ink: Pixmap,
    version: u64,
}

impl Canvas {
    /// A white canvas with no guides and no ink.
    pub fn new(size: CanvasSize) -> StudioResult<Self> {
        let too_big = || StudioError::CanvasSize {
            width: size.width,
            height: size.height,
        };
        Ok(Self {
            size,
            guides: raster::filled_pixmap(size.width, size.height, BACKGROUND).ok_or_else(too_big)?,
            ink: Pixmap::new(size.width, size.height).ok_or_else(too_big)?,
            version: next_version(),
        })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Changes every time either layer is modified.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn ink(&self) -> &Pixmap {
        &self.ink
    }

    pub fn guides(&self) -> &Pixmap {
        &self.guides
    }

    /// Mutable access to the ink layer. Bumps the version.
    pub fn ink_mut(&mut self) -> &mut Pixmap {
        self.version = next_version();
        &mut self.ink
    }

    /// Paint the background and the mode's guides, and wipe all ink.
    pub fn reset(&mut self, mode: ArtMode, show_grid: bool, config: &StudioConfig) {
        self.ink.fill(tiny_skia::Color::TRANSPARENT);
        self.redraw_guides(mode, show_grid, config);
    }

    /// Re-render only the guide layer, keeping the ink.
    pub fn redraw_guides(&mut self, mode: ArtMode, show_grid: bool, config: &StudioConfig) {
        self.guides.fill(tiny_skia::Color::WHITE);
        guides::draw_guides(&mut self.guides, mode, show_grid, config);
        self.version = next_version();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ink: Arc::new(self.ink.clone()),
        }
    }

    /// Replace the ink layer with a snapshot taken from a canvas of the same size.
    pub fn restore(&mut self, snapshot: &Snapshot) -> StudioResult<()> {
        let found = snapshot.dimensions();
        let expected = (self.size.width, self.size.height);
        if found != expected {
            return Err(StudioError::SnapshotMismatch { expected, found });
        }
        self.ink.clone_from(snapshot.pixmap());
        self.version = next_version();
        Ok(())
    }

    fn composite_pixmap(&self) -> Pixmap {
        let mut out = self.guides.clone();
        out.draw_pixmap(
            0,
            0,
            self.ink.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        out
    }

    /// Ink composited over the guides: what the user sees and what gets exported.
    pub fn composite(&self) -> RgbaImage {
        raster::to_rgba_image(&self.composite_pixmap())
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_premultiplied(
            [self.size.width as usize, self.size.height as usize],
            self.composite_pixmap().data(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Vec2, pos2};

    fn config() -> StudioConfig {
        StudioConfig::default()
    }

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(CanvasSize::new(w, h)).unwrap()
    }

    #[test]
    fn test_viewport_sizing() {
        assert_eq!(CanvasSize::for_viewport(1280.0, &config()), CanvasSize::new(800, 600));
        assert_eq!(CanvasSize::for_viewport(700.0, &config()), CanvasSize::new(800, 600));
        assert_eq!(CanvasSize::for_viewport(500.0, &config()), CanvasSize::new(468, 400));
    }

    #[test]
    fn test_new_canvas_is_white() {
        assert!(canvas(10, 10).composite().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_oversized_canvas_is_an_error() {
        assert!(matches!(
            Canvas::new(CanvasSize::new(u32::MAX, 2)),
            Err(StudioError::CanvasSize { .. })
        ));
    }

    #[test]
    fn test_restore_round_trips_ink() {
        let mut canvas = canvas(20, 20);
        let blank = canvas.snapshot();
        raster::fill_rect(
            canvas.ink_mut(),
            pos2(0.0, 0.0),
            Vec2::splat(5.0),
            Paint::Color(Rgba([255, 0, 0, 255])),
        );
        assert_eq!(canvas.composite().get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
        canvas.restore(&blank).unwrap();
        assert_eq!(canvas.composite().get_pixel(1, 1), &BACKGROUND);
    }

    #[test]
    fn test_restore_rejects_other_sizes() {
        let small = canvas(10, 10).snapshot();
        let mut canvas = canvas(20, 20);
        assert!(matches!(
            canvas.restore(&small),
            Err(StudioError::SnapshotMismatch { .. })
        ));
    }

    #[test]
    fn test_mutation_bumps_version() {
        let mut first = canvas(4, 4);
        let before = first.version();
        first.ink_mut();
        assert_ne!(before, first.version());
        let other = canvas(4, 4);
        assert_ne!(other.version(), first.version());
    }

    #[test]
    fn test_redraw_guides_keeps_ink() {
        let mut canvas = canvas(90, 90);
        raster::fill_rect(
            canvas.ink_mut(),
            pos2(40.0, 40.0),
            Vec2::splat(4.0),
            Paint::Color(Rgba([0, 0, 255, 255])),
        );
        canvas.redraw_guides(ArtMode::Zentangle, true, &config());
        assert_eq!(canvas.composite().get_pixel(41, 41), &Rgba([0, 0, 255, 255]));
        assert_ne!(canvas.guides().pixel(30, 10).map(|p| p.red()), Some(255));
    }

    #[test]
    fn test_color_image_matches_composite() {
        let mut canvas = canvas(8, 8);
        raster::fill_rect(
            canvas.ink_mut(),
            pos2(0.0, 0.0),
            Vec2::splat(4.0),
            Paint::Color(Rgba([0, 128, 0, 255])),
        );
        let color_image = canvas.to_color_image();
        assert_eq!(color_image.size, [8, 8]);
        assert_eq!(color_image.pixels[0], eframe::egui::Color32::from_rgb(0, 128, 0));
        assert_eq!(color_image.pixels[7], eframe::egui::Color32::WHITE);
    }
}
