use eframe::egui::{Pos2, Vec2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::{EditorState, Preferences};
use crate::brush::{self, BrushSettings, BrushType};
use crate::canvas::raster::{self, Paint, Segment};
use crate::canvas::{Canvas, CanvasSize, Snapshot};
use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::export;
use crate::guides;
use crate::history::SnapshotHistory;
use crate::mode::ArtMode;
use crate::shapes;
use crate::symmetry::RadialSymmetry;

/// Side of the square dropped by a click in fill mode.
pub const FILL_SQUARE: f32 = 10.0;

/// The canvas interaction loop: owns the canvas, the brush, the history and
/// the pointer state, and turns pointer events into pixels.
pub struct DrawingSession {
    config: StudioConfig,
    mode: ArtMode,
    canvas: Option<Canvas>,
    brush: BrushSettings,
    show_grid: bool,
    mirror: bool,
    state: EditorState,
    /// Ink as it was when the current stroke began
    stroke_base: Option<Snapshot>,
    /// Whether the current stroke has painted anything yet
    stroke_dirty: bool,
    history: SnapshotHistory,
    /// Drives the spray brush
    rng: SmallRng,
}

impl DrawingSession {
    /// A session on the home screen whose spray is seeded from OS entropy.
    pub fn new(config: StudioConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Same as [`Self::new`] with a fixed spray seed, so spray output repeats.
    pub fn with_seed(config: StudioConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: StudioConfig, rng: SmallRng) -> Self {
        let mut brush = BrushSettings::default();
        brush.set_size(config.default_brush_size, config.max_brush_size);
        let history = SnapshotHistory::new(config.history_capacity);
        Self {
            config,
            mode: ArtMode::Home,
            canvas: None,
            brush,
            show_grid: false,
            mirror: true,
            state: EditorState::Idle,
            stroke_base: None,
            stroke_dirty: false,
            history,
            rng,
        }
    }

    /// Tunables the session was created with.
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Current screen; `Home` when no canvas is open.
    pub fn mode(&self) -> ArtMode {
        self.mode
    }

    /// The open canvas, `None` on the home screen.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Brush settings as edited by the tools panel.
    pub fn brush_mut(&mut self) -> &mut BrushSettings {
        &mut self.brush
    }

    /// Where the pointer lifecycle currently is.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Undo/redo stacks for the open canvas.
    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Whether the zentangle grid is drawn.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Whether freehand strokes are mirrored around the mandala centre.
    pub fn mirror_enabled(&self) -> bool {
        self.mirror
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        self.mirror = mirror;
    }

    /// The settings persisted between runs.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            brush: self.brush.clone(),
            show_grid: self.show_grid,
            mirror: self.mirror,
        }
    }

    /// Restore persisted settings, clamping the brush size to the config.
    pub fn apply_preferences(&mut self, prefs: Preferences) {
        let Preferences {
            mut brush,
            show_grid,
            mirror,
        } = prefs;
        brush.set_size(brush.size, self.config.max_brush_size);
        self.brush = brush;
        self.mirror = mirror;
        self.set_show_grid(show_grid);
    }

    /// Switch screens. Drawing modes get a fresh canvas sized for the
    /// viewport with the mode's guides; history starts empty. If the canvas
    /// can't be allocated the session is left on the home screen.
    pub fn enter_mode(&mut self, mode: ArtMode, viewport_width: f32) -> StudioResult<()> {
        log::info!("Entering mode {:?}", mode);
        self.mode = ArtMode::Home;
        self.canvas = None;
        self.state = EditorState::Idle;
        self.stroke_base = None;
        self.history.clear();
        if mode.is_drawing_mode() {
            let size = CanvasSize::for_viewport(viewport_width, &self.config);
            log::debug!("Canvas size {}x{}", size.width, size.height);
            let mut canvas = Canvas::new(size)?;
            canvas.reset(mode, self.show_grid, &self.config);
            self.canvas = Some(canvas);
        }
        self.mode = mode;
        Ok(())
    }

    /// Show or hide the zentangle grid. Ink is kept.
    pub fn set_show_grid(&mut self, show: bool) {
        if self.show_grid == show {
            return;
        }
        self.show_grid = show;
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.redraw_guides(self.mode, show, &self.config);
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.canvas.is_none() {
            return;
        }
        if !self.state.is_idle() {
            self.finish_stroke();
        }

        if self.brush.fill_mode {
            self.fill_at(pos);
            return;
        }

        self.stroke_base = self.canvas.as_ref().map(Canvas::snapshot);
        self.stroke_dirty = false;
        self.state = if self.brush.shape == brush::ShapeType::None {
            EditorState::Drawing { last: pos }
        } else {
            EditorState::Shaping {
                start: pos,
                current: pos,
            }
        };
        log::debug!("Stroke started at {:?} ({})", pos, self.state.name());
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        match self.state {
            EditorState::Idle => {}
            EditorState::Drawing { last } => {
                self.paint_freehand(last, pos);
                self.state = EditorState::Drawing { last: pos };
            }
            EditorState::Shaping { start, .. } => {
                self.preview_shape(start, pos);
                self.state = EditorState::Shaping {
                    start,
                    current: pos,
                };
            }
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if let EditorState::Shaping { start, .. } = self.state {
            self.preview_shape(start, pos);
        }
        self.finish_stroke();
    }

    /// The pointer left the canvas: end the stroke where it is, keeping
    /// whatever shape preview is on screen.
    pub fn pointer_leave(&mut self) {
        self.finish_stroke();
    }

    pub fn undo(&mut self) -> StudioResult<bool> {
        if !self.state.is_idle() {
            return Ok(false);
        }
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(false);
        };
        match self.history.undo(canvas.snapshot()) {
            Some(previous) => {
                canvas.restore(&previous)?;
                log::debug!("Undo ({} left)", self.history.undo_len());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> StudioResult<bool> {
        if !self.state.is_idle() {
            return Ok(false);
        }
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(false);
        };
        match self.history.redo(canvas.snapshot()) {
            Some(next) => {
                canvas.restore(&next)?;
                log::debug!("Redo ({} left)", self.history.redo_len());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Wipe the ink, repaint the guides and forget the history.
    pub fn clear(&mut self) {
        self.state = EditorState::Idle;
        self.stroke_base = None;
        self.history.clear();
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.reset(self.mode, self.show_grid, &self.config);
        }
    }

    /// The visible image encoded as PNG.
    pub fn export_png(&self) -> StudioResult<Vec<u8>> {
        let canvas = self.canvas.as_ref().ok_or(StudioError::NoCanvas)?;
        export::encode_png(&canvas.composite())
    }

    pub fn export_file_name(&self, timestamp_ms: u64) -> String {
        export::file_name(self.mode, timestamp_ms)
    }

    fn finish_stroke(&mut self) {
        let state = std::mem::take(&mut self.state);
        if let Some(base) = self.stroke_base.take() {
            if self.stroke_dirty {
                self.history.record(base);
                log::debug!("Stroke recorded ({} in history)", self.history.undo_len());
            }
        }
        self.stroke_dirty = false;
        if !state.is_idle() {
            log::debug!("Stroke finished ({})", state.name());
        }
    }

    fn fill_at(&mut self, pos: Pos2) {
        let color = self.brush.rgba();
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let before = canvas.snapshot();
        raster::fill_rect(canvas.ink_mut(), pos, Vec2::splat(FILL_SQUARE), Paint::Color(color));
        self.history.record(before);
        log::debug!("Filled square at {:?}", pos);
    }

    fn symmetry(&self, canvas: &Canvas) -> Option<RadialSymmetry> {
        if self.mode != ArtMode::Mandala || !self.mirror {
            return None;
        }
        let (center, _) = guides::mandala_geometry(canvas.width(), canvas.height());
        Some(RadialSymmetry::new(center, self.config.mandala_folds))
    }

    fn paint_freehand(&mut self, from: Pos2, to: Pos2) {
        let symmetry = self.canvas.as_ref().and_then(|c| self.symmetry(c));
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let copies = |p: Pos2| -> Vec<Pos2> {
            match symmetry {
                Some(symmetry) => symmetry.images(p).collect(),
                None => vec![p],
            }
        };

        let width = self.brush.width();
        let color = self.brush.rgba();
        let ink = canvas.ink_mut();
        match self.brush.brush_type {
            BrushType::Spray => {
                let dots: Vec<Pos2> = brush::spray_dots(to, self.brush.size, &mut self.rng)
                    .into_iter()
                    .flat_map(&copies)
                    .collect();
                raster::fill_discs(ink, &dots, brush::SPRAY_DOT_RADIUS, Paint::Color(color));
            }
            brush_type => {
                let paint = if brush_type == BrushType::Eraser {
                    Paint::Erase
                } else {
                    Paint::Color(color)
                };
                let cap = brush_type.line_cap().unwrap_or(raster::LineCap::Round);
                let segments: Vec<Segment> = copies(from).into_iter().zip(copies(to)).collect();
                raster::stroke_segments(ink, &segments, width, cap, paint);
            }
        }
        self.stroke_dirty = true;
    }

    fn preview_shape(&mut self, start: Pos2, end: Pos2) {
        let (Some(canvas), Some(base)) = (self.canvas.as_mut(), self.stroke_base.as_ref()) else {
            return;
        };
        if let Err(err) = canvas.restore(base) {
            log::error!("Failed to restore stroke base: {}", err);
            return;
        }
        let color = self.brush.rgba();
        let width = self.brush.width();
        shapes::draw_shape(canvas.ink_mut(), self.brush.shape, start, end, color, width);
        self.stroke_dirty = true;
    }
}

impl std::fmt::Debug for DrawingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSession")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("brush", &self.brush)
            .field("history", &self.history)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Color32, pos2};

    #[test]
    fn test_preferences_round_trip() {
        let mut session = DrawingSession::with_seed(StudioConfig::default(), 1);
        session.brush_mut().color = Color32::RED;
        session.brush_mut().brush_type = BrushType::Square;
        session.set_mirror(false);

        let json = serde_json::to_string(&session.preferences()).unwrap();
        let prefs: Preferences = serde_json::from_str(&json).unwrap();

        let mut restored = DrawingSession::with_seed(StudioConfig::default(), 2);
        restored.apply_preferences(prefs);
        assert_eq!(restored.brush(), session.brush());
        assert!(!restored.mirror_enabled());
    }

    #[test]
    fn test_restored_brush_size_is_clamped() {
        let mut prefs = Preferences::default();
        prefs.brush.size = 500;
        let mut session = DrawingSession::with_seed(StudioConfig::default(), 1);
        session.apply_preferences(prefs);
        assert_eq!(session.brush().size, 40);
    }

    #[test]
    fn test_grid_preference_applies_to_open_canvas() {
        let mut session = DrawingSession::with_seed(StudioConfig::default(), 1);
        session.enter_mode(ArtMode::Zentangle, 1280.0).unwrap();
        let before = session.canvas().unwrap().version();

        let prefs = Preferences {
            show_grid: true,
            ..Preferences::default()
        };
        session.apply_preferences(prefs);
        assert!(session.show_grid());
        assert_ne!(session.canvas().unwrap().version(), before);
    }

    #[test]
    fn test_square_brush_has_flat_ends() {
        let mut session = DrawingSession::with_seed(StudioConfig::default(), 1);
        session.enter_mode(ArtMode::Plain, 1280.0).unwrap();
        session.brush_mut().brush_type = BrushType::Square;
        session.brush_mut().set_size(10, 40);

        session.pointer_down(pos2(50.0, 50.0));
        session.pointer_move(pos2(100.0, 50.0));
        session.pointer_up(pos2(100.0, 50.0));

        let ink = session.canvas().unwrap().ink();
        assert_eq!(raster::alpha_at(ink, 75, 50), 255);
        assert_eq!(raster::alpha_at(ink, 46, 50), 0);
    }
}
