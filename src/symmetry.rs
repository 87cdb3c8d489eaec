use std::f32::consts::TAU;

use eframe::egui::{Pos2, Vec2};

/// Rotational symmetry around a centre point, used by the mandala mode's
/// auto-mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSymmetry {
    pub center: Pos2,
    pub folds: u32,
}

impl RadialSymmetry {
    pub fn new(center: Pos2, folds: u32) -> Self {
        Self {
            center,
            folds: folds.max(1),
        }
    }

    /// `point` rotated by `fold` steps of `TAU / folds`. Fold 0 is the point itself.
    pub fn rotate(&self, point: Pos2, fold: u32) -> Pos2 {
        if fold % self.folds == 0 {
            return point;
        }
        let angle = TAU * fold as f32 / self.folds as f32;
        let (sin, cos) = angle.sin_cos();
        let d = point - self.center;
        self.center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }

    /// Every rotated copy of `point`, starting with the point itself.
    pub fn images(&self, point: Pos2) -> impl Iterator<Item = Pos2> + '_ {
        (0..self.folds).map(move |fold| self.rotate(point, fold))
    }
}
