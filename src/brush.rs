use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Vec2};
use image::Rgba;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canvas::LineCap;
use crate::error::{StudioError, StudioResult};

/// Quick-pick colours shown under the colour picker.
pub const PALETTE: [&str; 8] = [
    "#000000", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFA500",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushType {
    #[default]
    Round,
    Square,
    Spray,
    Eraser,
}

impl BrushType {
    pub const ALL: [BrushType; 4] = [
        BrushType::Round,
        BrushType::Square,
        BrushType::Spray,
        BrushType::Eraser,
    ];

    /// Cap used for line strokes; spray has no line.
    pub fn line_cap(self) -> Option<LineCap> {
        match self {
            BrushType::Round | BrushType::Eraser => Some(LineCap::Round),
            BrushType::Square => Some(LineCap::Butt),
            BrushType::Spray => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BrushType::Round => "🖌",
            BrushType::Square => "◼",
            BrushType::Spray => "💧",
            BrushType::Eraser => "⌫",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BrushType::Round => "Round brush",
            BrushType::Square => "Square brush",
            BrushType::Spray => "Spray",
            BrushType::Eraser => "Eraser",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeType {
    /// Freehand drawing with the current brush
    #[default]
    None,
    Rectangle,
    Circle,
    Line,
    Triangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 5] = [
        ShapeType::None,
        ShapeType::Rectangle,
        ShapeType::Circle,
        ShapeType::Line,
        ShapeType::Triangle,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            ShapeType::None => "Free",
            ShapeType::Rectangle => "▭",
            ShapeType::Circle => "○",
            ShapeType::Line => "╱",
            ShapeType::Triangle => "△",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::None => "Freehand",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Circle => "Circle",
            ShapeType::Line => "Line",
            ShapeType::Triangle => "Triangle",
        }
    }
}

/// Everything the tools panel controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub size: u32,
    pub color: Color32,
    pub brush_type: BrushType,
    pub shape: ShapeType,
    /// Clicking drops a small filled square instead of starting a stroke
    pub fill_mode: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: 3,
            color: Color32::BLACK,
            brush_type: BrushType::Round,
            shape: ShapeType::None,
            fill_mode: false,
        }
    }
}

impl BrushSettings {
    pub fn set_size(&mut self, size: u32, max: u32) {
        self.size = size.clamp(1, max.max(1));
    }

    pub fn width(&self) -> f32 {
        self.size as f32
    }

    pub fn rgba(&self) -> Rgba<u8> {
        let [r, g, b, a] = self.color.to_srgba_unmultiplied();
        Rgba([r, g, b, a])
    }
}

/// Parse a `#RRGGBB` colour.
pub fn parse_hex_color(text: &str) -> StudioResult<Color32> {
    let invalid = || StudioError::InvalidColor(text.to_owned());
    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Dot centres for one spray dab: `size * 2` dots at a random angle and a
/// random distance below `size` from `center`.
pub fn spray_dots(center: Pos2, size: u32, rng: &mut impl Rng) -> Vec<Pos2> {
    (0..size * 2)
        .map(|_| {
            let angle = rng.gen_range(0.0..TAU);
            let radius = rng.r#gen::<f32>() * size as f32;
            center + Vec2::angled(angle) * radius
        })
        .collect()
}

/// Radius of each spray dot.
pub const SPRAY_DOT_RADIUS: f32 = 1.0;
