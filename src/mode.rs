use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// The screen the studio is showing. `Home` is the mode picker; every other
/// variant is a drawing mode with its own canvas guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArtMode {
    #[default]
    Home,
    Zentangle,
    Mandala,
    Stencil,
    Plain,
}

impl ArtMode {
    pub const DRAWING_MODES: [ArtMode; 4] = [
        ArtMode::Zentangle,
        ArtMode::Mandala,
        ArtMode::Stencil,
        ArtMode::Plain,
    ];

    pub fn is_drawing_mode(self) -> bool {
        self != ArtMode::Home
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ArtMode::Zentangle => "Zentangle Art",
            ArtMode::Mandala => "Mandala Creation",
            ArtMode::Stencil => "Stencil Drawing",
            ArtMode::Plain => "Free Drawing",
            ArtMode::Home => "Art Studio",
        }
    }

    /// Short name used on the home screen cards.
    pub fn card_title(self) -> &'static str {
        match self {
            ArtMode::Zentangle => "Zentangles",
            ArtMode::Mandala => "Mandalas",
            ArtMode::Stencil => "Stencil Art",
            ArtMode::Plain => "Free Drawing",
            ArtMode::Home => "Home",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ArtMode::Zentangle => {
                "Create intricate patterns with structured repetitive designs and meditative drawing."
            }
            ArtMode::Mandala => {
                "Design symmetrical circular patterns with automatic radial symmetry and guides."
            }
            ArtMode::Stencil => {
                "Use pre-made templates and stencils to create structured artwork with guided shapes."
            }
            ArtMode::Plain => {
                "Express yourself freely with unlimited canvas space and versatile drawing tools."
            }
            ArtMode::Home => "",
        }
    }

    pub fn features(self) -> &'static str {
        match self {
            ArtMode::Zentangle => "Grid guides, Pattern tools, Focus mode",
            ArtMode::Mandala => "Radial symmetry, Circle guides, Auto-mirror",
            ArtMode::Stencil => "Shape templates, Guided drawing, Precision tools",
            ArtMode::Plain => "Free canvas, All brushes, No limits",
            ArtMode::Home => "",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            ArtMode::Zentangle => "Focus on repetitive patterns and enjoy the meditative process.",
            ArtMode::Mandala => "Your strokes will be mirrored radially for perfect symmetry.",
            ArtMode::Stencil => "Use the template guides to create structured designs.",
            ArtMode::Plain => "Express yourself freely with unlimited creative possibilities.",
            ArtMode::Home => "",
        }
    }

    /// Accent colour used for the mode's header and tip box.
    pub fn accent(self) -> Color32 {
        match self {
            ArtMode::Zentangle => Color32::from_rgb(147, 51, 234),
            ArtMode::Mandala => Color32::from_rgb(219, 39, 119),
            ArtMode::Stencil => Color32::from_rgb(79, 70, 229),
            ArtMode::Plain => Color32::from_rgb(22, 163, 74),
            ArtMode::Home => Color32::from_rgb(37, 99, 235),
        }
    }

    /// Lower-case name used in exported file names.
    pub fn slug(self) -> &'static str {
        match self {
            ArtMode::Zentangle => "zentangle",
            ArtMode::Mandala => "mandala",
            ArtMode::Stencil => "stencil",
            ArtMode::Plain => "plain",
            ArtMode::Home => "home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_not_a_drawing_mode() {
        assert!(!ArtMode::Home.is_drawing_mode());
        assert!(ArtMode::DRAWING_MODES.iter().all(|m| m.is_drawing_mode()));
    }

    #[test]
    fn test_names() {
        assert_eq!(ArtMode::Mandala.display_name(), "Mandala Creation");
        assert_eq!(ArtMode::Plain.display_name(), "Free Drawing");
        assert_eq!(ArtMode::Stencil.slug(), "stencil");
    }
}
