use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Named three-stop color ramp used for the dial gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPaletteKind {
    Yellows,
    Blues,
    Viridis,
    Plasma,
    #[default]
    Autumn,
    Cool,
}

impl ColorPaletteKind {
    pub const ALL: [Self; 6] = [
        Self::Yellows,
        Self::Blues,
        Self::Viridis,
        Self::Plasma,
        Self::Autumn,
        Self::Cool,
    ];

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Lookup with the autumn fallback for unknown or missing names.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(Self::lookup).unwrap_or_default()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Yellows => "yellows",
            Self::Blues => "blues",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Autumn => "autumn",
            Self::Cool => "cool",
        }
    }

    #[must_use]
    pub fn palette(self) -> ColorPalette {
        let [color1, color2, color3] = match self {
            Self::Yellows => [(255, 251, 224), (255, 243, 160), (255, 227, 18)],
            Self::Blues => [(225, 255, 255), (115, 185, 223), (23, 139, 202)],
            Self::Viridis => [(255, 255, 0), (25, 156, 51), (21, 43, 163)],
            Self::Plasma => [(255, 241, 51), (255, 59, 147), (10, 66, 171)],
            Self::Autumn => [(255, 255, 0), (255, 153, 102), (255, 0, 0)],
            Self::Cool => [(0, 255, 255), (169, 0, 191), (227, 0, 0)],
        }
        .map(|(red, green, blue)| Color::from_rgb8(red, green, blue));
        ColorPalette {
            kind: self,
            color1,
            color2,
            color3,
        }
    }
}

/// Gradient stops for the dial: `color1` at the minimum end, `color2` at
/// the top, `color3` at the maximum end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub kind: ColorPaletteKind,
    pub color1: Color,
    pub color2: Color,
    pub color3: Color,
}

impl ColorPalette {
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        ColorPaletteKind::from_name(name).palette()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPaletteKind::default().palette()
    }
}
