use crate::error::{CfResult, ColorForgeError};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Violet,
}

impl Color {
    /// Display swatch used by the reporting layer.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#FF4C4C",
            Self::Blue => "#4C6EFF",
            Self::Green => "#4CFF88",
            Self::Yellow => "#FFF44C",
            Self::Pink => "#FF7BF7",
            Self::Violet => "#A64CFF",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

/// Ordered, duplicate-free set of colors taking part in a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> CfResult<Self> {
        if colors.is_empty() {
            return Err(ColorForgeError::InputShape(
                "Palette must contain at least one color".to_string(),
            ));
        }
        if let Some(dup) = first_duplicate(&colors) {
            return Err(ColorForgeError::InputShape(format!(
                "Palette lists '{}' more than once",
                dup
            )));
        }
        Ok(Self { colors })
    }

    /// The six challenge colors in their canonical order.
    pub fn standard() -> Self {
        Self {
            colors: Color::iter().collect(),
        }
    }

    pub fn parse(s: &str) -> CfResult<Self> {
        let colors = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                Color::from_str(token).map_err(|_| {
                    ColorForgeError::Configuration(format!("Unknown color '{}' in palette", token))
                })
            })
            .collect::<CfResult<Vec<_>>>()?;
        Self::new(colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ColorForgeError;

    fn try_from(colors: Vec<Color>) -> CfResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// The target sequence for one challenge. Replaced wholesale on every shuffle.
///
/// Only serialized; reading one back goes through [`ReferenceOrder::from_colors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceOrder {
    colors: Vec<Color>,
}

impl ReferenceOrder {
    pub fn shuffled(palette: &Palette, rng: &mut Rng) -> Self {
        let mut colors = palette.colors().to_vec();
        rng.shuffle(&mut colors);
        Self { colors }
    }

    /// Accepts an explicit order, which must be a permutation of `palette`.
    pub fn from_colors(palette: &Palette, colors: Vec<Color>) -> CfResult<Self> {
        if colors.len() != palette.len() {
            return Err(ColorForgeError::InputShape(format!(
                "Reference order has {} colors, palette has {}",
                colors.len(),
                palette.len()
            )));
        }
        if let Some(dup) = first_duplicate(&colors) {
            return Err(ColorForgeError::InputShape(format!(
                "Reference order lists '{}' more than once",
                dup
            )));
        }
        if let Some(stray) = colors.iter().find(|&&c| !palette.contains(c)) {
            return Err(ColorForgeError::InputShape(format!(
                "Reference order contains '{}' which is not in the palette",
                stray
            )));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

pub(crate) fn first_duplicate(colors: &[Color]) -> Option<Color> {
    let mut seen = HashSet::with_capacity(colors.len());
    colors.iter().copied().find(|&c| !seen.insert(c))
}
