//! Colors and palettes.
//!
//! ## Color
//!
//! Opaque, equality-comparable color identifiers. The engine never looks at
//! RGB values; the UI maps each variant to whatever it draws.
//!
//! ## Palette
//!
//! The fixed, ordered set of colors a round draws its code from and the
//! player cycles through. Entries are distinct and the set is never empty.

use serde::{Deserialize, Serialize};

use super::error::{MastermindError, Result};

/// A named color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl Color {
    /// Lowercase name, matching the config file spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated palette of distinct colors.
///
/// ## Example
///
/// ```
/// use mastermind_core::core::{Color, Palette};
///
/// let palette = Palette::new(vec![Color::Red, Color::Green, Color::Blue]).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.index_of(Color::Blue), Some(2));
///
/// assert!(Palette::new(vec![Color::Red, Color::Red]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette, rejecting empty or duplicate entries.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(MastermindError::configuration("palette is empty"));
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(MastermindError::configuration(format!(
                    "palette lists {color} more than once"
                )));
            }
        }
        Ok(Self { colors })
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Position of `color` in the palette.
    #[must_use]
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// The color following `color`, wrapping from the last entry to the first.
    ///
    /// Colors outside the palette map to the first entry.
    #[must_use]
    pub fn next_after(&self, color: Color) -> Color {
        let next = self
            .index_of(color)
            .map_or(0, |i| (i + 1) % self.colors.len());
        self.colors[next]
    }
}

impl Default for Palette {
    /// White, Red, Green, Blue, Yellow, Magenta, Cyan.
    fn default() -> Self {
        Self {
            colors: vec![
                Color::White,
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Yellow,
                Color::Magenta,
                Color::Cyan,
            ],
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = MastermindError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
