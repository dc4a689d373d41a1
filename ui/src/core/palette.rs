//! Colours used by cards and charts.

use std::borrow::Cow;
use std::fmt;

/// A CSS colour value (hex in the defaults, anything CSS accepts in overrides).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<&'static str> for Color {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const CYAN: Color = Color::from_static("#06b6d4");
pub const PINK: Color = Color::from_static("#ec4899");
pub const PURPLE: Color = Color::from_static("#8b5cf6");
pub const GREEN: Color = Color::from_static("#10b981");
pub const ORANGE: Color = Color::from_static("#f97316");
pub const BLUE: Color = Color::from_static("#3b82f6");
pub const YELLOW: Color = Color::from_static("#eab308");
pub const RED: Color = Color::from_static("#ef4444");
pub const TEAL: Color = Color::from_static("#14b8a6");
pub const INDIGO: Color = Color::from_static("#6366f1");

/// Fill used when a chart record carries no colour.
pub const DEFAULT_FILL: Color = Color::from_static("#94a3b8");

pub const DEFAULT_PALETTE: [Color; 10] = [
    CYAN, PINK, PURPLE, GREEN, ORANGE, BLUE, YELLOW, RED, TEAL, INDIGO,
];

/// Closed set of accent themes for stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Cyan,
    Pink,
    Green,
    Purple,
    Orange,
}

impl ThemeColor {
    pub fn color(self) -> Color {
        match self {
            ThemeColor::Cyan => CYAN,
            ThemeColor::Pink => PINK,
            ThemeColor::Green => GREEN,
            ThemeColor::Purple => PURPLE,
            ThemeColor::Orange => ORANGE,
        }
    }

    /// BEM modifier for `.stat-card`, e.g. `stat-card--pink`.
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeColor::Cyan => "stat-card--cyan",
            ThemeColor::Pink => "stat-card--pink",
            ThemeColor::Green => "stat-card--green",
            ThemeColor::Purple => "stat-card--purple",
            ThemeColor::Orange => "stat-card--orange",
        }
    }
}

/// Ordered colours reused cyclically by record position.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Colour for the record at `index`; wraps around the palette.
    pub fn color_at(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return DEFAULT_FILL;
        }
        self.colors[index % self.colors.len()].clone()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}

/// Explicit label → colour assignments with a fallback for unknown labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryColors {
    assignments: Vec<(String, Color)>,
    fallback: Color,
}

impl CategoryColors {
    pub fn new(fallback: Color) -> Self {
        Self {
            assignments: Vec::new(),
            fallback,
        }
    }

    pub fn with(mut self, label: impl Into<String>, color: Color) -> Self {
        let label = label.into();
        self.assignments.retain(|(existing, _)| *existing != label);
        self.assignments.push((label, color));
        self
    }

    pub fn color_for(&self, label: &str) -> Color {
        self.assignments
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, color)| color.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }

    /// Default gender colours.
    pub fn gender() -> Self {
        Self::new(PURPLE).with("Female", PINK).with("Male", CYAN)
    }
}

/// Everything the metric transformer needs to colour records.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub palette: Palette,
    pub gender_colors: CategoryColors,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            gender_colors: CategoryColors::gender(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_index() {
        let palette = Palette::default();
        assert!(palette.len() >= 10);
        assert_eq!(palette.color_at(0), palette.color_at(palette.len()));
        assert_eq!(palette.color_at(3), palette.color_at(3 + 2 * palette.len()));
    }

    #[test]
    fn empty_palette_falls_back() {
        let palette = Palette::new(Vec::new());
        assert_eq!(palette.color_at(7), DEFAULT_FILL);
    }

    #[test]
    fn default_palette_colors_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in DEFAULT_PALETTE {
            assert!(seen.insert(color));
        }
    }

    #[test]
    fn gender_colors_use_fallback_for_unknown_labels() {
        let colors = CategoryColors::gender();
        assert_eq!(colors.color_for("Female"), PINK);
        assert_eq!(colors.color_for("Male"), CYAN);
        assert_eq!(colors.color_for("Non-binary"), PURPLE);
    }

    #[test]
    fn later_assignment_replaces_earlier() {
        let colors = CategoryColors::new(DEFAULT_FILL)
            .with("Female", PINK)
            .with("Female", ORANGE);
        assert_eq!(colors.color_for("Female"), ORANGE);
    }
}
