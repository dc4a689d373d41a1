#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the selectors the dashboard components emit stay present in the shared
theme at ui/assets/theme/main.css, which the desktop shell embeds at compile
time. A substring check is enough to catch a rename or a dropped block.

When a component class changes, update the markup, the theme and
REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    // Page states
    ".dashboard-loading",
    ".dashboard-loading__spinner",
    ".dashboard-error",
    ".dashboard-error__message",
    // Dashboard grid
    ".dashboard__stats",
    ".dashboard__charts",
    ".dashboard__insight-grid",
    // Stat cards, one modifier per accent
    ".stat-card {",
    ".stat-card--cyan",
    ".stat-card--pink",
    ".stat-card--purple",
    ".stat-card--green",
    ".stat-card--orange",
    ".stat-card__value",
    // Charts
    ".chart-panel",
    ".chart-panel__empty",
    ".chart__slice",
    ".chart__bar",
    ".chart__gridline",
    ".chart__ring-track",
    ".chart-legend__swatch",
    ".chart-tooltip",
    // Insights
    ".insight-card",
    ".insight-card__value",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn stat_card_modifiers_match_theme_colors() {
    use ui::core::palette::ThemeColor;

    for theme in [
        ThemeColor::Cyan,
        ThemeColor::Pink,
        ThemeColor::Green,
        ThemeColor::Purple,
        ThemeColor::Orange,
    ] {
        let selector = format!(".{}", theme.css_class());
        assert!(
            THEME_CSS.contains(&selector),
            "Stat card modifier `{selector}` has no rule in the theme"
        );
    }
}
