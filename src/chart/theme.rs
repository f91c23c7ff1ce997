//! Chart Theming
//!
//! The fixed light/dark theme set and the per-chart style block that turns
//! series colors into CSS custom properties.

use serde::{Deserialize, Serialize};

use super::config::ChartConfig;

/// A style scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Every theme, in emission order
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// CSS selector prefix scoping the theme. Light is the default scope.
    pub fn selector(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => ".dark",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// CSS custom property name for a series key
pub fn color_var(key: &str) -> String {
    format!("--color-{}", key)
}

/// Build the style block for a chart.
///
/// One rule per theme, scoped by the theme selector and the chart id, with a
/// custom property for every series that declares a color. Returns `None`
/// when no series declares a color.
pub fn chart_style(chart_id: &str, config: &ChartConfig) -> Option<String> {
    let colored: Vec<_> = config
        .iter()
        .filter(|(_, series)| Theme::ALL.iter().any(|theme| series.color_for(*theme).is_some()))
        .collect();

    if colored.is_empty() {
        return None;
    }

    let mut css = String::new();
    for theme in Theme::ALL {
        let scope = match theme.selector() {
            "" => format!("[data-chart={}]", chart_id),
            prefix => format!("{} [data-chart={}]", prefix, chart_id),
        };

        css.push_str(&format!("{} {{\n", scope));
        for (key, series) in &colored {
            if let Some(color) = series.color_for(theme) {
                css.push_str(&format!("  {}: {};\n", color_var(key), color));
            }
        }
        css.push_str("}\n");
    }

    Some(css)
}
