//! Chart Series Configuration
//!
//! Per-series display metadata supplied by the page that mounts a chart.
//! Entries keep the order they were declared in, which is also the order
//! their CSS custom properties are emitted in.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::error::ChartError;
use super::theme::Theme;
use crate::icon::IconRef;

/// Colors for each theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: String,
    pub dark: String,
}

impl ThemeColors {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    pub fn get(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Color declared by a series: a single color or one per theme, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesColor {
    Single(String),
    Themed(ThemeColors),
}

/// Display metadata for one series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeriesConfig", into = "RawSeriesConfig")]
pub struct SeriesConfig {
    pub label: Option<String>,
    pub icon: Option<IconRef>,
    pub color: Option<SeriesColor>,
}

impl SeriesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Use a single color for every theme
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(SeriesColor::Single(color.into()));
        self
    }

    /// Use a color per theme
    pub fn theme(mut self, colors: ThemeColors) -> Self {
        self.color = Some(SeriesColor::Themed(colors));
        self
    }

    /// Color that applies under `theme`, if any. Empty strings count as unset.
    pub fn color_for(&self, theme: Theme) -> Option<&str> {
        let color = match self.color.as_ref()? {
            SeriesColor::Single(color) => color.as_str(),
            SeriesColor::Themed(colors) => colors.get(theme),
        };
        (!color.is_empty()).then_some(color)
    }
}

/// Wire shape of a series entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSeriesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<IconRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeColors>,
}

impl TryFrom<RawSeriesConfig> for SeriesConfig {
    type Error = ChartError;

    fn try_from(raw: RawSeriesConfig) -> Result<Self, Self::Error> {
        let color = match (raw.color, raw.theme) {
            (Some(_), Some(_)) => return Err(ChartError::ConflictingSeriesColor),
            (Some(color), None) => Some(SeriesColor::Single(color)),
            (None, Some(theme)) => Some(SeriesColor::Themed(theme)),
            (None, None) => None,
        };

        Ok(Self {
            label: raw.label,
            icon: raw.icon,
            color,
        })
    }
}

impl From<SeriesConfig> for RawSeriesConfig {
    fn from(series: SeriesConfig) -> Self {
        let (color, theme) = match series.color {
            Some(SeriesColor::Single(color)) => (Some(color), None),
            Some(SeriesColor::Themed(theme)) => (None, Some(theme)),
            None => (None, None),
        };

        Self {
            label: series.label,
            icon: series.icon,
            color,
            theme,
        }
    }
}

/// Ordered mapping from series key to its display metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartConfig {
    entries: Vec<(String, SeriesConfig)>,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ChartConfig::insert`]
    pub fn with_series(mut self, key: impl Into<String>, series: SeriesConfig) -> Self {
        self.insert(key, series);
        self
    }

    /// Insert or replace a series. A replaced series keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, series: SeriesConfig) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = series,
            None => self.entries.push((key, series)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SeriesConfig> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Into<String>> FromIterator<(K, SeriesConfig)> for ChartConfig {
    fn from_iter<I: IntoIterator<Item = (K, SeriesConfig)>>(iter: I) -> Self {
        let mut config = ChartConfig::new();
        for (key, series) in iter {
            config.insert(key, series);
        }
        config
    }
}

impl Serialize for ChartConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, series) in &self.entries {
            map.serialize_entry(key, series)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChartConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = ChartConfig;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of series keys to series configs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = ChartConfig::new();
                while let Some(key) = access.next_key::<String>()? {
                    let raw: RawSeriesConfig = access.next_value()?;
                    if raw.color.is_some() && raw.theme.is_some() {
                        return Err(de::Error::custom(ChartError::ConflictingColor { key }));
                    }
                    let series = SeriesConfig::try_from(raw).map_err(de::Error::custom)?;
                    config.insert(key, series);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
