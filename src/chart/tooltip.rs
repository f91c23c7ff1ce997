//! Tooltip Content
//!
//! Turns the hovered payload into a render model: an optional heading label
//! and one row per series, each row carrying its marker, display name and
//! formatted value.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::config::ChartConfig;
use super::context::RenderContext;
use super::error::ChartResult;
use super::lookup::{first_present, lookup};
use super::payload::{PayloadItem, PayloadValue};
use crate::icon::IconRef;

/// Shape of the color marker drawn next to each row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Line,
    #[default]
    Dot,
    Dashed,
}

/// Tooltip display options chosen by the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    pub hide_label: bool,
    pub hide_indicator: bool,
    pub indicator: Indicator,
    /// Field used to find each row's series entry
    pub name_key: Option<String>,
    /// Field used to find the heading's series entry
    pub label_key: Option<String>,
    /// Marker color override for every row
    pub color: Option<String>,
}

/// What the drawing surface reports while the pointer is over the chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverState {
    pub active: bool,
    /// Raw label of the hovered position, e.g. the x-axis category. Only
    /// text labels are looked up in the config directly.
    pub label: Option<Value>,
    pub payload: Vec<PayloadItem>,
}

/// Arguments handed to a per-row formatter
#[derive(Debug)]
pub struct FormatterInput<'p> {
    pub value: &'p PayloadValue,
    pub name: &'p str,
    pub item: &'p PayloadItem,
    pub index: usize,
}

pub type LabelFormatter<'a> = &'a dyn Fn(Option<&str>, &[PayloadItem]) -> String;
pub type RowFormatter<'a> = &'a dyn Fn(&FormatterInput<'_>) -> String;

/// Marker in front of a tooltip row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowMarker {
    Icon { icon: IconRef },
    Indicator { indicator: Indicator, color: Option<String> },
    None,
}

/// One tooltip row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipRow {
    /// Row produced entirely by a caller-supplied formatter
    Formatted {
        data_key: Option<String>,
        content: String,
    },
    Series {
        data_key: Option<String>,
        marker: RowMarker,
        /// Heading label, present when it is nested into this row
        label: Option<String>,
        name: Option<String>,
        value: Option<String>,
    },
}

/// Render model of a tooltip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    /// Heading shown above the rows. `None` when absent or nested.
    pub label: Option<String>,
    pub indicator: Indicator,
    pub nest_label: bool,
    pub rows: Vec<TooltipRow>,
}

impl TooltipView {
    /// Plain text content, one line per block
    pub fn text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(label) = &self.label {
            lines.push(label.clone());
        }
        for row in &self.rows {
            match row {
                TooltipRow::Formatted { content, .. } => lines.push(content.clone()),
                TooltipRow::Series {
                    label, name, value, ..
                } => {
                    if let Some(label) = label {
                        lines.push(label.clone());
                    }
                    let parts: Vec<&str> = [name.as_deref(), value.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect();
                    lines.push(parts.join(" "));
                }
            }
        }
        lines.join("\n")
    }
}

/// Builds tooltip render models for a mounted chart
pub struct TooltipRenderer<'a> {
    options: &'a TooltipOptions,
    label_formatter: Option<LabelFormatter<'a>>,
    formatter: Option<RowFormatter<'a>>,
}

impl<'a> TooltipRenderer<'a> {
    pub fn new(options: &'a TooltipOptions) -> Self {
        Self {
            options,
            label_formatter: None,
            formatter: None,
        }
    }

    /// Produce the heading from (resolved label, payload)
    pub fn label_formatter(mut self, f: LabelFormatter<'a>) -> Self {
        self.label_formatter = Some(f);
        self
    }

    /// Replace default row rendering
    pub fn formatter(mut self, f: RowFormatter<'a>) -> Self {
        self.formatter = Some(f);
        self
    }

    /// Render the tooltip for `hover`.
    ///
    /// Returns `Ok(None)` when nothing is hovered, and an error when `ctx`
    /// has no chart mounted.
    pub fn render(&self, ctx: &RenderContext, hover: &HoverState) -> ChartResult<Option<TooltipView>> {
        let config = ctx.chart()?.config();

        if !hover.active || hover.payload.is_empty() {
            return Ok(None);
        }

        let options = self.options;
        let payload = &hover.payload;
        let nest_label = payload.len() == 1 && options.indicator != Indicator::Dot;
        let heading = self.heading(config, hover);

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(payload.len());

        for (index, item) in payload.iter().enumerate() {
            if let Some(data_key) = item.data_key.as_deref() {
                if !seen.insert(data_key) {
                    continue;
                }
            }

            let value = item.value.as_ref().filter(|v| v.is_present());
            let name = item.name.as_deref().filter(|n| !n.is_empty());

            if let (Some(format), Some(value), Some(name)) = (self.formatter, value, name) {
                rows.push(TooltipRow::Formatted {
                    data_key: item.data_key.clone(),
                    content: format(&FormatterInput {
                        value,
                        name,
                        item,
                        index,
                    }),
                });
                continue;
            }

            let key = first_present([
                options.name_key.as_deref(),
                item.name.as_deref(),
                item.data_key.as_deref(),
            ])
            .unwrap_or("value");
            let entry = lookup(config, item, key);

            let marker = match entry.and_then(|e| e.icon.clone()) {
                Some(icon) => RowMarker::Icon { icon },
                None if options.hide_indicator => RowMarker::None,
                None => RowMarker::Indicator {
                    indicator: options.indicator,
                    color: first_present([
                        options.color.as_deref(),
                        item.row_string_field("fill"),
                        item.color.as_deref(),
                    ])
                    .map(str::to_string),
                },
            };

            rows.push(TooltipRow::Series {
                data_key: item.data_key.clone(),
                marker,
                label: if nest_label { heading.clone() } else { None },
                name: entry
                    .and_then(|e| e.label.clone())
                    .filter(|l| !l.is_empty())
                    .or_else(|| name.map(str::to_string)),
                value: value.map(|v| v.to_string()),
            });
        }

        Ok(Some(TooltipView {
            label: if nest_label { None } else { heading },
            indicator: options.indicator,
            nest_label,
            rows,
        }))
    }

    fn heading(&self, config: &ChartConfig, hover: &HoverState) -> Option<String> {
        let options = self.options;
        let item = hover.payload.first()?;
        if options.hide_label {
            return None;
        }

        let label_key = first_present([options.label_key.as_deref()]);
        let key = first_present([label_key, item.data_key.as_deref(), item.name.as_deref()])
            .unwrap_or("value");

        let value = match (label_key, &hover.label) {
            (None, Some(Value::String(raw))) => Some(
                config
                    .get(raw)
                    .and_then(|e| e.label.clone())
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| raw.clone()),
            ),
            _ => lookup(config, item, key).and_then(|e| e.label.clone()),
        };

        if let Some(format) = self.label_formatter {
            return Some(format(value.as_deref(), &hover.payload));
        }

        value.filter(|v| !v.is_empty())
    }
}
