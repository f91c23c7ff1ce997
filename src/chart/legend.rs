//! Legend Content

use serde::{Deserialize, Serialize};

use super::context::RenderContext;
use super::error::ChartResult;
use super::lookup::{first_present, lookup};
use super::payload::{PayloadItem, PayloadValue};
use crate::icon::IconRef;

/// Where the legend sits relative to the plot. Only affects spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub hide_icon: bool,
    pub name_key: Option<String>,
    pub vertical_align: VerticalAlign,
}

/// Marker in front of a legend entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegendMarker {
    Icon { icon: IconRef },
    Swatch { color: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Stable identity of the entry, taken from the item value
    pub id: Option<String>,
    pub marker: LegendMarker,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendView {
    pub vertical_align: VerticalAlign,
    pub entries: Vec<LegendEntry>,
}

impl LegendView {
    /// Entry labels in order, one per line
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.label.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds legend render models for a mounted chart
pub struct LegendRenderer<'a> {
    options: &'a LegendOptions,
}

impl<'a> LegendRenderer<'a> {
    pub fn new(options: &'a LegendOptions) -> Self {
        Self { options }
    }

    /// One entry per payload item, in payload order. `Ok(None)` for an
    /// empty payload; an error when `ctx` has no chart mounted.
    pub fn render(&self, ctx: &RenderContext, payload: &[PayloadItem]) -> ChartResult<Option<LegendView>> {
        let config = ctx.chart()?.config();

        if payload.is_empty() {
            return Ok(None);
        }

        let entries = payload
            .iter()
            .map(|item| {
                let key = first_present([self.options.name_key.as_deref(), item.data_key.as_deref()])
                    .unwrap_or("value");
                let entry = lookup(config, item, key);

                let marker = match entry.and_then(|e| e.icon.clone()) {
                    Some(icon) if !self.options.hide_icon => LegendMarker::Icon { icon },
                    _ => LegendMarker::Swatch {
                        color: item.color.clone(),
                    },
                };

                LegendEntry {
                    id: item.value.as_ref().map(PayloadValue::to_string),
                    marker,
                    label: entry.and_then(|e| e.label.clone()),
                }
            })
            .collect();

        Ok(Some(LegendView {
            vertical_align: self.options.vertical_align,
            entries,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::config::{ChartConfig, SeriesConfig};
    use crate::chart::context::ChartScope;
    use crate::chart::error::ChartError;
    use serde_json::json;

    fn ctx() -> RenderContext {
        let config = ChartConfig::new()
            .with_series("desktop", SeriesConfig::new().label("Desktop"))
            .with_series("mobile", SeriesConfig::new().label("Mobile").icon("mobile"))
            .with_series("tablet", SeriesConfig::new().label("Tablet"));
        RenderContext::new().with_chart(ChartScope::new(Some("l"), config))
    }

    fn item(key: &str, color: &str) -> PayloadItem {
        PayloadItem::new().data_key(key).value(key).color(color)
    }

    #[test]
    fn test_one_entry_per_item_in_order() {
        let options = LegendOptions::default();
        let payload = vec![item("tablet", "#3"), item("desktop", "#1"), item("mobile", "#2")];
        let view = LegendRenderer::new(&options).render(&ctx(), &payload).unwrap().unwrap();

        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.text(), "Tablet\nDesktop\nMobile");
        assert_eq!(
            view.entries[1].marker,
            LegendMarker::Swatch {
                color: Some("#1".into())
            }
        );
        assert_eq!(
            view.entries[2].marker,
            LegendMarker::Icon {
                icon: IconRef::named("mobile")
            }
        );
    }

    #[test]
    fn test_empty_payload_renders_nothing() {
        let options = LegendOptions::default();
        assert!(LegendRenderer::new(&options).render(&ctx(), &[]).unwrap().is_none());
    }

    #[test]
    fn test_hide_icon_uses_swatch() {
        let options = LegendOptions {
            hide_icon: true,
            ..Default::default()
        };
        let view = LegendRenderer::new(&options)
            .render(&ctx(), &[item("mobile", "#2")])
            .unwrap()
            .unwrap();
        assert_eq!(
            view.entries[0].marker,
            LegendMarker::Swatch {
                color: Some("#2".into())
            }
        );
    }

    #[test]
    fn test_alignment_does_not_change_entries() {
        let payload = vec![item("desktop", "#1"), item("mobile", "#2")];
        let top = LegendOptions {
            vertical_align: VerticalAlign::Top,
            ..Default::default()
        };
        let bottom = LegendOptions::default();

        let a = LegendRenderer::new(&top).render(&ctx(), &payload).unwrap().unwrap();
        let b = LegendRenderer::new(&bottom).render(&ctx(), &payload).unwrap().unwrap();
        assert_eq!(a.entries, b.entries);
        assert_ne!(a.vertical_align, b.vertical_align);
    }

    #[test]
    fn test_unknown_series_has_no_label() {
        let options = LegendOptions::default();
        let view = LegendRenderer::new(&options)
            .render(&ctx(), &[item("watch", "#9")])
            .unwrap()
            .unwrap();
        assert_eq!(view.entries[0].label, None);
    }

    #[test]
    fn test_name_key_redirects_lookup() {
        let options = LegendOptions {
            name_key: Some("device".into()),
            ..Default::default()
        };
        let payload = vec![item("desktop", "#1").field("device", json!("tablet"))];
        let view = LegendRenderer::new(&options).render(&ctx(), &payload).unwrap().unwrap();
        assert_eq!(view.text(), "Tablet");
    }

    #[test]
    fn test_empty_name_key_falls_back_to_data_key() {
        let options = LegendOptions {
            name_key: Some(String::new()),
            ..Default::default()
        };
        let view = LegendRenderer::new(&options)
            .render(&ctx(), &[item("desktop", "#1")])
            .unwrap()
            .unwrap();
        assert_eq!(view.text(), "Desktop");
    }

    #[test]
    fn test_identical_inputs_render_identically() {
        let options = LegendOptions::default();
        let payload = vec![item("desktop", "#1"), item("mobile", "#2")];
        let a = LegendRenderer::new(&options).render(&ctx(), &payload).unwrap();
        let b = LegendRenderer::new(&options).render(&ctx(), &payload).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_outside_container_fails() {
        let options = LegendOptions::default();
        let err = LegendRenderer::new(&options)
            .render(&RenderContext::new(), &[item("desktop", "#1")])
            .unwrap_err();
        assert_eq!(err, ChartError::OutsideContainer);
    }
}
