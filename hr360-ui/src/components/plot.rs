//! Line Plot
//!
//! Category line chart drawn on an HTML5 canvas. Series colors are read from
//! the enclosing chart container's CSS custom properties, and pointer
//! movement is reported as a [`HoverState`] for tooltip content.

use hr360::chart::{color_var, HoverState, PayloadItem};
use leptos::*;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FALLBACK_COLOR: &str = "#6b7280";

/// Values for a category chart
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// Series keys, matching the chart configuration
    pub keys: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    /// `values[category][series]`
    pub values: Vec<Vec<f64>>,
}

impl PlotData {
    /// Source row of one category, as the drawing surface reports it
    fn row(&self, index: usize) -> Value {
        let mut row = Map::new();
        if let Some(category) = self.categories.get(index) {
            row.insert("category".to_string(), Value::from(*category));
        }
        if let Some(values) = self.values.get(index) {
            for (key, value) in self.keys.iter().zip(values) {
                row.insert(key.to_string(), Value::from(*value));
            }
        }
        Value::Object(row)
    }

    /// Hover report for the category at `index`
    pub fn hover_at(&self, index: usize) -> HoverState {
        let Some(values) = self.values.get(index) else {
            return HoverState::default();
        };
        let row = self.row(index);
        let payload = self
            .keys
            .iter()
            .zip(values)
            .map(|(key, value)| {
                PayloadItem::new()
                    .data_key(*key)
                    .name(*key)
                    .value(*value)
                    .color(format!("var({})", color_var(key)))
                    .row(row.clone())
            })
            .collect();

        HoverState {
            active: true,
            label: self.categories.get(index).map(|c| Value::from(*c)),
            payload,
        }
    }

    /// Legend payload: one item per series
    pub fn legend_payload(&self) -> Vec<PayloadItem> {
        self.keys
            .iter()
            .map(|key| {
                PayloadItem::new()
                    .data_key(*key)
                    .value(*key)
                    .color(format!("var({})", color_var(key)))
            })
            .collect()
    }
}

/// Category index under a pointer at `offset_x` on a surface `width` wide
pub fn hover_index(offset_x: f64, width: f64, count: usize) -> Option<usize> {
    if count == 0 || width <= 0.0 || offset_x < 0.0 || offset_x >= width {
        return None;
    }
    let index = (offset_x / (width / count as f64)).floor() as usize;
    Some(index.min(count - 1))
}

/// Canvas line plot
#[component]
pub fn LinePlot(
    data: PlotData,
    /// Receives the hover report as the pointer moves
    on_hover: Callback<HoverState>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let count = data.categories.len();
    let hover_data = data.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_plot(&canvas, &data);
        }
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let width = canvas.client_width() as f64;
        match hover_index(ev.offset_x() as f64, width, count) {
            Some(index) => on_hover.call(hover_data.hover_at(index)),
            None => on_hover.call(HoverState::default()),
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
            on:mousemove=on_move
            on:mouseleave=move |_| on_hover.call(HoverState::default())
        />
    }
}

/// Resolved value of a series color property on the canvas
fn series_color(canvas: &HtmlCanvasElement, key: &str) -> String {
    window()
        .get_computed_style(canvas)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value(&color_var(key)).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

fn draw_plot(canvas: &HtmlCanvasElement, data: &PlotData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 20.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    let max = data
        .values
        .iter()
        .flatten()
        .copied()
        .fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max * 1.1 } else { 1.0 };

    // Horizontal grid lines
    ctx.set_stroke_style(&"#e5e7eb".into()); // gray-200
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();
    }

    let count = data.categories.len();
    if count == 0 {
        return;
    }
    let step = chart_width / count as f64;
    let x_at = |i: usize| margin_left + step * (i as f64 + 0.5);
    let y_at = |v: f64| margin_top + ((max - v) / max) * chart_height;

    for (series, key) in data.keys.iter().enumerate() {
        let color = series_color(canvas, key);
        ctx.set_stroke_style(&color.as_str().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, values) in data.values.iter().enumerate() {
            let Some(value) = values.get(series) else {
                continue;
            };
            if i == 0 {
                ctx.move_to(x_at(i), y_at(*value));
            } else {
                ctx.line_to(x_at(i), y_at(*value));
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.as_str().into());
        for (i, values) in data.values.iter().enumerate() {
            if let Some(value) = values.get(series) {
                ctx.begin_path();
                let _ = ctx.arc(x_at(i), y_at(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }

    // Category labels
    ctx.set_fill_style(&"#6b7280".into()); // gray-500
    ctx.set_font("12px sans-serif");
    for (i, category) in data.categories.iter().enumerate() {
        let label: String = category.chars().take(3).collect();
        let _ = ctx.fill_text(&label, x_at(i) - 10.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlotData {
        PlotData {
            keys: vec!["desktop", "mobile"],
            categories: vec!["January", "February"],
            values: vec![vec![186.0, 80.0], vec![305.0, 200.0]],
        }
    }

    #[test]
    fn test_hover_index() {
        assert_eq!(hover_index(0.0, 600.0, 6), Some(0));
        assert_eq!(hover_index(599.0, 600.0, 6), Some(5));
        assert_eq!(hover_index(250.0, 600.0, 6), Some(2));
        assert_eq!(hover_index(-1.0, 600.0, 6), None);
        assert_eq!(hover_index(10.0, 600.0, 0), None);
    }

    #[test]
    fn test_hover_at_builds_payload() {
        let hover = sample().hover_at(1);
        assert!(hover.active);
        assert_eq!(hover.label, Some(Value::from("February")));
        assert_eq!(hover.payload.len(), 2);
        assert_eq!(hover.payload[0].data_key.as_deref(), Some("desktop"));
        assert_eq!(hover.payload[1].color.as_deref(), Some("var(--color-mobile)"));
        assert_eq!(hover.payload[0].row_string_field("category"), Some("February"));
    }

    #[test]
    fn test_hover_out_of_range_is_inactive() {
        assert!(!sample().hover_at(7).active);
    }

    #[test]
    fn test_legend_payload() {
        let payload = sample().legend_payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[1].data_key.as_deref(), Some("mobile"));
    }
}
