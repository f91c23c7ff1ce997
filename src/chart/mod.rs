//! Chart Adapter
//!
//! Adapts a drawing surface's tooltip and legend payloads to a shared,
//! per-chart series configuration.
//!
//! - [`config`]: series labels, icons and colors
//! - [`theme`]: light/dark scopes and CSS custom property emission
//! - [`context`]: chart scopes and the render context renderers receive
//! - [`lookup`]: resolving the config entry for a payload item
//! - [`tooltip`] / [`legend`]: render models for hover and legend content
//!
//! ```rust
//! use hr360::chart::*;
//!
//! let config = ChartConfig::new()
//!     .with_series("desktop", SeriesConfig::new().label("Desktop").color("#2563eb"));
//! let ctx = RenderContext::new().with_chart(ChartScope::new(Some("visitors"), config));
//!
//! let hover = HoverState {
//!     active: true,
//!     label: None,
//!     payload: vec![PayloadItem::new().data_key("desktop").name("desktop").value(186.0)],
//! };
//! let options = TooltipOptions::default();
//! let tooltip = TooltipRenderer::new(&options).render(&ctx, &hover)?.unwrap();
//! assert_eq!(tooltip.text(), "Desktop\nDesktop 186");
//! # Ok::<(), ChartError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod legend;
pub mod lookup;
pub mod payload;
pub mod theme;
pub mod tooltip;

pub use config::{ChartConfig, SeriesColor, SeriesConfig, ThemeColors};
pub use context::{ChartId, ChartScope, RenderContext};
pub use error::{ChartError, ChartResult};
pub use legend::{LegendEntry, LegendMarker, LegendOptions, LegendRenderer, LegendView, VerticalAlign};
pub use lookup::{effective_key, lookup};
pub use payload::{format_number, PayloadItem, PayloadValue};
pub use theme::{chart_style, color_var, Theme};
pub use tooltip::{
    FormatterInput, HoverState, Indicator, RowMarker, TooltipOptions, TooltipRenderer, TooltipRow,
    TooltipView,
};
