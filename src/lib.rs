//! # HR.360
//!
//! Application shell for the HR.360 dashboard: sidebar navigation, a small
//! client-side route table, and a chart adapter that maps a per-series
//! configuration onto tooltip, legend and theme styling.
//!
//! ## Modules
//!
//! - [`nav`]: Static link table and navbar selection state
//! - [`routing`]: Router paths and placeholder pages
//! - [`chart`]: Chart adapter (config, theming, lookup, tooltip, legend)
//! - [`icon`]: Opaque icon handles
//! - [`config`]: File and environment configuration (feature `server`)
//! - [`api`]: HTTP host for the frontend with Axum (feature `server`)
//!
//! The core modules build for `wasm32` without default features; the
//! Leptos frontend in `hr360-ui` depends on them that way.
//!
//! ## Quick Start
//!
//! ```rust
//! use hr360::nav::{nav_items, ActiveSelection, SelectionSeed};
//! use hr360::routing::Page;
//!
//! let mut selection = ActiveSelection::new(SelectionSeed::Fixed, "/");
//! let link = selection.activate("billing").unwrap();
//! assert_eq!(link.to, "/Billing");
//!
//! let active: Vec<_> = nav_items(&selection).into_iter().filter(|i| i.active).collect();
//! assert_eq!(active.len(), 1);
//!
//! assert_eq!(Page::resolve("/services").map(Page::placeholder), Some("ser"));
//! ```

pub mod chart;
pub mod icon;
pub mod nav;
pub mod routing;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Re-export top-level types for convenience
pub use chart::{
    ChartConfig, ChartError, ChartId, ChartResult, ChartScope, HoverState, LegendOptions,
    LegendRenderer, LegendView, PayloadItem, PayloadValue, RenderContext, SeriesConfig, Theme,
    ThemeColors, TooltipOptions, TooltipRenderer, TooltipView,
};

pub use icon::{IconRef, IconResolver};

pub use nav::{ActiveSelection, NavItem, NavLink, SelectionSeed};

pub use routing::{Page, RouteEntry};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, ShellConfig};
