//! UI Components
//!
//! Reusable Leptos components for the shell.

pub mod chart;
pub mod icon;
pub mod navbar;
pub mod navbar_header;
pub mod plot;

pub use chart::{ChartContainer, ChartLegendContent, ChartTooltipContent};
pub use icon::Icon;
pub use navbar::Navbar;
pub use navbar_header::NavbarHeader;
pub use plot::{LinePlot, PlotData};
