//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartConfig, HoverState, LegendOptions, PayloadItem, TooltipOptions};
use crate::nav::NavItem;
use crate::routing::Page;

// ============================================
// SHELL DTOs
// ============================================

/// Query for the navbar render model
#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    /// Route the navbar is mounted at (seeds the selection)
    #[serde(default)]
    pub path: Option<String>,
    /// Identifier of a link activated after mount
    #[serde(default)]
    pub selected: Option<String>,
}

/// Navbar render model
#[derive(Debug, Serialize)]
pub struct NavResponse {
    pub active: &'static str,
    pub items: Vec<NavItem>,
}

/// Query for route resolution
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

/// Route resolution result. `page` is null for unmatched paths.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub path: String,
    pub page: Option<Page>,
    pub placeholder: Option<&'static str>,
}

// ============================================
// CHART DTOs
// ============================================

/// Style block request
#[derive(Debug, Deserialize)]
pub struct StyleRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub config: ChartConfig,
}

/// Tooltip render request
#[derive(Debug, Deserialize)]
pub struct TooltipRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub config: ChartConfig,
    #[serde(default)]
    pub hover: HoverState,
    #[serde(default)]
    pub options: TooltipOptions,
}

/// Legend render request
#[derive(Debug, Deserialize)]
pub struct LegendRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub config: ChartConfig,
    #[serde(default)]
    pub payload: Vec<PayloadItem>,
    #[serde(default)]
    pub options: LegendOptions,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" or "missing"
    pub assets: String,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub version: String,
}
