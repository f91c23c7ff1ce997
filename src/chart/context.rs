//! Chart Scope and Render Context
//!
//! A mounted chart is a [`ChartScope`]: its scoped id plus the series config
//! it was mounted with. Renderers never look the scope up from anywhere
//! implicit; they are handed a [`RenderContext`] and ask it for the chart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::config::ChartConfig;
use super::error::{ChartError, ChartResult};
use super::theme::chart_style;

static NEXT_CHART: AtomicU64 = AtomicU64::new(1);

/// Scoped chart identifier, always of the form `chart-<id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartId(String);

impl ChartId {
    /// Id for a caller-supplied name, or a generated one when absent
    pub fn new(id: Option<&str>) -> Self {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Self(format!("chart-{}", id)),
            None => Self::generate(),
        }
    }

    /// Generate a process-unique id
    pub fn generate() -> Self {
        let n = NEXT_CHART.fetch_add(1, Ordering::Relaxed);
        let unique = format!(":r{}:", n);
        Self(format!("chart-{}", unique.replace(':', "")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mounted chart container
#[derive(Debug, Clone)]
pub struct ChartScope {
    id: ChartId,
    config: Arc<ChartConfig>,
}

impl ChartScope {
    /// Mount a chart with an optional caller-supplied id
    pub fn new(id: Option<&str>, config: ChartConfig) -> Self {
        let scope = Self {
            id: ChartId::new(id),
            config: Arc::new(config),
        };
        tracing::debug!(chart = %scope.id, series = scope.config.len(), "Chart mounted");
        scope
    }

    pub fn id(&self) -> &ChartId {
        &self.id
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Style block scoping this chart's series colors
    pub fn style(&self) -> Option<String> {
        chart_style(self.id.as_str(), &self.config)
    }
}

/// Request-scoped context threaded through chart renderers
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    chart: Option<ChartScope>,
}

impl RenderContext {
    /// Context with no chart mounted
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for renderers nested inside `scope`
    pub fn with_chart(&self, scope: ChartScope) -> Self {
        Self { chart: Some(scope) }
    }

    /// The enclosing chart.
    ///
    /// Fails with [`ChartError::OutsideContainer`] when nothing is mounted;
    /// renderers must not degrade silently in that case.
    pub fn chart(&self) -> ChartResult<&ChartScope> {
        self.chart.as_ref().ok_or(ChartError::OutsideContainer)
    }
}
