//! Chart Routes
//!
//! Server-side rendering of the chart adapter's outputs.
//!
//! - POST /api/v1/chart/style - Theme style block (text/css)
//! - POST /api/v1/chart/tooltip - Tooltip render model
//! - POST /api/v1/chart/legend - Legend render model

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::api::dto::{LegendRequest, StyleRequest, TooltipRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::chart::{
    ChartConfig, ChartError, ChartScope, LegendRenderer, LegendView, RenderContext,
    TooltipRenderer, TooltipView,
};

/// Parse a chart request. An unusable `config` is a chart config error; any
/// other malformed field is a validation error.
fn parse<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    if let Some(config) = body.get("config") {
        ChartConfig::deserialize(config).map_err(ChartError::from)?;
    }
    serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))
}

/// POST /api/v1/chart/style
///
/// 204 when no series declares a color.
pub async fn render_style(Json(body): Json<Value>) -> ApiResult<Response> {
    let request: StyleRequest = parse(body)?;
    let scope = ChartScope::new(request.id.as_deref(), request.config);

    Ok(match scope.style() {
        Some(css) => ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// POST /api/v1/chart/tooltip
pub async fn render_tooltip(Json(body): Json<Value>) -> ApiResult<Json<Option<TooltipView>>> {
    let request: TooltipRequest = parse(body)?;
    let ctx = RenderContext::new().with_chart(ChartScope::new(request.id.as_deref(), request.config));

    let view = TooltipRenderer::new(&request.options).render(&ctx, &request.hover)?;
    Ok(Json(view))
}

/// POST /api/v1/chart/legend
pub async fn render_legend(Json(body): Json<Value>) -> ApiResult<Json<Option<LegendView>>> {
    let request: LegendRequest = parse(body)?;
    let ctx = RenderContext::new().with_chart(ChartScope::new(request.id.as_deref(), request.config));

    let view = LegendRenderer::new(&request.options).render(&ctx, &request.payload)?;
    Ok(Json(view))
}
