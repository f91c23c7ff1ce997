//! Shell Routes
//!
//! Read-only views of the navigation table and the route table.
//!
//! - GET /api/v1/links - Sidebar link table
//! - GET /api/v1/routes - Router table
//! - GET /api/v1/routes/resolve?path= - Match a path
//! - GET /api/v1/nav?path=&selected= - Navbar render model

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{NavQuery, NavResponse, ResolveQuery, ResolveResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::nav::{self, ActiveSelection, NavLink};
use crate::routing::{self, Page, RouteEntry};

/// GET /api/v1/links
pub async fn list_links() -> Json<&'static [NavLink]> {
    Json(nav::links())
}

/// GET /api/v1/routes
pub async fn list_routes() -> Json<Vec<RouteEntry>> {
    Json(routing::route_table())
}

/// GET /api/v1/routes/resolve
pub async fn resolve_route(Query(query): Query<ResolveQuery>) -> Json<ResolveResponse> {
    let page = Page::resolve(&query.path);
    Json(ResolveResponse {
        path: query.path,
        page,
        placeholder: page.map(Page::placeholder),
    })
}

/// GET /api/v1/nav
pub async fn nav_model(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavQuery>,
) -> ApiResult<Json<NavResponse>> {
    let path = query.path.as_deref().unwrap_or("/");
    let mut selection = ActiveSelection::new(state.shell.selection_seed, path);

    if let Some(value) = query.selected.as_deref() {
        selection
            .activate(value)
            .ok_or_else(|| ApiError::NotFound(format!("navigation link '{}'", value)))?;
    }

    Ok(Json(NavResponse {
        active: selection.current(),
        items: nav::nav_items(&selection),
    }))
}
