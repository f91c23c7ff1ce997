//! HR.360 HTTP Host
//!
//! Serves the compiled frontend and a small JSON API over the shell and
//! chart adapter, built with Axum.
//!
//! # Endpoints
//!
//! ## Shell
//! - `GET /api/v1/links` - Sidebar link table
//! - `GET /api/v1/routes` - Router table
//! - `GET /api/v1/routes/resolve?path=` - Match a path against the router
//! - `GET /api/v1/nav?path=&selected=` - Navbar render model
//!
//! ## Chart
//! - `POST /api/v1/chart/style` - Theme style block
//! - `POST /api/v1/chart/tooltip` - Tooltip render model
//! - `POST /api/v1/chart/legend` - Legend render model
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Any other path is served from the asset directory, falling back to
//! `index.html` so client-side routes load the app.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Shell routes
        .route("/links", get(routes::shell::list_links))
        .route("/routes", get(routes::shell::list_routes))
        .route("/routes/resolve", get(routes::shell::resolve_route))
        .route("/nav", get(routes::shell::nav_model))
        // Chart routes
        .route("/chart/style", post(routes::chart::render_style))
        .route("/chart/tooltip", post(routes::chart::render_tooltip))
        .route("/chart/legend", post(routes::chart::render_legend));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let assets_dir = state.server.assets_dir.clone();
    let frontend = ServeDir::new(&assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));

    let cors = cors_layer(&state.server.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.server.addr();
    if !state.assets_available() {
        tracing::warn!(
            "No index.html under {:?}; build the frontend with `trunk build` in hr360-ui",
            state.server.assets_dir
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HR.360 listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("HR.360 shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, ShellConfig};
    use crate::nav::SelectionSeed;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    fn create_test_app(seed: SelectionSeed) -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>hr360</html>").unwrap();

        let server = ServerConfig {
            assets_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let shell = ShellConfig {
            selection_seed: seed,
        };

        (build_router(AppState::new(server, shell)), dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        assert_eq!(get(app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        assert_eq!(get(app, "/health/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_not_ready_without_assets() {
        let dir = tempdir().unwrap();
        let server = ServerConfig {
            assets_dir: dir.path().join("dist"),
            ..Default::default()
        };
        let app = build_router(AppState::new(server, ShellConfig::default()));

        assert_eq!(
            get(app.clone(), "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        let health = body_json(get(app, "/health").await).await;
        assert_eq!(health["status"], "degraded");
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let health = body_json(get(app, "/health").await).await;
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["assets"], "ok");
    }

    #[tokio::test]
    async fn test_list_links() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let links = body_json(get(app, "/api/v1/links").await).await;

        let links = links.as_array().unwrap();
        assert_eq!(links.len(), 7);
        assert_eq!(links[0], json!({"value": "dashboard", "name": "Dashboard", "to": "/", "icon": "home"}));
    }

    #[tokio::test]
    async fn test_list_routes() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let routes = body_json(get(app, "/api/v1/routes").await).await;
        assert_eq!(routes[2], json!({"page": "services", "path": "/services", "placeholder": "ser"}));
    }

    #[tokio::test]
    async fn test_resolve_route() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let hit = body_json(get(app.clone(), "/api/v1/routes/resolve?path=%2Fcontact").await).await;
        assert_eq!(hit["page"], "contact");
        assert_eq!(hit["placeholder"], "cont");

        let miss = body_json(get(app, "/api/v1/routes/resolve?path=%2FBilling").await).await;
        assert!(miss["page"].is_null());
    }

    #[tokio::test]
    async fn test_nav_fixed_seed() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let nav = body_json(get(app, "/api/v1/nav?path=%2FBilling").await).await;

        assert_eq!(nav["active"], "dashboard");
        let active: Vec<_> = nav["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|item| item["active"] == true)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["value"], "dashboard");
    }

    #[tokio::test]
    async fn test_nav_route_seed_and_activation() {
        let (app, _dir) = create_test_app(SelectionSeed::FromRoute);
        let nav = body_json(get(app.clone(), "/api/v1/nav?path=%2FBilling").await).await;
        assert_eq!(nav["active"], "billing");

        let nav = body_json(get(app.clone(), "/api/v1/nav?path=%2FBilling&selected=rtl").await).await;
        assert_eq!(nav["active"], "rtl");

        let response = get(app, "/api/v1/nav?selected=reports").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chart_style() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let response = post_json(
            app,
            "/api/v1/chart/style",
            r##"{"id": "sales", "config": {"desktop": {"label": "Desktop", "color": "#fff"}}}"##,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/css; charset=utf-8"
        );
        let css = body_text(response).await;
        assert_eq!(css.matches("--color-desktop: #fff;").count(), 2);
        assert!(css.contains(".dark [data-chart=chart-sales]"));
    }

    #[tokio::test]
    async fn test_chart_style_without_colors() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let response = post_json(app, "/api/v1/chart/style", r#"{"config": {"desktop": {"label": "Desktop"}}}"#).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_chart_style_conflicting_colors() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let response = post_json(
            app,
            "/api/v1/chart/style",
            r##"{"config": {"desktop": {"color": "#fff", "theme": {"light": "#000", "dark": "#fff"}}}}"##,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "CHART_CONFIG_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("'desktop'"));
    }

    #[tokio::test]
    async fn test_chart_malformed_request_fields() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let response = post_json(
            app,
            "/api/v1/chart/tooltip",
            r#"{"config": {"desktop": {"label": "Desktop"}}, "hover": "desktop"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chart_invalid_json() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let response = post_json(app, "/api/v1/chart/style", "not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chart_tooltip() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let request = json!({
            "config": {"desktop": {"label": "Desktop"}, "january": {"label": "January"}},
            "hover": {
                "active": true,
                "label": "january",
                "payload": [{"dataKey": "desktop", "name": "desktop", "value": 1860, "color": "#2563eb"}]
            },
            "options": {"indicator": "line"}
        });

        let view = body_json(post_json(app, "/api/v1/chart/tooltip", &request.to_string()).await).await;
        assert_eq!(view["nest_label"], true);
        assert_eq!(view["rows"][0]["label"], "January");
        assert_eq!(view["rows"][0]["name"], "Desktop");
        assert_eq!(view["rows"][0]["value"], "1,860");
        assert_eq!(view["rows"][0]["marker"]["color"], "#2563eb");
    }

    #[tokio::test]
    async fn test_chart_tooltip_numeric_label() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let request = json!({
            "config": {"desktop": {"label": "Desktop"}},
            "hover": {
                "active": true,
                "label": 2024,
                "payload": [{"dataKey": "desktop", "name": "desktop", "value": 12}]
            }
        });

        let response = post_json(app, "/api/v1/chart/tooltip", &request.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let view = body_json(response).await;
        assert_eq!(view["label"], "Desktop");
        assert_eq!(view["rows"][0]["value"], "12");
    }

    #[tokio::test]
    async fn test_chart_tooltip_inactive_is_null() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let request = json!({"config": {}, "hover": {"active": true, "payload": []}});
        let view = body_json(post_json(app, "/api/v1/chart/tooltip", &request.to_string()).await).await;
        assert!(view.is_null());
    }

    #[tokio::test]
    async fn test_chart_legend() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let request = json!({
            "config": {"desktop": {"label": "Desktop"}, "mobile": {"label": "Mobile", "icon": "mobile"}},
            "payload": [
                {"dataKey": "mobile", "value": "mobile", "color": "#60a5fa"},
                {"dataKey": "desktop", "value": "desktop", "color": "#2563eb"}
            ],
            "options": {"vertical_align": "top"}
        });

        let view = body_json(post_json(app, "/api/v1/chart/legend", &request.to_string()).await).await;
        assert_eq!(view["vertical_align"], "top");
        assert_eq!(view["entries"][0]["label"], "Mobile");
        assert_eq!(view["entries"][0]["marker"], json!({"type": "icon", "icon": "mobile"}));
        assert_eq!(view["entries"][1]["marker"], json!({"type": "swatch", "color": "#2563eb"}));
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let (app, _dir) = create_test_app(SelectionSeed::Fixed);
        let response = get(app, "/Billing").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>hr360</html>");
    }
}
