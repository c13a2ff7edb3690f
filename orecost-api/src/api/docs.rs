//! API documentation serving
//!
//! Serves the embedded OpenAPI spec and a Swagger UI page. Both are
//! served under `/docs` as well as at the root so the service works
//! behind path-based reverse proxies. CORS is wide open here; the docs
//! are public by definition.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

const OPENAPI_YAML: &str = include_str!("../../docs/openapi.yaml");
const SWAGGER_HTML: &str = include_str!("../../docs/swagger.html");

/// Base URL written into the embedded spec at build time
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Inject the runtime public URL into the spec's server entry.
fn rendered_spec(public_url: Option<&str>) -> String {
    match public_url {
        Some(url) => OPENAPI_YAML.replace(DEFAULT_SERVER_URL, url.trim_end_matches('/')),
        None => OPENAPI_YAML.to_string(),
    }
}

/// GET /openapi.yaml and /docs/openapi.yaml
pub async fn serve_spec(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/yaml")],
        rendered_spec(state.public_url.as_deref()),
    )
        .into_response()
}

/// GET /docs
///
/// Serves the Swagger UI page
pub async fn serve_docs() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

/// Build documentation routes
pub fn docs_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/openapi.yaml", get(serve_spec))
        .route("/docs/openapi.yaml", get(serve_spec))
        .route("/docs", get(serve_docs))
        .layer(cors)
}
