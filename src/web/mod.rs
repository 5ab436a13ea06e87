//! HTTP surface: the daily form on `/` and the charts on `/stats`.

pub mod routes;
pub mod state;
pub mod templates;

pub use state::AppState;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home).post(routes::record))
        .route("/stats", get(routes::stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
