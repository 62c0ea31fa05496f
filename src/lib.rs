pub mod backend;
pub mod config;
pub mod error;
pub mod language;
pub mod routes;
pub mod state;
pub mod translate;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// The full application router with its middleware.
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
