//! Dashboard API router.
//!
//! Returns a composable `Router` serving the JSON API under `/api/`.
//! All state is the immutable record store; there is no auth and no
//! middleware beyond permissive CORS for the demo dashboard.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::store::RecordStore;

/// Build the dashboard API router.
pub fn dashboard_router(store: Arc<RecordStore>) -> Router {
    let ctx = ApiContext::new(store);

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/patients", get(endpoints::patients::list))
        .route("/patients/:id", get(endpoints::patients::detail))
        .route("/knowledge/:condition", get(endpoints::knowledge::lookup))
        .route("/analyze", post(endpoints::analysis::analyze))
        .route("/analyze/image", post(endpoints::imaging::analyze))
        .route("/realtime/:id", get(endpoints::realtime::reading))
        .route("/images/:id", get(endpoints::imaging::list))
        .route(
            "/predict/progression/:id",
            get(endpoints::progression::predict),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}
