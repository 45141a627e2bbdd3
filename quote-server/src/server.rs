use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/health",
            get(routes::health::health).head(routes::health::health_head),
        )
        .route("/quotes", post(routes::quotes::create_quote))
        .route("/checkout", post(routes::checkout::create_checkout))
        .route("/jobs", post(routes::jobs::submit_job))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
