use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::storage::scores::HashMapScoreStorage;
use crate::{health, locations, scoring};
use axum::{routing::get, routing::post, Router};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext<HashMapScoreStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let scoring_routes = Router::new()
        .route("/", post(scoring::handlers::submit))
        .route("/:session-id", get(scoring::handlers::session));
    let locations_routes = Router::new()
        .route("/", get(locations::handlers::list))
        .route("/:code/random-area", get(locations::handlers::random_area));

    Router::new()
        .nest("/health", health_routes)
        .nest("/scoring", scoring_routes)
        .nest("/locations", locations_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
