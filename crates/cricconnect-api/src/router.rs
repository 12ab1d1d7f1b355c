use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{matches, messages, predictions, root, stats};

/// Chat bodies are tiny; anything larger is rejected before parsing.
const MAX_BODY_BYTES: usize = 16 * 1024;

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = state
        .config
        .frontend_url
        .parse()
        .with_context(|| format!("Invalid frontend URL '{}'", state.config.frontend_url))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let chat_routes = Router::new()
        .route("/messages", get(messages::get_messages).post(messages::send_message))
        .route("/messages/stats", get(stats::get_stats))
        .route("/messages/{id}", delete(messages::delete_message))
        // Paths used by the original web client
        .route("/chat", get(messages::get_messages).post(messages::send_message))
        .route("/chat/stats/summary", get(stats::get_stats))
        .route("/chat/{id}", delete(messages::delete_message));

    let catalog_routes = Router::new()
        .route("/matches", get(matches::list_matches))
        .route("/matches/live/count", get(matches::get_live_count))
        .route("/matches/{id}", get(matches::get_match))
        .route("/predictions", get(predictions::list_predictions))
        .route("/predictions/upcoming/matches", get(predictions::upcoming_predictions))
        .route("/predictions/{id}", get(predictions::get_prediction));

    let app = Router::new()
        .route("/", get(root::index))
        .nest("/api", chat_routes.merge(catalog_routes))
        // Must follow the routes it covers: a known path with an unsupported
        // method gets the same JSON 404 as an unknown path.
        .method_not_allowed_fallback(root::not_found)
        .fallback(root::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
