use axum::{
    Json,
    extract::OriginalUri,
    http::StatusCode,
    response::IntoResponse,
};

use cricconnect_types::api::{Endpoints, ErrorBody, ServiceInfo};

/// GET /: liveness check plus a map of the resource roots.
pub async fn index() -> impl IntoResponse {
    Json(ServiceInfo {
        success: true,
        message: "CricConnect API is running!".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        endpoints: Endpoints {
            matches: "/api/matches".into(),
            chat: "/api/chat".into(),
            messages: "/api/messages".into(),
            predictions: "/api/predictions".into(),
        },
    })
}

/// Fallback for unknown paths.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            path: Some(uri.to_string()),
            ..ErrorBody::new("Route not found")
        }),
    )
}
