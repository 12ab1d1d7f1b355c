use axum::{
    Json,
    extract::{Path, Query, rejection::QueryRejection},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use cricconnect_types::api::{DataEnvelope, ListEnvelope, LiveCount, LiveCountResponse};
use cricconnect_types::models::{Match, MatchStatus};

use crate::catalog::{self, filter_value};
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    pub status: Option<String>,
    pub match_type: Option<String>,
}

pub fn filter_matches(matches: Vec<Match>, query: &MatchQuery) -> Vec<Match> {
    let status = filter_value(query.status.as_deref());
    let match_type = filter_value(query.match_type.as_deref());

    matches
        .into_iter()
        .filter(|m| status.as_deref().is_none_or(|s| m.status.as_str() == s))
        .filter(|m| match_type.as_deref().is_none_or(|t| m.match_type.as_str() == t))
        .collect()
}

pub fn live_count(matches: &[Match]) -> LiveCount {
    let with_status = |status| matches.iter().filter(|m| m.status == status).count();
    LiveCount {
        total: matches.len(),
        live: with_status(MatchStatus::Live),
        completed: with_status(MatchStatus::Completed),
    }
}

/// GET /api/matches
pub async fn list_matches(
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(ApiError::from)?;
    let matches = filter_matches(catalog::matches(Utc::now()), &query);
    Ok(Json(ListEnvelope::new(matches)))
}

/// GET /api/matches/{id}
pub async fn get_match(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let match_id: u32 = id.parse().map_err(|_| ApiError::MalformedId(id))?;

    catalog::matches(Utc::now())
        .into_iter()
        .find(|m| m.id == match_id)
        .map(|m| Json(DataEnvelope::ok(m)))
        .ok_or(ApiError::NotFound("Match not found"))
}

/// GET /api/matches/live/count
pub async fn get_live_count() -> impl IntoResponse {
    let counts = live_count(&catalog::matches(Utc::now()));
    Json(LiveCountResponse {
        success: true,
        count: counts.live,
        data: counts,
    })
}
