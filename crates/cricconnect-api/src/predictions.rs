use axum::{
    Json,
    extract::{Path, Query, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use cricconnect_types::api::{DataEnvelope, ListEnvelope};
use cricconnect_types::models::Prediction;

use crate::catalog::{self, filter_value};
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionQuery {
    pub match_type: Option<String>,
}

pub fn filter_predictions(
    predictions: Vec<Prediction>,
    query: &PredictionQuery,
) -> Vec<Prediction> {
    let match_type = filter_value(query.match_type.as_deref());

    predictions
        .into_iter()
        .filter(|p| match_type.as_deref().is_none_or(|t| p.match_type.as_str() == t))
        .collect()
}

/// GET /api/predictions
pub async fn list_predictions(
    query: Result<Query<PredictionQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(ApiError::from)?;
    let predictions = filter_predictions(catalog::predictions(), &query);
    Ok(Json(ListEnvelope::new(predictions)))
}

/// GET /api/predictions/{id}
pub async fn get_prediction(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let prediction_id: u32 = id.parse().map_err(|_| ApiError::MalformedId(id))?;

    catalog::predictions()
        .into_iter()
        .find(|p| p.id == prediction_id)
        .map(|p| Json(DataEnvelope::ok(p)))
        .ok_or(ApiError::NotFound("Prediction not found"))
}

/// GET /api/predictions/upcoming/matches
///
/// Every prediction counts as upcoming; the catalog carries display dates only.
pub async fn upcoming_predictions() -> impl IntoResponse {
    let mut listing = ListEnvelope::new(catalog::predictions());
    listing.message = Some("These are AI-powered predictions for upcoming matches".into());
    Json(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_match_type() {
        let by = |t: Option<&str>| -> Vec<u32> {
            let query = PredictionQuery { match_type: t.map(str::to_string) };
            filter_predictions(catalog::predictions(), &query).iter().map(|p| p.id).collect()
        };

        assert_eq!(by(None), [1, 2, 3, 4]);
        assert_eq!(by(Some("odi")), [1, 4]);
        assert_eq!(by(Some("TEST")), [3]);
        assert_eq!(by(Some("All")), [1, 2, 3, 4]);
    }
}
