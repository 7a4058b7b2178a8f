use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    chart,
    error::TripCostError,
    estimator::{CostEstimator, EstimateRequest},
    models::{CityListing, CostEstimate, Currency},
};

#[derive(Serialize, Deserialize)]
pub struct ApiCity {
    pub city: String,
    pub distance_km: f64,
}

impl From<&CityListing> for ApiCity {
    fn from(listing: &CityListing) -> Self {
        Self {
            city: listing.city.clone(),
            distance_km: listing.distance_km,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiEstimate {
    pub transport_cost: f64,
    pub hotel_cost: f64,
    pub food_cost: f64,
    pub total_min: f64,
    pub total_max: f64,
    pub currency: Currency,
    pub pie_chart_svg: String,
}

impl ApiEstimate {
    fn new(estimate: &CostEstimate, pie_chart_svg: String) -> Self {
        Self {
            transport_cost: estimate.transport_cost,
            hotel_cost: estimate.hotel_cost,
            food_cost: estimate.food_cost,
            total_min: estimate.total_min,
            total_max: estimate.total_max,
            currency: estimate.currency,
            pie_chart_svg,
        }
    }
}

/// Error body returned alongside a non-success status so the UI can re-prompt
#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

type ApiFailure = (StatusCode, Json<ApiError>);

fn failure(err: &TripCostError) -> ApiFailure {
    let status = match err {
        TripCostError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        TripCostError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ApiError {
            error: err.user_message(),
        }),
    )
}

pub fn router(estimator: Arc<CostEstimator>) -> Router {
    Router::new()
        .route("/countries", get(get_countries))
        .route("/cities/{country}", get(get_cities))
        .route("/estimate", post(post_estimate))
        .with_state(estimator)
}

async fn get_countries(State(estimator): State<Arc<CostEstimator>>) -> Json<Vec<String>> {
    let countries = estimator
        .countries()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(countries)
}

async fn get_cities(
    State(estimator): State<Arc<CostEstimator>>,
    Path(country): Path<String>,
) -> Json<Vec<ApiCity>> {
    // Unknown countries return an empty list, not an error
    let cities = estimator.cities(&country).iter().map(ApiCity::from).collect();
    Json(cities)
}

async fn post_estimate(
    State(estimator): State<Arc<CostEstimator>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<ApiEstimate>, ApiFailure> {
    let estimate = estimator.calculate(&request).map_err(|e| {
        tracing::debug!("estimate rejected: {e}");
        failure(&e)
    })?;
    let svg = chart::pie_chart_svg(&estimate).map_err(|e| failure(&e))?;
    Ok(Json(ApiEstimate::new(&estimate, svg)))
}
