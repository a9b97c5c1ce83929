//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::Location;
use crate::planner::{Algorithm, Policy, PolicyError, RouteRequest, SearchError, Weights};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/route", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The configured network's locations and edges.
async fn network(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_network(state.network()))
}

/// Parse an optional location parameter, falling back to a default.
fn location_or(param: Option<&str>, default: &Location, field: &str) -> Result<Location, AppError> {
    match param {
        Some(name) => Location::parse(name).map_err(|e| AppError::BadRequest {
            message: format!("Invalid {field}: {e}"),
        }),
        None => Ok(default.clone()),
    }
}

/// Combined-policy weights from the query, or the configured default when
/// both are omitted.
fn weights(query: &RouteQuery, default: Weights) -> Result<Weights, AppError> {
    match (query.time_weight, query.cost_weight) {
        (None, None) => Ok(default),
        (Some(time), Some(cost)) => Ok(Weights::new(time, cost)?),
        _ => Err(AppError::BadRequest {
            message: "time_weight and cost_weight must be given together".to_string(),
        }),
    }
}

/// Solve a route between two network locations.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let network = state.network();

    let selector = query.policy.as_deref().ok_or_else(|| AppError::BadRequest {
        message: "Missing policy".to_string(),
    })?;
    // Weights are only read for selectors that need them.
    let policy = match Policy::parse(selector, None) {
        Err(PolicyError::MissingWeights(_)) => {
            Policy::parse(selector, Some(weights(&query, state.config().default_weights)?))?
        }
        parsed => parsed?,
    };

    let algorithm = query
        .algorithm
        .as_deref()
        .map(Algorithm::parse)
        .transpose()?
        .unwrap_or_default();

    let origin = location_or(query.origin.as_deref(), network.origin(), "origin")?;
    let destination = location_or(
        query.destination.as_deref(),
        network.destination(),
        "destination",
    )?;

    let request = RouteRequest::new(origin, destination, policy).with_algorithm(algorithm);
    let entry = state.planner.solve(&request).await?;

    let route = entry
        .as_ref()
        .as_ref()
        .map(|r| RouteView::from_route(r, network.graph()));

    if route.is_none() {
        info!(
            origin = %request.origin,
            destination = %request.destination,
            "no route between locations"
        );
    }

    Ok(Json(RouteResponse {
        origin: request.origin.to_string(),
        destination: request.destination.to_string(),
        policy: policy.label(),
        algorithm: algorithm.to_string(),
        route,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PolicyError> for AppError {
    fn from(e: PolicyError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownLocation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::UnknownAlgorithm(_) | SearchError::Policy(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::NegativeWeight { .. } | SearchError::NegativeCycle { .. } => {
                AppError::Internal {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
