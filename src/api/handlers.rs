//! HTTP request handlers for the settlement engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_settlement, suggested_value};

use super::request::{CalculationRequest, SuggestedValueRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, SuggestedValueResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/past-due/suggested-value", post(suggested_value_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the settlement result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = match request.into_input() {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid calculation request"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let rates = state.config().statutory_rates();
    let result = calculate_settlement(&input, &rates);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        calculator = input.calculator.title(),
        periods_count = input.periods.len(),
        past_due_count = input.past_due_items.len(),
        total = %result.total,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        title: input.calculator.title().to_string(),
        synopsis: input.calculator.synopsis().to_string(),
        formatted_total: result.formatted_total(),
        result,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /past-due/suggested-value endpoint.
///
/// Returns the value a past-due item of the given kind would take in Auto
/// mode.
async fn suggested_value_handler(
    payload: Result<Json<SuggestedValueRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid suggested value request"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let value = suggested_value(request.kind, request.quantity, request.salary);
    info!(
        correlation_id = %correlation_id,
        kind = ?request.kind,
        value = %value,
        "Suggested value computed"
    );

    let response = SuggestedValueResponse {
        kind: request.kind,
        value,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
