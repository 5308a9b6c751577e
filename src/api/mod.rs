//! HTTP API module for the settlement engine.
//!
//! This module provides the REST API endpoints for computing CLT
//! settlements and past-due suggested values.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, MAX_AMOUNT, MAX_HOURS, MAX_PERCENT, MAX_QUANTITY, PastDueItemRequest,
    PeriodRequest, SuggestedValueRequest, parse_date,
};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, SuggestedValueResponse};
pub use state::AppState;
