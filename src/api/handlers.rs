//! HTTP request handlers for the shift earnings API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_home_summary, calculate_amount, ensure_unique_place, plan_registration, window_for,
};
use crate::error::EngineError;
use crate::models::load_shifts;

use super::request::{
    AmountRequest, PeriodRequest, PlaceCheckRequest, RegistrationRequest, SummaryRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/amount", post(amount_handler))
        .route("/period", post(period_handler))
        .route("/summary", post(summary_handler))
        .route("/shifts/plan", post(plan_handler))
        .route("/places/check", post(place_check_handler))
        .with_state(state)
}

/// Handler for POST /amount.
///
/// Computes one shift's amount with its day/night split and audit step.
async fn amount_handler(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing amount request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match calculate_amount(
        request.start,
        request.end,
        request.break_duration,
        request.hourly_wage,
        request.has_night_differential,
        state.rules(),
    ) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                amount = breakdown.amount,
                worked_minutes = breakdown.worked_minutes,
                duration_us = start_time.elapsed().as_micros(),
                "Amount calculated"
            );
            json_response(StatusCode::OK, &breakdown)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /period.
///
/// Resolves the billing window a date falls into for a boundary day.
async fn period_handler(payload: Result<Json<PeriodRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match window_for(request.reference, request.boundary_day) {
        Ok(period) => {
            info!(
                correlation_id = %correlation_id,
                reference = %request.reference,
                boundary_day = request.boundary_day,
                start = %period.start,
                end = %period.end,
                "Period resolved"
            );
            json_response(StatusCode::OK, &period)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /summary.
///
/// Loads the raw shift rows and builds the home overview.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let rules = state.rules();
    let result = load_shifts(&request.shifts, rules).and_then(|shifts| {
        build_home_summary(&shifts, request.now, request.goal_amount, rules)
    });

    match result {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                rows = request.shifts.len(),
                current_amount = summary.current_amount,
                year_amount = summary.year_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Summary built"
            );
            json_response(StatusCode::OK, &summary)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /shifts/plan.
///
/// Checks a new shift against the stored ones and returns what to write.
async fn plan_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing registration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = load_shifts(&request.existing, state.rules()).and_then(|existing| {
        plan_registration(&existing, &request.draft, request.repeat_until)
    });

    match result {
        Ok(plan) => {
            info!(
                correlation_id = %correlation_id,
                place_id = request.draft.place_id,
                insert = plan.insert.len(),
                replace = plan.replace.len(),
                "Registration planned"
            );
            json_response(StatusCode::OK, &plan)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /places/check.
///
/// Answers 204 when the place may be created.
async fn place_check_handler(payload: Result<Json<PlaceCheckRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing place check request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match ensure_unique_place(&request.existing, &request.draft) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
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
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BreakAllocation, ConfigLoader, PayrollRules};
    use crate::models::{AmountBreakdown, PayPeriod};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_body(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_amount_returns_breakdown() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start": "2024-05-01T21:00:00",
            "end": "2024-05-01T23:00:00",
            "break_duration": "00:00",
            "hourly_wage": 1000,
            "has_night_differential": true
        });

        let response = router
            .oneshot(post_json("/amount", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: AmountBreakdown = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(result.amount, 2250);
        assert_eq!(result.audit_step.rule_id, "night_differential");
    }

    #[tokio::test]
    async fn test_amount_rejects_reversed_interval() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "start": "2024-05-01T17:00:00",
            "end": "2024-05-01T09:00:00",
            "hourly_wage": 1000
        });

        let response = router
            .oneshot(post_json("/amount", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "INVALID_INTERVAL");
    }

    #[tokio::test]
    async fn test_amount_uses_state_rules() {
        let rules = PayrollRules {
            break_allocation: BreakAllocation::Legacy,
            ..PayrollRules::default()
        };
        let state = AppState::new(ConfigLoader::from_rules(rules).unwrap());
        let router = create_router(state);
        // 100 day / 50 night minutes with a 120 minute break goes negative
        // under the legacy policy.
        let body = serde_json::json!({
            "start": "2024-05-01T20:20:00",
            "end": "2024-05-01T22:50:00",
            "break_duration": "02:00",
            "hourly_wage": 1000,
            "has_night_differential": true
        });

        let response = router
            .oneshot(post_json("/amount", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "CALCULATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/amount", "{invalid json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({ "reference": "2024-01-10" });

        let response = router
            .oneshot(post_json("/period", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("boundary_day"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/period")
                    .body(Body::from(r#"{"reference":"2024-01-10","boundary_day":15}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_period_returns_window() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({ "reference": "2024-01-10", "boundary_day": 15 });

        let response = router
            .oneshot(post_json("/period", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let period: PayPeriod = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(period.start.to_string(), "2023-12-16 00:00:00");
        assert_eq!(period.end.to_string(), "2024-01-15 23:59:59");
    }

    #[tokio::test]
    async fn test_period_rejects_boundary_out_of_range() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({ "reference": "2024-01-10", "boundary_day": 32 });

        let response = router
            .oneshot(post_json("/period", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(error.code, "INVALID_CONFIGURATION");
    }

    #[tokio::test]
    async fn test_place_check_returns_no_content() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({
            "existing": [],
            "draft": {
                "user_id": 1,
                "name": "Cafe",
                "hourly_wage": 1100,
                "closing_day": 15,
                "pay_day": 25
            }
        });

        let response = router
            .oneshot(post_json("/places/check", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{}".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
