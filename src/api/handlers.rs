//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::GeneratedPayroll;
use crate::models::{
    NewOvertimeRule, OvertimeRule, OvertimeRulePatch, PayrollHistoryEntry, PayrollPreview,
    PayslipView,
};

use super::request::{GenerateRequest, PeriodQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/preview", get(preview_handler))
        .route("/payroll/generate", post(generate_handler))
        .route("/payroll/history/:user_id", get(history_handler))
        .route("/payroll/payslip/:user_id", get(payslip_handler))
        .route(
            "/payroll/payslip/:user_id/details",
            get(payslip_details_handler),
        )
        .route("/payroll/export", get(export_handler))
        .route("/rules", post(create_rule_handler))
        .route("/rules/active", get(active_rule_handler))
        .route(
            "/rules/:id",
            axum::routing::patch(update_rule_handler).delete(delete_rule_handler),
        )
        .with_state(state)
}

/// Unwraps a JSON body, mapping axum rejections to API errors.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

/// Handler for GET /payroll/preview.
///
/// Computes payroll for the period without persisting anything.
async fn preview_handler(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<PayrollPreview>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        month = query.month,
        year = query.year,
        "Processing payroll preview request"
    );

    let preview = state
        .engine()
        .preview(query.month, query.year)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Preview failed");
            ApiErrorResponse::from(err)
        })?;

    info!(
        correlation_id = %correlation_id,
        employees = preview.items.len(),
        total_payout = %preview.total_payout,
        "Preview completed"
    );
    Ok(Json(preview))
}

/// Handler for POST /payroll/generate.
///
/// Persists the payroll run for the period; a second attempt for the
/// same period returns 409.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GeneratedPayroll>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = json_body(payload, correlation_id)?;
    info!(
        correlation_id = %correlation_id,
        month = request.month,
        year = request.year,
        generated_by = request.generated_by,
        "Processing payroll generation request"
    );

    let generated = state
        .engine()
        .generate(request.generated_by, request.month, request.year)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Generation failed");
            ApiErrorResponse::from(err)
        })?;

    info!(
        correlation_id = %correlation_id,
        payroll_id = %generated.run.id,
        employees = generated.items.len(),
        "Payroll generated"
    );
    Ok((StatusCode::CREATED, Json(generated)))
}

/// Handler for GET /payroll/history/:user_id.
async fn history_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<PayrollHistoryEntry>>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id, "Processing payroll history request");

    let history = state.engine().history(user_id).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "History lookup failed");
        ApiErrorResponse::from(err)
    })?;
    Ok(Json(history))
}

/// Handler for GET /payroll/payslip/:user_id.
///
/// Serves frozen figures when the period is finalized, a live preview
/// otherwise.
async fn payslip_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<PayslipView>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id,
        month = query.month,
        year = query.year,
        "Processing payslip request"
    );

    let payslip = state
        .engine()
        .payslip(user_id, query.month, query.year)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip lookup failed");
            ApiErrorResponse::from(err)
        })?;
    Ok(Json(payslip))
}

/// Handler for GET /payroll/payslip/:user_id/details.
///
/// Returns the stored line item with run metadata; requires a finalized
/// run, never a live preview.
async fn payslip_details_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<PayrollHistoryEntry>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id,
        month = query.month,
        year = query.year,
        "Processing payslip details request"
    );

    let entry = state
        .engine()
        .payslip_details(user_id, query.month, query.year)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip details lookup failed");
            ApiErrorResponse::from(err)
        })?;
    Ok(Json(entry))
}

/// Handler for GET /payroll/export.
///
/// Streams the finalized run for the period as a CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        month = query.month,
        year = query.year,
        "Processing payroll export request"
    );

    let bytes = state
        .engine()
        .export_csv(query.month, query.year)
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            ApiErrorResponse::from(err)
        })?;

    let filename = format!("payroll_{}_{}.csv", query.year, query.month);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Handler for POST /rules.
async fn create_rule_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewOvertimeRule>, JsonRejection>,
) -> Result<(StatusCode, Json<OvertimeRule>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let rule = json_body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, name = %rule.name, "Creating overtime rule");

    let created = state.engine().create_rule(None, rule).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rule creation failed");
        ApiErrorResponse::from(err)
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET /rules/active.
///
/// Always answers with a rule: the stored active rule or the policy
/// fallback.
async fn active_rule_handler(
    State(state): State<AppState>,
) -> Result<Json<OvertimeRule>, ApiErrorResponse> {
    let rule = state.engine().active_rule().map_err(ApiErrorResponse::from)?;
    Ok(Json(rule))
}

/// Handler for PATCH /rules/:id.
async fn update_rule_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<OvertimeRulePatch>, JsonRejection>,
) -> Result<Json<OvertimeRule>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let patch = json_body(payload, correlation_id)?;
    info!(correlation_id = %correlation_id, rule_id = id, "Updating overtime rule");

    let updated = state.engine().update_rule(None, id, patch).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rule update failed");
        ApiErrorResponse::from(err)
    })?;
    Ok(Json(updated))
}

/// Handler for DELETE /rules/:id.
async fn delete_rule_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OvertimeRule>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, rule_id = id, "Deleting overtime rule");

    let deleted = state.engine().delete_rule(None, id).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rule deletion failed");
        ApiErrorResponse::from(err)
    })?;
    Ok(Json(deleted))
}
