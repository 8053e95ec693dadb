//! HTTP request handlers for the shift pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::sync::MutexGuard;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::ShiftRecord;
use crate::report::{render_report, report_filename};
use crate::session::Session;

use super::request::{ArchiveRequest, RecordRequest};
use super::response::{
    ApiError, ApiErrorResponse, ArchiveResponse, MutationResponse, PublishResponse, RecordEntry,
    RecordListResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/records", get(list_records_handler).post(add_record_handler))
        .route(
            "/records/:index",
            put(update_record_handler).delete(delete_record_handler),
        )
        .route("/breakdown", get(breakdown_handler))
        .route("/report", get(report_handler))
        .route("/report/publish", post(publish_report_handler))
        .route("/archive", post(archive_handler))
        .with_state(state)
}

/// Locks the single session.
///
/// A poisoned lock means a previous handler panicked mid-request; the
/// in-memory record set is still usable, so the guard is recovered.
fn lock_session(state: &AppState) -> MutexGuard<'_, Session> {
    state
        .session()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Maps a JSON extraction rejection to an API error, preserving the
/// serde detail for data errors.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /records.
///
/// Returns the live record set with per-record derived metrics.
async fn list_records_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = lock_session(&state);
    let records: Vec<RecordEntry> = session
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| RecordEntry::from_record(index, record))
        .collect();
    Json(RecordListResponse { records })
}

/// Handler for POST /records.
async fn add_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let record: ShiftRecord = request.into();
    let mut session = lock_session(&state);
    let warning = session.add_record(record);
    info!(
        correlation_id = %correlation_id,
        record_count = session.records().len(),
        save_failed = warning.is_some(),
        "Record added"
    );

    (
        StatusCode::CREATED,
        Json(MutationResponse {
            record_count: session.records().len(),
            warning,
        }),
    )
        .into_response()
}

/// Handler for PUT /records/{index}.
async fn update_record_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let mut session = lock_session(&state);
    match session.update_record(index, request.into()) {
        Ok(warning) => {
            info!(correlation_id = %correlation_id, index, "Record updated");
            Json(MutationResponse {
                record_count: session.records().len(),
                warning,
            })
            .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, index, error = %err, "Update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /records/{index}.
async fn delete_record_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let mut session = lock_session(&state);
    match session.delete_record(index) {
        Ok(warning) => {
            info!(correlation_id = %correlation_id, index, "Record deleted");
            Json(MutationResponse {
                record_count: session.records().len(),
                warning,
            })
            .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, index, error = %err, "Delete failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /breakdown.
///
/// Recomputes the full pay breakdown from the current record set.
async fn breakdown_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let session = lock_session(&state);
    match session.breakdown(state.tiers()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                record_count = session.records().len(),
                total_revenue = breakdown.total_revenue,
                take_home = breakdown.take_home,
                "Breakdown computed"
            );
            Json(breakdown).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Breakdown failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /report.
///
/// Renders the pay report for the current record set as a download.
async fn report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let session = lock_session(&state);
    let breakdown = match session.breakdown(state.tiers()) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let range = session.date_range();
    let report = render_report(&breakdown, range);
    let filename = report_filename(range);
    info!(correlation_id = %correlation_id, filename = %filename, "Report rendered");

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        report,
    )
        .into_response()
}

/// Handler for POST /report/publish.
///
/// Renders the report and pushes it to the configured object store.
async fn publish_report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let Some(uploader) = state.uploader().cloned() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::upload_not_configured()),
        )
            .into_response();
    };

    // The session lock must not be held across the upload await point.
    let (report, filename) = {
        let session = lock_session(&state);
        let breakdown = match session.breakdown(state.tiers()) {
            Ok(breakdown) => breakdown,
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Report failed");
                return ApiErrorResponse::from(err).into_response();
            }
        };
        let range = session.date_range();
        (render_report(&breakdown, range), report_filename(range))
    };

    match uploader.put(report.into_bytes(), &filename).await {
        Ok(object_id) => {
            info!(
                correlation_id = %correlation_id,
                filename = %filename,
                object_id = %object_id,
                "Report published"
            );
            Json(PublishResponse {
                object_id,
                filename,
            })
            .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Publish failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /archive.
///
/// Closes the pay period containing the given (or current) date.
async fn archive_handler(
    State(state): State<AppState>,
    payload: Result<Json<ArchiveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };
    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());

    let mut session = lock_session(&state);
    match session.archive_period(state.archive(), today) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                period_start = %outcome.period.start_date,
                period_end = %outcome.period.end_date,
                archived = outcome.archived,
                "Pay period archived"
            );
            Json(ArchiveResponse {
                period_start: outcome.period.start_date,
                period_end: outcome.period.end_date,
                archived_records: outcome.archived,
                archive_file: outcome.path.map(|p| p.display().to_string()),
                warning: outcome.warning,
            })
            .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Archive failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
