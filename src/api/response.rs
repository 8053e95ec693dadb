//! Response types for the shift pay API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_shift_metrics;
use crate::error::EngineError;
use crate::models::{ShiftRecord, time_hm};

/// One record in a record-list response, with its derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    /// The record's position in the live set (used for edit/delete).
    pub index: usize,
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// Revenue taken during the shift, in whole yen.
    pub revenue: u64,
    /// The time the driver left the garage.
    #[serde(with = "time_hm")]
    pub clock_out: NaiveTime,
    /// The time the driver returned to the garage.
    #[serde(with = "time_hm")]
    pub clock_in: NaiveTime,
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Night hours accrued in the premium window.
    pub night_hours: Decimal,
    /// Hours beyond the overtime threshold.
    pub overtime_hours: Decimal,
}

impl RecordEntry {
    /// Builds an entry from a stored record and its index.
    pub fn from_record(index: usize, record: &ShiftRecord) -> Self {
        let metrics = compute_shift_metrics(record);
        Self {
            index,
            date: record.date,
            revenue: record.revenue,
            clock_out: record.clock_out,
            clock_in: record.clock_in,
            total_hours: metrics.total_hours,
            night_hours: metrics.night_hours,
            overtime_hours: metrics.overtime_hours,
        }
    }
}

/// Response body for `GET /records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListResponse {
    /// The live records with derived metrics.
    pub records: Vec<RecordEntry>,
}

/// Response body for record mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// The number of live records after the mutation.
    pub record_count: usize,
    /// Present when the mutation succeeded in memory but saving the
    /// record file failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Response body for `POST /archive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveResponse {
    /// The start date of the closed period.
    pub period_start: NaiveDate,
    /// The end date of the closed period.
    pub period_end: NaiveDate,
    /// How many records moved into the archive.
    pub archived_records: usize,
    /// The archive file, when any records were archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_file: Option<String>,
    /// Present when rewriting the live record file failed afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Response body for `POST /report/publish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    /// The object identifier returned by the remote store.
    pub object_id: String,
    /// The file name the report was published under.
    pub filename: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error returned when no uploader is configured.
    pub fn upload_not_configured() -> Self {
        Self::new(
            "UPLOAD_NOT_CONFIGURED",
            "No remote object store is configured for publishing reports",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRecord { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid record field '{}': {}", field, message),
                    "The record data contains invalid information",
                ),
            },
            EngineError::RecordNotFound { index } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RECORD_NOT_FOUND", format!("No record at index {}", index)),
            },
            EngineError::StoreReadError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Record store read failed",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::StoreWriteError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Record store write failed",
                    format!("{}: {}", path, message),
                ),
            },
            EngineError::ArchiveExists { path } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ARCHIVE_EXISTS",
                    "This pay period has already been archived",
                    path,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::UploadError { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details("UPLOAD_FAILED", "Report upload failed", message),
            },
        }
    }
}
