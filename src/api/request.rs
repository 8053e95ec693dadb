//! Request types for the shift pay API.
//!
//! This module defines the JSON request structures for the record and
//! archive endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{ShiftRecord, time_hm};

/// Request body for adding or updating a shift record.
///
/// Times are `HH:MM` strings, matching the record file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// Revenue taken during the shift, in whole yen.
    pub revenue: u64,
    /// The time the driver left the garage (shift start).
    #[serde(with = "time_hm")]
    pub clock_out: NaiveTime,
    /// The time the driver returned to the garage (shift end).
    #[serde(with = "time_hm")]
    pub clock_in: NaiveTime,
}

impl From<RecordRequest> for ShiftRecord {
    fn from(request: RecordRequest) -> Self {
        Self {
            date: request.date,
            revenue: request.revenue,
            clock_out: request.clock_out,
            clock_in: request.clock_in,
        }
    }
}

/// Request body for closing a pay period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveRequest {
    /// The date determining the active pay period; defaults to today.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_deserializes_hh_mm() {
        let json = r#"{
            "date": "2024-06-01",
            "revenue": 50000,
            "clock_out": "17:00",
            "clock_in": "03:30"
        }"#;
        let request: RecordRequest = serde_json::from_str(json).unwrap();
        let record: ShiftRecord = request.into();
        assert_eq!(record.revenue, 50_000);
        assert_eq!(record.worked_minutes(), 630);
    }

    #[test]
    fn test_record_request_rejects_negative_revenue() {
        let json = r#"{
            "date": "2024-06-01",
            "revenue": -100,
            "clock_out": "17:00",
            "clock_in": "03:30"
        }"#;
        assert!(serde_json::from_str::<RecordRequest>(json).is_err());
    }

    #[test]
    fn test_archive_request_today_is_optional() {
        let request: ArchiveRequest = serde_json::from_str("{}").unwrap();
        assert!(request.today.is_none());

        let request: ArchiveRequest =
            serde_json::from_str(r#"{"today": "2024-06-20"}"#).unwrap();
        assert_eq!(request.today.unwrap().to_string(), "2024-06-20");
    }
}
