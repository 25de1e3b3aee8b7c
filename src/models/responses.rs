//! Response DTOs for the revalidation service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::expiry::StaleRecord;

/// Response body for the bulk revalidation route (GET /api/revalidate-alot)
///
/// Serializes to exactly `{"done":true}`.
#[derive(Debug, Clone, Serialize)]
pub struct RevalidateResponse {
    /// Whether the sweep completed
    pub done: bool,
}

impl RevalidateResponse {
    /// Creates the acknowledgement for a completed sweep
    pub fn done() -> Self {
        Self { done: true }
    }
}

/// Response body for the single-tag expire operation (POST /expire)
#[derive(Debug, Clone, Serialize)]
pub struct ExpireResponse {
    /// Success message
    pub message: String,
    /// The tag that was expired
    pub tag: String,
}

impl ExpireResponse {
    /// Creates a new ExpireResponse
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            message: format!("Tag '{}' expired successfully", tag),
            tag,
        }
    }
}

/// Response body for the tag status endpoint (GET /tags/:tag)
#[derive(Debug, Clone, Serialize)]
pub struct TagStatusResponse {
    /// The requested tag
    pub tag: String,
    /// Whether the tag currently has a stale record
    pub stale: bool,
    /// When the tag was last expired, ISO 8601
    pub expired_at: String,
    /// Position of the expiration in global call order
    pub seq: u64,
}

impl TagStatusResponse {
    /// Creates a new TagStatusResponse from a stale record
    pub fn new(tag: impl Into<String>, record: &StaleRecord) -> Self {
        Self {
            tag: tag.into(),
            stale: true,
            expired_at: record.expired_at.to_rfc3339(),
            seq: record.seq,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Total number of expire-tag calls accepted
    pub expirations: u64,
    /// Number of stale records removed by retention pruning
    pub pruned: u64,
    /// Current number of tags with a live stale record
    pub tracked_tags: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from expiry statistics
    pub fn new(expirations: u64, pruned: u64, tracked_tags: usize) -> Self {
        Self {
            expirations,
            pruned,
            tracked_tags,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_revalidate_response_exact_body() {
        let resp = RevalidateResponse::done();
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"done":true}"#);
    }

    #[test]
    fn test_expire_response_serialize() {
        let resp = ExpireResponse::new("posts");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("posts"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_tag_status_response_serialize() {
        let record = StaleRecord {
            expired_at: Utc::now(),
            seq: 7,
        };
        let resp = TagStatusResponse::new("thankyounext-7", &record);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("thankyounext-7"));
        assert!(json.contains(r#""stale":true"#));
        assert!(json.contains(r#""seq":7"#));
    }

    #[test]
    fn test_stats_response_serialize() {
        let resp = StatsResponse::new(130, 5, 125);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""expirations":130"#));
        assert!(json.contains(r#""pruned":5"#));
        assert!(json.contains(r#""tracked_tags":125"#));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
