//! Request DTOs for the revalidation service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::expiry::MAX_TAG_LENGTH;

/// Request body for the single-tag expire operation (POST /expire)
///
/// # Fields
/// - `tag`: The cache tag to mark stale
#[derive(Debug, Clone, Deserialize)]
pub struct ExpireRequest {
    /// The cache tag
    pub tag: String,
}

impl ExpireRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.tag.is_empty() {
            return Some("Tag cannot be empty".to_string());
        }
        if self.tag.len() > MAX_TAG_LENGTH {
            return Some(format!(
                "Tag exceeds maximum length of {} characters",
                MAX_TAG_LENGTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_request_deserialize() {
        let json = r#"{"tag": "posts"}"#;
        let req: ExpireRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.tag, "posts");
    }

    #[test]
    fn test_validate_empty_tag() {
        let req = ExpireRequest {
            tag: "".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_tag_too_long() {
        let req = ExpireRequest {
            tag: "x".repeat(MAX_TAG_LENGTH + 1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = ExpireRequest {
            tag: "thankyounext-0".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
