use thiserror::Error;

/// Failures talking to the backend, bucketed by HTTP status. One bucket per
/// user-facing message; nothing here retries on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("authentication required: {}", .0.as_deref().unwrap_or("no detail"))]
    Unauthenticated(Option<String>),
    #[error("request rejected: {}", .0.as_deref().unwrap_or("no detail"))]
    Rejected(Option<String>),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("rate limited")]
    RateLimited,
    #[error("server error (HTTP {0})")]
    Server(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Classify a non-2xx response. `detail` is the `error` field of the
    /// body when the backend sent one.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthenticated(detail),
            413 => ApiError::PayloadTooLarge,
            429 => ApiError::RateLimited,
            500..=599 => ApiError::Server(status),
            // 400 and the rest of the 4xx family surface the server detail
            _ => ApiError::Rejected(detail),
        }
    }

    /// Server-provided detail, when the backend attached one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthenticated(Some(detail)) | ApiError::Rejected(Some(detail)) => {
                Some(detail.as_str())
            }
            _ => None,
        }
    }

    /// Banner text for a failed upload attempt.
    pub fn upload_message(&self) -> String {
        match self {
            // always the fixed message here; the login page is where the
            // server detail matters
            ApiError::Unauthenticated(_) => {
                "Authentication failed. Please log in again.".to_string()
            }
            ApiError::Rejected(Some(detail)) => detail.clone(),
            ApiError::Rejected(None) => "Invalid file format.".to_string(),
            ApiError::PayloadTooLarge => "File too large. Please try a smaller file.".to_string(),
            ApiError::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            ApiError::Server(_) => "Server error. Please try again later.".to_string(),
            ApiError::Network(_) => {
                "An unexpected error occurred. Please check your connection and try again."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_unauthenticated() {
        let err = ApiError::from_status(401, Some("Invalid credentials".to_string()));
        assert_eq!(
            err,
            ApiError::Unauthenticated(Some("Invalid credentials".to_string()))
        );
        // the upload banner stays fixed, the detail is still reachable
        assert_eq!(
            err.upload_message(),
            "Authentication failed. Please log in again."
        );
        assert_eq!(err.detail(), Some("Invalid credentials"));
    }

    #[test]
    fn status_400_keeps_server_detail() {
        let err = ApiError::from_status(400, Some("CSV must have 4 columns".to_string()));
        assert_eq!(err.detail(), Some("CSV must have 4 columns"));
        assert_eq!(err.upload_message(), "CSV must have 4 columns");
    }

    #[test]
    fn status_400_without_detail_is_generic() {
        let err = ApiError::from_status(400, None);
        assert_eq!(err.upload_message(), "Invalid file format.");
    }

    #[test]
    fn status_413_maps_to_payload_too_large() {
        let err = ApiError::from_status(413, None);
        assert_eq!(err, ApiError::PayloadTooLarge);
        assert_eq!(
            err.upload_message(),
            "File too large. Please try a smaller file."
        );
    }

    #[test]
    fn status_429_maps_to_rate_limited() {
        assert_eq!(ApiError::from_status(429, None), ApiError::RateLimited);
    }

    #[test]
    fn every_5xx_maps_to_server() {
        for status in [500, 502, 503, 599] {
            assert_eq!(ApiError::from_status(status, None), ApiError::Server(status));
        }
        assert_eq!(
            ApiError::Server(500).upload_message(),
            "Server error. Please try again later."
        );
    }

    #[test]
    fn network_failure_has_connectivity_message() {
        let err = ApiError::Network("fetch aborted".to_string());
        assert_eq!(
            err.upload_message(),
            "An unexpected error occurred. Please check your connection and try again."
        );
    }

    #[test]
    fn unhandled_4xx_falls_back_to_rejected() {
        assert_eq!(
            ApiError::from_status(404, Some("Sheet not found".to_string())),
            ApiError::Rejected(Some("Sheet not found".to_string()))
        );
    }
}
