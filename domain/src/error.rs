use thiserror::Error;

/// Failure taxonomy shared by every port. Display output is the exact
/// client-facing rejection text; diagnostic detail stays in the fields and
/// is logged by the adapters instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Error retrieving image from URL.")]
    UpstreamStatus { status: u16 },

    #[error("URL is not image type.")]
    UpstreamNotImage { content_type: String },

    #[error("Could not reach image URL.")]
    FetchFailed { reason: String },

    #[error("Source image exceeds the maximum input size of {limit_bytes} bytes.")]
    PayloadTooLarge { limit_bytes: usize },

    #[error("Unsupported or corrupt image data.")]
    InvalidImage { reason: String },

    #[error("Internal image processing error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn upstream_status(status: u16) -> Self {
        Self::UpstreamStatus { status }
    }

    pub fn upstream_not_image(content_type: impl Into<String>) -> Self {
        Self::UpstreamNotImage {
            content_type: content_type.into(),
        }
    }

    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            reason: reason.into(),
        }
    }

    pub fn payload_too_large(limit_bytes: usize) -> Self {
        Self::PayloadTooLarge { limit_bytes }
    }

    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    pub fn internal_error(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }

    /// True when the failure is attributable to the request or the source
    /// URL rather than to this service.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
