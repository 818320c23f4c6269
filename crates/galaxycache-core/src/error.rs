//! Shared error type across galaxycache crates.

use thiserror::Error;

/// Stable error codes, suitable for log fields and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Tag key name rejected.
    InvalidTagKey,
    /// Tag value rejected.
    InvalidTagValue,
    /// View name already registered with another definition.
    DuplicateView,
    /// Measure name already bound to another definition.
    MeasureConflict,
    /// View definition is malformed.
    InvalidView,
    /// View is not registered.
    ViewNotFound,
    /// Configuration could not be parsed or validated.
    BadConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTagKey => "INVALID_TAG_KEY",
            ErrorCode::InvalidTagValue => "INVALID_TAG_VALUE",
            ErrorCode::DuplicateView => "DUPLICATE_VIEW",
            ErrorCode::MeasureConflict => "MEASURE_CONFLICT",
            ErrorCode::InvalidView => "INVALID_VIEW",
            ErrorCode::ViewNotFound => "VIEW_NOT_FOUND",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GalaxyError>;

/// Unified error type used by core and obs.
///
/// Every variant is a startup-time configuration defect; none is retried.
#[derive(Debug, Error)]
pub enum GalaxyError {
    #[error("invalid tag key: {0}")]
    InvalidTagKey(String),
    #[error("invalid tag value for key {key}: {reason}")]
    InvalidTagValue { key: String, reason: String },
    #[error("view {0} already registered with a different definition")]
    DuplicateView(String),
    #[error("measure {0} already registered with a different definition")]
    MeasureConflict(String),
    #[error("invalid view {view}: {reason}")]
    InvalidView { view: String, reason: String },
    #[error("view not found: {0}")]
    ViewNotFound(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl GalaxyError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GalaxyError::InvalidTagKey(_) => ErrorCode::InvalidTagKey,
            GalaxyError::InvalidTagValue { .. } => ErrorCode::InvalidTagValue,
            GalaxyError::DuplicateView(_) => ErrorCode::DuplicateView,
            GalaxyError::MeasureConflict(_) => ErrorCode::MeasureConflict,
            GalaxyError::InvalidView { .. } => ErrorCode::InvalidView,
            GalaxyError::ViewNotFound(_) => ErrorCode::ViewNotFound,
            GalaxyError::BadConfig(_) => ErrorCode::BadConfig,
            GalaxyError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }
}
