//! Failure taxonomy consumed by the normalizer.
//!
//! The kind of a failure is fixed where it is constructed. Nothing downstream
//! inspects a failure's shape to guess what it is.

use super::ApiError;

/// Classification of an application failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The server rejected the input.
    Validation {
        /// The offending field, when known.
        field: Option<String>,
    },
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// Anything else the application reported.
    Internal,
}

impl FailureKind {
    /// Returns the machine-readable code for this kind, if it has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } => Some("VALIDATION_ERROR"),
            Self::NotFound => Some("NOT_FOUND"),
            Self::Conflict => Some("CONFLICT"),
            Self::Internal => None,
        }
    }

    /// Classifies an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation { field: None },
            404 => Self::NotFound,
            409 => Self::Conflict,
            _ => Self::Internal,
        }
    }
}

/// A failure carrying a human-readable message from the application layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApplicationFailure {
    /// Message shown to the user.
    pub message: String,
    /// HTTP status associated with the failure.
    pub status: u16,
    /// Classification of the failure.
    pub kind: FailureKind,
}

impl ApplicationFailure {
    /// Creates an internal application failure with status 500.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 500,
            kind: FailureKind::Internal,
        }
    }

    /// Creates a validation failure (status 400), optionally tied to a field.
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self {
            message: message.into(),
            status: 400,
            kind: FailureKind::Validation {
                field: field.map(str::to_string),
            },
        }
    }

    /// Creates a not-found failure (status 404) for the named resource.
    ///
    /// ```
    /// use eventdesk_lib::error::ApplicationFailure;
    ///
    /// assert_eq!(ApplicationFailure::not_found("Event").message, "Event not found");
    /// ```
    pub fn not_found(resource: &str) -> Self {
        Self {
            message: format!("{resource} not found"),
            status: 404,
            kind: FailureKind::NotFound,
        }
    }

    /// Creates a conflict failure (status 409).
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 409,
            kind: FailureKind::Conflict,
        }
    }

    /// Returns the machine-readable code, if the kind has one.
    pub fn code(&self) -> Option<&'static str> {
        self.kind.code()
    }
}

/// Any failure that can reach the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// The application reported a structured failure.
    #[error(transparent)]
    Application(ApplicationFailure),

    /// The request never produced a response.
    #[error("{message}")]
    Transport { message: String },

    /// An unexpected failure that still has a message.
    #[error("{message}")]
    Generic { message: String },

    /// A failure with nothing usable attached.
    #[error("unknown failure")]
    Unknown,
}

impl Failure {
    /// Creates a generic failure with the given message.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Creates a transport failure with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<ApplicationFailure> for Failure {
    fn from(failure: ApplicationFailure) -> Self {
        Self::Application(failure)
    }
}

impl From<ApiError> for Failure {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Http { status, message } => Self::Application(ApplicationFailure {
                message,
                status,
                kind: FailureKind::from_status(status),
            }),
            ApiError::Network(e) => Self::transport(e.to_string()),
            ApiError::Timeout(_) => Self::transport(error.to_string()),
            ApiError::InvalidUrl(_) | ApiError::InvalidRequest(_) | ApiError::Parse { .. } => {
                Self::generic(error.to_string())
            }
        }
    }
}
